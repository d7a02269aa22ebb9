use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::domain::entities::page::ResultPage;
use crate::domain::entities::query::{FilterValue, PageRequest, Query, SortDirection, SortSpec};
use crate::domain::entities::record::{Record, RecordSchema};

/// Search, filter, sort and paginate a record set in one pure pass.
///
/// The controller only knows field names. Clauses naming a field it does not
/// know are skipped, so a malformed query narrows nothing instead of failing.
#[derive(Debug, Clone)]
pub struct ListViewController<R> {
    fields: BTreeSet<String>,
    searchable: Vec<String>,
    _record: PhantomData<fn(&R)>,
}

impl<R: Record + RecordSchema> ListViewController<R> {
    pub fn for_schema() -> Self {
        Self::new(R::FIELDS.iter().copied(), R::SEARCHABLE.iter().copied())
    }
}

impl<R: Record> ListViewController<R> {
    pub fn new<F, S>(fields: F, searchable: S) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            searchable: searchable.into_iter().map(Into::into).collect(),
            _record: PhantomData,
        }
    }

    pub fn knows_field(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn searchable_fields(&self) -> &[String] {
        &self.searchable
    }

    pub fn compute<'a>(&self, records: &'a [R], query: &Query) -> ResultPage<&'a R> {
        let candidates = self.search(records, &query.search_text);
        let filtered = self.apply_filters(candidates, &query.filters);
        let ordered = self.apply_sort(filtered, query.sort.as_ref());
        let page = paginate(ordered, query.page);
        debug!(
            records = records.len(),
            matched = page.total_matched,
            page = page.page_number,
            total_pages = page.total_pages,
            "computed list page"
        );
        page
    }

    pub fn search<'a, I>(&self, records: I, search_text: &str) -> Vec<&'a R>
    where
        I: IntoIterator<Item = &'a R>,
        R: 'a,
    {
        search(records, search_text, &self.searchable)
    }

    pub fn apply_filters<'a, I>(
        &self,
        candidates: I,
        filters: &BTreeMap<String, FilterValue>,
    ) -> Vec<&'a R>
    where
        I: IntoIterator<Item = &'a R>,
        R: 'a,
    {
        let active: Vec<(&str, &str)> = filters
            .iter()
            .filter_map(|(field, value)| match value {
                FilterValue::All => None,
                FilterValue::Exact(_) if !self.knows_field(field) => {
                    trace!(field = %field, "skipping filter on unknown field");
                    None
                }
                FilterValue::Exact(expected) => Some((field.as_str(), expected.as_str())),
            })
            .collect();

        candidates
            .into_iter()
            .filter(|record| {
                active.iter().all(|(field, expected)| {
                    record
                        .field(field)
                        .is_some_and(|value| value.matches(expected))
                })
            })
            .collect()
    }

    pub fn apply_sort<'a>(
        &self,
        mut filtered: Vec<&'a R>,
        sort: Option<&SortSpec>,
    ) -> Vec<&'a R> {
        let Some(sort) = sort else {
            return filtered;
        };
        if !self.knows_field(&sort.field) {
            trace!(field = %sort.field, "skipping sort on unknown field");
            return filtered;
        }

        // Vec::sort_by is stable; descending flips the comparator rather than
        // the output, so ties keep their original order both ways. Records
        // without the field sort after those that have it.
        filtered.sort_by(|a, b| {
            let ordering = match (a.field(&sort.field), b.field(&sort.field)) {
                (Some(left), Some(right)) => left.compare(&right),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        filtered
    }
}

/// Keeps records where any searchable field contains `search_text`,
/// ignoring case. Empty text keeps everything.
pub fn search<'a, R, I>(records: I, search_text: &str, searchable_fields: &[String]) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    if search_text.is_empty() {
        return records.into_iter().collect();
    }

    let needle = search_text.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            searchable_fields.iter().any(|field| {
                record
                    .field(field)
                    .is_some_and(|value| value.search_text().to_lowercase().contains(&needle))
            })
        })
        .collect()
}

pub fn paginate<T>(ordered: Vec<T>, page: PageRequest) -> ResultPage<T> {
    let total_matched = ordered.len();
    let page_number = page.number.max(1);

    let Ok(size) = usize::try_from(page.size) else {
        trace!(size = page.size, "page size below one, serving an empty page");
        return ResultPage {
            items: Vec::new(),
            total_matched,
            total_pages: 0,
            page_number,
        };
    };
    if size == 0 {
        trace!("page size of zero, serving an empty page");
        return ResultPage {
            items: Vec::new(),
            total_matched,
            total_pages: 0,
            page_number,
        };
    }

    let total_pages = total_matched.div_ceil(size);
    let start = usize::try_from(page_number - 1)
        .ok()
        .and_then(|offset| offset.checked_mul(size))
        .filter(|start| *start < total_matched);

    let items = match start {
        Some(start) => ordered.into_iter().skip(start).take(size).collect(),
        None => Vec::new(),
    };

    ResultPage {
        items,
        total_matched,
        total_pages,
        page_number,
    }
}

/// Header click on `field`: a new column starts descending, a second click
/// goes ascending, a third clears the sort.
pub fn toggle_sort(current: Option<&SortSpec>, field: &str) -> Option<SortSpec> {
    match current {
        Some(sort) if sort.field == field => match sort.direction {
            SortDirection::Desc => Some(SortSpec::new(field, SortDirection::Asc)),
            SortDirection::Asc => None,
        },
        _ => Some(SortSpec::new(field, SortDirection::Desc)),
    }
}
