use std::collections::BTreeMap;

pub const ALL_FILTER_VALUE: &str = "all";
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterValue {
    All,
    Exact(String),
}

impl FilterValue {
    /// `"all"` and the empty string mean unconstrained.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_FILTER_VALUE {
            FilterValue::All
        } else {
            FilterValue::Exact(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => ALL_FILTER_VALUE,
            FilterValue::Exact(value) => value,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::parse(value)
    }
}

/// 1-based page window. Out-of-range values are tolerated, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub number: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn new(number: i64, size: i64) -> Self {
        Self { number, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search_text: String,
    pub filters: BTreeMap<String, FilterValue>,
    pub sort: Option<SortSpec>,
    pub page: PageRequest,
}

impl Query {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec::new(field, direction));
        self
    }

    pub fn with_page(mut self, number: i64, size: i64) -> Self {
        self.page = PageRequest::new(number, size);
        self
    }
}
