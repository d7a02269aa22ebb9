use std::borrow::Cow;
use std::cmp::Ordering;

/// A single cell read from a record through its field accessor.
///
/// Dates are carried as ISO-8601 strings and ordered lexicographically, which
/// is only correct while every value really is ISO-8601. Malformed date
/// strings sort wherever their characters put them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(&'a str),
}

impl<'a> FieldValue<'a> {
    pub fn search_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(v) | FieldValue::Date(v) => Cow::Borrowed(v),
            FieldValue::Number(v) => Cow::Owned(v.to_string()),
        }
    }

    /// Exact, case-sensitive equality against a filter value.
    pub fn matches(&self, expected: &str) -> bool {
        match *self {
            FieldValue::Text(v) | FieldValue::Date(v) => v == expected,
            FieldValue::Number(v) => expected
                .trim()
                .parse::<f64>()
                .map(|parsed| parsed == v)
                .unwrap_or(false),
        }
    }

    /// Total order for sorting: numbers first in natural order with NaN after
    /// every other number, then text and dates byte-wise. A blank cell in a
    /// numeric column therefore lands after all the amounts.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => compare_numbers(*a, *b),
            (FieldValue::Number(_), _) => Ordering::Less,
            (_, FieldValue::Number(_)) => Ordering::Greater,
            (
                FieldValue::Text(a) | FieldValue::Date(a),
                FieldValue::Text(b) | FieldValue::Date(b),
            ) => a.cmp(b),
        }
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

pub trait Record {
    fn id(&self) -> &str;

    /// `None` when the record has no field with that name.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Field names a concrete record type exposes to list views.
pub trait RecordSchema {
    /// Fields that may be filtered and sorted on.
    const FIELDS: &'static [&'static str];
    /// Fields the free-text search looks at.
    const SEARCHABLE: &'static [&'static str];
}
