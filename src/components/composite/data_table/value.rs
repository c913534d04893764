//! Cell Values
//!
//! Semantic values produced by column accessors, and the sortable keys
//! derived from them.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::utils::format::format_datetime;

/// The semantic value of one cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value (missing field, null, or no accessor)
    #[default]
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(DateTime<Utc>),
}

impl CellValue {
    /// Whether the value is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    /// Stringify for display and search. Absent values become `""`.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Absent => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(dt) => format_datetime(dt),
        }
    }

    /// Convert to a sortable primitive
    pub fn sort_key(&self) -> SortKey {
        match self {
            CellValue::Absent => SortKey::Text(String::new()),
            CellValue::Text(text) => SortKey::Text(text.clone()),
            CellValue::Number(n) => SortKey::Number(*n),
            CellValue::Bool(b) => SortKey::Number(if *b { 1.0 } else { 0.0 }),
            CellValue::Date(dt) => SortKey::Number(dt.timestamp_millis() as f64),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Absent, Into::into)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Absent,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(CellValue::Absent, CellValue::Number),
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// Sortable primitive derived from a [`CellValue`]
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
}

impl SortKey {
    /// Plain less-than/greater-than comparison.
    ///
    /// Mixed text/number pairs compare numerically after coercing the text
    /// (blank text is zero). Pairs that cannot be ordered compare equal.
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortKey::Text(a), SortKey::Number(b)) => coerce_number(a)
                .partial_cmp(b)
                .unwrap_or(Ordering::Equal),
            (SortKey::Number(a), SortKey::Text(b)) => a
                .partial_cmp(&coerce_number(b))
                .unwrap_or(Ordering::Equal),
        }
    }
}

fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// A row whose fields can be read by name.
///
/// Rows that are only read through derivation functions can rely on the
/// default implementation.
pub trait Record {
    /// Read the named field
    fn field(&self, _name: &str) -> CellValue {
        CellValue::Absent
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).map_or(CellValue::Absent, CellValue::from)
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> CellValue {
        match self {
            Value::Object(map) => map.field(name),
            _ => CellValue::Absent,
        }
    }
}
