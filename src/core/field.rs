//! Field value types used by search and sort

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a date if possible
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Text form used for substring search.
    ///
    /// Returns `None` for `Null`, which never matches a search term.
    pub fn to_search_text(&self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            FieldValue::DateTime(dt) => Some(dt.to_rfc3339()),
            FieldValue::Null => None,
        }
    }

    /// Native ordering between two present values of the same kind.
    ///
    /// Values of different kinds, NaN floats and `Null` compare as equal so
    /// that a stable sort leaves them in input order.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Integer(a), FieldValue::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Float(a), FieldValue::Integer(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_null() {
        let value = FieldValue::Null;
        assert!(value.is_null());
        assert_eq!(value.to_search_text(), None);
    }

    #[test]
    fn test_search_text_forms() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(FieldValue::Integer(42).to_search_text().unwrap(), "42");
        assert_eq!(FieldValue::Float(2.5).to_search_text().unwrap(), "2.5");
        assert_eq!(FieldValue::Boolean(true).to_search_text().unwrap(), "true");
        assert_eq!(FieldValue::Date(date).to_search_text().unwrap(), "2024-03-09");
    }

    #[test]
    fn test_compare_same_kind() {
        assert_eq!(
            FieldValue::from("Alice").compare(&FieldValue::from("Bob")),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Integer(30).compare(&FieldValue::Integer(10)),
            Ordering::Greater
        );
        let earlier = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            FieldValue::Date(earlier).compare(&FieldValue::Date(later)),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(
            FieldValue::Integer(2).compare(&FieldValue::Float(2.5)),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_mismatched_kinds_is_equal() {
        assert_eq!(
            FieldValue::from("10").compare(&FieldValue::Integer(10)),
            Ordering::Equal
        );
        assert_eq!(
            FieldValue::Float(f64::NAN).compare(&FieldValue::Float(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_from_option() {
        assert!(FieldValue::from(None::<String>).is_null());
        assert_eq!(
            FieldValue::from(Some("x")),
            FieldValue::String("x".to_string())
        );
    }

    #[test]
    fn test_serde_date_is_iso_text() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let json = serde_json::to_string(&FieldValue::Date(date)).unwrap();
        assert_eq!(json, "\"2025-01-31\"");
    }
}
