//! Reusable field validators
//!
//! Each validator is a closure taking the field name and its raw text, so a
//! record constructor can run the same check over several fields.

use crate::core::error::ValidationError;
use chrono::{DateTime, NaiveDate};

/// Validator: text must be present and not blank
pub fn required() -> impl Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(ValidationError::Required {
                field: field.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Validator: text must be a calendar date
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, of which only the date part
/// is kept.
pub fn date() -> impl Fn(&str, &str) -> Result<NaiveDate, ValidationError> + Send + Sync + Clone
{
    |field: &str, value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
            .map_err(|_| ValidationError::InvalidDate {
                field: field.to_string(),
                value: value.to_string(),
            })
    }
}
