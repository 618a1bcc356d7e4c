//! Shared building blocks for request schemas.
//!
//! Request DTOs keep every field optional so that one validation pass can
//! report all missing fields at once. After validation succeeds, the DTO is
//! converted into a typed input with `TryFrom`, which uses the helpers below
//! and never panics.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use matchday_core::FieldError;
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

/// Parses a date supplied as an RFC 3339 string, a `YYYY-MM-DD` string
/// (midnight UTC), or integer milliseconds since the Unix epoch.
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|naive| Utc.from_utc_datetime(&naive))
                })
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

pub fn validate_date(value: &Value) -> Result<(), ValidationError> {
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date")),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

pub(crate) fn require<T>(value: Option<T>, field: &str, label: &str) -> Result<T, FieldError> {
    value.ok_or_else(|| FieldError::new(field, format!("{} is required", label)))
}

pub(crate) fn require_date(
    value: Option<Value>,
    field: &str,
    label: &str,
) -> Result<DateTime<Utc>, FieldError> {
    let value = require(value, field, label)?;
    date_field(&value, field, label)
}

pub(crate) fn optional_date(
    value: Option<Value>,
    field: &str,
    label: &str,
) -> Result<Option<DateTime<Utc>>, FieldError> {
    value.map(|v| date_field(&v, field, label)).transpose()
}

fn date_field(value: &Value, field: &str, label: &str) -> Result<DateTime<Utc>, FieldError> {
    parse_date(value)
        .ok_or_else(|| FieldError::new(field, format!("{} must be a valid date", label)))
}

/// Query string accepted by list endpoints.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Maximum number of records to return (1-100)
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
    /// Number of records to skip
    pub offset: Option<u32>,
}

impl ListQuery {
    /// Applies offset and limit to an already ordered list.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = self.offset.unwrap_or(0) as usize;
        let iter = items.into_iter().skip(offset);
        match self.limit {
            Some(limit) => iter.take(limit as usize).collect(),
            None => iter.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_date(&json!("2025-06-01T18:30:00+02:00")).unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-06-01T16:30:00+00:00");
    }

    #[test]
    fn test_parse_plain_date() {
        let dt = parse_date(&json!("2025-01-01")).unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_epoch_millis() {
        let dt = parse_date(&json!(1_735_689_600_000i64)).unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date(&json!("next tuesday")).is_none());
        assert!(parse_date(&json!(true)).is_none());
        assert!(parse_date(&json!({"seconds": 1})).is_none());
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("abc").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_list_query_apply() {
        let items: Vec<u32> = (1..=10).collect();

        let all = ListQuery::default().apply(items.clone());
        assert_eq!(all.len(), 10);

        let page = ListQuery {
            limit: Some(3),
            offset: Some(4),
        }
        .apply(items.clone());
        assert_eq!(page, vec![5, 6, 7]);

        let past_end = ListQuery {
            limit: None,
            offset: Some(20),
        }
        .apply(items);
        assert!(past_end.is_empty());
    }

    #[test]
    fn test_list_query_limit_bounds() {
        let query = ListQuery {
            limit: Some(0),
            offset: None,
        };
        assert!(query.validate().is_err());

        let query = ListQuery {
            limit: Some(100),
            offset: None,
        };
        assert!(query.validate().is_ok());
    }
}
