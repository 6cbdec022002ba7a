//! ISO calendar date parsing for raw collaborator input.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// The date format exchanged with the persistence layer.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date, naming `field` in the error.
///
/// # Examples
///
/// ```
/// use leave_engine::models::parse_iso_date;
/// use chrono::NaiveDate;
///
/// let date = parse_iso_date("start_date", "2026-01-15").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// assert!(parse_iso_date("start_date", "15/01/2026").is_err());
/// ```
pub fn parse_iso_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}
