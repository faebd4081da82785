//! ISO date parsing.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Parses an ISO-8601 calendar date string (`YYYY-MM-DD`).
///
/// No time component, no timezone, no coercion: anything that is not a
/// valid calendar date in this exact format is rejected.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] if the input does not parse.
///
/// # Example
///
/// ```
/// use payslip_engine::dates::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("2024-08-15").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 8, 15).unwrap());
///
/// assert!(parse_date("2024-13-01").is_err());
/// assert!(parse_date("15/08/2024").is_err());
/// ```
pub fn parse_date(input: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| EngineError::InvalidDate {
        input: input.to_string(),
        message: e.to_string(),
    })
}
