//! Display formatting for dates and pay-period ranges.
//!
//! The rendered strings are part of the contract: the presentation layer
//! and the search stage both consume them verbatim, so the month names,
//! the absence of leading zeros, and the `" – "` en-dash separator are
//! all pinned by tests.

use chrono::{Datelike, NaiveDate};

/// The range separator: an en-dash surrounded by single spaces.
///
/// An en-dash, not a hyphen. The exact glyph and spacing are consumed
/// verbatim by the presentation layer and by formatted-date search.
const RANGE_SEPARATOR: &str = " \u{2013} ";

/// Formats a date with an abbreviated month name, e.g. `"Aug 15, 2024"`.
///
/// The day never carries a leading zero.
///
/// # Example
///
/// ```
/// use payslip_engine::dates::format_short;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();
/// assert_eq!(format_short(date), "Aug 5, 2024");
/// ```
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a date with a full month name, e.g. `"August 15, 2024"`.
///
/// # Example
///
/// ```
/// use payslip_engine::dates::format_full;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
/// assert_eq!(format_full(date), "August 15, 2024");
/// ```
pub fn format_full(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Returns the full English month name of a date, e.g. `"August"`.
///
/// Used by the search stage so that a query like `"august"` matches a
/// record even when the abbreviated rendering says `"Aug"`.
pub fn full_month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Formats a pay-period range for display.
///
/// Three cases, evaluated in this precedence:
///
/// 1. Same year and same month: `"Aug 1 – 31, 2024"`
/// 2. Same year, different month: `"Jan 15 – Feb 15, 2024"`
/// 3. Different years: `"Dec 15, 2023 – Jan 15, 2024"`
///
/// # Example
///
/// ```
/// use payslip_engine::dates::format_range;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
/// assert_eq!(format_range(from, to), "Aug 1 \u{2013} 31, 2024");
/// ```
pub fn format_range(from: NaiveDate, to: NaiveDate) -> String {
    if from.year() == to.year() {
        if from.month() == to.month() {
            return format!(
                "{}{}{}",
                from.format("%b %-d"),
                RANGE_SEPARATOR,
                to.format("%-d, %Y")
            );
        }
        return format!(
            "{}{}{}",
            from.format("%b %-d"),
            RANGE_SEPARATOR,
            to.format("%b %-d, %Y")
        );
    }

    format!(
        "{}{}{}",
        from.format("%b %-d, %Y"),
        RANGE_SEPARATOR,
        to.format("%b %-d, %Y")
    )
}
