//! Year extraction and aggregation.

use chrono::{Datelike, NaiveDate};

/// Returns the calendar year component of a date.
pub fn year_of(date: NaiveDate) -> i32 {
    date.year()
}

/// Returns the distinct years present in a sequence of dates, sorted
/// descending.
///
/// Drives the year-filter options in the presentation layer, which is why
/// the most recent year comes first. Empty input yields an empty vector.
///
/// # Example
///
/// ```
/// use payslip_engine::dates::unique_years;
/// use chrono::NaiveDate;
///
/// let dates = vec![
///     NaiveDate::from_ymd_opt(2023, 7, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// ];
/// assert_eq!(unique_years(dates), vec![2024, 2023]);
/// ```
pub fn unique_years<I>(dates: I) -> Vec<i32>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut years: Vec<i32> = dates.into_iter().map(year_of).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
