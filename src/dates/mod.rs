//! Calendar date utilities for the Payslip Query Engine.
//!
//! This module contains the date parsing, formatting, year aggregation,
//! and ordering operations the query layer and presentation layer depend
//! on. All operations work on [`chrono::NaiveDate`] values; malformed
//! input fails with [`EngineError::InvalidDate`](crate::error::EngineError)
//! at the parsing boundary, never silently.

mod format;
mod ordering;
mod parse;
mod years;

pub use format::{format_full, format_range, format_short, full_month_name};
pub use ordering::compare_dates;
pub use parse::parse_date;
pub use years::{unique_years, year_of};
