//! Stable sorting of payslips by period end.

use crate::dates::compare_dates;
use crate::models::{Payslip, SortOrder};

/// Sorts payslips in place by their period-end date.
///
/// [`SortOrder::Newest`] puts the most recent `to_date` first,
/// [`SortOrder::Oldest`] the reverse. The sort is stable: records with
/// equal `to_date` keep their relative input order, so result order is
/// deterministic across runs for identical input.
pub fn sort_by_period_end(payslips: &mut [Payslip], order: SortOrder) {
    match order {
        SortOrder::Newest => {
            payslips.sort_by(|a, b| compare_dates(b.to_date, a.to_date));
        }
        SortOrder::Oldest => {
            payslips.sort_by(|a, b| compare_dates(a.to_date, b.to_date));
        }
    }
}
