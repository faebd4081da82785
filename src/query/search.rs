//! Free-text search predicate.

use crate::dates::{format_range, full_month_name};
use crate::models::Payslip;

/// Returns true if a payslip matches a normalized search query.
///
/// `query` must already be trimmed and lower-cased; the derivation
/// pipeline normalizes it once per call rather than once per record.
/// A record matches if the query is a substring of **any** of:
///
/// - the record id (case-insensitive),
/// - the file name (case-insensitive),
/// - the raw ISO `from_date` or `to_date` string (covers numeric
///   year/month-day searches like `"2024-08"`),
/// - the rendered period range, lower-cased (covers searches like
///   `"aug"` matching the list label),
/// - the full month name of `from_date`, lower-cased (covers `"august"`
///   even though the rendered range abbreviates it).
///
/// Substring matching only; no tokenization, no fuzzy matching.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{EmployeeInfo, FileKind, Payslip, PayslipFile};
/// use payslip_engine::query::matches_search;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let payslip = Payslip {
///     id: "PAY-2024-08".to_string(),
///     from_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
///     file: PayslipFile {
///         name: "INCRED_AUG_2024_Payslip.pdf".to_string(),
///         kind: FileKind::Pdf,
///         source_locator: "INCRED_AUG_2024_Payslip.pdf".to_string(),
///     },
///     net_pay: Decimal::new(6800, 0),
///     gross_pay: Decimal::new(8500, 0),
///     deductions: Decimal::new(1700, 0),
///     employee: EmployeeInfo {
///         name: "Yuvraj Desai".to_string(),
///         department: "Mobile Engineering".to_string(),
///     },
/// };
///
/// assert!(matches_search(&payslip, "incred"));
/// assert!(matches_search(&payslip, "august"));
/// assert!(matches_search(&payslip, "2024-08"));
/// assert!(!matches_search(&payslip, "december"));
/// ```
pub fn matches_search(payslip: &Payslip, query: &str) -> bool {
    // Search by id
    if payslip.id.to_lowercase().contains(query) {
        return true;
    }

    // Search by file name
    if payslip.file.name.to_lowercase().contains(query) {
        return true;
    }

    // Search by raw ISO date
    if payslip.from_date.to_string().contains(query)
        || payslip.to_date.to_string().contains(query)
    {
        return true;
    }

    // Search by the rendered period range
    if format_range(payslip.from_date, payslip.to_date)
        .to_lowercase()
        .contains(query)
    {
        return true;
    }

    // Search by full month name, which the abbreviated range drops
    if full_month_name(payslip.from_date)
        .to_lowercase()
        .contains(query)
    {
        return true;
    }

    false
}
