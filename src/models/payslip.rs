//! Payslip record model and related types.
//!
//! This module defines the [`Payslip`] struct and the file and employee
//! value types attached to each record.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of document attached to a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// A PDF document.
    Pdf,
    /// An image document (PNG, JPEG).
    Image,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Pdf => write!(f, "PDF"),
            FileKind::Image => write!(f, "Image"),
        }
    }
}

/// The document attached to a payslip record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipFile {
    /// The display file name (e.g., "Payslip_Jan_2024.pdf").
    pub name: String,
    /// The kind of document.
    pub kind: FileKind,
    /// Opaque reference resolved by the file access service.
    pub source_locator: String,
}

/// The employee a payslip belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// The employee's display name.
    pub name: String,
    /// The employee's department.
    pub department: String,
}

/// An immutable payslip record.
///
/// Records are supplied once at store construction and never mutated;
/// only the query parameters change across a session. The invariants
/// (`from_date <= to_date`, non-negative amounts, unique ids) are
/// enforced at ingestion by the store, so the query layer can assume
/// well-formed records.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{EmployeeInfo, FileKind, Payslip, PayslipFile};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let payslip = Payslip {
///     id: "PAY-2024-01".to_string(),
///     from_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
///     file: PayslipFile {
///         name: "Payslip_Jan_2024.pdf".to_string(),
///         kind: FileKind::Pdf,
///         source_locator: "Payslip_Jan_2024.pdf".to_string(),
///     },
///     net_pay: Decimal::new(6800, 0),
///     gross_pay: Decimal::new(8500, 0),
///     deductions: Decimal::new(1700, 0),
///     employee: EmployeeInfo {
///         name: "Yuvraj Desai".to_string(),
///         department: "Mobile Engineering".to_string(),
///     },
/// };
/// assert_eq!(payslip.period_year(), 2024);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier within a record set.
    pub id: String,
    /// The first day of the pay period (inclusive).
    pub from_date: NaiveDate,
    /// The last day of the pay period (inclusive).
    pub to_date: NaiveDate,
    /// The attached document.
    pub file: PayslipFile,
    /// The net amount paid.
    pub net_pay: Decimal,
    /// The gross amount before deductions.
    pub gross_pay: Decimal,
    /// The total deductions withheld.
    pub deductions: Decimal,
    /// The employee the payslip belongs to.
    pub employee: EmployeeInfo,
}

impl Payslip {
    /// Returns the calendar year the pay period ends in.
    ///
    /// Year filtering keys off the period end, so a period spanning a
    /// year boundary counts toward the later year.
    pub fn period_year(&self) -> i32 {
        self.to_date.year()
    }
}
