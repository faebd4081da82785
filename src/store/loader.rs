//! Payslip record set loading and validation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Payslip;

/// On-disk structure of the payslip data file.
#[derive(Debug, Deserialize)]
struct StoreFile {
    /// The payslip records.
    payslips: Vec<Payslip>,
}

/// Holds the immutable payslip record set for a session.
///
/// The store reads a YAML data file once at startup and validates every
/// record; after construction the records never change, only the query
/// parameters do. Date validity is guaranteed here (dates deserialize as
/// strict ISO calendar dates), which is what lets the query layer stay
/// infallible.
///
/// # Data File Structure
///
/// ```text
/// payslips:
///   - id: PAY-2024-01
///     from_date: 2024-01-01
///     to_date: 2024-01-31
///     file:
///       name: Payslip_Jan_2024.pdf
///       kind: pdf
///       source_locator: Payslip_Jan_2024.pdf
///     net_pay: 6800
///     gross_pay: 8500
///     deductions: 1700
///     employee:
///       name: Yuvraj Desai
///       department: Mobile Engineering
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::store::PayslipStore;
///
/// let store = PayslipStore::load("./data/payslips.yaml")?;
/// println!("{} payslips loaded", store.len());
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayslipStore {
    payslips: Vec<Payslip>,
}

impl PayslipStore {
    /// Loads the record set from a YAML data file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the data file (e.g., "./data/payslips.yaml")
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, contains invalid YAML,
    /// or holds a record that violates an ingestion invariant.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::StoreNotFound {
            path: path_str.clone(),
        })?;

        let file: StoreFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::StoreParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_payslips(file.payslips)
    }

    /// Builds a store from an already-materialized record set.
    ///
    /// Applies the same ingestion validation as [`PayslipStore::load`]:
    /// ids must be unique, periods must not run backwards, file names
    /// must be non-empty, and amounts must be non-negative.
    pub fn from_payslips(payslips: Vec<Payslip>) -> EngineResult<Self> {
        let mut seen_ids: HashSet<&str> = HashSet::new();

        for payslip in &payslips {
            validate_payslip(payslip)?;
            if !seen_ids.insert(payslip.id.as_str()) {
                return Err(EngineError::InvalidPayslip {
                    id: payslip.id.clone(),
                    message: "duplicate id in record set".to_string(),
                });
            }
        }

        Ok(Self { payslips })
    }

    /// Returns the full, unfiltered record set.
    pub fn payslips(&self) -> &[Payslip] {
        &self.payslips
    }

    /// Returns the number of records in the set.
    pub fn len(&self) -> usize {
        self.payslips.len()
    }

    /// Returns true if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.payslips.is_empty()
    }
}

/// Checks the single-record ingestion invariants.
fn validate_payslip(payslip: &Payslip) -> EngineResult<()> {
    if payslip.from_date > payslip.to_date {
        return Err(EngineError::InvalidPayslip {
            id: payslip.id.clone(),
            message: "from_date is after to_date".to_string(),
        });
    }

    if payslip.file.name.is_empty() {
        return Err(EngineError::InvalidPayslip {
            id: payslip.id.clone(),
            message: "file name is empty".to_string(),
        });
    }

    if payslip.net_pay < Decimal::ZERO
        || payslip.gross_pay < Decimal::ZERO
        || payslip.deductions < Decimal::ZERO
    {
        return Err(EngineError::InvalidPayslip {
            id: payslip.id.clone(),
            message: "amounts must be non-negative".to_string(),
        });
    }

    Ok(())
}
