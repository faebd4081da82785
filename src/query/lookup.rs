//! Id lookup over the record set.

use crate::error::{EngineError, EngineResult};
use crate::models::Payslip;

/// Finds a payslip by its id.
///
/// A linear scan over the unfiltered record set, which is fine at the
/// expected scale of tens to low hundreds of records. Lookup ignores the
/// active filter and search so a detail view can always be reached from
/// a stale navigation target.
///
/// # Errors
///
/// Returns [`EngineError::PayslipNotFound`] if no record carries the id.
///
/// # Example
///
/// ```
/// use payslip_engine::query::find_by_id;
///
/// let result = find_by_id(&[], "PAY-2024-01");
/// assert!(result.is_err());
/// ```
pub fn find_by_id<'a>(records: &'a [Payslip], id: &str) -> EngineResult<&'a Payslip> {
    records
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| EngineError::PayslipNotFound { id: id.to_string() })
}
