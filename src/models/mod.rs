//! Core data models for the Payslip Query Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod payslip;
mod query_state;

pub use payslip::{EmployeeInfo, FileKind, Payslip, PayslipFile};
pub use query_state::{QueryState, SortOrder, YearFilter};
