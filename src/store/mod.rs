//! Record set loading for the Payslip Query Engine.
//!
//! This module provides the [`PayslipStore`] type for loading the
//! immutable payslip record set from a YAML fixture file and validating
//! its invariants at ingestion.

mod loader;

pub use loader::PayslipStore;
