//! Payslip Query Engine
//!
//! This crate provides the query layer for a payslip document service:
//! an immutable record set is filtered by year, searched by free text,
//! sorted by period-end date, and served to a presentation layer. The
//! associated PDF/image documents can be copied out for preview and
//! download.

#![warn(missing_docs)]

pub mod api;
pub mod dates;
pub mod error;
pub mod files;
pub mod models;
pub mod query;
pub mod store;
