//! HTTP API module for the Payslip Query Engine.
//!
//! This module provides the REST endpoints for listing, fetching,
//! downloading, and previewing payslips.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ListParams;
pub use response::{ApiError, DocumentResponse, ListResponse, PayslipEntry};
pub use state::AppState;
