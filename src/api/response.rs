//! Response types for the Payslip Query Engine API.
//!
//! This module defines the JSON response structures and the error
//! mapping from [`EngineError`] to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dates::format_range;
use crate::error::EngineError;
use crate::models::{EmployeeInfo, Payslip, PayslipFile};

/// A payslip as rendered on the wire.
///
/// Carries the record fields plus the rendered `period` label so list
/// and detail clients do not re-implement the range formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipEntry {
    /// Unique identifier of the record.
    pub id: String,
    /// The first day of the pay period (inclusive).
    pub from_date: NaiveDate,
    /// The last day of the pay period (inclusive).
    pub to_date: NaiveDate,
    /// The rendered pay-period label, e.g. `"Aug 1 – 31, 2024"`.
    pub period: String,
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

impl From<&Payslip> for PayslipEntry {
    fn from(payslip: &Payslip) -> Self {
        Self {
            id: payslip.id.clone(),
            from_date: payslip.from_date,
            to_date: payslip.to_date,
            period: format_range(payslip.from_date, payslip.to_date),
            file: payslip.file.clone(),
            net_pay: payslip.net_pay,
            gross_pay: payslip.gross_pay,
            deductions: payslip.deductions,
            employee: payslip.employee.clone(),
        }
    }
}

/// Response body for the `GET /payslips` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// The visible records for the requested query state, in sort order.
    pub payslips: Vec<PayslipEntry>,
    /// The distinct period-end years of the full record set, descending.
    pub available_years: Vec<i32>,
    /// The number of visible records.
    pub total: usize,
}

/// Response body for the download and preview endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    /// Where the document copy landed.
    pub file_path: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a payslip-not-found error response.
    pub fn payslip_not_found(id: &str) -> Self {
        Self::with_details(
            "PAYSLIP_NOT_FOUND",
            format!("Payslip not found: {id}"),
            format!("No payslip with id '{id}' exists in the record set"),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Wraps a validation error in a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidDate { input, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{input}'"),
                    message,
                ),
            },
            EngineError::PayslipNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::payslip_not_found(&id),
            },
            EngineError::StoreNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Payslip data error",
                    format!("Payslip data file not found: {path}"),
                ),
            },
            EngineError::StoreParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Payslip data parse error",
                    format!("Failed to parse {path}: {message}"),
                ),
            },
            EngineError::InvalidPayslip { id, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_PAYSLIP",
                    format!("Invalid payslip '{id}'"),
                    message,
                ),
            },
            EngineError::DocumentNotFound { path } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "DOCUMENT_NOT_FOUND",
                    "Document not found",
                    format!("No document at {path}"),
                ),
            },
            EngineError::DocumentCopy { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DOCUMENT_COPY_FAILED",
                    format!("Failed to copy document '{path}'"),
                    message,
                ),
            },
        }
    }
}
