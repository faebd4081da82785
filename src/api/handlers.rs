//! HTTP request handlers for the Payslip Query Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::query::{derive_view, find_by_id};

use super::request::ListParams;
use super::response::{
    ApiErrorResponse, DocumentResponse, ListResponse, PayslipEntry,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslips", get(list_handler))
        .route("/payslips/:id", get(detail_handler))
        .route("/payslips/:id/download", post(download_handler))
        .route("/payslips/:id/preview", post(preview_handler))
        .with_state(state)
}

/// Handler for the `GET /payslips` endpoint.
///
/// Parses the query parameters into a query state, derives the view,
/// and returns the visible records plus the year filter options.
async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let query_state = match params.to_query_state() {
        Ok(query_state) => query_state,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error.message,
                "Rejected list parameters"
            );
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let view = derive_view(state.store().payslips(), &query_state);
    info!(
        correlation_id = %correlation_id,
        visible = view.visible.len(),
        total = state.store().len(),
        "Derived payslip view"
    );

    let payslips: Vec<PayslipEntry> = view.visible.iter().map(PayslipEntry::from).collect();
    let total = payslips.len();
    Json(ListResponse {
        payslips,
        available_years: view.available_years,
        total,
    })
    .into_response()
}

/// Handler for the `GET /payslips/{id}` endpoint.
async fn detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match find_by_id(state.store().payslips(), &id) {
        Ok(payslip) => Json(PayslipEntry::from(payslip)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, id = %id, "Payslip lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `POST /payslips/{id}/download` endpoint.
///
/// Copies the payslip's document to the download directory and returns
/// where it landed.
async fn download_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let payslip = match find_by_id(state.store().payslips(), &id) {
        Ok(payslip) => payslip,
        Err(err) => {
            warn!(correlation_id = %correlation_id, id = %id, "Payslip lookup failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match state.files().download(payslip).await {
        Ok(path) => {
            info!(
                correlation_id = %correlation_id,
                id = %id,
                path = %path.display(),
                "Download completed"
            );
            (
                StatusCode::OK,
                Json(DocumentResponse {
                    file_path: path.display().to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, id = %id, error = %err, "Download failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `POST /payslips/{id}/preview` endpoint.
///
/// Ensures a cached preview copy exists and returns its path for an
/// external viewer.
async fn preview_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let payslip = match find_by_id(state.store().payslips(), &id) {
        Ok(payslip) => payslip,
        Err(err) => {
            warn!(correlation_id = %correlation_id, id = %id, "Payslip lookup failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match state.files().preview(payslip).await {
        Ok(path) => (
            StatusCode::OK,
            Json(DocumentResponse {
                file_path: path.display().to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, id = %id, error = %err, "Preview failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
