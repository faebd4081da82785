//! Request types for the Payslip Query Engine API.
//!
//! This module defines the query parameters accepted by the list
//! endpoint and their conversion into a [`QueryState`].

use serde::Deserialize;

use crate::models::{QueryState, SortOrder, YearFilter};

use super::response::ApiError;

/// Query parameters for the `GET /payslips` endpoint.
///
/// All parameters are optional; omitted ones fall back to the query
/// defaults (newest first, all years, no search).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Sort order: `"newest"` or `"oldest"`.
    #[serde(default)]
    pub sort: Option<String>,
    /// Year filter: `"all"` or a calendar year like `"2024"`.
    #[serde(default)]
    pub year: Option<String>,
    /// Free-text search query.
    #[serde(default)]
    pub q: Option<String>,
}

impl ListParams {
    /// Converts the raw wire parameters into a [`QueryState`].
    ///
    /// The `"all"`-or-integer year convention is confined to this
    /// boundary; past it, the year filter is an explicit variant type.
    ///
    /// # Errors
    ///
    /// Returns a validation [`ApiError`] if `sort` is not
    /// `newest`/`oldest` or `year` is neither `all` nor an integer.
    pub fn to_query_state(&self) -> Result<QueryState, ApiError> {
        let mut state = QueryState::new();

        if let Some(sort) = &self.sort {
            let order = match sort.as_str() {
                "newest" => SortOrder::Newest,
                "oldest" => SortOrder::Oldest,
                other => {
                    return Err(ApiError::validation_error(format!(
                        "Unknown sort order '{other}': expected 'newest' or 'oldest'"
                    )));
                }
            };
            state.set_sort_order(order);
        }

        if let Some(year) = &self.year {
            let filter = match year.as_str() {
                "all" => YearFilter::All,
                other => other.parse::<i32>().map(YearFilter::Year).map_err(|_| {
                    ApiError::validation_error(format!(
                        "Unknown year filter '{other}': expected 'all' or a calendar year"
                    ))
                })?,
            };
            state.set_year_filter(filter);
        }

        if let Some(q) = &self.q {
            state.set_search_query(q.clone());
        }

        Ok(state)
    }
}
