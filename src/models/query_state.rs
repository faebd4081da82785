//! Query state model.
//!
//! This module defines the [`QueryState`] struct holding the sort order,
//! year filter, and search query that drive view derivation.

use serde::{Deserialize, Serialize};

/// The sort order applied to the derived view.
///
/// Sorting always keys off the period-end date (`to_date`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recent period end first.
    #[default]
    Newest,
    /// Oldest period end first.
    Oldest,
}

/// The year filter applied to the derived view.
///
/// An explicit variant type rather than a magic sentinel value: either
/// every year is visible, or exactly one calendar year is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearFilter {
    /// No year restriction.
    #[default]
    All,
    /// Only records whose period ends in the given calendar year.
    Year(i32),
}

/// The query parameters for view derivation.
///
/// Created with defaults (newest first, all years, no search), mutated
/// only via the setters, and read by
/// [`derive_view`](crate::query::derive_view) on every change. The
/// record set itself is immutable for the session; only this state
/// changes.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{QueryState, SortOrder, YearFilter};
///
/// let mut state = QueryState::new();
/// assert_eq!(state.sort_order, SortOrder::Newest);
/// assert_eq!(state.year_filter, YearFilter::All);
/// assert_eq!(state.search_query, "");
///
/// state.set_year_filter(YearFilter::Year(2024));
/// state.set_search_query("august");
/// assert_eq!(state.year_filter, YearFilter::Year(2024));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// The active sort order.
    pub sort_order: SortOrder,
    /// The active year filter.
    pub year_filter: YearFilter,
    /// The free-text search query. Trimming and case folding happen at
    /// derivation time; the raw text is kept as the user typed it.
    pub search_query: String,
}

impl QueryState {
    /// Creates a query state with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sort order.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Sets the year filter.
    pub fn set_year_filter(&mut self, filter: YearFilter) {
        self.year_filter = filter;
    }

    /// Sets the search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }
}
