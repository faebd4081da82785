//! Query logic for the Payslip Query Engine.
//!
//! This module contains the derivation pipeline that turns the immutable
//! record set plus the current [`QueryState`](crate::models::QueryState)
//! into the visible view: year filtering, multi-field substring search,
//! stable sorting by period end, and id lookup.

mod derive;
mod lookup;
mod search;
mod sort;

pub use derive::{DerivedView, derive_view};
pub use lookup::find_by_id;
pub use search::matches_search;
pub use sort::sort_by_period_end;
