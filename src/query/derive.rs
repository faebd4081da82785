//! View derivation pipeline.

use crate::dates::{unique_years, year_of};
use crate::models::{Payslip, QueryState, YearFilter};

use super::search::matches_search;
use super::sort::sort_by_period_end;

/// The derived view over a record set for a given query state.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// The records that survive the year filter and search filter, in
    /// sort order.
    pub visible: Vec<Payslip>,
    /// The distinct period-end years of the **full** record set, sorted
    /// descending. Independent of the active filter and search, so the
    /// year options in the presentation layer never shrink as the user
    /// narrows the view.
    pub available_years: Vec<i32>,
}

/// Derives the filtered, searched, sorted view over a record set.
///
/// A pure function over the record set and the query state: no side
/// effects, no I/O, safe to call concurrently and to memoize keyed on
/// `(records identity, state)`.
///
/// The pipeline applies three stages in a fixed order, each narrowing
/// the previous stage's output:
///
/// 1. **Year filter**: keep records whose period-end year equals the
///    selected year; [`YearFilter::All`] is a no-op.
/// 2. **Search filter**: keep records matching the trimmed, lower-cased
///    query across id, file name, ISO dates, rendered range, and full
///    month name; an empty or whitespace-only query is a no-op.
/// 3. **Sort**: stable sort by `to_date`, newest or oldest first.
///
/// # Example
///
/// ```
/// use payslip_engine::models::QueryState;
/// use payslip_engine::query::derive_view;
///
/// let view = derive_view(&[], &QueryState::new());
/// assert!(view.visible.is_empty());
/// assert!(view.available_years.is_empty());
/// ```
pub fn derive_view(records: &[Payslip], state: &QueryState) -> DerivedView {
    // Years come from the unfiltered set, before any narrowing.
    let available_years = unique_years(records.iter().map(|p| p.to_date));

    let mut visible: Vec<Payslip> = records.to_vec();

    // Stage 1: year filter
    if let YearFilter::Year(year) = state.year_filter {
        visible.retain(|p| year_of(p.to_date) == year);
    }

    // Stage 2: search filter
    let query = state.search_query.trim().to_lowercase();
    if !query.is_empty() {
        visible.retain(|p| matches_search(p, &query));
    }

    // Stage 3: sort
    sort_by_period_end(&mut visible, state.sort_order);

    DerivedView {
        visible,
        available_years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeInfo, FileKind, PayslipFile, SortOrder};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn create_payslip(id: &str, from: (i32, u32, u32), to: (i32, u32, u32), file: &str) -> Payslip {
        Payslip {
            id: id.to_string(),
            from_date: NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
            to_date: NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
            file: PayslipFile {
                name: file.to_string(),
                kind: FileKind::Pdf,
                source_locator: file.to_string(),
            },
            net_pay: Decimal::new(6800, 0),
            gross_pay: Decimal::new(8500, 0),
            deductions: Decimal::new(1700, 0),
            employee: EmployeeInfo {
                name: "Yuvraj Desai".to_string(),
                department: "Mobile Engineering".to_string(),
            },
        }
    }

    fn create_records() -> Vec<Payslip> {
        vec![
            create_payslip(
                "PAY-2023-07",
                (2023, 7, 1),
                (2023, 7, 31),
                "Payslip_Jul_2023.pdf",
            ),
            create_payslip(
                "PAY-2025-08",
                (2025, 8, 1),
                (2025, 8, 31),
                "INCRED_AUG_2025_IMA000075_Payslip.pdf",
            ),
            create_payslip(
                "PAY-2024-12",
                (2024, 12, 1),
                (2024, 12, 31),
                "INCRED_DEC_2024_IMA000075_Payslip.pdf",
            ),
        ]
    }

    fn visible_ids(view: &DerivedView) -> Vec<&str> {
        view.visible.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_state_sorts_newest_first() {
        let records = create_records();
        let view = derive_view(&records, &QueryState::new());
        assert_eq!(
            visible_ids(&view),
            vec!["PAY-2025-08", "PAY-2024-12", "PAY-2023-07"]
        );
        assert_eq!(view.available_years, vec![2025, 2024, 2023]);
    }

    #[test]
    fn test_oldest_reverses_order() {
        let records = create_records();
        let mut state = QueryState::new();
        state.set_sort_order(SortOrder::Oldest);
        let view = derive_view(&records, &state);
        assert_eq!(
            visible_ids(&view),
            vec!["PAY-2023-07", "PAY-2024-12", "PAY-2025-08"]
        );
    }

    #[test]
    fn test_year_filter_narrows_visible() {
        let records = create_records();
        let mut state = QueryState::new();
        state.set_year_filter(YearFilter::Year(2024));
        let view = derive_view(&records, &state);
        assert_eq!(visible_ids(&view), vec!["PAY-2024-12"]);
    }

    #[test]
    fn test_search_filters_by_file_name_newest_first() {
        let records = create_records();
        let mut state = QueryState::new();
        state.set_search_query("INCRED");
        let view = derive_view(&records, &state);
        assert_eq!(visible_ids(&view), vec!["PAY-2025-08", "PAY-2024-12"]);
    }

    #[test]
    fn test_no_match_keeps_available_years_intact() {
        let records = create_records();
        let mut state = QueryState::new();
        state.set_search_query("NONEXISTENT");
        let view = derive_view(&records, &state);
        assert!(view.visible.is_empty());
        assert_eq!(view.available_years, vec![2025, 2024, 2023]);
    }

    #[test]
    fn test_whitespace_query_is_no_op() {
        let records = create_records();
        let mut state = QueryState::new();
        state.set_search_query("   ");
        let view = derive_view(&records, &state);
        assert_eq!(view.visible.len(), 3);
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let records = create_records();
        let mut state = QueryState::new();
        state.set_search_query("  incred  ");
        let view = derive_view(&records, &state);
        assert_eq!(view.visible.len(), 2);
    }

    #[test]
    fn test_year_filter_and_search_compose() {
        let records = create_records();
        let mut state = QueryState::new();
        state.set_year_filter(YearFilter::Year(2024));
        state.set_search_query("incred");
        let view = derive_view(&records, &state);
        assert_eq!(visible_ids(&view), vec!["PAY-2024-12"]);

        // Search alone would also hit 2025; the year filter removed it.
        state.set_year_filter(YearFilter::Year(2023));
        let view = derive_view(&records, &state);
        assert!(view.visible.is_empty());
    }

    #[test]
    fn test_empty_record_set() {
        let view = derive_view(&[], &QueryState::new());
        assert!(view.visible.is_empty());
        assert!(view.available_years.is_empty());
    }

    #[test]
    fn test_derivation_does_not_mutate_input() {
        let records = create_records();
        let before = records.clone();
        let mut state = QueryState::new();
        state.set_year_filter(YearFilter::Year(2024));
        let _ = derive_view(&records, &state);
        assert_eq!(records, before);
    }

    #[test]
    fn test_deriving_a_derived_view_is_idempotent() {
        let records = create_records();
        let state = QueryState::new();
        let once = derive_view(&records, &state);
        let twice = derive_view(&once.visible, &state);
        assert_eq!(once.visible, twice.visible);
    }

    proptest! {
        #[test]
        fn prop_visible_is_a_subsequence_satisfying_the_filters(
            year_choice in prop::option::of(2019i32..2026),
            newest in any::<bool>(),
            seed in proptest::collection::vec((2019i32..2026, 1u32..=12), 0..30),
        ) {
            let records: Vec<Payslip> = seed
                .iter()
                .enumerate()
                .map(|(i, (year, month))| {
                    create_payslip(
                        &format!("PAY-{i:03}"),
                        (*year, *month, 1),
                        (*year, *month, 28),
                        &format!("Payslip_{i:03}.pdf"),
                    )
                })
                .collect();

            let mut state = QueryState::new();
            state.set_sort_order(if newest { SortOrder::Newest } else { SortOrder::Oldest });
            if let Some(year) = year_choice {
                state.set_year_filter(YearFilter::Year(year));
            }

            let view = derive_view(&records, &state);

            // No records invented: every visible id exists in the input.
            for payslip in &view.visible {
                prop_assert!(records.iter().any(|r| r == payslip));
            }
            // Every visible record satisfies the year filter.
            if let Some(year) = year_choice {
                for payslip in &view.visible {
                    prop_assert_eq!(payslip.period_year(), year);
                }
            }
            // Sorted by to_date in the requested direction.
            for pair in view.visible.windows(2) {
                if newest {
                    prop_assert!(pair[0].to_date >= pair[1].to_date);
                } else {
                    prop_assert!(pair[0].to_date <= pair[1].to_date);
                }
            }
        }
    }
}
