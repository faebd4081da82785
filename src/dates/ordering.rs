//! Chronological ordering of calendar dates.

use std::cmp::Ordering;

use chrono::NaiveDate;

/// Compares two calendar dates chronologically.
///
/// Returns [`Ordering::Less`] if `a` precedes `b`, [`Ordering::Greater`]
/// if it follows, and [`Ordering::Equal`] on the same calendar day. The
/// order is total (antisymmetric and transitive), which is what makes the
/// stable sort in the query layer deterministic.
///
/// # Example
///
/// ```
/// use payslip_engine::dates::compare_dates;
/// use chrono::NaiveDate;
/// use std::cmp::Ordering;
///
/// let earlier = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let later = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// assert_eq!(compare_dates(earlier, later), Ordering::Less);
/// assert_eq!(compare_dates(later, earlier), Ordering::Greater);
/// assert_eq!(compare_dates(earlier, earlier), Ordering::Equal);
/// ```
pub fn compare_dates(a: NaiveDate, b: NaiveDate) -> Ordering {
    a.cmp(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_compare_across_years() {
        assert_eq!(
            compare_dates(date(2023, 12, 31), date(2024, 1, 1)),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_within_month() {
        assert_eq!(
            compare_dates(date(2024, 8, 31), date(2024, 8, 1)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_equal_dates() {
        assert_eq!(
            compare_dates(date(2024, 8, 15), date(2024, 8, 15)),
            Ordering::Equal
        );
    }

    proptest! {
        #[test]
        fn prop_compare_is_antisymmetric(
            a_year in 1990i32..2100, a_ord in 1u32..=365,
            b_year in 1990i32..2100, b_ord in 1u32..=365,
        ) {
            let a = NaiveDate::from_yo_opt(a_year, a_ord).unwrap();
            let b = NaiveDate::from_yo_opt(b_year, b_ord).unwrap();
            prop_assert_eq!(compare_dates(a, b), compare_dates(b, a).reverse());
        }

        #[test]
        fn prop_compare_is_reflexively_equal(
            year in 1990i32..2100, ord in 1u32..=365,
        ) {
            let a = NaiveDate::from_yo_opt(year, ord).unwrap();
            prop_assert_eq!(compare_dates(a, a), Ordering::Equal);
        }
    }
}
