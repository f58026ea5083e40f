//! Two-digit year expansion.

use crate::{CenturyRule, YearRange};

/// Expand a two-digit year `yy` (0..=99) to a full year.
///
/// `FromRange` picks the latest year ending in `yy` that is not after
/// `range.max_year()`, so the cutoff moves with the configured range instead
/// of drifting away from it.
pub fn expand_two_digit_year(yy: u32, range: &YearRange, rule: CenturyRule) -> i32 {
    let yy = yy as i32;
    match rule {
        CenturyRule::Pivot(pivot) => {
            if yy <= i32::from(pivot) {
                2000 + yy
            } else {
                1900 + yy
            }
        }
        CenturyRule::FromRange => {
            let max = range.max_year();
            let candidate = max - max.rem_euclid(100) + yy;
            if candidate > max { candidate - 100 } else { candidate }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_range_matches_fixed_pivot_for_default_range() {
        let range = YearRange::default();
        for yy in 0..100 {
            assert_eq!(
                expand_two_digit_year(yy, &range, CenturyRule::FromRange),
                expand_two_digit_year(yy, &range, CenturyRule::Pivot(30)),
                "yy = {yy}"
            );
        }
    }

    #[test]
    fn pivot_boundaries() {
        let range = YearRange::default();
        assert_eq!(expand_two_digit_year(30, &range, CenturyRule::Pivot(30)), 2030);
        assert_eq!(expand_two_digit_year(31, &range, CenturyRule::Pivot(30)), 1931);
        assert_eq!(expand_two_digit_year(0, &range, CenturyRule::Pivot(30)), 2000);
        assert_eq!(expand_two_digit_year(99, &range, CenturyRule::Pivot(30)), 1999);
    }

    #[test]
    fn from_range_follows_max_year() {
        let range = YearRange::new(2020, 2060).unwrap();
        assert_eq!(expand_two_digit_year(45, &range, CenturyRule::FromRange), 2045);
        assert_eq!(expand_two_digit_year(61, &range, CenturyRule::FromRange), 1961);

        let range = YearRange::new(1990, 2010).unwrap();
        assert_eq!(expand_two_digit_year(95, &range, CenturyRule::FromRange), 1995);
        assert_eq!(expand_two_digit_year(5, &range, CenturyRule::FromRange), 2005);
    }
}
