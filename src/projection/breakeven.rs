//! Break-even search over the merged series

use super::results::{BreakEvenResult, YearlyDataPoint};

/// Find the first year in which owning overtakes renting
///
/// Scans consecutive years for the owner moving from at-or-behind the
/// renter to strictly ahead, then interpolates linearly between the two
/// years to place the crossing. Later re-crossings are ignored.
pub fn find_break_even(points: &[YearlyDataPoint]) -> BreakEvenResult {
    for pair in points.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        let gap_before = before.ownership_advantage();
        let gap_after = after.ownership_advantage();

        if gap_before <= 0.0 && gap_after > 0.0 {
            let fraction = gap_before / (gap_before - gap_after);
            let exact_point = before.year as f64 + fraction;
            let month = ((exact_point.fract() * 12.0).floor() as u32).min(11);

            return BreakEvenResult {
                year: Some(after.year),
                month: Some(month),
                exact_point: Some(exact_point),
            };
        }
    }

    BreakEvenResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(year: u32, renter: f64, owner: f64) -> YearlyDataPoint {
        YearlyDataPoint {
            year,
            renter_net_worth: renter,
            owner_net_worth: owner,
            renter_cumulative_cost: 0.0,
            owner_cumulative_cost: 0.0,
            renter_investment_growth: 0.0,
            home_equity: 0.0,
            home_value: 0.0,
            mortgage_balance: 0.0,
        }
    }

    #[test]
    fn test_interpolated_crossing() {
        let points = vec![
            point(0, 100.0, 0.0),
            point(1, 100.0, 40.0),
            point(2, 100.0, 80.0),
            point(3, 100.0, 120.0),
        ];

        let result = find_break_even(&points);
        assert_eq!(result.year, Some(3));
        // Gap goes -20 -> +20, so the crossing is halfway through the year
        assert_relative_eq!(result.exact_point.unwrap(), 2.5);
        assert_eq!(result.month, Some(6));
    }

    #[test]
    fn test_crossing_from_exact_tie() {
        let points = vec![point(0, 50.0, 50.0), point(1, 50.0, 60.0)];
        let result = find_break_even(&points);
        assert_eq!(result.year, Some(1));
        assert_eq!(result.exact_point, Some(0.0));
        assert_eq!(result.month, Some(0));
    }

    #[test]
    fn test_no_crossing() {
        let points = vec![point(0, 100.0, 0.0), point(1, 110.0, 10.0), point(2, 120.0, 20.0)];
        assert_eq!(find_break_even(&points), BreakEvenResult::none());
    }

    #[test]
    fn test_owner_ahead_from_start_is_not_a_crossing() {
        let points = vec![point(0, 0.0, 10.0), point(1, 0.0, 20.0)];
        assert!(!find_break_even(&points).is_found());
    }

    #[test]
    fn test_first_crossing_wins() {
        let points = vec![
            point(0, 10.0, 0.0),
            point(1, 10.0, 20.0),
            point(2, 30.0, 20.0),
            point(3, 30.0, 40.0),
        ];
        assert_eq!(find_break_even(&points).year, Some(1));
    }

    #[test]
    fn test_short_series() {
        assert!(!find_break_even(&[]).is_found());
        assert!(!find_break_even(&[point(0, 0.0, 1.0)]).is_found());
    }
}
