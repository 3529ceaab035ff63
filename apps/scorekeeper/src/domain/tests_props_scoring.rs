//! Property tests for the scoring rules (pure domain).

use proptest::prelude::*;

use crate::domain::scoring::{compute_round_score, validate_tricks};
use crate::domain::test_prelude;
use crate::errors::domain::DomainError;

/// Same rules in `i64`, where no valid input can overflow.
fn wide_score(bid: i32, tricks: i32, bonus: i32) -> i64 {
    let (bid, bonus) = (i64::from(bid), i64::from(bonus));
    match (bid == i64::from(tricks), bid == 0) {
        (true, true) => 10 + bonus,
        (true, false) => 20 * bid + bonus,
        (false, true) => -10,
        (false, false) => -10 * bid,
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Identical inputs always yield identical output.
    #[test]
    fn prop_scoring_is_deterministic(
        bid in 0i32..=10,
        tricks in 0i32..=10,
        bonus in 0i32..=100,
    ) {
        let first = compute_round_score(bid, tricks, bonus);
        let second = compute_round_score(bid, tricks, bonus);
        prop_assert_eq!(first, second);
    }

    /// Made bids are always positive, missed bids always negative.
    #[test]
    fn prop_sign_follows_bid_outcome(
        bid in 0i32..=10,
        tricks in 0i32..=10,
        bonus in 0i32..=100,
    ) {
        let score = compute_round_score(bid, tricks, bonus).unwrap();
        if bid == tricks {
            prop_assert!(score >= 10);
        } else {
            prop_assert!(score <= -10);
        }
    }

    /// A missed bid never depends on the bonus.
    #[test]
    fn prop_missed_bid_ignores_bonus(
        bid in 0i32..=10,
        miss_by in 1i32..=5,
        bonus in 0i32..=100,
    ) {
        let tricks = bid + miss_by;
        prop_assert_eq!(
            compute_round_score(bid, tricks, bonus),
            compute_round_score(bid, tricks, 0)
        );
    }

    /// Over the whole non-negative range the result is either the exact
    /// score or InvalidInput when it does not fit.
    #[test]
    fn prop_full_range_matches_wide_arithmetic(
        bid in 0i32..=i32::MAX,
        tricks in 0i32..=i32::MAX,
        bonus in 0i32..=i32::MAX,
    ) {
        let result = compute_round_score(bid, tricks, bonus);
        match i32::try_from(wide_score(bid, tricks, bonus)) {
            Ok(expected) => prop_assert_eq!(result, Ok(expected)),
            Err(_) => prop_assert!(matches!(result, Err(DomainError::InvalidInput(_)))),
        }
    }

    /// Same check for made bids, which the full range above rarely hits.
    #[test]
    fn prop_made_bid_full_range_matches_wide_arithmetic(
        bid in 0i32..=i32::MAX,
        bonus in 0i32..=i32::MAX,
    ) {
        let result = compute_round_score(bid, bid, bonus);
        match i32::try_from(wide_score(bid, bid, bonus)) {
            Ok(expected) => prop_assert_eq!(result, Ok(expected)),
            Err(_) => prop_assert!(matches!(result, Err(DomainError::InvalidInput(_)))),
        }
    }

    /// Valid trick counts for round r are exactly 0..=r.
    #[test]
    fn prop_tricks_range_matches_round(
        round in 1u8..=10,
        tricks in -5i32..=15,
    ) {
        let ok = validate_tricks(tricks, round).is_ok();
        prop_assert_eq!(ok, (0..=i32::from(round)).contains(&tricks));
    }
}
