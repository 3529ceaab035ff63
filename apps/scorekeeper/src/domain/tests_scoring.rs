use crate::domain::scoring::{bonus_eligible, compute_round_score, score_preview, validate_tricks};
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn zero_bid_made_and_missed() {
    assert_eq!(compute_round_score(0, 0, 0), Ok(10));
    assert_eq!(compute_round_score(0, 1, 0), Ok(-10));
    assert_eq!(compute_round_score(0, 5, 0), Ok(-10));
}

#[test]
fn exact_bid_scores_twenty_per_trick() {
    assert_eq!(compute_round_score(1, 1, 0), Ok(20));
    assert_eq!(compute_round_score(3, 3, 0), Ok(60));
    assert_eq!(compute_round_score(10, 10, 0), Ok(200));
}

#[test]
fn missed_bid_penalty_scales_with_bid_not_difference() {
    assert_eq!(compute_round_score(3, 2, 0), Ok(-30));
    assert_eq!(compute_round_score(3, 0, 0), Ok(-30));
    assert_eq!(compute_round_score(1, 4, 0), Ok(-10));
}

#[test]
fn bonus_only_added_on_exact_bid() {
    assert_eq!(compute_round_score(3, 3, 50), Ok(110));
    assert_eq!(compute_round_score(0, 0, 20), Ok(30));
    // Missed bid: bonus ignored by the pure function.
    assert_eq!(compute_round_score(3, 2, 50), Ok(-30));
}

#[test]
fn negative_inputs_rejected() {
    for (bid, tricks, bonus) in [(-1, 0, 0), (0, -1, 0), (2, 2, -5)] {
        let err = compute_round_score(bid, tricks, bonus).unwrap_err();
        assert!(
            matches!(err, DomainError::InvalidInput(_)),
            "({bid}, {tricks}, {bonus}) should be InvalidInput, got {err:?}"
        );
    }
}

#[test]
fn bonus_eligibility_is_exact_match() {
    assert!(bonus_eligible(0, 0));
    assert!(bonus_eligible(4, 4));
    assert!(!bonus_eligible(4, 3));
    assert!(!bonus_eligible(0, 1));
}

#[test]
fn tricks_bounded_by_hands_in_round() {
    assert!(validate_tricks(0, 3).is_ok());
    assert!(validate_tricks(3, 3).is_ok());
    for bad in [-1, 4, 100] {
        assert!(matches!(
            validate_tricks(bad, 3),
            Err(DomainError::Validation(ValidationKind::TricksTaken, _))
        ));
    }
}

#[test]
fn preview_reports_breakdown() {
    let made = score_preview(2, 2, 15).unwrap();
    assert_eq!(made.base_score, 40);
    assert_eq!(made.bonus_points, 15);
    assert_eq!(made.total_score, 55);
    assert!(made.bonus_allowed && made.bid_correct);

    let missed = score_preview(2, 1, 15).unwrap();
    assert_eq!(missed.base_score, -20);
    assert_eq!(missed.bonus_points, 0);
    assert_eq!(missed.total_score, -20);
    assert!(!missed.bonus_allowed);
}

#[test]
fn score_overflow_is_invalid_input() {
    for (bid, tricks, bonus) in [
        (i32::MAX, i32::MAX, 0),
        (1, 1, i32::MAX),
        (0, 0, i32::MAX),
        (i32::MAX, 0, 0),
        (107_374_183, 107_374_183, 0),
    ] {
        let err = compute_round_score(bid, tricks, bonus).unwrap_err();
        assert!(
            matches!(err, DomainError::InvalidInput(_)),
            "({bid}, {tricks}, {bonus}) should be InvalidInput, got {err:?}"
        );
    }
    assert!(matches!(
        score_preview(1, 1, i32::MAX),
        Err(DomainError::InvalidInput(_))
    ));
}

#[test]
fn largest_representable_scores() {
    assert_eq!(compute_round_score(0, 0, i32::MAX - 10), Ok(i32::MAX));
    assert_eq!(compute_round_score(107_374_182, 107_374_182, 0), Ok(2_147_483_640));
    assert_eq!(compute_round_score(1, 1, i32::MAX - 20), Ok(i32::MAX));
    // Missed zero bid is a flat penalty whatever the trick count.
    assert_eq!(compute_round_score(0, i32::MAX, i32::MAX), Ok(-10));
    assert_eq!(compute_round_score(214_748_364, 0, 0), Ok(-2_147_483_640));
}
