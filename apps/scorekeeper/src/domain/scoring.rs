//! Pure scoring rules: bid vs. tricks taken, bonus eligibility.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

const ZERO_BID_MADE: i32 = 10;
const ZERO_BID_MISSED: i32 = -10;
const PER_TRICK_MADE: i32 = 20;
const PER_TRICK_MISSED: i32 = -10;

/// Score for one player's round.
///
/// - bid met: `10` for a zero bid, else `20 * bid`, plus `bonus_points`
/// - bid missed: `-10` for a zero bid, else `-10 * bid`; `bonus_points` is ignored
///
/// Callers that record scores must reject a non-zero bonus on a missed bid
/// (see [`bonus_eligible`]). A score that does not fit in `i32` is
/// `InvalidInput`.
pub fn compute_round_score(bid: i32, tricks_taken: i32, bonus_points: i32) -> Result<i32, DomainError> {
    if bid < 0 || tricks_taken < 0 {
        return Err(DomainError::invalid_input(format!(
            "bid and tricks taken must be non-negative, got bid={bid} tricks_taken={tricks_taken}"
        )));
    }
    if bonus_points < 0 {
        return Err(DomainError::invalid_input(format!(
            "bonus points must be non-negative, got {bonus_points}"
        )));
    }

    let score = if bonus_eligible(bid, tricks_taken) {
        let base = if bid == 0 {
            Some(ZERO_BID_MADE)
        } else {
            PER_TRICK_MADE.checked_mul(bid)
        };
        base.and_then(|base| base.checked_add(bonus_points))
    } else if bid == 0 {
        Some(ZERO_BID_MISSED)
    } else {
        PER_TRICK_MISSED.checked_mul(bid)
    };
    score.ok_or_else(|| {
        DomainError::invalid_input(format!(
            "round score out of range for bid={bid} tricks_taken={tricks_taken} bonus_points={bonus_points}"
        ))
    })
}

/// Bonus points only count when the bid was met exactly.
pub fn bonus_eligible(bid: i32, tricks_taken: i32) -> bool {
    bid == tricks_taken
}

/// Tricks taken must lie in `0..=hands_in_round`.
pub fn validate_tricks(tricks_taken: i32, hands_in_round: u8) -> Result<(), DomainError> {
    if (0..=i32::from(hands_in_round)).contains(&tricks_taken) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::TricksTaken,
            format!("tricks taken must be between 0 and {hands_in_round}, got {tricks_taken}"),
        ))
    }
}

/// Breakdown shown to a player before a result is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePreview {
    pub base_score: i32,
    /// Bonus that would actually count (0 when not allowed).
    pub bonus_points: i32,
    pub total_score: i32,
    pub bonus_allowed: bool,
    pub bid_correct: bool,
}

pub fn score_preview(bid: i32, tricks_taken: i32, bonus_points: i32) -> Result<ScorePreview, DomainError> {
    let base_score = compute_round_score(bid, tricks_taken, 0)?;
    let total_score = compute_round_score(bid, tricks_taken, bonus_points)?;
    let bonus_allowed = bonus_eligible(bid, tricks_taken);
    Ok(ScorePreview {
        base_score,
        bonus_points: if bonus_allowed { bonus_points } else { 0 },
        total_score,
        bonus_allowed,
        bid_correct: bonus_allowed,
    })
}
