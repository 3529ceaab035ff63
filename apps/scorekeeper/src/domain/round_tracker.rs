//! Round numbering and per-round completion.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::rules::hands_for_round;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTracker {
    current_round: u8,
    max_rounds: u8,
    /// Always a subset of `1..=current_round`.
    completed_rounds: BTreeSet<u8>,
}

/// Where the session stands in its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundProgress {
    pub current: u8,
    pub total: u8,
    pub completed: u8,
    pub percentage: f32,
}

impl RoundTracker {
    pub(crate) fn new(max_rounds: u8) -> Self {
        Self {
            current_round: 1,
            max_rounds,
            completed_rounds: BTreeSet::new(),
        }
    }

    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    pub fn max_rounds(&self) -> u8 {
        self.max_rounds
    }

    pub fn completed_rounds(&self) -> &BTreeSet<u8> {
        &self.completed_rounds
    }

    pub fn hands_for_round(&self, round: u8) -> Result<u8, DomainError> {
        hands_for_round(round, self.max_rounds).ok_or(DomainError::RoundOutOfRange {
            round,
            max: self.max_rounds,
        })
    }

    /// Hands dealt in the current round (equal to the round number).
    pub fn hands_in_current_round(&self) -> u8 {
        // current_round stays within 1..=max_rounds
        self.current_round
    }

    pub fn can_start_round(&self) -> bool {
        self.current_round == 1 || self.completed_rounds.contains(&(self.current_round - 1))
    }

    /// True while the current round is not the last one.
    pub fn has_next_round(&self) -> bool {
        self.current_round < self.max_rounds
    }

    /// Mark the current round complete and move to the next one.
    ///
    /// Returns `false` on the final round, leaving `current_round` unchanged;
    /// the caller must then end the session.
    pub fn complete_current_round_and_advance(&mut self) -> bool {
        self.completed_rounds.insert(self.current_round);
        if self.has_next_round() {
            self.current_round += 1;
            true
        } else {
            false
        }
    }

    pub fn is_game_complete(&self) -> bool {
        self.current_round > self.max_rounds
            || (self.current_round == self.max_rounds
                && self.completed_rounds.contains(&self.max_rounds))
    }

    pub fn progress(&self) -> RoundProgress {
        // completed_rounds is a subset of 1..=max_rounds
        let completed = u8::try_from(self.completed_rounds.len()).unwrap_or(u8::MAX);
        RoundProgress {
            current: self.current_round,
            total: self.max_rounds,
            completed,
            percentage: f32::from(completed) / f32::from(self.max_rounds) * 100.0,
        }
    }
}
