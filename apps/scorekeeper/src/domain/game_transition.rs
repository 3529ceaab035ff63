use serde::{Deserialize, Serialize};

use crate::domain::state::Phase;

/// Minimal before/after view used to derive lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: Phase,
    pub round: u8,
    pub started: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: roster locked and the first round opened.
    GameStarted,

    /// Edge-triggered: a round entered Bidding.
    BiddingOpened { round: u8 },

    /// Edge-triggered: a round entered Scoring.
    ScoringOpened { round: u8 },

    /// Edge-triggered: a round left Scoring with every player scored.
    /// This is the transient "round complete" beat; it is never a stored phase.
    RoundCompleted { round: u8 },

    /// Edge-triggered: session reached Complete.
    GameEnded,
}

/// Derive lifecycle events from before/after session views.
pub fn derive_game_transitions(before: &SessionView, after: &SessionView) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Game start (roster lock)
    if !before.started && after.started {
        transitions.push(GameTransition::GameStarted);
    }

    // 2. Round completion is reported against the round that was scored.
    if before.phase == Phase::Scoring && after.phase != Phase::Scoring {
        transitions.push(GameTransition::RoundCompleted {
            round: before.round,
        });
    }

    // 3. Phase entry
    if before.phase != after.phase {
        match after.phase {
            Phase::Bidding => transitions.push(GameTransition::BiddingOpened { round: after.round }),
            Phase::Scoring => transitions.push(GameTransition::ScoringOpened { round: after.round }),
            Phase::Complete => transitions.push(GameTransition::GameEnded),
            Phase::Setup => {}
        }
    }

    transitions
}
