use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Roster-assigned player identifier, monotonically increasing from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Overall session progression phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Roster editing (round 1) or the pause between rounds.
    Setup,
    /// Players submit bids for the current round.
    Bidding,
    /// Tricks taken and bonuses are recorded per player.
    Scoring,
    /// All rounds complete. Terminal.
    Complete,
}

impl Phase {
    /// Phases reachable from `self` in one transition.
    pub const fn allowed_targets(self) -> &'static [Phase] {
        match self {
            Phase::Setup => &[Phase::Bidding],
            Phase::Bidding => &[Phase::Scoring],
            Phase::Scoring => &[Phase::Setup, Phase::Complete],
            Phase::Complete => &[],
        }
    }

    pub fn can_transition_to(self, target: Phase) -> bool {
        self.allowed_targets().contains(&target)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Complete)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Bidding => "bidding",
            Phase::Scoring => "scoring",
            Phase::Complete => "complete",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Trimmed display name; immutable after creation.
    pub name: String,
    /// Running total across all scored rounds.
    pub score: i32,
}

/// One player's result for one round. Never mutated once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player_id: PlayerId,
    pub round: u8,
    pub bid: i32,
    pub tricks_taken: i32,
    pub bonus_points: i32,
    pub round_score: i32,
}
