//! Public snapshot API for observing a session without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::phase_machine::PhaseMachine;
use crate::domain::round_tracker::RoundProgress;
use crate::domain::standings::{compute_standings, Standing};
use crate::domain::state::{Phase, PlayerId, ScoreEntry};

/// Public info about one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub score: i32,
    /// Bid for the current round, if submitted.
    pub bid: Option<i32>,
    pub scored_this_round: bool,
    pub history: Vec<ScoreEntry>,
}

/// Everything a UI or API layer needs to render a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub progress: RoundProgress,
    pub hands_in_round: u8,
    pub started: bool,
    pub can_start: bool,
    pub remaining_slots: usize,
    pub game_complete: bool,
    pub players: Vec<PlayerSummary>,
    pub standings: Vec<Standing>,
}

impl GameSnapshot {
    pub fn from_machine(machine: &PhaseMachine) -> Self {
        let roster = machine.roster();
        let players = roster
            .players()
            .iter()
            .map(|p| PlayerSummary {
                id: p.id,
                name: p.name.clone(),
                score: p.score,
                bid: machine.bid_for(p.id),
                scored_this_round: machine.has_scored(p.id),
                history: machine.history(p.id).to_vec(),
            })
            .collect();

        Self {
            phase: machine.phase(),
            progress: machine.rounds().progress(),
            hands_in_round: machine.hands_in_round(),
            started: roster.is_started(),
            can_start: roster.can_start(),
            remaining_slots: roster.remaining_slots(),
            game_complete: machine.is_game_complete(),
            players,
            standings: compute_standings(roster.players()),
        }
    }
}
