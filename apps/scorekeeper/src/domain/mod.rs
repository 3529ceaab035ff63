//! Domain layer: pure session logic, no I/O.

pub mod game_transition;
pub mod input;
pub mod phase_machine;
pub mod roster;
pub mod round_tracker;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod standings;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_props_session;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use game_transition::{GameTransition, SessionView};
pub use phase_machine::PhaseMachine;
pub use roster::Roster;
pub use round_tracker::{RoundProgress, RoundTracker};
pub use scoring::{bonus_eligible, compute_round_score, score_preview, validate_tricks, ScorePreview};
pub use session::{GameSession, PhaseChange};
pub use snapshot::GameSnapshot;
pub use standings::{RoundLine, Standing};
pub use state::{Phase, Player, PlayerId, ScoreEntry};
