#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;


// Re-exports for public API
pub use config::GameRules;
pub use domain::{
    GameSession, GameSnapshot, GameTransition, Phase, PhaseChange, Player, PlayerId, ScoreEntry,
};
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use services::{RegistryError, SessionId, SessionRegistry};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
