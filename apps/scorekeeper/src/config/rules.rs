//! Rule set shared by every component of a session.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;
pub const MAX_ROUNDS: u8 = 10;
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;

/// Cardinality and schedule limits for one session.
///
/// `Default` is the standard game: 2-8 players, 10 rounds, names of 2-50
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub min_players: usize,
    pub max_players: usize,
    pub max_rounds: u8,
    pub name_min_len: usize,
    pub name_max_len: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            max_rounds: MAX_ROUNDS,
            name_min_len: NAME_MIN_LEN,
            name_max_len: NAME_MAX_LEN,
        }
    }
}

impl GameRules {
    /// Standard rules with a different round count.
    pub fn with_max_rounds(max_rounds: u8) -> Result<Self, DomainError> {
        let rules = Self {
            max_rounds,
            ..Self::default()
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.min_players < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::Rules,
                format!("min_players must be at least {MIN_PLAYERS}"),
            ));
        }
        if self.max_players < self.min_players {
            return Err(DomainError::validation(
                ValidationKind::Rules,
                "max_players must not be below min_players",
            ));
        }
        if self.max_players > MAX_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::Rules,
                format!("max_players must be at most {MAX_PLAYERS}"),
            ));
        }
        if self.max_rounds == 0 {
            return Err(DomainError::validation(
                ValidationKind::Rules,
                "max_rounds must be at least 1",
            ));
        }
        if self.name_min_len == 0 || self.name_max_len < self.name_min_len {
            return Err(DomainError::validation(
                ValidationKind::Rules,
                "name length bounds are inconsistent",
            ));
        }
        Ok(())
    }
}
