//! Demo driver configuration loaded from environment variables.
//!
//! Only the `scorekeeper-demo` binary reads the environment; the engine
//! itself takes a [`GameRules`] value from its caller.

use std::env;

use thiserror::Error;

use crate::config::rules::{GameRules, MAX_ROUNDS};
use crate::errors::DomainError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("invalid rules: {0}")]
    Rules(#[from] DomainError),
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub players: Vec<String>,
    pub rules: GameRules,
    pub seed: u64,
}

impl DemoConfig {
    /// Load and validate demo configuration.
    ///
    /// - `SCOREKEEPER_PLAYERS`: comma-separated names (default `Ann,Bo,Cy`)
    /// - `SCOREKEEPER_MAX_ROUNDS`: rounds to play (default 10)
    /// - `SCOREKEEPER_SEED`: RNG seed for bids and results (default 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let players = lookup("SCOREKEEPER_PLAYERS")
            .unwrap_or_else(|| "Ann,Bo,Cy".to_string())
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        let max_rounds = match lookup("SCOREKEEPER_MAX_ROUNDS") {
            Some(raw) => raw.trim().parse::<u8>().map_err(|_| ConfigError::Invalid {
                var: "SCOREKEEPER_MAX_ROUNDS",
                expected: "an integer between 1 and 255",
                value: raw,
            })?,
            None => MAX_ROUNDS,
        };
        let rules = GameRules::with_max_rounds(max_rounds)?;

        let seed = match lookup("SCOREKEEPER_SEED") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: "SCOREKEEPER_SEED",
                expected: "an unsigned integer",
                value: raw,
            })?,
            None => 0,
        };

        Ok(Self {
            players,
            rules,
            seed,
        })
    }
}
