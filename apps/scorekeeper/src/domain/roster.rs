//! Player roster: ordered list, cardinality limits, lock-on-start.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::config::GameRules;
use crate::domain::state::{Player, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Insertion order is display and turn order.
    players: Vec<Player>,
    started: bool,
    next_id: u32,
    rules: GameRules,
}

impl Roster {
    pub(crate) fn new(rules: GameRules) -> Self {
        Self {
            players: Vec::new(),
            started: false,
            next_id: 1,
            rules,
        }
    }

    /// Append a player with the next sequential id.
    pub fn add_player(&mut self, name: &str) -> Result<Player, DomainError> {
        if self.started {
            return Err(DomainError::validation(
                ValidationKind::RosterLocked,
                "cannot add players after the game has started",
            ));
        }
        let name = self.validate_name(name)?;

        let key = normalize_name(&name);
        if self.players.iter().any(|p| normalize_name(&p.name) == key) {
            return Err(DomainError::DuplicateName(name));
        }
        if self.players.len() >= self.rules.max_players {
            return Err(DomainError::Capacity {
                max: self.rules.max_players,
            });
        }

        let player = Player {
            id: PlayerId(self.next_id),
            name,
            score: 0,
        };
        self.next_id += 1;
        self.players.push(player.clone());
        Ok(player)
    }

    /// Remove a player, keeping the relative order of the rest.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, DomainError> {
        if self.started {
            return Err(DomainError::SessionStarted);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::NotFound(id))?;
        Ok(self.players.remove(idx))
    }

    pub fn can_start(&self) -> bool {
        !self.started
            && (self.rules.min_players..=self.rules.max_players).contains(&self.players.len())
    }

    /// Lock the roster. Irreversible for this session.
    pub fn start(&mut self) -> Result<(), DomainError> {
        if !self.can_start() {
            return Err(DomainError::InvalidPlayerCount {
                count: self.players.len(),
                min: self.rules.min_players,
                max: self.rules.max_players,
            });
        }
        self.started = true;
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn remaining_slots(&self) -> usize {
        self.rules.max_players.saturating_sub(self.players.len())
    }

    pub fn can_add_player(&self) -> bool {
        !self.started && self.remaining_slots() > 0
    }

    /// Add a round score to a player's running total.
    ///
    /// The total is left untouched when the sum does not fit in `i32`.
    pub(crate) fn credit(&mut self, id: PlayerId, delta: i32) -> Result<i32, DomainError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound(id))?;
        player.score = player.score.checked_add(delta).ok_or_else(|| {
            DomainError::invalid_input(format!(
                "total score for player {id} out of range: {} + {delta}",
                player.score
            ))
        })?;
        Ok(player.score)
    }

    fn validate_name(&self, raw: &str) -> Result<String, DomainError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len < self.rules.name_min_len || len > self.rules.name_max_len {
            return Err(DomainError::validation(
                ValidationKind::PlayerName,
                format!(
                    "player name must be {}-{} characters after trimming, got {len}",
                    self.rules.name_min_len, self.rules.name_max_len
                ),
            ));
        }
        Ok(trimmed.to_string())
    }
}

/// Comparison key for duplicate-name detection.
fn normalize_name(name: &str) -> String {
    name.trim().nfkc().collect::<String>().to_lowercase()
}
