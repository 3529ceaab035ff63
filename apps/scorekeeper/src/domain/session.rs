//! Game session facade: the inbound API used by UI and HTTP collaborators.
//!
//! A `GameSession` owns one [`PhaseMachine`] and adds raw-input parsing,
//! lifecycle events and read models on top of it. It holds no global state;
//! callers construct one per game and serialize access to it themselves
//! (see `services::sessions`).

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GameRules;
use crate::domain::game_transition::{derive_game_transitions, GameTransition, SessionView};
use crate::domain::input::{parse_count, parse_optional_count};
use crate::domain::phase_machine::PhaseMachine;
use crate::domain::round_tracker::RoundProgress;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::standings::{compute_standings, round_breakdown, RoundLine, Standing};
use crate::domain::state::{Phase, Player, PlayerId, ScoreEntry};
use crate::errors::domain::DomainError;

/// Result of a successful phase change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    /// Current round after the change.
    pub round: u8,
    pub transitions: Vec<GameTransition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    rules: GameRules,
    machine: PhaseMachine,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        let rules = GameRules::default();
        Self {
            rules,
            machine: PhaseMachine::new(rules),
        }
    }

    pub fn with_rules(rules: GameRules) -> Result<Self, DomainError> {
        rules.validate()?;
        Ok(Self {
            rules,
            machine: PhaseMachine::new(rules),
        })
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn add_player(&mut self, name: &str) -> Result<Player, DomainError> {
        let player = self.machine.add_player(name)?;
        debug!(player_id = %player.id, name = %player.name, "player added");
        Ok(player)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, DomainError> {
        let player = self.machine.remove_player(id)?;
        debug!(player_id = %player.id, "player removed");
        Ok(player)
    }

    /// Lock the roster and open bidding for round 1.
    pub fn start_game(&mut self) -> Result<PhaseChange, DomainError> {
        if self.machine.phase().is_terminal() {
            return Err(DomainError::phase("start_game", self.machine.phase()));
        }
        if self.machine.roster().is_started() {
            return Err(DomainError::SessionStarted);
        }
        self.transition(Phase::Bidding)
    }

    /// Returns the previous bid when this overwrote one.
    pub fn submit_bid(&mut self, player_id: PlayerId, bid: i32) -> Result<Option<i32>, DomainError> {
        let previous = self.machine.record_bid(player_id, bid)?;
        debug!(
            player_id = %player_id,
            bid,
            round = self.machine.current_round(),
            resubmitted = previous.is_some(),
            "bid recorded"
        );
        Ok(previous)
    }

    /// [`submit_bid`](Self::submit_bid) for a raw text field.
    pub fn submit_bid_input(&mut self, player_id: PlayerId, raw_bid: &str) -> Result<Option<i32>, DomainError> {
        let bid = parse_count("bid", raw_bid)?;
        self.submit_bid(player_id, bid)
    }

    pub fn submit_round_result(
        &mut self,
        player_id: PlayerId,
        tricks_taken: i32,
        bonus_points: i32,
    ) -> Result<ScoreEntry, DomainError> {
        let entry = self.machine.record_score(player_id, tricks_taken, bonus_points)?;
        debug!(
            player_id = %player_id,
            round = entry.round,
            bid = entry.bid,
            tricks_taken,
            bonus_points,
            round_score = entry.round_score,
            "round result recorded"
        );
        Ok(entry)
    }

    /// [`submit_round_result`](Self::submit_round_result) for raw text fields;
    /// a blank bonus counts as 0.
    pub fn submit_round_result_input(
        &mut self,
        player_id: PlayerId,
        raw_tricks: &str,
        raw_bonus: Option<&str>,
    ) -> Result<ScoreEntry, DomainError> {
        let tricks_taken = parse_count("tricks_taken", raw_tricks)?;
        let bonus_points = parse_optional_count("bonus_points", raw_bonus)?;
        self.submit_round_result(player_id, tricks_taken, bonus_points)
    }

    pub fn advance_phase(&mut self) -> Result<PhaseChange, DomainError> {
        let before = self.view();
        self.machine.advance_phase()?;
        Ok(self.phase_changed(before))
    }

    pub fn transition(&mut self, target: Phase) -> Result<PhaseChange, DomainError> {
        let before = self.view();
        self.machine.transition(target)?;
        Ok(self.phase_changed(before))
    }

    fn phase_changed(&self, before: SessionView) -> PhaseChange {
        let after = self.view();
        let transitions = derive_game_transitions(&before, &after);
        info!(
            from = %before.phase,
            to = %after.phase,
            round = after.round,
            events = transitions.len(),
            "phase changed"
        );
        PhaseChange {
            from: before.phase,
            to: after.phase,
            round: after.round,
            transitions,
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.machine.phase(),
            round: self.machine.current_round(),
            started: self.machine.roster().is_started(),
        }
    }

    pub fn players(&self) -> &[Player] {
        self.machine.roster().players()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.machine.roster().get(id)
    }

    pub fn current_phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn current_round(&self) -> u8 {
        self.machine.current_round()
    }

    pub fn hands_in_round(&self) -> u8 {
        self.machine.hands_in_round()
    }

    pub fn hands_for_round(&self, round: u8) -> Result<u8, DomainError> {
        self.machine.rounds().hands_for_round(round)
    }

    pub fn is_game_complete(&self) -> bool {
        self.machine.is_game_complete()
    }

    pub fn can_start(&self) -> bool {
        self.machine.roster().can_start()
    }

    pub fn all_bids_submitted(&self) -> bool {
        self.machine.all_bids_submitted()
    }

    pub fn all_players_scored(&self) -> bool {
        self.machine.all_players_scored()
    }

    pub fn bid_for(&self, player_id: PlayerId) -> Option<i32> {
        self.machine.bid_for(player_id)
    }

    pub fn progress(&self) -> RoundProgress {
        self.machine.rounds().progress()
    }

    pub fn score_history(&self, player_id: PlayerId) -> Result<&[ScoreEntry], DomainError> {
        self.require_player(player_id)?;
        Ok(self.machine.history(player_id))
    }

    pub fn round_breakdown(&self, player_id: PlayerId) -> Result<Vec<RoundLine>, DomainError> {
        self.require_player(player_id)?;
        Ok(round_breakdown(self.machine.history(player_id)))
    }

    pub fn standings(&self) -> Vec<Standing> {
        compute_standings(self.players())
    }

    /// Everyone sharing the top score, once the session is complete.
    pub fn winners(&self) -> Vec<Standing> {
        if !self.is_game_complete() {
            return Vec::new();
        }
        self.standings().into_iter().filter(|s| s.rank == 1).collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_machine(&self.machine)
    }

    fn require_player(&self, player_id: PlayerId) -> Result<(), DomainError> {
        if self.machine.roster().contains(player_id) {
            Ok(())
        } else {
            Err(DomainError::NotFound(player_id))
        }
    }
}
