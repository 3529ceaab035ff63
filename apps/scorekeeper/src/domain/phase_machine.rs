//! Phase state machine: the single mutation authority for a session.
//!
//! Every mutation is checked in full before anything changes, so a failed
//! call leaves the phase, roster, round tracker and recorded bids/scores
//! exactly as they were.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::GameRules;
use crate::domain::roster::Roster;
use crate::domain::round_tracker::RoundTracker;
use crate::domain::rules::valid_bid_range;
use crate::domain::scoring::{bonus_eligible, compute_round_score, validate_tricks};
use crate::domain::state::{Phase, Player, PlayerId, ScoreEntry};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseMachine {
    phase: Phase,
    roster: Roster,
    rounds: RoundTracker,
    /// Bids for the current round; cleared when a new round begins.
    bids: BTreeMap<PlayerId, i32>,
    /// Players with a score entry for the current round.
    scored: BTreeSet<PlayerId>,
    history: BTreeMap<PlayerId, Vec<ScoreEntry>>,
}

impl PhaseMachine {
    /// `rules` must already be validated.
    pub(crate) fn new(rules: GameRules) -> Self {
        Self {
            phase: Phase::Setup,
            roster: Roster::new(rules),
            rounds: RoundTracker::new(rules.max_rounds),
            bids: BTreeMap::new(),
            scored: BTreeSet::new(),
            history: BTreeMap::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn rounds(&self) -> &RoundTracker {
        &self.rounds
    }

    pub fn add_player(&mut self, name: &str) -> Result<Player, DomainError> {
        self.ensure_not_terminal("add_player")?;
        self.roster.add_player(name)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, DomainError> {
        self.ensure_not_terminal("remove_player")?;
        let removed = self.roster.remove_player(id)?;
        self.history.remove(&id);
        Ok(removed)
    }

    /// Apply a phase change together with its guard side effects.
    pub fn transition(&mut self, target: Phase) -> Result<Phase, DomainError> {
        if !self.phase.can_transition_to(target) {
            return Err(self.invalid_transition(target));
        }

        match (self.phase, target) {
            (Phase::Setup, Phase::Bidding) => {
                if self.roster.is_started() {
                    if !self.rounds.can_start_round() {
                        return Err(self.invalid_transition(target));
                    }
                } else {
                    // Fails without side effects when the count is out of range.
                    self.roster.start()?;
                }
                self.bids.clear();
                self.scored.clear();
            }
            (Phase::Bidding, Phase::Scoring) => {
                if !self.all_bids_submitted() {
                    let missing = self.roster.len() - self.bids.len();
                    return Err(DomainError::validation(
                        ValidationKind::IncompleteBids,
                        format!("{missing} player(s) have not bid in round {}", self.current_round()),
                    ));
                }
            }
            (Phase::Scoring, Phase::Setup) | (Phase::Scoring, Phase::Complete) => {
                if !self.all_players_scored() {
                    let missing = self.roster.len() - self.scored.len();
                    return Err(DomainError::validation(
                        ValidationKind::IncompleteScores,
                        format!(
                            "{missing} player(s) have not been scored in round {}",
                            self.current_round()
                        ),
                    ));
                }
                let next_round_follows = target == Phase::Setup;
                if self.rounds.has_next_round() != next_round_follows {
                    return Err(self.invalid_transition(target));
                }
                let advanced = self.rounds.complete_current_round_and_advance();
                debug_assert_eq!(advanced, next_round_follows);
                self.bids.clear();
                self.scored.clear();
            }
            _ => return Err(self.invalid_transition(target)),
        }

        self.phase = target;
        Ok(target)
    }

    /// Move to the single legal successor of the current phase.
    pub fn advance_phase(&mut self) -> Result<Phase, DomainError> {
        let target = match self.phase {
            Phase::Setup => Phase::Bidding,
            Phase::Bidding => Phase::Scoring,
            Phase::Scoring if self.rounds.has_next_round() => Phase::Setup,
            Phase::Scoring => Phase::Complete,
            Phase::Complete => return Err(DomainError::phase("advance_phase", self.phase)),
        };
        self.transition(target)
    }

    /// Store or overwrite a bid for the current round.
    ///
    /// Returns the previous bid when this is a resubmission.
    pub fn record_bid(&mut self, player_id: PlayerId, bid: i32) -> Result<Option<i32>, DomainError> {
        if self.phase != Phase::Bidding {
            return Err(DomainError::phase("record_bid", self.phase));
        }
        if !self.roster.contains(player_id) {
            return Err(DomainError::NotFound(player_id));
        }
        let hands = self.hands_in_round();
        if !valid_bid_range(hands).contains(&bid) {
            return Err(DomainError::BidRange { bid, max: hands });
        }
        Ok(self.bids.insert(player_id, bid))
    }

    /// Score one player for the current round.
    pub fn record_score(
        &mut self,
        player_id: PlayerId,
        tricks_taken: i32,
        bonus_points: i32,
    ) -> Result<ScoreEntry, DomainError> {
        if self.phase != Phase::Scoring {
            return Err(DomainError::phase("record_score", self.phase));
        }
        if !self.roster.contains(player_id) {
            return Err(DomainError::NotFound(player_id));
        }
        let round = self.current_round();
        if self.scored.contains(&player_id) {
            return Err(DomainError::validation(
                ValidationKind::AlreadyScored,
                format!("player {player_id} already scored in round {round}"),
            ));
        }
        let bid = *self.bids.get(&player_id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MissingBid,
                format!("player {player_id} has no bid for round {round}"),
            )
        })?;
        validate_tricks(tricks_taken, self.hands_in_round())?;
        if bonus_points < 0 {
            return Err(DomainError::invalid_input(format!(
                "bonus points must be non-negative, got {bonus_points}"
            )));
        }
        if bonus_points != 0 && !bonus_eligible(bid, tricks_taken) {
            return Err(DomainError::BonusNotAllowed {
                bid,
                tricks_taken,
                bonus: bonus_points,
            });
        }
        let round_score = compute_round_score(bid, tricks_taken, bonus_points)?;

        self.roster.credit(player_id, round_score)?;
        let entry = ScoreEntry {
            player_id,
            round,
            bid,
            tricks_taken,
            bonus_points,
            round_score,
        };
        self.history.entry(player_id).or_default().push(entry);
        self.scored.insert(player_id);
        Ok(entry)
    }

    pub fn all_bids_submitted(&self) -> bool {
        !self.roster.is_empty() && self.roster.players().iter().all(|p| self.bids.contains_key(&p.id))
    }

    pub fn all_players_scored(&self) -> bool {
        !self.roster.is_empty() && self.scored.len() == self.roster.len()
    }

    pub fn players_scored(&self) -> usize {
        self.scored.len()
    }

    pub fn has_scored(&self, player_id: PlayerId) -> bool {
        self.scored.contains(&player_id)
    }

    pub fn bid_for(&self, player_id: PlayerId) -> Option<i32> {
        self.bids.get(&player_id).copied()
    }

    pub fn bids(&self) -> &BTreeMap<PlayerId, i32> {
        &self.bids
    }

    pub fn history(&self, player_id: PlayerId) -> &[ScoreEntry] {
        self.history.get(&player_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn current_round(&self) -> u8 {
        self.rounds.current_round()
    }

    pub fn hands_in_round(&self) -> u8 {
        self.rounds.hands_in_current_round()
    }

    pub fn is_game_complete(&self) -> bool {
        self.rounds.is_game_complete()
    }

    fn ensure_not_terminal(&self, operation: &'static str) -> Result<(), DomainError> {
        if self.phase.is_terminal() {
            return Err(DomainError::phase(operation, self.phase));
        }
        Ok(())
    }

    fn invalid_transition(&self, to: Phase) -> DomainError {
        DomainError::InvalidTransition {
            from: self.phase,
            to,
        }
    }
}
