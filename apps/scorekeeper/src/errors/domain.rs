//! Domain-level error type returned by every engine operation.
//!
//! This error type is transport- and storage-agnostic. Collaborators that
//! render errors (HTTP handlers, UI layers) should translate it through
//! [`DomainError::code`] rather than matching on display strings.

use thiserror::Error;

use crate::domain::state::{Phase, PlayerId};
use crate::errors::ErrorCode;

/// Sub-kinds of `DomainError::Validation` (extend as needed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Player name fails the trim/length rule.
    PlayerName,
    /// Roster mutation attempted after the session started.
    RosterLocked,
    /// Tricks taken outside `0..=hands_in_round`.
    TricksTaken,
    /// Player already has a score entry for the current round.
    AlreadyScored,
    /// Scoring attempted for a player with no recorded bid.
    MissingBid,
    /// Bidding -> Scoring requested before every player bid.
    IncompleteBids,
    /// Scoring -> next requested before every player was scored.
    IncompleteScores,
    /// Rule set is internally inconsistent.
    Rules,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed input shape or range, or a business rule violation
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),

    #[error("a player named '{0}' already exists")]
    DuplicateName(String),

    #[error("roster is full ({max} players)")]
    Capacity { max: usize },

    #[error("session already started; the roster is locked")]
    SessionStarted,

    #[error("player {0} not found")]
    NotFound(PlayerId),

    #[error("between {min} and {max} players are required to start, have {count}")]
    InvalidPlayerCount {
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: Phase, to: Phase },

    /// Operation invalid for the current phase
    #[error("{operation} is not allowed during the {phase} phase")]
    Phase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("bid {bid} outside 0..={max} for this round")]
    BidRange { bid: i32, max: u8 },

    #[error(
        "bonus points ({bonus}) are only allowed when the bid ({bid}) equals tricks taken ({tricks_taken})"
    )]
    BonusNotAllowed {
        bid: i32,
        tricks_taken: i32,
        bonus: i32,
    },

    #[error("round {round} outside 1..={max}")]
    RoundOutOfRange { round: u8, max: u8 },

    /// Non-numeric or negative input reaching the scoring engine or parser
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput(detail.into())
    }

    pub fn phase(operation: &'static str, phase: Phase) -> Self {
        Self::Phase { operation, phase }
    }

    /// Stable machine-readable code for this error.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(..) => ErrorCode::ValidationError,
            Self::DuplicateName(_) => ErrorCode::DuplicateName,
            Self::Capacity { .. } => ErrorCode::Capacity,
            Self::SessionStarted => ErrorCode::SessionStarted,
            Self::NotFound(_) => ErrorCode::PlayerNotFound,
            Self::InvalidPlayerCount { .. } => ErrorCode::InvalidPlayerCount,
            Self::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            Self::Phase { .. } => ErrorCode::PhaseMismatch,
            Self::BidRange { .. } => ErrorCode::BidRange,
            Self::BonusNotAllowed { .. } => ErrorCode::BonusNotAllowed,
            Self::RoundOutOfRange { .. } => ErrorCode::RoundOutOfRange,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
        }
    }
}
