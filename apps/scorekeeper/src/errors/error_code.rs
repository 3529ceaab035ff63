//! Error codes for the scorekeeper engine.
//!
//! All error codes are SCREAMING_SNAKE_CASE. A collaborator that exposes the
//! engine over HTTP should use these strings verbatim in its error bodies.

use core::fmt;

/// Centralized error codes, one per `DomainError` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input validation
    /// Malformed input shape or range
    ValidationError,
    /// Non-numeric or negative numeric input
    InvalidInput,
    /// Bid outside the round's range
    BidRange,
    /// Bonus points submitted with a missed bid
    BonusNotAllowed,
    /// Round number outside the schedule
    RoundOutOfRange,

    // Roster
    /// Player name already taken (case-insensitive)
    DuplicateName,
    /// Roster is at capacity
    Capacity,
    /// Roster is locked because the session started
    SessionStarted,
    /// Player count outside the allowed range at start
    InvalidPlayerCount,
    /// Player not found
    PlayerNotFound,

    // Phase machine
    /// Transition not in the current phase's allowed set
    InvalidTransition,
    /// Operation not allowed in the current phase
    PhaseMismatch,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidInput => "INVALID_INPUT",
            Self::BidRange => "BID_RANGE",
            Self::BonusNotAllowed => "BONUS_NOT_ALLOWED",
            Self::RoundOutOfRange => "ROUND_OUT_OF_RANGE",

            Self::DuplicateName => "DUPLICATE_NAME",
            Self::Capacity => "CAPACITY",
            Self::SessionStarted => "SESSION_STARTED",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::PhaseMismatch => "PHASE_MISMATCH",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
