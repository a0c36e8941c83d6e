//! Error codes surfaced to the UI shell.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup
    /// Fewer than the minimum number of players selected
    TooFewPlayers,
    /// More than the maximum number of players selected
    TooManyPlayers,
    /// A player name is empty
    EmptyName,
    /// Two active players share a name (case-insensitive)
    DuplicateName,
    /// Configuration value rejected
    InvalidConfig,

    // Round entry
    /// Aggregate call total outside the accepted band
    CallTotalOutOfRange,
    /// A player has no call
    MissingCall,
    /// A player has no scored value
    MissingScored,
    /// Scored total does not equal the number of leads
    ScoredTotalMismatch,
    /// Scored total exceeds the locked call total
    ScoredExceedsCallTotal,
    /// Calls must be locked first
    CallsNotLocked,
    /// Calls are already locked
    CallsLocked,
    /// Action not valid in the current phase
    PhaseMismatch,

    // Lookup
    /// Unknown player id
    PlayerNotFound,

    // Share
    /// Every share target failed or none is available
    ShareFailed,

    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TooFewPlayers => "TOO_FEW_PLAYERS",
            Self::TooManyPlayers => "TOO_MANY_PLAYERS",
            Self::EmptyName => "EMPTY_NAME",
            Self::DuplicateName => "DUPLICATE_NAME",
            Self::InvalidConfig => "INVALID_CONFIG",

            Self::CallTotalOutOfRange => "CALL_TOTAL_OUT_OF_RANGE",
            Self::MissingCall => "MISSING_CALL",
            Self::MissingScored => "MISSING_SCORED",
            Self::ScoredTotalMismatch => "SCORED_TOTAL_MISMATCH",
            Self::ScoredExceedsCallTotal => "SCORED_EXCEEDS_CALL_TOTAL",
            Self::CallsNotLocked => "CALLS_NOT_LOCKED",
            Self::CallsLocked => "CALLS_LOCKED",
            Self::PhaseMismatch => "PHASE_MISMATCH",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::ShareFailed => "SHARE_FAILED",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Map a domain error onto its stable code.
    pub fn from_domain(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::TooFewPlayers => Self::TooFewPlayers,
                ValidationKind::TooManyPlayers => Self::TooManyPlayers,
                ValidationKind::EmptyName => Self::EmptyName,
                ValidationKind::DuplicateName => Self::DuplicateName,
                ValidationKind::CallTotalOutOfRange { .. } => Self::CallTotalOutOfRange,
                ValidationKind::MissingCall => Self::MissingCall,
                ValidationKind::MissingScored => Self::MissingScored,
                ValidationKind::ScoredTotalMismatch { .. } => Self::ScoredTotalMismatch,
                ValidationKind::ScoredExceedsCallTotal { .. } => Self::ScoredExceedsCallTotal,
                ValidationKind::CallsNotLocked => Self::CallsNotLocked,
                ValidationKind::CallsLocked => Self::CallsLocked,
                ValidationKind::PhaseMismatch => Self::PhaseMismatch,
                ValidationKind::InvalidConfig => Self::InvalidConfig,
            },
            DomainError::NotFound(NotFoundKind::Player(_), _) => Self::PlayerNotFound,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
