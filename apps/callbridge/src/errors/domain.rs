//! Domain-level error type used by the scoring engine and session transitions.
//!
//! Every variant is a recoverable input validation failure. A transition that
//! returns an error leaves the session exactly as it was.

use thiserror::Error;

use crate::domain::state::PlayerId;

/// Why a validation gate rejected an action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Removing a player would leave fewer than the minimum.
    TooFewPlayers,
    /// Adding a player would exceed the maximum.
    TooManyPlayers,
    EmptyName,
    DuplicateName,
    /// Aggregate call total is outside the accepted band.
    CallTotalOutOfRange { min: u16, max: u16, total: u16 },
    MissingCall,
    MissingScored,
    /// Aggregate scored total does not account for every lead.
    ScoredTotalMismatch { expected: u16, total: u16 },
    /// Aggregate scored total exceeds the locked call total.
    ScoredExceedsCallTotal { call_total: u16, total: u16 },
    CallsNotLocked,
    CallsLocked,
    PhaseMismatch,
    InvalidConfig,
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player(PlayerId),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or game rule violation
    #[error("validation error: {1}")]
    Validation(ValidationKind, String),
    /// Missing entity in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn player_not_found(player_id: PlayerId) -> Self {
        Self::not_found(
            NotFoundKind::Player(player_id),
            format!("No player with id {player_id}"),
        )
    }

    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            Self::Validation(kind, _) => Some(kind),
            Self::NotFound(..) => None,
        }
    }

    /// Bounds of the call band when a lock attempt was rejected for its total.
    pub fn call_bounds(&self) -> Option<(u16, u16)> {
        match self.validation_kind() {
            Some(ValidationKind::CallTotalOutOfRange { min, max, .. }) => Some((*min, *max)),
            _ => None,
        }
    }
}
