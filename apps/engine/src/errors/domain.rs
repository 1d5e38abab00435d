//! Domain-level error type shared by every engine operation.
//!
//! Errors fall into three families:
//! - configuration problems, raised before a match starts
//! - invalid actions, raised by `step` and recoverable by the caller
//! - state errors, raised when the caller drives the match out of order

use thiserror::Error;

/// Configuration error kinds (fatal, raised at init time)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigKind {
    PlayerCount,
    TricksToPlay,
    Aggressiveness,
    InvalidCard,
    MissingForecastTable,
    InvalidForecastTable,
    InvalidActionSpace,
    Environment,
}

/// Invalid action kinds (recoverable, raised at step time)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionKind {
    ParseCard,
    CardNotInHand,
    OutOfTurn,
    MustFollowSuit,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Match or resource configuration that cannot be played
    #[error("configuration error {0:?}: {1}")]
    Config(ConfigKind, String),
    /// Action rejected for the seat due to act
    #[error("invalid action {0:?}: {1}")]
    InvalidAction(ActionKind, String),
    /// Operation called in a state that does not allow it
    #[error("state error: {0}")]
    State(String),
}

impl DomainError {
    pub fn config(kind: ConfigKind, detail: impl Into<String>) -> Self {
        Self::Config(kind, detail.into())
    }

    pub fn invalid_action(kind: ActionKind, detail: impl Into<String>) -> Self {
        Self::InvalidAction(kind, detail.into())
    }

    pub fn state(detail: impl Into<String>) -> Self {
        Self::State(detail.into())
    }

    /// True for errors the caller can recover from by choosing another action.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidAction(..))
    }
}
