//! Error types surfaced by the game core.

use thiserror::Error;

use crate::game::Phase;

/// Errors produced by the codec, the catalog and the state machine.
///
/// Scoring never fails: unparsable input to the scoring helpers scores 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A color string or channel value that is not a valid `#RRGGBB` color.
    ///
    /// The presentation layer should re-prompt the player.
    #[error("invalid color '{input}': expected 6 hex digits (#RRGGBB)")]
    InvalidFormat {
        /// The rejected input, as typed
        input: String,
    },

    /// A transition was requested from a phase that does not allow it.
    #[error("cannot {action} while in the {phase} phase")]
    InvalidTransition {
        /// Phase the machine was in when the call arrived
        phase: Phase,
        /// Name of the rejected transition
        action: &'static str,
    },

    /// The named-color catalog violates its contract.
    #[error("invalid color catalog: {0}")]
    Catalog(String),
}

impl GameError {
    /// Builds an [`GameError::InvalidFormat`] for the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Returns true if the player can recover by entering a new value.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}

/// Result alias for fallible core operations.
pub type GameResult<T> = Result<T, GameError>;
