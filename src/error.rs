//! Error types for the search engine and the bundled games.
//!
//! Every variant is a local invariant violation: none of them can be caused
//! by timing or resource exhaustion if the `GameState` contract is honored.
//! They propagate to the caller immediately and are never retried.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// `apply` was called with a move that is not legal in the state.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: String, reason: String },

    /// A non-terminal state produced no legal moves.
    #[error("non-terminal state at depth {depth} has no legal moves")]
    EmptyChildSet { depth: u32 },

    /// `decide` was called on a state with no legal moves.
    #[error("no legal move to choose from")]
    NoLegalMove,

    /// A position could not be constructed from the given cells.
    #[error("invalid position: {reason}")]
    InvalidPosition { reason: String },

    /// A played game did not finish within the configured number of moves.
    #[error("game did not finish within {limit} moves")]
    MoveLimitExceeded { limit: usize },
}

impl Error {
    /// Build an `IllegalMove` error from any debuggable move.
    pub fn illegal_move(mv: &impl std::fmt::Debug, reason: impl Into<String>) -> Self {
        Error::IllegalMove {
            mv: format!("{mv:?}"),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
