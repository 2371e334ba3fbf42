//! Game state contract for searchable games.
//!
//! Games implement `GameState` to make themselves searchable:
//! - Which moves are legal
//! - How a move produces the successor state
//! - When the game is over and how it scored
//!
//! The search engine calls into `GameState` but never interprets
//! game-specific concepts directly.

use smallvec::SmallVec;

use crate::error::Result;

use super::Player;

/// Ordered list of legal moves.
///
/// Inline for up to 9 moves (a 3x3 board), spills to the heap beyond that.
pub type MoveList<M> = SmallVec<[M; 9]>;

/// A snapshot of a finite, alternating, two-player, zero-sum game.
///
/// States are immutable values: `apply` returns a new state and leaves the
/// receiver untouched, so search branches never observe each other.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Must return the same order for identical states.
///   Move selection breaks ties by this order.
/// - `apply`: Plays the move for the player whose turn the state records.
/// - `is_terminal`: True once a player has won or no moves remain.
/// - `terminal_score`: Only meaningful when `is_terminal()` is true.
/// - `side_to_move`: Optional. States that record the turn report it so
///   drivers can reject a mismatched `player` argument.
pub trait GameState: Clone {
    /// Game-specific move descriptor.
    ///
    /// Only meaningful relative to the state that produced it.
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// Enumerate every move available from this position.
    ///
    /// An empty list is legal and signals that no moves remain.
    fn legal_moves(&self) -> MoveList<Self::Move>;

    /// Produce the successor state after `mv` is played.
    ///
    /// Returns `Error::IllegalMove` for a move not drawn from
    /// `legal_moves()`. That is a caller bug, not a recoverable condition.
    fn apply(&self, mv: &Self::Move) -> Result<Self>;

    /// Check if the game is over.
    fn is_terminal(&self) -> bool;

    /// Score of a finished game reached after `depth` moves.
    ///
    /// Contract: `WIN - depth` if the maximizer won, `depth - WIN` if the
    /// minimizer won, `0` for a draw. `WIN` must exceed every reachable
    /// depth so faster wins always outscore slower ones and any win
    /// outscores any draw or loss.
    fn terminal_score(&self, depth: u32) -> f64;

    /// The player `apply` moves for, if the state records it.
    fn side_to_move(&self) -> Option<Player> {
        None
    }
}

/// Depth-penalized score for a finished game.
///
/// Shared helper for `GameState::terminal_score` implementations.
///
/// ```
/// use minimax_engine::core::{depth_penalized, Player};
///
/// assert_eq!(depth_penalized(Some(Player::Max), 10.0, 3), 7.0);
/// assert_eq!(depth_penalized(Some(Player::Min), 10.0, 3), -7.0);
/// assert_eq!(depth_penalized(None, 10.0, 3), 0.0);
/// ```
#[must_use]
pub fn depth_penalized(winner: Option<Player>, win_magnitude: f64, depth: u32) -> f64 {
    match winner {
        Some(player) => player.canonicalize(win_magnitude - f64::from(depth)),
        None => 0.0,
    }
}
