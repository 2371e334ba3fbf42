//! Exhaustive minimax search.
//!
//! ## Overview
//!
//! - **`minimax`**: value of a state under optimal play, with
//!   depth-penalized terminal scores (fast wins, slow losses)
//! - **`decide`**: best move for the side to move; ties go to the first
//!   move in `legal_moves()` order
//! - **`MinimaxSearch`**: the same operations with a configurable traversal
//!   and per-call statistics
//!
//! No alpha-beta, no move ordering, no transposition table: every branch is
//! explored, so only small game trees are tractable.
//!
//! ## Usage
//!
//! ```rust
//! use minimax_engine::core::{GameState, Player};
//! use minimax_engine::games::tictactoe::{Square, TicTacToe};
//! use minimax_engine::search::decide;
//!
//! let mut state = TicTacToe::new();
//! let mut player = Player::Max;
//! // Open a game by hand, then let the search take over
//! for (row, col) in [(1, 1), (0, 0), (0, 2), (2, 0), (1, 0)] {
//!     state = state.apply(&Square::new(row, col)).unwrap();
//!     player = player.opponent();
//! }
//! let best = decide(&state, player).unwrap();
//! assert!(state.legal_moves().contains(&best));
//! ```

pub mod decide;
pub mod engine;
pub mod minimax;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod stats;

pub use decide::{decide, score_moves, ScoredMove};
pub use engine::MinimaxSearch;
pub use minimax::minimax;
pub use stats::SearchStats;
