//! # minimax-engine
//!
//! Exhaustive minimax search for finite, alternating, two-player, zero-sum
//! games with perfect information.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The search only sees the `GameState` contract:
//!    legal moves, successor states, terminal status and terminal score.
//!
//! 2. **Immutable States**: Every move produces a new state. Branches never
//!    share or mutate a state, and nothing outlives the call that explored it.
//!
//! 3. **Deterministic**: No randomness in the search. Ties go to the first
//!    move in `legal_moves()` order, so self-play always replays the same game.
//!
//! ## Scoring
//!
//! Terminal scores are depth-penalized: `WIN - depth` for a maximizer win,
//! `depth - WIN` for a minimizer win, `0` for a draw. Faster wins and slower
//! losses are preferred among otherwise equal outcomes.
//!
//! ## Modules
//!
//! - `core`: Players, the `GameState` trait, configuration, RNG
//! - `search`: `minimax`, `decide` and the `MinimaxSearch` context
//! - `games`: Tic-tac-toe and Nim
//! - `play`: Strategies and full-game drivers
//! - `error`: Error type shared by all modules

pub mod core;
pub mod error;
pub mod games;
pub mod play;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    depth_penalized, GameRng, GameState, MoveList, Player, SearchConfig, Traversal,
};

pub use crate::error::{Error, Result};

pub use crate::search::{decide, minimax, score_moves, MinimaxSearch, ScoredMove, SearchStats};

pub use crate::play::{
    play_game, self_play, GameRecord, MinimaxStrategy, Outcome, PlayConfig, PlayedMove,
    RandomStrategy, Strategy,
};
