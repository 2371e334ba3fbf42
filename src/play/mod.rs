//! Playing complete games.
//!
//! ## Overview
//!
//! - **Strategy**: picks a move for the side to act (`MinimaxStrategy`,
//!   `RandomStrategy`)
//! - **play_game**: alternates two strategies until the state is terminal
//! - **self_play**: minimax on both sides; the same start always replays
//!   the same game
//!
//! ## Usage
//!
//! ```rust
//! use minimax_engine::core::Player;
//! use minimax_engine::games::nim::Nim;
//! use minimax_engine::play::{self_play, Outcome, PlayConfig};
//!
//! // Multiples of four are lost for the side to move
//! let start = Nim::new(8, 3).unwrap();
//! let record = self_play(start, Player::Max, &PlayConfig::default()).unwrap();
//! assert_eq!(record.outcome, Outcome::Winner(Player::Min));
//! ```

mod game_loop;
mod strategy;

pub use game_loop::{play_game, self_play, GameRecord, Outcome, PlayConfig, PlayedMove};
pub use strategy::{MinimaxStrategy, RandomStrategy, Strategy};
