//! Core types: players, the game state contract, configuration, RNG.
//!
//! This module contains the game-agnostic building blocks. Games plug in by
//! implementing `GameState`; the search engine never sees their rules.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{SearchConfig, Traversal};
pub use player::Player;
pub use rng::GameRng;
pub use state::{depth_penalized, GameState, MoveList};
