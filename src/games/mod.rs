//! Bundled games implementing `GameState`.

pub mod nim;
pub mod tictactoe;
