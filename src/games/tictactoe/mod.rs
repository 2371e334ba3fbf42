//! Tic-tac-toe on a 3x3 board.
//!
//! - Cells are `0` (empty), `+1` (Max) or `-1` (Min)
//! - A move is a `Square`; legal moves are the empty squares in row-major order
//! - Three in a row wins; a full board without a line is a draw
//!
//! The full game tree is small enough for exhaustive minimax: perfect play
//! from the empty board is a draw.

mod game;

pub use game::{Square, TicTacToe, CELLS, LINES, SIZE, WIN_MAGNITUDE};
