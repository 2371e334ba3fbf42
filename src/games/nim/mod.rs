//! Single-pile Nim (the subtraction game).
//!
//! Players alternately take 1 to `max_take` stones; whoever takes the last
//! stone wins. A second `GameState` with a different move type and board,
//! solved by the same search.

mod game;

pub use game::{Nim, Take};
