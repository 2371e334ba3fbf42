//! Move-choosing strategies for driving full games.

use crate::core::{GameRng, GameState, Player, SearchConfig};
use crate::error::{Error, Result};
use crate::search::MinimaxSearch;

/// Something that picks a move for the side to act.
pub trait Strategy<S: GameState> {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Choose a legal move for `player` in `state`.
    fn choose(&mut self, state: &S, player: Player) -> Result<S::Move>;
}

/// Perfect play via exhaustive minimax.
#[derive(Clone, Debug, Default)]
pub struct MinimaxStrategy {
    search: MinimaxSearch,
}

impl MinimaxStrategy {
    /// Create a strategy with the given search configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: MinimaxSearch::new(config),
        }
    }

    /// The underlying search context (statistics of the last move).
    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }
}

impl<S: GameState> Strategy<S> for MinimaxStrategy {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose(&mut self, state: &S, player: Player) -> Result<S::Move> {
        self.search.decide(state, player)
    }
}

/// Uniformly random legal moves from a seeded stream.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a strategy with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a strategy drawing from an existing stream.
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<S: GameState> Strategy<S> for RandomStrategy {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose(&mut self, state: &S, _player: Player) -> Result<S::Move> {
        let moves = state.legal_moves();
        self.rng.choose(&moves).cloned().ok_or(Error::NoLegalMove)
    }
}
