//! Search context with configuration and statistics.

use std::time::Instant;

use crate::core::{GameState, Player, SearchConfig};
use crate::error::{Error, Result};

use super::decide::{score_moves_with, select_best, ScoredMove};
use super::minimax::evaluate;
use super::stats::SearchStats;

/// Minimax search context.
///
/// Owns the configuration and the statistics of the most recent call.
/// No tree is kept between calls: every call is a fresh exhaustive walk.
///
/// ```
/// use minimax_engine::core::{Player, SearchConfig, Traversal};
/// use minimax_engine::games::tictactoe::TicTacToe;
/// use minimax_engine::search::MinimaxSearch;
///
/// let mut search = MinimaxSearch::new(SearchConfig::new().with_traversal(Traversal::WorkStack));
/// let state = TicTacToe::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]], Player::Max).unwrap();
/// let value = search.evaluate(&state, Player::Max, 0).unwrap();
///
/// assert_eq!(value, 9.0);
/// assert!(search.stats().nodes > 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    /// Search configuration.
    pub(super) config: SearchConfig,

    /// Statistics of the last call.
    pub(super) stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Minimax value of `state` with `player` to move, `depth` moves in.
    pub fn evaluate<S: GameState>(&mut self, state: &S, player: Player, depth: u32) -> Result<f64> {
        let start = Instant::now();
        self.stats.reset();

        let result = evaluate(state, player, depth, self.config.traversal, &mut self.stats);

        self.stats.set_elapsed(start.elapsed());
        result
    }

    /// Canonical score of every legal move, in `legal_moves()` order.
    pub fn score_moves<S: GameState>(
        &mut self,
        state: &S,
        player: Player,
    ) -> Result<Vec<ScoredMove<S::Move>>> {
        let start = Instant::now();
        self.stats.reset();

        let result = score_moves_with(state, player, self.config.traversal, &mut self.stats);

        self.stats.set_elapsed(start.elapsed());
        result
    }

    /// Best move for `player`; the first of equally scored moves.
    pub fn decide<S: GameState>(&mut self, state: &S, player: Player) -> Result<S::Move> {
        let scored = self.score_moves(state, player)?;
        let candidates = scored.len();
        let best = select_best(scored).ok_or(Error::NoLegalMove)?;

        log::debug!(
            "{player} selects {:?} (score {}) from {candidates} candidates, {} nodes in {}us",
            best.mv,
            best.score,
            self.stats.nodes,
            self.stats.time_us
        );
        Ok(best.mv)
    }

    /// Get search statistics of the last call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
