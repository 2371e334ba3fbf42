//! Root-parallel move selection (feature `parallel`).
//!
//! Sibling subtrees share nothing, so each root move is evaluated in its own
//! rayon task. Scores are collected back in `legal_moves()` order before the
//! first-max scan, so the chosen move is identical to `decide`.

use std::time::Instant;

use rayon::prelude::*;

use crate::core::{GameState, Player};
use crate::error::{Error, Result};

use super::decide::{select_best, ScoredMove};
use super::engine::MinimaxSearch;
use super::minimax::evaluate;
use super::stats::SearchStats;

impl MinimaxSearch {
    /// `score_moves` with one task per root move.
    pub fn score_moves_parallel<S>(
        &mut self,
        state: &S,
        player: Player,
    ) -> Result<Vec<ScoredMove<S::Move>>>
    where
        S: GameState + Send + Sync,
        S::Move: Send + Sync,
    {
        let start = Instant::now();
        self.stats.reset();

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMove);
        }

        let traversal = self.config.traversal;
        let branches: Vec<Result<(ScoredMove<S::Move>, SearchStats)>> = moves
            .into_vec()
            .into_par_iter()
            .map(|mv| {
                let mut stats = SearchStats::new();
                let child = state.apply(&mv)?;
                let value = evaluate(&child, player.opponent(), 1, traversal, &mut stats)?;
                let score = player.canonicalize(value);
                Ok((ScoredMove { mv, score }, stats))
            })
            .collect();

        let mut scored = Vec::with_capacity(branches.len());
        for branch in branches {
            let (entry, stats) = branch?;
            self.stats.merge(&stats);
            scored.push(entry);
        }

        self.stats.set_elapsed(start.elapsed());
        Ok(scored)
    }

    /// `decide` with one task per root move.
    pub fn decide_parallel<S>(&mut self, state: &S, player: Player) -> Result<S::Move>
    where
        S: GameState + Send + Sync,
        S::Move: Send + Sync,
    {
        let scored = self.score_moves_parallel(state, player)?;
        let best = select_best(scored).ok_or(Error::NoLegalMove)?;

        log::debug!(
            "{player} selects {:?} (score {}) in parallel, {} nodes",
            best.mv,
            best.score,
            self.stats.nodes
        );
        Ok(best.mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchConfig;
    use crate::games::tictactoe::TicTacToe;

    #[test]
    fn test_parallel_matches_sequential() {
        let state = TicTacToe::from_rows([[1, 0, 0], [0, -1, 0], [0, 0, 0]], Player::Max).unwrap();
        let mut sequential = MinimaxSearch::new(SearchConfig::default());
        let mut parallel = MinimaxSearch::new(SearchConfig::default());

        assert_eq!(
            sequential.score_moves(&state, Player::Max).unwrap(),
            parallel.score_moves_parallel(&state, Player::Max).unwrap()
        );
        assert_eq!(sequential.stats().nodes, parallel.stats().nodes);
        assert_eq!(
            sequential.decide(&state, Player::Max).unwrap(),
            parallel.decide_parallel(&state, Player::Max).unwrap()
        );
    }
}
