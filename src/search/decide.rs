//! Move selection on top of minimax.
//!
//! Each legal move is scored by evaluating its successor with the opponent
//! to move at depth 1, then multiplying by the mover's sign. The highest
//! canonical score wins; ties go to the first move in `legal_moves()` order,
//! which keeps self-play reproducible.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player, Traversal};
use crate::error::{Error, Result};

use super::minimax::evaluate;
use super::stats::SearchStats;

/// A legal move paired with its canonical score.
///
/// Higher is better for the player who would make the move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredMove<M> {
    /// The move.
    pub mv: M,
    /// `player.sign() * minimax(successor, opponent, 1)`.
    pub score: f64,
}

/// Best move for `player` in `state`.
///
/// ## Errors
///
/// - `Error::NoLegalMove` if `state` has no legal moves.
/// - Any error raised while evaluating a successor.
///
/// ```
/// use minimax_engine::core::Player;
/// use minimax_engine::games::tictactoe::{Square, TicTacToe};
/// use minimax_engine::search::decide;
///
/// let state = TicTacToe::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]], Player::Max).unwrap();
/// assert_eq!(decide(&state, Player::Max).unwrap(), Square::new(0, 2));
/// ```
pub fn decide<S: GameState>(state: &S, player: Player) -> Result<S::Move> {
    let mut stats = SearchStats::new();
    let scored = score_moves_with(state, player, Traversal::Recursive, &mut stats)?;
    select_best(scored)
        .map(|best| best.mv)
        .ok_or(Error::NoLegalMove)
}

/// Canonical score of every legal move, in `legal_moves()` order.
///
/// This is the table `decide` picks from.
pub fn score_moves<S: GameState>(state: &S, player: Player) -> Result<Vec<ScoredMove<S::Move>>> {
    let mut stats = SearchStats::new();
    score_moves_with(state, player, Traversal::Recursive, &mut stats)
}

pub(crate) fn score_moves_with<S: GameState>(
    state: &S,
    player: Player,
    traversal: Traversal,
    stats: &mut SearchStats,
) -> Result<Vec<ScoredMove<S::Move>>> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Err(Error::NoLegalMove);
    }

    moves
        .into_iter()
        .map(|mv| {
            let child = state.apply(&mv)?;
            let value = evaluate(&child, player.opponent(), 1, traversal, stats)?;
            let score = player.canonicalize(value);
            log::trace!("{player} candidate {mv:?} scores {score}");
            Ok(ScoredMove { mv, score })
        })
        .collect()
}

/// First entry with the maximum score.
///
/// Linear scan replacing only on a strictly greater score.
pub(crate) fn select_best<M>(scored: Vec<ScoredMove<M>>) -> Option<ScoredMove<M>> {
    let mut best: Option<ScoredMove<M>> = None;
    for candidate in scored {
        match &best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Square, TicTacToe};

    fn scored(values: &[f64]) -> Vec<ScoredMove<usize>> {
        values
            .iter()
            .enumerate()
            .map(|(mv, &score)| ScoredMove { mv, score })
            .collect()
    }

    #[test]
    fn test_select_best_takes_maximum() {
        let best = select_best(scored(&[-1.0, 4.0, 2.0])).unwrap();
        assert_eq!(best.mv, 1);
        assert_eq!(best.score, 4.0);
    }

    #[test]
    fn test_select_best_first_of_ties() {
        let best = select_best(scored(&[0.0, 5.0, 3.0, 5.0, 5.0])).unwrap();
        assert_eq!(best.mv, 1);
    }

    #[test]
    fn test_select_best_empty() {
        assert!(select_best(scored(&[])).is_none());
    }

    #[test]
    fn test_decide_takes_immediate_win() {
        let state =
            TicTacToe::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]], Player::Max).unwrap();
        assert_eq!(decide(&state, Player::Max).unwrap(), Square::new(0, 2));
    }

    #[test]
    fn test_decide_for_minimizer_takes_its_win() {
        // Same shape with colors swapped: Min completes row 1.
        let state =
            TicTacToe::from_rows([[1, 1, 0], [-1, -1, 0], [1, 0, 0]], Player::Min).unwrap();
        assert_eq!(decide(&state, Player::Min).unwrap(), Square::new(1, 2));
    }

    #[test]
    fn test_decide_blocks() {
        // Max threatens row 0; Min has no win and must block at (0, 2).
        let state =
            TicTacToe::from_rows([[1, 1, 0], [-1, 0, 0], [0, 0, 0]], Player::Min).unwrap();
        assert_eq!(decide(&state, Player::Min).unwrap(), Square::new(0, 2));
    }

    #[test]
    fn test_decide_without_moves() {
        let full =
            TicTacToe::from_rows([[1, -1, 1], [1, -1, -1], [-1, 1, 1]], Player::Min).unwrap();
        assert_eq!(decide(&full, Player::Min).unwrap_err(), Error::NoLegalMove);
    }

    #[test]
    fn test_score_moves_is_canonical() {
        let state =
            TicTacToe::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]], Player::Max).unwrap();
        let table = score_moves(&state, Player::Max).unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(table[0].mv, Square::new(0, 2));
        assert_eq!(table[0].score, 9.0);
        assert!(table[1..].iter().all(|entry| entry.score < 9.0));
    }
}
