//! Exhaustive minimax evaluation.
//!
//! Every branch is explored: no pruning, no move ordering, no transposition
//! table. Depth is threaded through the recursion so that `terminal_score`
//! can prefer fast wins and slow losses.

use crate::core::{GameState, MoveList, Player, Traversal};
use crate::error::{Error, Result};

use super::stats::SearchStats;

/// Game-theoretic value of `state` under optimal play by both sides.
///
/// `player` is the side to move in `state` and `depth` the number of moves
/// already played to reach it. Terminal states return
/// `state.terminal_score(depth)`; otherwise the maximizer takes the largest
/// child value and the minimizer the smallest.
///
/// Pure: every call is an independent tree walk.
///
/// ## Errors
///
/// - `Error::EmptyChildSet` if a non-terminal state has no legal moves.
/// - Any error returned by `GameState::apply`.
///
/// ```
/// use minimax_engine::core::Player;
/// use minimax_engine::games::tictactoe::TicTacToe;
/// use minimax_engine::search::minimax;
///
/// // [[1, 1, 0], [-1, -1, 0], [0, 0, 0]]: Max wins next move.
/// let state = TicTacToe::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]], Player::Max).unwrap();
/// assert_eq!(minimax(&state, Player::Max, 0).unwrap(), 9.0);
/// ```
pub fn minimax<S: GameState>(state: &S, player: Player, depth: u32) -> Result<f64> {
    let mut stats = SearchStats::new();
    evaluate(state, player, depth, Traversal::Recursive, &mut stats)
}

/// Evaluate with an explicit traversal, counting visits into `stats`.
pub(crate) fn evaluate<S: GameState>(
    state: &S,
    player: Player,
    depth: u32,
    traversal: Traversal,
    stats: &mut SearchStats,
) -> Result<f64> {
    match traversal {
        Traversal::Recursive => recurse(state, player, depth, stats),
        Traversal::WorkStack => walk(state, player, depth, stats),
    }
}

/// Keep the better of two values for `player`.
#[inline]
fn prefer(player: Player, current: f64, candidate: f64) -> f64 {
    if player.is_maximizer() {
        current.max(candidate)
    } else {
        current.min(candidate)
    }
}

fn recurse<S: GameState>(
    state: &S,
    player: Player,
    depth: u32,
    stats: &mut SearchStats,
) -> Result<f64> {
    if state.is_terminal() {
        stats.visit(depth, true);
        return Ok(state.terminal_score(depth));
    }
    stats.visit(depth, false);

    let mut best: Option<f64> = None;
    for mv in state.legal_moves() {
        let child = state.apply(&mv)?;
        let score = recurse(&child, player.opponent(), depth + 1, stats)?;
        best = Some(match best {
            Some(current) => prefer(player, current, score),
            None => score,
        });
    }

    best.ok_or(Error::EmptyChildSet { depth })
}

/// One non-terminal state on the explicit work stack.
struct Frame<S: GameState> {
    state: S,
    player: Player,
    depth: u32,
    moves: MoveList<S::Move>,
    /// Index of the next move to expand.
    next: usize,
    best: Option<f64>,
}

impl<S: GameState> Frame<S> {
    fn open(state: S, player: Player, depth: u32, stats: &mut SearchStats) -> Self {
        stats.visit(depth, false);
        let moves = state.legal_moves();
        Self {
            state,
            player,
            depth,
            moves,
            next: 0,
            best: None,
        }
    }

    fn absorb(&mut self, score: f64) {
        self.best = Some(match self.best {
            Some(current) => prefer(self.player, current, score),
            None => score,
        });
    }
}

/// Same walk as `recurse`, with frames on the heap instead of the call stack.
///
/// Children are expanded in `legal_moves()` order, so visit counts and
/// errors match the recursive traversal exactly.
fn walk<S: GameState>(
    root: &S,
    player: Player,
    depth: u32,
    stats: &mut SearchStats,
) -> Result<f64> {
    if root.is_terminal() {
        stats.visit(depth, true);
        return Ok(root.terminal_score(depth));
    }

    let mut stack = vec![Frame::open(root.clone(), player, depth, stats)];

    while let Some(top) = stack.last_mut() {
        if let Some(mv) = top.moves.get(top.next).cloned() {
            top.next += 1;
            let child = top.state.apply(&mv)?;
            let child_player = top.player.opponent();
            let child_depth = top.depth + 1;

            if child.is_terminal() {
                stats.visit(child_depth, true);
                top.absorb(child.terminal_score(child_depth));
            } else {
                stack.push(Frame::open(child, child_player, child_depth, stats));
            }
        } else {
            let value = top.best.ok_or(Error::EmptyChildSet { depth: top.depth })?;
            stack.pop();
            match stack.last_mut() {
                Some(parent) => parent.absorb(value),
                None => return Ok(value),
            }
        }
    }

    unreachable!("the root frame returns its value before the stack empties")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::TicTacToe;

    /// Explicit game tree with fixed leaf values.
    #[derive(Clone, Debug)]
    enum Tree {
        Leaf(f64),
        Branch(Vec<Tree>),
    }

    impl GameState for Tree {
        type Move = usize;

        fn legal_moves(&self) -> MoveList<usize> {
            match self {
                Tree::Leaf(_) => MoveList::new(),
                Tree::Branch(children) => (0..children.len()).collect(),
            }
        }

        fn apply(&self, mv: &usize) -> Result<Self> {
            match self {
                Tree::Branch(children) => children
                    .get(*mv)
                    .cloned()
                    .ok_or_else(|| Error::illegal_move(mv, "no such branch")),
                Tree::Leaf(_) => Err(Error::illegal_move(mv, "leaf has no branches")),
            }
        }

        fn is_terminal(&self) -> bool {
            matches!(self, Tree::Leaf(_))
        }

        fn terminal_score(&self, _depth: u32) -> f64 {
            match self {
                Tree::Leaf(value) => *value,
                Tree::Branch(_) => 0.0,
            }
        }
    }

    fn leaves(values: &[f64]) -> Tree {
        Tree::Branch(values.iter().map(|&v| Tree::Leaf(v)).collect())
    }

    /// Classic two-ply example: max(min(3, 12, 8), min(2, 4, 6), min(14, 5, 2)) = 3.
    fn two_ply() -> Tree {
        Tree::Branch(vec![
            leaves(&[3.0, 12.0, 8.0]),
            leaves(&[2.0, 4.0, 6.0]),
            leaves(&[14.0, 5.0, 2.0]),
        ])
    }

    #[test]
    fn test_terminal_returns_terminal_score() {
        let leaf = Tree::Leaf(-4.5);
        assert_eq!(minimax(&leaf, Player::Max, 3).unwrap(), -4.5);
        assert_eq!(minimax(&leaf, Player::Min, 0).unwrap(), -4.5);
    }

    #[test]
    fn test_maximizer_takes_max() {
        let tree = leaves(&[1.0, 7.0, -2.0]);
        assert_eq!(minimax(&tree, Player::Max, 0).unwrap(), 7.0);
    }

    #[test]
    fn test_minimizer_takes_min() {
        let tree = leaves(&[1.0, 7.0, -2.0]);
        assert_eq!(minimax(&tree, Player::Min, 0).unwrap(), -2.0);
    }

    #[test]
    fn test_two_ply_alternates() {
        assert_eq!(minimax(&two_ply(), Player::Max, 0).unwrap(), 3.0);
        // Min first: min(max(3, 12, 8), max(2, 4, 6), max(14, 5, 2)) = 6
        assert_eq!(minimax(&two_ply(), Player::Min, 0).unwrap(), 6.0);
    }

    #[test]
    fn test_empty_child_set() {
        let stuck = Tree::Branch(vec![]);
        let err = minimax(&stuck, Player::Max, 2).unwrap_err();
        assert_eq!(err, Error::EmptyChildSet { depth: 2 });
    }

    #[test]
    fn test_nested_empty_child_set_reports_depth() {
        let tree = Tree::Branch(vec![Tree::Leaf(1.0), Tree::Branch(vec![])]);
        let err = minimax(&tree, Player::Max, 0).unwrap_err();
        assert_eq!(err, Error::EmptyChildSet { depth: 1 });
    }

    #[test]
    fn test_work_stack_matches_recursion() {
        for player in Player::BOTH {
            let mut rec_stats = SearchStats::new();
            let mut stack_stats = SearchStats::new();
            let rec = evaluate(&two_ply(), player, 0, Traversal::Recursive, &mut rec_stats);
            let stacked = evaluate(&two_ply(), player, 0, Traversal::WorkStack, &mut stack_stats);

            assert_eq!(rec.unwrap(), stacked.unwrap());
            assert_eq!(rec_stats, stack_stats);
        }
    }

    #[test]
    fn test_work_stack_empty_child_set() {
        let tree = Tree::Branch(vec![Tree::Leaf(1.0), Tree::Branch(vec![])]);
        let mut stats = SearchStats::new();
        let err = evaluate(&tree, Player::Max, 0, Traversal::WorkStack, &mut stats).unwrap_err();
        assert_eq!(err, Error::EmptyChildSet { depth: 1 });
    }

    #[test]
    fn test_stats_count_every_node() {
        let mut stats = SearchStats::new();
        evaluate(&two_ply(), Player::Max, 0, Traversal::Recursive, &mut stats).unwrap();

        // root + 3 branches + 9 leaves
        assert_eq!(stats.nodes, 13);
        assert_eq!(stats.terminal_nodes, 9);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn test_immediate_win_scores_nine() {
        let state =
            TicTacToe::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]], Player::Max).unwrap();
        assert_eq!(minimax(&state, Player::Max, 0).unwrap(), 9.0);
    }

    #[test]
    fn test_forced_loss_is_delayed() {
        // Min to move, Max threatens both (0, 2) and (2, 0): Min cannot stop
        // both, so Max wins on its next move at depth 2.
        let state =
            TicTacToe::from_rows([[1, 1, 0], [1, -1, 0], [0, 0, -1]], Player::Min).unwrap();
        assert_eq!(minimax(&state, Player::Min, 0).unwrap(), 8.0);
    }
}
