//! Driving complete games between two strategies.
//!
//! Used to check that perfect play is reproducible and never loses, and to
//! produce game records for inspection.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player, SearchConfig};
use crate::error::{Error, Result};

use super::strategy::{MinimaxStrategy, Strategy};

/// Configuration for playing games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Maximum moves per game. Guards against states that never terminate.
    pub max_moves: usize,

    /// Search configuration for minimax players in `self_play`.
    pub search: SearchConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_moves: 1000,
            search: SearchConfig::default(),
        }
    }
}

impl PlayConfig {
    /// Create a new play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the search configuration.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(Player),
    /// Neither side won.
    Draw,
}

impl Outcome {
    /// Read the outcome off a terminal score's sign.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Outcome::Winner(Player::Max)
        } else if score < 0.0 {
            Outcome::Winner(Player::Min)
        } else {
            Outcome::Draw
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }
}

/// One move of a recorded game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayedMove<M> {
    /// The player who moved.
    pub player: Player,
    /// The move played.
    pub mv: M,
}

/// A complete game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord<M> {
    /// All moves in order.
    pub moves: Vec<PlayedMove<M>>,

    /// `terminal_score` of the final state at depth `moves.len()`.
    pub final_score: f64,

    /// Winner or draw.
    pub outcome: Outcome,
}

impl<M> GameRecord<M> {
    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no move was played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one player.
    pub fn player_moves(&self, player: Player) -> impl Iterator<Item = &M> {
        self.moves
            .iter()
            .filter(move |played| played.player == player)
            .map(|played| &played.mv)
    }
}

/// Play `initial` to the end, alternating from `first_player`.
///
/// `max_strategy` moves for `Player::Max`, `min_strategy` for `Player::Min`.
///
/// ## Errors
///
/// - `Error::InvalidPosition` if the state reports a side to move other
///   than the player about to act.
/// - `Error::MoveLimitExceeded` if the game is not over after
///   `config.max_moves` moves.
/// - Any error raised by a strategy or by `apply`.
pub fn play_game<'s, S: GameState>(
    initial: S,
    first_player: Player,
    max_strategy: &mut (dyn Strategy<S> + 's),
    min_strategy: &mut (dyn Strategy<S> + 's),
    config: &PlayConfig,
) -> Result<GameRecord<S::Move>> {
    let mut state = initial;
    let mut player = first_player;
    let mut moves = Vec::new();

    while !state.is_terminal() {
        if moves.len() >= config.max_moves {
            return Err(Error::MoveLimitExceeded {
                limit: config.max_moves,
            });
        }

        if let Some(side) = state.side_to_move() {
            if side != player {
                return Err(Error::InvalidPosition {
                    reason: format!("{player} to act but the state moves for {side}"),
                });
            }
        }

        let strategy = match player {
            Player::Max => &mut *max_strategy,
            Player::Min => &mut *min_strategy,
        };
        let mv = strategy.choose(&state, player)?;
        log::debug!(
            "move {}: {player} ({}) plays {mv:?}",
            moves.len() + 1,
            strategy.name()
        );

        state = state.apply(&mv)?;
        moves.push(PlayedMove { player, mv });
        player = player.opponent();
    }

    let depth = u32::try_from(moves.len()).unwrap_or(u32::MAX);
    let final_score = state.terminal_score(depth);
    let outcome = Outcome::from_score(final_score);
    log::info!(
        "game over after {} moves: {outcome:?} (score {final_score})",
        moves.len()
    );

    Ok(GameRecord {
        moves,
        final_score,
        outcome,
    })
}

/// Perfect play on both sides from `initial`.
///
/// Deterministic: the same start always yields the same record.
///
/// ## Errors
///
/// Same as `play_game`.
pub fn self_play<S: GameState>(
    initial: S,
    first_player: Player,
    config: &PlayConfig,
) -> Result<GameRecord<S::Move>> {
    let mut max_side = MinimaxStrategy::new(config.search.clone());
    let mut min_side = MinimaxStrategy::new(config.search.clone());
    play_game(initial, first_player, &mut max_side, &mut min_side, config)
}
