//! Nim state and rules.

use serde::{Deserialize, Serialize};

use crate::core::{depth_penalized, GameState, MoveList, Player};
use crate::error::{Error, Result};

/// Take this many stones from the pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Take(pub u32);

/// Single-pile Nim position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nim {
    remaining: u32,
    max_take: u32,
    to_move: Player,
    /// Player who made the previous move.
    last_mover: Option<Player>,
    /// Initial pile + 1; no game lasts longer than the initial pile.
    win_magnitude: u32,
}

impl Nim {
    /// New game with `pile` stones, Max to move.
    ///
    /// ## Errors
    ///
    /// `Error::InvalidPosition` if `max_take` is zero or `pile` is `u32::MAX`
    /// (the win magnitude would not fit).
    pub fn new(pile: u32, max_take: u32) -> Result<Self> {
        if max_take == 0 {
            return Err(Error::InvalidPosition {
                reason: "max_take must be at least 1".to_string(),
            });
        }
        let win_magnitude = pile.checked_add(1).ok_or_else(|| Error::InvalidPosition {
            reason: format!("pile of {pile} stones is too large"),
        })?;

        Ok(Self {
            remaining: pile,
            max_take,
            to_move: Player::Max,
            last_mover: None,
            win_magnitude,
        })
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.to_move = player;
        self
    }

    /// Stones left on the pile.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// The player whose move it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The player who took the last stone, once the pile is empty.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if self.remaining == 0 {
            self.last_mover
        } else {
            None
        }
    }
}

impl GameState for Nim {
    type Move = Take;

    /// `Take(1)` up to `Take(min(max_take, remaining))`, ascending.
    fn legal_moves(&self) -> MoveList<Take> {
        (1..=self.max_take.min(self.remaining)).map(Take).collect()
    }

    fn apply(&self, mv: &Take) -> Result<Self> {
        let Take(count) = *mv;
        if count == 0 || count > self.max_take {
            return Err(Error::illegal_move(
                mv,
                format!("must take between 1 and {}", self.max_take),
            ));
        }
        if count > self.remaining {
            return Err(Error::illegal_move(
                mv,
                format!("only {} stones remain", self.remaining),
            ));
        }

        Ok(Self {
            remaining: self.remaining - count,
            to_move: self.to_move.opponent(),
            last_mover: Some(self.to_move),
            ..*self
        })
    }

    fn is_terminal(&self) -> bool {
        self.remaining == 0
    }

    fn side_to_move(&self) -> Option<Player> {
        Some(self.to_move)
    }

    fn terminal_score(&self, depth: u32) -> f64 {
        depth_penalized(self.winner(), f64::from(self.win_magnitude), depth)
    }
}
