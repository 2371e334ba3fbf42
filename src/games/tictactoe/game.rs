//! Tic-tac-toe state and rules.

use serde::{Deserialize, Serialize};

use crate::core::{depth_penalized, GameState, MoveList, Player};
use crate::error::{Error, Result};

/// Board side length.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Win score before the depth penalty. Exceeds the deepest game (9 moves).
pub const WIN_MAGNITUDE: f64 = 10.0;

/// The eight winning lines as row-major cell indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A board coordinate; the tic-tac-toe move type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    /// Create a square. Coordinates are checked when the move is applied.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major cell index, or `None` off the board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.row < SIZE && self.col < SIZE {
            Some(self.row * SIZE + self.col)
        } else {
            None
        }
    }

    /// Square for a row-major cell index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    /// Whether this is one of the four corners.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == SIZE - 1) && (self.col == 0 || self.col == SIZE - 1)
    }

    /// Whether this is the center square.
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == SIZE / 2 && self.col == SIZE / 2
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Tic-tac-toe position.
///
/// Cells hold `0` (empty), `+1` (Max) or `-1` (Min) in row-major order.
/// The state records whose turn it is, so either player may move first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [i8; CELLS],
    to_move: Player,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, Max to move.
    #[must_use]
    pub fn new() -> Self {
        Self::empty(Player::Max)
    }

    /// Empty board with the given player to move.
    #[must_use]
    pub fn empty(to_move: Player) -> Self {
        Self {
            cells: [0; CELLS],
            to_move,
        }
    }

    /// Build a position from three rows of `{-1, 0, 1}` cells.
    ///
    /// Piece counts are not checked: positions where either side opened
    /// are accepted.
    pub fn from_rows(rows: [[i8; SIZE]; SIZE], to_move: Player) -> Result<Self> {
        let mut cells = [0; CELLS];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if !matches!(value, -1..=1) {
                    let square = Square::new(row, col);
                    return Err(Error::InvalidPosition {
                        reason: format!("cell {square} holds {value}, expected -1, 0 or 1"),
                    });
                }
                cells[row * SIZE + col] = value;
            }
        }
        Ok(Self { cells, to_move })
    }

    /// The player whose move it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Cell value at `square`, `0` for off-board squares.
    #[must_use]
    pub fn cell(&self, square: Square) -> i8 {
        square.index().map_or(0, |idx| self.cells[idx])
    }

    /// The board as three rows.
    #[must_use]
    pub fn rows(&self) -> [[i8; SIZE]; SIZE] {
        let mut rows = [[0; SIZE]; SIZE];
        for (idx, &value) in self.cells.iter().enumerate() {
            rows[idx / SIZE][idx % SIZE] = value;
        }
        rows
    }

    /// The player holding a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let value = self.cells[a];
            if value != 0 && value == self.cells[b] && value == self.cells[c] {
                Player::from_sign(value)
            } else {
                None
            }
        })
    }

    /// No empty cells remain.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }
}

impl GameState for TicTacToe {
    type Move = Square;

    /// Empty squares in row-major order; none once a line is complete.
    fn legal_moves(&self) -> MoveList<Square> {
        if self.winner().is_some() {
            return MoveList::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 0)
            .map(|(idx, _)| Square::from_index(idx))
            .collect()
    }

    fn apply(&self, mv: &Square) -> Result<Self> {
        let idx = mv
            .index()
            .ok_or_else(|| Error::illegal_move(mv, "square is off the board"))?;
        if self.cells[idx] != 0 {
            return Err(Error::illegal_move(mv, "square is occupied"));
        }
        if self.winner().is_some() {
            return Err(Error::illegal_move(mv, "game is already won"));
        }

        let mut next = *self;
        next.cells[idx] = self.to_move.sign();
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    fn terminal_score(&self, depth: u32) -> f64 {
        depth_penalized(self.winner(), WIN_MAGNITUDE, depth)
    }

    fn side_to_move(&self) -> Option<Player> {
        Some(self.to_move)
    }
}
