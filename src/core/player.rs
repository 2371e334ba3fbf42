//! The two alternating players of a zero-sum game.
//!
//! ## Player
//!
//! `Max` is scored `+1` and `Min` is scored `-1`. The sign doubles as the
//! factor that turns "best for this player" into "numerically largest":
//! multiplying a search value by the mover's sign yields its canonical score.

use serde::{Deserialize, Serialize};

/// One of the two players in a zero-sum search.
///
/// Higher scores always favor `Max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The maximizer, encoded as `+1`.
    Max,
    /// The minimizer, encoded as `-1`.
    Min,
}

impl Player {
    /// Both players, maximizer first.
    pub const BOTH: [Player; 2] = [Player::Max, Player::Min];

    /// The player who moves next.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Signed encoding: `+1` for `Max`, `-1` for `Min`.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::Max => 1,
            Player::Min => -1,
        }
    }

    /// Decode a signed cell or player value.
    ///
    /// ```
    /// use minimax_engine::core::Player;
    ///
    /// assert_eq!(Player::from_sign(1), Some(Player::Max));
    /// assert_eq!(Player::from_sign(-1), Some(Player::Min));
    /// assert_eq!(Player::from_sign(0), None);
    /// ```
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Player::Max),
            -1 => Some(Player::Min),
            _ => None,
        }
    }

    /// Rescale a value so that higher is better for this player.
    #[must_use]
    pub fn canonicalize(self, score: f64) -> f64 {
        f64::from(self.sign()) * score
    }

    /// Whether this player prefers larger values.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::Max)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Max => write!(f, "Max"),
            Player::Min => write!(f, "Min"),
        }
    }
}
