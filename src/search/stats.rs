//! Search statistics for diagnostics and benchmarking.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Statistics collected during one search call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States evaluated, terminal or not.
    pub nodes: u64,

    /// Terminal states scored.
    pub terminal_nodes: u64,

    /// Deepest depth reached.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one visited state at `depth`.
    #[inline]
    pub(crate) fn visit(&mut self, depth: u32, terminal: bool) {
        self.nodes += 1;
        if terminal {
            self.terminal_nodes += 1;
        }
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Fold in counts gathered by an independent branch.
    ///
    /// Time is not summed: branches may have run concurrently.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.terminal_nodes += other.terminal_nodes;
        self.max_depth = self.max_depth.max(other.max_depth);
    }

    /// Record `elapsed` as the call's search time, saturating at `u64::MAX`.
    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.time_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
