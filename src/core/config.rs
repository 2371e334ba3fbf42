//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How the game tree is walked.
///
/// Both traversals explore every branch and return identical values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Traversal {
    /// Plain recursion on the call stack.
    #[default]
    Recursive,
    /// Explicit heap-allocated frame stack.
    /// Use when the call stack is too small for the game's depth.
    WorkStack,
}

/// Search configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tree walk used by `evaluate` and `decide`.
    pub traversal: Traversal,
}

impl SearchConfig {
    /// Create a config with the default recursive traversal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new config with a custom traversal.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }
}
