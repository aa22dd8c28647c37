//! Search limits shared by all engines.
//!
//! Tic-tac-toe is small enough to enumerate completely, so the only limit is
//! an optional ply cutoff. Without one the search walks the whole game tree.

use serde::{Deserialize, Serialize};

/// Search limits that control how deep an engine looks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum search depth in plies from the root (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<u8>,
}

impl SearchLimits {
    /// Search the full game tree.
    pub fn unlimited() -> Self {
        Self { max_depth: None }
    }

    /// Stop expanding nodes `depth` plies below the root.
    ///
    /// A limit of 0 is treated as 1 so the root always expands its moves.
    pub fn depth(depth: u8) -> Self {
        Self {
            max_depth: Some(depth),
        }
    }

    /// Effective cutoff ply, if any.
    pub fn cutoff(&self) -> Option<u8> {
        self.max_depth.map(|d| d.max(1))
    }

    /// True when a node at `depth` must not be expanded further.
    #[inline]
    pub fn reached(&self, depth: u8) -> bool {
        self.cutoff().is_some_and(|limit| depth >= limit)
    }

    /// Depth to report in search results: the cutoff, or the remaining
    /// plies on the board when unlimited.
    pub fn reported_depth(&self, empty_cells: usize) -> u8 {
        let remaining = empty_cells as u8;
        self.cutoff().map_or(remaining, |d| d.min(remaining))
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
