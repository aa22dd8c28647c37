//! Minimax Tic-Tac-Toe Engine
//!
//! Full game-tree minimax with depth-sensitive scoring and uniform random
//! tie-breaking among equally good root moves.

mod error;
mod search;

use rand::rngs::StdRng;
use tracing::warn;
use ttt_core::{Board, Engine, Position, SearchLimits, SearchResult};

#[cfg(test)]
mod lib_tests;

/// Tic-tac-toe engine using exhaustive minimax.
///
/// This engine uses:
/// - Plain minimax (no pruning), X maximizing and O minimizing
/// - Terminal scores of `100 - depth` / `-100 + depth`
/// - An optional ply cutoff scoring unfinished positions as 0
/// - Random choice among root moves sharing the best score
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    searcher: Minimax<StdRng>,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            searcher: Minimax::default(),
            nodes: 0,
        }
    }

    /// Engine with a reproducible tie-break sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            searcher: Minimax::seeded(SearchLimits::unlimited(), seed),
            nodes: 0,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        self.searcher.set_limits(limits);

        let maximizing = pos.side_to_move().is_maximizing();
        match self.searcher.search(pos, maximizing, |_| {}) {
            Ok(outcome) => {
                self.nodes = outcome.analysis.nodes;
                SearchResult {
                    best_move: Some(outcome.best_move),
                    score: outcome.score(),
                    depth: limits.reported_depth(pos.available_moves().len()),
                    nodes: self.nodes,
                }
            }
            Err(SearchError::TerminalPosition(_)) => SearchResult::finished(),
            Err(e) => {
                warn!(position = %pos, error = %e, "minimax search failed");
                SearchResult::finished()
            }
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use error::SearchError;
pub use search::{
    analyze, evaluate, terminal_score, Minimax, RootAnalysis, RootScores, SearchOutcome,
    WIN_SCORE,
};
