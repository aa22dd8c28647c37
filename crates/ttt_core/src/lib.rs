pub mod board;
pub mod error;
pub mod limits;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::BoardError;
pub use limits::SearchLimits;
pub use perft::{game_tree_size, perft};
pub use types::*;

// =============================================================================
// Engine trait — implemented by every tic-tac-toe engine (minimax, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Index of the chosen cell (None if the game is already over)
    pub best_move: Option<usize>,
    /// Minimax score of the chosen move, X-positive
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a position with nothing left to play.
    pub fn finished() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 1,
        }
    }
}

/// Trait that all engines must implement.
///
/// This allows swapping the exhaustive minimax searcher for baselines
/// when running matches.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `limits` - Search limits (depth cutoff)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ttt-arena"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
