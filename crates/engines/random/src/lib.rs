//! Random Move Tic-Tac-Toe Engine
//!
//! A simple engine that selects moves uniformly at random from all empty cells.
//! Useful for:
//! - Baseline comparisons (minimax should never lose to this)
//! - Exercising the match runner with varied games

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ttt_core::{Board, Engine, Position, SearchLimits, SearchResult};


/// An engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random empty
/// cell. It's the simplest possible engine and serves as a baseline.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Engine with a reproducible move sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        if pos.terminal().is_some() {
            return SearchResult::finished();
        }

        let moves = pos.available_moves();
        self.nodes = 1;

        SearchResult {
            best_move: moves.choose(&mut self.rng).copied(),
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
