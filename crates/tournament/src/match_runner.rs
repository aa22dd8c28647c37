//! Match runner for playing games between engines

use tracing::{info, warn};
use ttt_core::{Board, Engine, Mark, Outcome, Position};

use crate::config::MatchConfig;
use crate::results::{GameResult, MatchResult};

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_x = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_x {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is O
                self.play_game(engine2, engine1).flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1 = engine1.name(),
                engine1_side = if engine1_x { "X" } else { "O" },
                result = ?game_result,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        result
    }

    /// Play a single game from the empty board, returns result from X's perspective
    pub fn play_game(&self, x: &mut dyn Engine, o: &mut dyn Engine) -> GameResult {
        let mut pos = Position::empty();
        x.new_game();
        o.new_game();

        loop {
            if let Some(outcome) = pos.terminal() {
                return match outcome {
                    Outcome::Win(Mark::X) => GameResult::Win,
                    Outcome::Win(Mark::O) => GameResult::Loss,
                    Outcome::Draw => GameResult::Draw,
                };
            }

            let side = pos.side_to_move();
            let result = match side {
                Mark::X => x.search(&pos, self.config.limits),
                Mark::O => o.search(&pos, self.config.limits),
            };

            let played = match result.best_move {
                Some(mv) => pos.play(mv).is_ok(),
                None => false,
            };
            if !played {
                // No move (or an illegal one) on a live board forfeits the game
                let name = match side {
                    Mark::X => x.name(),
                    Mark::O => o.name(),
                };
                warn!(
                    engine = name,
                    position = %pos,
                    best_move = ?result.best_move,
                    "engine forfeits"
                );
                return match side {
                    Mark::X => GameResult::Loss,
                    Mark::O => GameResult::Win,
                };
            }
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
