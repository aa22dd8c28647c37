use super::*;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use ttt_core::{SearchLimits, SearchResult};

#[test]
fn test_self_play_always_draws() {
    let mut engine1 = MinimaxEngine::seeded(1);
    let mut engine2 = MinimaxEngine::seeded(2);

    let result = quick_match(&mut engine1, &mut engine2, 4);

    assert_eq!(result.total_games(), 4);
    assert_eq!(result.draws, 4);
}

#[test]
fn test_minimax_never_loses_to_random() {
    let mut minimax = MinimaxEngine::seeded(3);
    let mut random = RandomEngine::seeded(4);

    let config = MatchConfig {
        num_games: 20,
        ..Default::default()
    };
    let result = MatchRunner::new(config).run_match(&mut minimax, &mut random);

    assert_eq!(result.total_games(), 20);
    assert_eq!(result.losses, 0);
    assert!(result.wins > 0);
}

#[test]
fn test_depth_limited_match_completes() {
    let mut engine1 = MinimaxEngine::seeded(5);
    let mut engine2 = RandomEngine::seeded(6);

    let config = MatchConfig {
        num_games: 6,
        limits: SearchLimits::depth(2),
        alternate_colors: true,
    };
    let result = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);

    assert_eq!(result.total_games(), 6);
}

/// Always answers with the centre, legal or not.
struct CentreOnly;

impl Engine for CentreOnly {
    fn search(&mut self, _pos: &Position, _limits: SearchLimits) -> SearchResult {
        SearchResult {
            best_move: Some(4),
            score: 0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Centre"
    }
}

#[test]
fn test_illegal_move_forfeits() {
    let runner = MatchRunner::new(MatchConfig::default());
    let mut x = CentreOnly;
    let mut o = CentreOnly;

    // O repeats the occupied centre on its first move.
    assert_eq!(runner.play_game(&mut x, &mut o), GameResult::Win);
}
