use super::*;

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::seeded(5);
    let pos: Position = "x../o../...".parse().unwrap();

    let result = engine.search(&pos, SearchLimits::unlimited());

    let mv = result.best_move.unwrap();
    assert!(pos.available_moves().contains(&mv));
    assert!(result.nodes > 0);
    assert_eq!(result.depth, 7);
}

#[test]
fn minimax_engine_plays_for_the_side_to_move() {
    let mut engine = MinimaxEngine::seeded(0);

    // X to move wins at once.
    let x_turn: Position = "xx./oo./...".parse().unwrap();
    let result = engine.search(&x_turn, SearchLimits::unlimited());
    assert_eq!(result.best_move, Some(2));
    assert_eq!(result.score, WIN_SCORE - 1);

    // O to move blocks.
    let o_turn: Position = "x../x../.o.".parse().unwrap();
    let result = engine.search(&o_turn, SearchLimits::unlimited());
    assert_eq!(result.best_move, Some(6));
}

#[test]
fn minimax_engine_handles_finished_game() {
    let mut engine = MinimaxEngine::seeded(0);
    let pos: Position = "xox/xoo/oxx".parse().unwrap();

    let result = engine.search(&pos, SearchLimits::unlimited());

    assert!(result.best_move.is_none());
}

#[test]
fn minimax_engine_respects_depth_limit() {
    let mut engine = MinimaxEngine::seeded(0);

    let result = engine.search(&Position::empty(), SearchLimits::depth(2));

    assert_eq!(result.nodes, 1 + 9 + 72);
    assert_eq!(result.depth, 2);
}
