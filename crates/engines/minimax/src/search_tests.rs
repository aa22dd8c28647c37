use super::*;
use std::collections::BTreeSet;
use ttt_core::Position;

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

#[test]
fn test_terminal_scores_bounded_and_monotonic() {
    for depth in 0..=9u8 {
        let x = terminal_score(Outcome::Win(Mark::X), depth);
        let o = terminal_score(Outcome::Win(Mark::O), depth);
        assert!((-WIN_SCORE..=WIN_SCORE).contains(&x));
        assert!((-WIN_SCORE..=WIN_SCORE).contains(&o));
        assert_eq!(terminal_score(Outcome::Draw, depth), 0);

        if depth > 0 {
            assert!(x < terminal_score(Outcome::Win(Mark::X), depth - 1));
            assert!(o > terminal_score(Outcome::Win(Mark::O), depth - 1));
        }
    }
}

#[test]
fn test_takes_immediate_win() {
    let board = pos("xx./oo./...");
    let mut search = Minimax::seeded(SearchLimits::unlimited(), 1);

    let outcome = search.search(&board, true, |_| {}).unwrap();
    assert_eq!(outcome.best_move, 2);
    assert_eq!(outcome.score(), WIN_SCORE - 1);
    assert_eq!(outcome.analysis.best_moves(), &[2]);
}

#[test]
fn test_minimizing_side_blocks_threat() {
    // X threatens the left column; O must take 6.
    let board = pos("x../x../.o.");
    let mut search = Minimax::seeded(SearchLimits::unlimited(), 7);

    assert_eq!(search.best_move(&board, false, |_| {}), Ok(6));
}

#[test]
fn test_lost_position_ties_every_move() {
    // X has three open lines; O loses two plies later whatever it does.
    let board = pos("xx./oxo/...");
    let analysis = analyze(&board, false, SearchLimits::unlimited()).unwrap();

    assert_eq!(analysis.best_score, WIN_SCORE - 2);
    assert_eq!(analysis.best_moves(), &[2, 6, 7, 8]);
    assert_eq!(analysis.scores.len(), 4);
}

#[test]
fn test_repeated_calls_stay_in_bucket_and_cover_it() {
    let board = pos("xx./oxo/...");
    let mut seen = BTreeSet::new();
    for seed in 0..64 {
        let mut search = Minimax::seeded(SearchLimits::unlimited(), seed);
        seen.insert(search.best_move(&board, false, |_| {}).unwrap());
    }
    assert_eq!(seen, BTreeSet::from([2, 6, 7, 8]));
}

#[test]
fn test_callback_fires_once_with_returned_move() {
    let board = pos("x../.o./...");
    let mut calls = Vec::new();
    let mut search = Minimax::seeded(SearchLimits::unlimited(), 3);

    let idx = search.best_move(&board, true, |i| calls.push(i)).unwrap();
    assert_eq!(calls, vec![idx]);
}

#[test]
fn test_finished_board_is_rejected() {
    let mut calls = 0;
    let mut search = Minimax::seeded(SearchLimits::unlimited(), 0);

    let full = pos("xox/xoo/oxx");
    assert_eq!(
        search.best_move(&full, true, |_| calls += 1),
        Err(SearchError::TerminalPosition(Outcome::Draw))
    );

    let won = pos("xxx/oo./...");
    assert_eq!(
        search.best_move(&won, false, |_| calls += 1),
        Err(SearchError::TerminalPosition(Outcome::Win(Mark::X)))
    );
    assert_eq!(calls, 0);
}

#[test]
fn test_empty_board_is_a_draw_from_every_square() {
    let analysis = analyze(&Position::empty(), true, SearchLimits::unlimited()).unwrap();

    assert_eq!(analysis.best_score, 0);
    assert_eq!(analysis.best_moves(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    // No pruning: the whole game tree is walked.
    assert_eq!(analysis.nodes, 549_946);

    let center = analysis.scores.score_of(4).unwrap();
    for edge in [1, 3, 5, 7] {
        assert!(center >= analysis.scores.score_of(edge).unwrap());
    }

    let mut search = Minimax::seeded(SearchLimits::unlimited(), 11);
    let mut seen = BTreeSet::new();
    for _ in 0..500 {
        seen.insert(search.select(&analysis).unwrap());
    }
    assert_eq!(seen, (0..9).collect::<BTreeSet<_>>());
}

#[test]
fn test_depth_cutoff_bounds_the_tree() {
    let one = analyze(&Position::empty(), true, SearchLimits::depth(1)).unwrap();
    assert_eq!(one.nodes, 1 + 9);
    assert_eq!(one.best_moves().len(), 9);

    let two = analyze(&Position::empty(), true, SearchLimits::depth(2)).unwrap();
    assert_eq!(two.nodes, 1 + 9 + 72);
    assert_eq!(two.best_score, 0);

    // Zero is clamped to one ply.
    let zero = analyze(&Position::empty(), true, SearchLimits::depth(0)).unwrap();
    assert_eq!(zero, one);
}

#[test]
fn test_cutoff_still_scores_finished_children() {
    let analysis = analyze(&pos("xx./oo./..."), true, SearchLimits::depth(1)).unwrap();

    assert_eq!(analysis.scores.bucket(WIN_SCORE - 1), &[2]);
    assert_eq!(analysis.scores.bucket(0), &[5, 6, 7, 8]);
}

#[test]
fn test_evaluate() {
    assert_eq!(
        evaluate(&pos("xx./oo./..."), true, SearchLimits::unlimited()),
        Ok(WIN_SCORE - 1)
    );
    assert_eq!(
        evaluate(&pos("xxx/oo./..."), false, SearchLimits::unlimited()),
        Ok(WIN_SCORE)
    );
    assert_eq!(
        evaluate(&Position::empty(), true, SearchLimits::unlimited()),
        Ok(0)
    );
}
