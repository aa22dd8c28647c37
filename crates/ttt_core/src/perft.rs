use crate::board::{Board, Position};

/// Counts the positions exactly `depth` plies below `pos`.
/// Finished games are leaves: nothing is counted beneath them.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if pos.terminal().is_some() {
        return 0;
    }

    let mark = pos.side_to_move();
    let mut nodes = 0u64;
    for idx in pos.available_moves() {
        let mut child = *pos;
        // Indices come from available_moves, so the cell is empty.
        if child.insert(mark, idx).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Every node of the game tree rooted at `pos`, root included.
pub fn game_tree_size(pos: &Position) -> u64 {
    if pos.terminal().is_some() {
        return 1;
    }

    let mark = pos.side_to_move();
    let mut nodes = 1u64;
    for idx in pos.available_moves() {
        let mut child = *pos;
        if child.insert(mark, idx).is_ok() {
            nodes += game_tree_size(&child);
        }
    }
    nodes
}
