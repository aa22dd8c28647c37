use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Maximizing side, moves first.
    X,
    /// Minimizing side.
    O,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Mark::X
    }

    pub fn from_maximizing(maximizing: bool) -> Mark {
        if maximizing {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(m) => Some(m),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(m) => Some(m),
            Outcome::Draw => None,
        }
    }
}

// Helpers
pub fn row_of(idx: usize) -> usize {
    idx / 3
}
pub fn col_of(idx: usize) -> usize {
    idx % 3
}

/// `0 -> "A1"`, `5 -> "C2"`: column letter then row number.
pub fn idx_to_coord(idx: usize) -> Option<String> {
    if idx >= CELLS {
        return None;
    }
    let c = (b'A' + col_of(idx) as u8) as char;
    let r = (b'1' + row_of(idx) as u8) as char;
    Some(format!("{c}{r}"))
}

pub fn coord_to_idx(c: &str) -> Option<usize> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let col = b[0].to_ascii_uppercase();
    let row = b[1];
    if !(b'A'..=b'C').contains(&col) || !(b'1'..=b'3').contains(&row) {
        return None;
    }
    Some((row - b'1') as usize * 3 + (col - b'A') as usize)
}
