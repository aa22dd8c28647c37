use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;
use crate::types::*;

/// What a search needs from a board.
///
/// Implementors are treated as immutable snapshots: the search never calls
/// `insert` on a board it was handed, only on boards built by [`Board::child`].
pub trait Board: Sized {
    /// `Some` once the game is over (a completed line or no empty cell).
    fn terminal(&self) -> Option<Outcome>;

    /// Empty cells in ascending index order.
    fn available_moves(&self) -> Vec<usize>;

    /// Places `mark` at `index`.
    fn insert(&mut self, mark: Mark, index: usize) -> Result<(), BoardError>;

    /// Raw 9-cell snapshot.
    fn state(&self) -> [Cell; CELLS];

    /// Rebuilds a board from a raw snapshot.
    fn from_state(state: [Cell; CELLS]) -> Self;

    /// A fresh board with `mark` applied at `index`; `self` is left untouched.
    fn child(&self, mark: Mark, index: usize) -> Result<Self, BoardError> {
        let mut child = Self::from_state(self.state());
        child.insert(mark, index)?;
        Ok(child)
    }
}

/// Row-major 3x3 tic-tac-toe position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub cells: [Cell; CELLS],
}

impl Position {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cell(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| c.mark() == Some(mark))
            .count()
    }

    /// X moves whenever both sides have placed the same number of marks.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in LINES {
            if let Cell::Taken(m) = self.cells[a] {
                if self.cells[b] == Cell::Taken(m) && self.cells[c] == Cell::Taken(m) {
                    return Some(m);
                }
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Applies the side to move's mark. Convenience for game loops and tests.
    pub fn play(&mut self, index: usize) -> Result<Mark, BoardError> {
        let mark = self.side_to_move();
        self.insert(mark, index)?;
        Ok(mark)
    }
}

impl Board for Position {
    fn terminal(&self) -> Option<Outcome> {
        if let Some(m) = self.winner() {
            return Some(Outcome::Win(m));
        }
        if self.is_full() {
            return Some(Outcome::Draw);
        }
        None
    }

    fn available_moves(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.cells[i].is_empty()).collect()
    }

    fn insert(&mut self, mark: Mark, index: usize) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { index })?;
        if !cell.is_empty() {
            return Err(BoardError::Occupied { index });
        }
        *cell = Cell::Taken(mark);
        Ok(())
    }

    fn state(&self) -> [Cell; CELLS] {
        self.cells
    }

    fn from_state(state: [Cell; CELLS]) -> Self {
        Self { cells: state }
    }
}

impl FromStr for Position {
    type Err = BoardError;

    /// Parses `"xx.o....."`. Whitespace and `/` row separators are ignored;
    /// `.`, `-` and `_` mark empty cells. Piece counts must be reachable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != CELLS {
            return Err(BoardError::InvalidLength {
                expected: CELLS,
                got: chars.len(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (position, (&ch, cell)) in chars.iter().zip(cells.iter_mut()).enumerate() {
            *cell = match ch.to_ascii_lowercase() {
                'x' => Cell::Taken(Mark::X),
                'o' => Cell::Taken(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                _ => {
                    return Err(BoardError::InvalidCell {
                        character: ch,
                        position,
                    })
                }
            };
        }

        let pos = Position { cells };
        let x_count = pos.count(Mark::X);
        let o_count = pos.count(Mark::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(BoardError::InvalidPieceCounts { x_count, o_count });
        }
        Ok(pos)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells {
            let ch = match cell {
                Cell::Empty => '.',
                Cell::Taken(m) => m.to_char(),
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
