use thiserror::Error;

/// Errors raised while building or mutating a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell index {index} is out of range (expected 0..=8)")]
    IndexOutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("board string has {got} cells, expected {expected}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCell { character: char, position: usize },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },
}
