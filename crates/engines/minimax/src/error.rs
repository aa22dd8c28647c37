use thiserror::Error;
use ttt_core::{BoardError, Outcome};

/// Why a root search could not produce a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The caller must check `Board::terminal` before asking for a move.
    #[error("position is already finished ({0:?})")]
    TerminalPosition(Outcome),

    #[error("board is not finished but reports no available moves")]
    NoAvailableMoves,

    #[error(transparent)]
    Board(#[from] BoardError),
}
