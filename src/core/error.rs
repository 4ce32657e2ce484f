//! Error types.
//!
//! Every failure in the engine is a precondition violation: a number that
//! is not a square or a transition table that breaks the board rules.
//! Engine phase errors live with the engine in `engine::error`. Missing
//! snake/ladder entries are never errors; lookups return `None`.

use super::square::Square;

/// Errors from board coordinate conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square {0} is off the board (expected 1..=100)")]
    InvalidSquare(u16),

    #[error("cell ({row}, {col}) is off the 10x10 grid")]
    InvalidCell { row: u8, col: u8 },
}

/// Errors from building a transition table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid square in transition table: {0}")]
    Board(#[from] BoardError),

    #[error("snake at {head} must lead down, not to {tail}")]
    SnakeNotDescending { head: Square, tail: Square },

    #[error("ladder at {foot} must lead up, not to {top}")]
    LadderNotAscending { foot: Square, top: Square },

    #[error("square {0} hosts more than one transition")]
    OverlappingTransition(Square),

    #[error("the finish square cannot start a transition")]
    TransitionFromFinish,
}
