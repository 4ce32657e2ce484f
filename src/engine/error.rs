//! Engine errors.

use super::state::Phase;

/// Errors from driving the move engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{operation} is not allowed while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("die roll {0} is outside 1..=6")]
    InvalidRoll(u8),
}
