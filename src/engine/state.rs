//! Player state and engine phase.
//!
//! ## Phase
//!
//! ```text
//!   Idle --roll--> Advancing --step*--> Resolving --resolve--> Idle
//!                                                        \--> Finished
//! ```
//!
//! `Finished` is terminal until the engine is reset.

use serde::{Deserialize, Serialize};

use crate::core::Square;

/// Where the engine is within a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for a die roll.
    #[default]
    Idle,
    /// Moving one square per step.
    Advancing,
    /// Movement done; snake or ladder lookup pending.
    Resolving,
    /// The player reached the finish.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Advancing => write!(f, "advancing"),
            Phase::Resolving => write!(f, "resolving"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

/// Observable state of the single player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current square.
    pub position: Square,

    /// Last die value, 0 before the first roll.
    pub last_roll: u8,

    /// Steps left in the current roll.
    pub steps_remaining: u8,

    /// Current phase.
    pub phase: Phase,
}

impl PlayerState {
    /// State at the start of a game.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            position: Square::START,
            last_roll: 0,
            steps_remaining: 0,
            phase: Phase::Idle,
        }
    }

    /// Is a roll currently being walked?
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.phase == Phase::Advancing
    }

    /// Has the player won?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::initial()
    }
}
