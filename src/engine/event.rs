//! Turn events and records.
//!
//! Each engine operation reports what it did so a presentation layer can
//! animate it and print a status line. Completed turns are kept as
//! `TurnRecord`s for replay and debugging.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::TransitionKind;
use crate::core::Square;

/// A die roll accepted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    /// Face shown, 1..=6.
    pub value: u8,

    /// The roll would overshoot the finish and the turn was lost.
    pub forfeited: bool,
}

/// Outcome of resolving the square a move ended on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landing {
    /// Square the move ended on.
    pub from: Square,

    /// Square after any snake or ladder.
    pub to: Square,

    /// What was taken, if anything.
    pub kind: Option<TransitionKind>,
}

impl Landing {
    /// A landing on a plain square.
    #[must_use]
    pub const fn stay(square: Square) -> Self {
        Self {
            from: square,
            to: square,
            kind: None,
        }
    }
}

impl std::fmt::Display for Landing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            Some(TransitionKind::Snake) => {
                write!(f, "Ouch! Snake bit you from {} to {}!", self.from, self.to)
            }
            Some(TransitionKind::Ladder) => {
                write!(f, "Yay! Ladder from {} to {}!", self.from, self.to)
            }
            // No transition fired; the status line just shows the square.
            None => write!(f, "Position: {}", self.to),
        }
    }
}

/// What a single `tick` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// A die was rolled.
    Rolled(DieRoll),

    /// The player moved one square.
    Stepped {
        position: Square,
        step: u8,
        roll: u8,
    },

    /// The move was resolved.
    Landed(Landing),

    /// The game is over; nothing happened.
    Finished,
}

impl std::fmt::Display for TickEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickEvent::Rolled(roll) if roll.forfeited => {
                write!(f, "Roll: {} - too far, turn lost", roll.value)
            }
            TickEvent::Rolled(roll) => write!(f, "Roll: {}", roll.value),
            TickEvent::Stepped { step, roll, .. } => {
                write!(f, "Roll: {roll} - Moving: {step}/{roll}")
            }
            TickEvent::Landed(landing) => write!(f, "{landing}"),
            TickEvent::Finished => write!(f, "Congratulations! You've won!"),
        }
    }
}

/// A finished or forfeited turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// Die value.
    pub roll: u8,

    /// Square the turn started on.
    pub start: Square,

    /// Squares visited one step at a time.
    /// At most six entries, so no heap allocation.
    pub path: SmallVec<[Square; 6]>,

    /// Resolution, `None` for a forfeited turn.
    pub landing: Option<Landing>,
}

impl TurnRecord {
    /// Was the turn lost to an overshoot?
    #[must_use]
    pub fn is_forfeited(&self) -> bool {
        self.landing.is_none()
    }

    /// Square the turn ended on.
    #[must_use]
    pub fn end(&self) -> Square {
        self.landing.map_or(self.start, |l| l.to)
    }
}
