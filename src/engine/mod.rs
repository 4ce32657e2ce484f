//! Move engine: player state, the turn state machine and its events.
//!
//! The engine owns everything that changes during play. It reads the board
//! through `TransitionTable` and never mutates it.

pub mod state;
pub mod error;
pub mod event;
pub mod machine;

pub use state::{Phase, PlayerState};
pub use error::EngineError;
pub use event::{DieRoll, Landing, TickEvent, TurnRecord};
pub use machine::MoveEngine;
