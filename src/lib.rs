//! # snakes-ladders
//!
//! A Snakes and Ladders game engine driven by explicit ticks.
//!
//! ## Design Principles
//!
//! 1. **No Hidden Clock**: The engine never sleeps or schedules. Callers
//!    advance it one roll, step, or resolution at a time and animate at
//!    whatever cadence they like.
//!
//! 2. **Configuration Over Convention**: Snake and ladder layouts are data
//!    (`TransitionTable`), validated once at construction. Overshoot
//!    handling is a policy (`OvershootPolicy`).
//!
//! 3. **Deterministic**: Dice come from a seeded ChaCha8 stream, so a seed
//!    reproduces a whole game.
//!
//! ## Modules
//!
//! - `core`: Squares, cells, errors, RNG, configuration
//! - `board`: Zigzag topology and snake/ladder tables
//! - `engine`: Move state machine and turn records

pub mod core;
pub mod board;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Cell, Square,
    BoardError, ConfigError,
    GameRng, GameRngState,
    EngineConfig, OvershootPolicy,
};

pub use crate::board::{
    square_to_cell, cell_to_square,
    Transition, TransitionKind, TransitionTable,
};

pub use crate::engine::{
    MoveEngine, Phase, PlayerState, EngineError,
    DieRoll, Landing, TickEvent, TurnRecord,
};
