//! Core engine types: squares, cells, errors, RNG, configuration.
//!
//! This module contains the building blocks shared by the board topology
//! and the move engine.

pub mod square;
pub mod error;
pub mod rng;
pub mod config;

pub use square::{Cell, Square, COLS, ROWS, SQUARE_COUNT};
pub use error::{BoardError, ConfigError};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use config::{EngineConfig, OvershootPolicy};
