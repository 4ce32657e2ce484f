//! Board topology and transition tables.
//!
//! - `topology`: zigzag square ↔ cell mapping and screen helpers
//! - `transitions`: validated snake and ladder tables
//! - `presets`: built-in layouts
//!
//! Nothing here changes at runtime; the move engine only reads it.

pub mod topology;
pub mod transitions;
pub mod presets;

pub use topology::{cell_to_square, square_center, square_to_cell};
pub use transitions::{Transition, TransitionKind, TransitionTable, TransitionTableBuilder};
pub use presets::{CLASSIC_LADDERS, CLASSIC_SNAKES};
