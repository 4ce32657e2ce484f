//! Engine configuration.
//!
//! Callers configure the engine at construction by providing:
//! - `OvershootPolicy`: what happens when a roll would pass the finish
//! - `EngineConfig`: seed and policy combined
//!
//! The snake and ladder layout is configured separately through
//! `TransitionTable`.

use serde::{Deserialize, Serialize};

/// How rolls that would pass the finish square are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvershootPolicy {
    /// Extra steps are absorbed at the finish and the game is won.
    #[default]
    Cap,
    /// The finish must be reached exactly; an overshooting roll forfeits
    /// the turn.
    ExactLanding,
}

impl OvershootPolicy {
    /// Does a roll of `roll` from `distance` squares away forfeit the turn?
    #[must_use]
    pub const fn forfeits(self, distance_to_finish: u8, roll: u8) -> bool {
        match self {
            OvershootPolicy::Cap => false,
            OvershootPolicy::ExactLanding => roll > distance_to_finish,
        }
    }
}

impl std::fmt::Display for OvershootPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OvershootPolicy::Cap => write!(f, "cap"),
            OvershootPolicy::ExactLanding => write!(f, "exact landing"),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the die RNG.
    #[serde(default)]
    pub seed: u64,

    /// Overshoot handling.
    #[serde(default)]
    pub overshoot: OvershootPolicy,
}

impl EngineConfig {
    /// Create a configuration with the given seed and default policy.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            overshoot: OvershootPolicy::default(),
        }
    }

    /// Set the overshoot policy.
    #[must_use]
    pub fn with_overshoot(mut self, overshoot: OvershootPolicy) -> Self {
        self.overshoot = overshoot;
        self
    }

    /// Require exact landing on the finish square.
    #[must_use]
    pub fn exact_landing(self) -> Self {
        self.with_overshoot(OvershootPolicy::ExactLanding)
    }
}
