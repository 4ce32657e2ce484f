//! The move engine: a tick-driven state machine for one player.
//!
//! The engine has no notion of time. A caller drives it one operation at a
//! time, either explicitly (`roll_die`, `advance_one_step`,
//! `resolve_landing`) or through `tick`, which performs whichever of those
//! the current phase calls for. Pacing and animation belong to the caller.
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::board::TransitionTable;
//! use snakes_ladders::core::EngineConfig;
//! use snakes_ladders::engine::{MoveEngine, Phase};
//!
//! let table = TransitionTable::builder().ladder(4, 25).build().unwrap();
//! let mut engine = MoveEngine::new(table, EngineConfig::default());
//!
//! engine.apply_roll(3).unwrap();
//! while engine.phase() == Phase::Advancing {
//!     engine.advance_one_step().unwrap();
//! }
//! let landing = engine.resolve_landing().unwrap();
//!
//! assert_eq!(landing.to.number(), 25);
//! assert_eq!(engine.phase(), Phase::Idle);
//! ```

use im::Vector;
use log::{debug, info, trace};
use smallvec::SmallVec;

use super::error::EngineError;
use super::event::{DieRoll, Landing, TickEvent, TurnRecord};
use super::state::{Phase, PlayerState};
use crate::board::TransitionTable;
use crate::core::{EngineConfig, GameRng, Square, DIE_FACES};

/// Single-player move engine.
///
/// Owns the player state, the die RNG and the turn history. Cloning is
/// cheap: the history is an `im` vector.
#[derive(Clone, Debug)]
pub struct MoveEngine {
    table: TransitionTable,
    config: EngineConfig,
    rng: GameRng,
    state: PlayerState,
    /// Turn being walked, moved into `history` once resolved.
    current: Option<TurnRecord>,
    history: Vector<TurnRecord>,
}

impl MoveEngine {
    /// Create an engine at the start square.
    #[must_use]
    pub fn new(table: TransitionTable, config: EngineConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            table,
            config,
            state: PlayerState::initial(),
            current: None,
            history: Vector::new(),
        }
    }

    /// Engine on the classic board with the default overshoot policy.
    #[must_use]
    pub fn classic(seed: u64) -> Self {
        Self::new(TransitionTable::classic(), EngineConfig::new(seed))
    }

    // === Observation ===

    /// Current square.
    #[must_use]
    pub fn position(&self) -> Square {
        self.state.position
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Snapshot of the player state.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Last die value, 0 before the first roll.
    #[must_use]
    pub fn last_roll(&self) -> u8 {
        self.state.last_roll
    }

    /// Steps left in the current roll.
    #[must_use]
    pub fn steps_remaining(&self) -> u8 {
        self.state.steps_remaining
    }

    /// Steps of the current roll are still being walked.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.state.is_moving()
    }

    /// The player has reached square 100.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Number of completed or forfeited turns.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.history.len() as u32
    }

    /// Completed turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// The snakes and ladders this engine plays on.
    #[must_use]
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Seed and overshoot policy.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Operations ===

    /// Roll the die and start moving.
    ///
    /// Returns `None` without touching state unless the engine is idle.
    pub fn roll_die(&mut self) -> Option<DieRoll> {
        if self.state.phase != Phase::Idle {
            debug!("[MoveEngine] roll ignored while {}", self.state.phase);
            return None;
        }
        let value = self.rng.roll_die();
        Some(self.begin_turn(value))
    }

    /// Start moving with a chosen die value.
    ///
    /// Behaves like `roll_die` but takes the value from the caller, for
    /// scripted dice and replays.
    pub fn apply_roll(&mut self, value: u8) -> Result<Option<DieRoll>, EngineError> {
        if !(1..=DIE_FACES).contains(&value) {
            return Err(EngineError::InvalidRoll(value));
        }
        if self.state.phase != Phase::Idle {
            debug!("[MoveEngine] roll ignored while {}", self.state.phase);
            return Ok(None);
        }
        Ok(Some(self.begin_turn(value)))
    }

    /// Move one square forward.
    pub fn advance_one_step(&mut self) -> Result<Square, EngineError> {
        if self.state.phase != Phase::Advancing {
            return Err(EngineError::InvalidPhase {
                operation: "advance_one_step",
                phase: self.state.phase,
            });
        }
        Ok(self.step())
    }

    /// Apply the snake or ladder on the current square, then check for a win.
    ///
    /// Only one transition is applied: landing on another head via a snake
    /// or ladder does not chain. Outside `Resolving` this is a no-op that
    /// reports the current square, except while advancing, where it fails.
    pub fn resolve_landing(&mut self) -> Result<Landing, EngineError> {
        match self.state.phase {
            Phase::Resolving => Ok(self.land()),
            Phase::Idle | Phase::Finished => Ok(Landing::stay(self.state.position)),
            Phase::Advancing => Err(EngineError::InvalidPhase {
                operation: "resolve_landing",
                phase: self.state.phase,
            }),
        }
    }

    /// Return to the start square, clearing the history.
    ///
    /// The die stream is not reseeded.
    pub fn reset(&mut self) {
        debug!("[MoveEngine] reset from {} at {}", self.state.phase, self.state.position);
        self.state = PlayerState::initial();
        self.current = None;
        self.history = Vector::new();
    }

    /// Perform the next operation the current phase calls for.
    pub fn tick(&mut self) -> TickEvent {
        match self.state.phase {
            Phase::Idle => {
                let value = self.rng.roll_die();
                TickEvent::Rolled(self.begin_turn(value))
            }
            Phase::Advancing => {
                let position = self.step();
                TickEvent::Stepped {
                    position,
                    step: self.current.as_ref().map_or(0, |t| t.path.len() as u8),
                    roll: self.state.last_roll,
                }
            }
            Phase::Resolving => TickEvent::Landed(self.land()),
            Phase::Finished => TickEvent::Finished,
        }
    }

    /// Tick until the current turn is over and return its record.
    ///
    /// Starts a new turn when idle, or completes the one in progress.
    /// Returns `None` once the game is finished.
    pub fn play_turn(&mut self) -> Option<TurnRecord> {
        if self.is_finished() {
            return None;
        }
        let before = self.history.len();
        while self.history.len() == before {
            self.tick();
        }
        self.history.last().cloned()
    }

    /// Play whole turns until the game is won or `max_turns` more turns
    /// have been played. Returns whether the game is finished.
    pub fn play_to_finish(&mut self, max_turns: u32) -> bool {
        for _ in 0..max_turns {
            if self.play_turn().is_none() {
                break;
            }
        }
        self.is_finished()
    }

    // === Internals ===

    fn begin_turn(&mut self, value: u8) -> DieRoll {
        let start = self.state.position;
        self.state.last_roll = value;
        let turn = self.turn_count() + 1;

        if self.config.overshoot.forfeits(start.distance_to_finish(), value) {
            debug!("[MoveEngine] turn {turn}: roll {value} from {start} overshoots, forfeited");
            self.history.push_back(TurnRecord {
                turn,
                roll: value,
                start,
                path: SmallVec::new(),
                landing: None,
            });
            return DieRoll {
                value,
                forfeited: true,
            };
        }

        debug!("[MoveEngine] turn {turn}: rolled {value} at {start}");
        self.state.steps_remaining = value;
        self.state.phase = Phase::Advancing;
        self.current = Some(TurnRecord {
            turn,
            roll: value,
            start,
            path: SmallVec::new(),
            landing: None,
        });
        DieRoll {
            value,
            forfeited: false,
        }
    }

    /// One step forward; caller guarantees `Advancing`.
    fn step(&mut self) -> Square {
        let position = self.state.position.step_forward();
        self.state.position = position;
        self.state.steps_remaining = self.state.steps_remaining.saturating_sub(1);
        if let Some(turn) = self.current.as_mut() {
            turn.path.push(position);
        }
        trace!("[MoveEngine] step to {position}, {} left", self.state.steps_remaining);

        if self.state.steps_remaining == 0 || position.is_finish() {
            self.state.steps_remaining = 0;
            self.state.phase = Phase::Resolving;
        }
        position
    }

    /// Apply the transition table; caller guarantees `Resolving`.
    fn land(&mut self) -> Landing {
        let from = self.state.position;
        let landing = match self.table.transition_at(from) {
            Some(t) => Landing {
                from,
                to: t.to,
                kind: Some(t.kind),
            },
            None => Landing::stay(from),
        };
        if landing.kind.is_some() {
            debug!("[MoveEngine] {landing}");
        }

        self.state.position = landing.to;
        self.state.phase = if landing.to.is_finish() {
            info!("[MoveEngine] finished after {} turns", self.turn_count() + 1);
            Phase::Finished
        } else {
            Phase::Idle
        };

        if let Some(mut turn) = self.current.take() {
            turn.landing = Some(landing);
            self.history.push_back(turn);
        }
        landing
    }
}
