//! Run lifecycle
//!
//! [`Simulation`] owns the run state, the balance tuning and the seeded RNG,
//! and is the only thing that mutates them.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::events::{EventSink, FrameDelta};
use super::spawn::Spawner;
use super::state::{GamePhase, RunOutcome, RunState};
use super::tick::{TickInput, tick};
use crate::tuning::Tuning;

/// End-of-run (or in-progress) statistics for display or export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub score: u64,
    pub distance: f32,
    pub flags_collected: u32,
    pub max_combo: u32,
    pub flagic: u32,
    /// Seconds of play
    pub elapsed: f32,
    pub outcome: Option<RunOutcome>,
}

/// A single run, start to finish
#[derive(Debug, Clone)]
pub struct Simulation {
    seed: u64,
    state: RunState,
    tuning: Tuning,
    spawner: Spawner,
    rng: Pcg32,
}

impl Simulation {
    /// New run on the title screen with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            state: RunState::new(&tuning),
            tuning,
            spawner: Spawner::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Read-only view for presentation
    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Leave the title screen. Does nothing in any other phase.
    pub fn start_run(&mut self) {
        if self.state.phase == GamePhase::Title {
            log::info!("Run started (seed {})", self.seed);
            self.state.phase = GamePhase::Playing;
        }
    }

    /// Throw away the current run and start a fresh one with the same seed.
    ///
    /// Returns a removal for every object of the old run so presentation can
    /// drop them. New objects get IDs never used before.
    pub fn restart(&mut self) -> FrameDelta {
        log::info!("Restarting run (seed {})", self.seed);
        let mut delta = FrameDelta::default();
        for object in &self.state.objects {
            delta.removed(object.id);
        }
        self.state.reset(&self.tuning);
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.state.phase = GamePhase::Playing;
        delta
    }

    pub fn shift_lane(&mut self, direction: i8) -> bool {
        self.state.shift_lane(direction)
    }

    pub fn jump(&mut self) -> bool {
        self.state.jump(&self.tuning)
    }

    pub fn slide(&mut self) -> bool {
        self.state.slide(&self.tuning)
    }

    /// Pause a running game or resume a paused one
    pub fn toggle_pause(&mut self) {
        self.state.phase = match self.state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    /// Advance one frame with no new input
    pub fn tick(&mut self, dt: f32, events: &mut impl EventSink) -> FrameDelta {
        self.tick_with_input(&TickInput::default(), dt, events)
    }

    /// Advance one frame, applying batched input first
    pub fn tick_with_input(
        &mut self,
        input: &TickInput,
        dt: f32,
        events: &mut impl EventSink,
    ) -> FrameDelta {
        tick(
            &mut self.state,
            input,
            dt,
            &self.tuning,
            &self.spawner,
            &mut self.rng,
            events,
        )
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == GamePhase::Dead
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            score: self.state.display_score(),
            distance: self.state.distance,
            flags_collected: self.state.flags_collected,
            max_combo: self.state.max_combo,
            flagic: self.state.flagic,
            elapsed: self.state.elapsed,
            outcome: self.state.outcome,
        }
    }
}
