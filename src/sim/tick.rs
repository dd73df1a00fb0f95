//! Per-frame simulation tick
//!
//! Core game loop that advances the run by one variable-length frame.

use rand::Rng;

use super::autopilot;
use super::catalog::{MILESTONES, ZONES};
use super::collision::{cleanup, resolve_collisions};
use super::events::{EventSink, FrameDelta};
use super::kinematics::update_kinematics;
use super::progression::update_progression;
use super::spawn::Spawner;
use super::state::{GamePhase, RunState};
use crate::consts::MAX_DT;
use crate::tuning::Tuning;

/// Input intents gathered since the last tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Lane change: -1 left, +1 right, 0 none
    pub shift: i8,
    pub jump: bool,
    pub slide: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - the autopilot plays the run
    pub autopilot: bool,
}

/// Clamp a frame delta to a safe step. Returns None for frames that must not advance.
pub fn sanitize_dt(dt: f32) -> Option<f32> {
    if dt.is_nan() || dt < 0.0 {
        log::warn!("Ignoring invalid frame delta {}", dt);
        return None;
    }
    if dt == 0.0 {
        return None;
    }
    // +inf clamps to MAX_DT like any other hitch
    Some(dt.min(MAX_DT))
}

/// Advance the run by one frame
pub fn tick<R: Rng + ?Sized>(
    state: &mut RunState,
    input: &TickInput,
    dt: f32,
    tuning: &Tuning,
    spawner: &Spawner,
    rng: &mut R,
    events: &mut impl EventSink,
) -> FrameDelta {
    let mut delta = FrameDelta::default();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::debug!("Paused at distance {:.0}", state.distance);
                return delta;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    // Only a running game advances
    if state.phase != GamePhase::Playing {
        return delta;
    }

    let Some(dt) = sanitize_dt(dt) else {
        return delta;
    };

    let steered;
    let input = if input.autopilot {
        steered = autopilot::steer(state);
        &steered
    } else {
        input
    };

    if input.shift != 0 {
        state.shift_lane(input.shift);
    }
    if input.jump {
        state.jump(tuning);
    }
    if input.slide {
        state.slide(tuning);
    }

    update_kinematics(state, tuning, dt, events);
    spawner.populate(state, tuning, rng, &mut delta);
    resolve_collisions(state, &mut delta, events);
    // A crash freezes the world as it was at impact
    if state.phase != GamePhase::Playing {
        return delta;
    }
    cleanup(state, &mut delta);
    update_progression(state, ZONES, MILESTONES, tuning, events);

    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CLEANUP_MARGIN;
    use crate::sim::catalog::{CollectibleKind, ObstacleKind};
    use crate::sim::events::GameEvent;
    use crate::sim::state::ObjectKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Rig {
        state: RunState,
        tuning: Tuning,
        spawner: Spawner,
        rng: Pcg32,
        events: Vec<GameEvent>,
    }

    impl Rig {
        fn new(seed: u64) -> Self {
            let tuning = Tuning::default();
            let mut state = RunState::new(&tuning);
            state.phase = GamePhase::Playing;
            Self {
                state,
                tuning,
                spawner: Spawner::default(),
                rng: Pcg32::seed_from_u64(seed),
                events: Vec::new(),
            }
        }

        fn step(&mut self, input: &TickInput, dt: f32) -> FrameDelta {
            tick(
                &mut self.state,
                input,
                dt,
                &self.tuning,
                &self.spawner,
                &mut self.rng,
                &mut self.events,
            )
        }
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), Some(0.016));
        assert_eq!(sanitize_dt(1.0), Some(MAX_DT));
        assert_eq!(sanitize_dt(f32::INFINITY), Some(MAX_DT));
        assert_eq!(sanitize_dt(0.0), None);
        assert_eq!(sanitize_dt(-0.1), None);
        assert_eq!(sanitize_dt(f32::NAN), None);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut rig = Rig::new(1);
        rig.step(&TickInput::default(), 5.0);
        let max_step = (rig.tuning.base_speed + rig.tuning.speed_increase_rate * MAX_DT) * MAX_DT;
        assert!(rig.state.distance <= max_step + 1e-5);
        assert!(rig.state.distance > 0.0);
    }

    #[test]
    fn test_invalid_dt_does_not_advance() {
        let mut rig = Rig::new(1);
        rig.step(&TickInput::default(), f32::NAN);
        rig.step(&TickInput::default(), -1.0);
        assert_eq!(rig.state.distance, 0.0);
        assert!(rig.state.objects.is_empty());
    }

    #[test]
    fn test_title_does_not_tick() {
        let mut rig = Rig::new(1);
        rig.state.phase = GamePhase::Title;
        let delta = rig.step(&TickInput::default(), 0.016);
        assert!(delta.is_empty());
        assert_eq!(rig.state.distance, 0.0);
    }

    #[test]
    fn test_pause_toggle() {
        let mut rig = Rig::new(1);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        rig.step(&pause, 0.016);
        assert_eq!(rig.state.phase, GamePhase::Paused);
        let frozen = rig.state.distance;
        rig.step(&TickInput::default(), 0.016);
        assert_eq!(rig.state.distance, frozen);
        rig.step(&pause, 0.016);
        assert_eq!(rig.state.phase, GamePhase::Playing);
        assert!(rig.state.distance > frozen);
    }

    #[test]
    fn test_first_tick_populates_world() {
        let mut rig = Rig::new(3);
        let delta = rig.step(&TickInput::default(), 0.016);
        assert!(delta.added_objects().count() > 0);
        assert_eq!(delta.added_objects().count(), rig.state.objects.len());
    }

    #[test]
    fn test_intents_applied_through_input() {
        let mut rig = Rig::new(1);
        rig.step(
            &TickInput {
                shift: -1,
                jump: true,
                ..Default::default()
            },
            0.016,
        );
        assert_eq!(rig.state.lane, 0);
        assert!(rig.state.is_jumping);
        assert!(rig.state.player_y > 0.0);
    }

    #[test]
    fn test_crash_stops_further_ticks() {
        let mut rig = Rig::new(1);
        // Fill far ahead so the spawner stays out of the way
        rig.state.last_spawn_z = -10_000.0;
        let z = -rig.state.distance - 0.5;
        rig.state.spawn_object(
            ObjectKind::Obstacle {
                kind: ObstacleKind::Crate,
                lane: 1,
            },
            z,
        );
        rig.step(&TickInput::default(), 0.016);
        assert_eq!(rig.state.phase, GamePhase::Dead);
        assert_eq!(rig.state.death_cause(), Some("Crate"));

        let distance = rig.state.distance;
        rig.step(&TickInput::default(), 0.016);
        assert_eq!(rig.state.distance, distance);
        assert_eq!(rig.events, vec![GameEvent::Died { cause: "Crate" }]);
    }

    #[test]
    fn test_crash_skips_cleanup_in_same_frame() {
        let mut rig = Rig::new(1);
        rig.state.last_spawn_z = -10_000.0;
        rig.state.combo = 4;
        // About to scroll past the cleanup margin this frame
        let flag = rig.state.spawn_object(
            ObjectKind::Collectible {
                kind: CollectibleKind::Pennant,
                lane: 0,
            },
            CLEANUP_MARGIN - 0.1,
        );
        rig.state.spawn_object(
            ObjectKind::Obstacle {
                kind: ObstacleKind::Crate,
                lane: 1,
            },
            -0.5,
        );
        let delta = rig.step(&TickInput::default(), 0.016);
        assert_eq!(rig.state.phase, GamePhase::Dead);
        assert_eq!(rig.state.combo, 4);
        assert!(rig.state.objects.iter().any(|o| o.id == flag.id));
        assert_eq!(delta.removed_ids().count(), 0);
    }

    #[test]
    fn test_victory_once_through_tick() {
        let mut rig = Rig::new(1);
        rig.state.last_spawn_z = -100_000.0;
        rig.state.distance = rig.tuning.victory_distance - 0.1;
        rig.state.milestone_index = MILESTONES.len();
        rig.state.zone_index = ZONES.len() - 1;
        for _ in 0..10 {
            rig.step(&TickInput::default(), 0.016);
        }
        assert!(rig.state.is_victory());
        let victories = rig
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Victory))
            .count();
        assert_eq!(victories, 1);
    }

    #[test]
    fn test_determinism() {
        // Two rigs with the same seed and inputs stay identical
        let mut a = Rig::new(99999);
        let mut b = Rig::new(99999);
        let inputs = [
            TickInput {
                shift: 1,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                slide: true,
                ..Default::default()
            },
            TickInput {
                autopilot: true,
                ..Default::default()
            },
        ];
        for i in 0..400 {
            let input = &inputs[i % inputs.len()];
            a.step(input, 0.016);
            b.step(input, 0.016);
        }
        assert_eq!(a.state.distance, b.state.distance);
        assert_eq!(a.state.score, b.state.score);
        assert_eq!(a.state.objects, b.state.objects);
        assert_eq!(a.events, b.events);
    }
}
