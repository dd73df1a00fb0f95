//! Property tests for run invariants over arbitrary frame sequences

use std::collections::HashMap;

use flag_runner::consts::{CLEANUP_MARGIN, MAX_DT};
use flag_runner::sim::{
    GameEvent, GamePhase, ObjectKind, PowerupKind, RunState, Spawner, TickInput, WorldDelta, tick,
};
use flag_runner::{Tuning, combo_multiplier};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn arb_input() -> impl Strategy<Value = TickInput> {
    (-1i8..=1, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(shift, jump, slide, autopilot)| TickInput {
            shift,
            jump,
            slide,
            pause: false,
            autopilot,
        },
    )
}

fn arb_frames() -> impl Strategy<Value = Vec<(f32, TickInput)>> {
    prop::collection::vec((0.001f32..0.2, arb_input()), 1..400)
}

fn playing_state(tuning: &Tuning) -> RunState {
    let mut state = RunState::new(tuning);
    state.phase = GamePhase::Playing;
    state
}

proptest! {
    #[test]
    fn distance_and_speed_never_decrease(seed in any::<u64>(), frames in arb_frames()) {
        let tuning = Tuning::default();
        let spawner = Spawner::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = playing_state(&tuning);
        let mut events: Vec<GameEvent> = Vec::new();

        for (dt, input) in &frames {
            let (distance, speed) = (state.distance, state.speed);
            tick(&mut state, input, *dt, &tuning, &spawner, &mut rng, &mut events);
            prop_assert!(state.distance >= distance);
            prop_assert!(state.speed >= speed);
            prop_assert!(state.speed <= tuning.max_speed);
            // One frame never moves further than a clamped step at top speed
            prop_assert!(state.distance - distance <= tuning.max_speed * MAX_DT + 1e-3);
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    #[test]
    fn stance_and_combo_invariants_hold(seed in any::<u64>(), frames in arb_frames()) {
        let tuning = Tuning::default();
        let spawner = Spawner::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = playing_state(&tuning);
        let mut events: Vec<GameEvent> = Vec::new();

        for (dt, input) in &frames {
            tick(&mut state, input, *dt, &tuning, &spawner, &mut rng, &mut events);
            prop_assert!(!(state.is_jumping && state.is_sliding));
            prop_assert!(state.player_y >= 0.0);
            prop_assert!(state.lane == state.target_lane);
            prop_assert!(state.max_combo >= state.combo);
            prop_assert_eq!(state.combo_multiplier(), combo_multiplier(state.combo));
            prop_assert!(state.combo_multiplier() >= 1);
        }
    }

    #[test]
    fn shield_prevents_crashes(seed in any::<u64>(), frames in arb_frames()) {
        let tuning = Tuning::default();
        let spawner = Spawner::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = playing_state(&tuning);
        let mut events: Vec<GameEvent> = Vec::new();

        for (dt, input) in &frames {
            // Keep the shield topped up and never pick up a different power-up
            state.active_powerup = Some(PowerupKind::Shield);
            state.powerup_timer = 100.0;
            state.objects.retain(|o| !matches!(o.kind, ObjectKind::Powerup { .. }));
            tick(&mut state, input, *dt, &tuning, &spawner, &mut rng, &mut events);
            prop_assert_ne!(state.phase, GamePhase::Dead);
        }
    }

    #[test]
    fn missed_flags_break_the_combo(seed in any::<u64>(), frames in arb_frames()) {
        let tuning = Tuning::default();
        let spawner = Spawner::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = playing_state(&tuning);
        let mut events: Vec<GameEvent> = Vec::new();

        for (dt, input) in &frames {
            let collectibles: HashMap<u32, f32> = state
                .objects
                .iter()
                .filter(|o| matches!(o.kind, ObjectKind::Collectible { .. }))
                .map(|o| (o.id, o.world_z))
                .collect();
            let delta = tick(&mut state, input, *dt, &tuning, &spawner, &mut rng, &mut events);
            if state.phase != GamePhase::Playing {
                break;
            }
            let limit = -state.distance + CLEANUP_MARGIN;
            let missed = delta.changes.iter().any(|change| match change {
                WorldDelta::Removed(id) => collectibles.get(id).is_some_and(|z| *z > limit),
                WorldDelta::Added(_) => false,
            });
            if missed {
                prop_assert_eq!(state.combo, 0);
            }
        }
    }

    #[test]
    fn live_objects_stay_inside_the_window(seed in any::<u64>(), frames in arb_frames()) {
        let tuning = Tuning::default();
        let spawner = Spawner::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = playing_state(&tuning);
        let mut events: Vec<GameEvent> = Vec::new();

        for (dt, input) in &frames {
            let previous_spawn_z = state.last_spawn_z;
            tick(&mut state, input, *dt, &tuning, &spawner, &mut rng, &mut events);
            prop_assert!(state.last_spawn_z <= previous_spawn_z);
            prop_assert!(state.objects.iter().all(|o| !o.collected));
            // The world freezes at impact, before cleanup
            if state.phase != GamePhase::Playing {
                break;
            }
            let limit = -state.distance + CLEANUP_MARGIN;
            prop_assert!(state.objects.iter().all(|o| o.world_z <= limit));
        }
    }
}
