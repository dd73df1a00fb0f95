//! Player movement and speed ramp
//!
//! Also owns the input intents, since they only touch kinematic state.

use super::catalog::PowerupKind;
use super::events::{EventSink, GameEvent};
use super::state::{GamePhase, RunState};
use crate::consts::*;
use crate::lane_x;
use crate::tuning::Tuning;

impl RunState {
    /// Move one lane left (-1) or right (+1). Returns false if rejected.
    pub fn shift_lane(&mut self, direction: i8) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let target = self.target_lane as i16 + direction.signum() as i16;
        if direction == 0 || !(0..LANE_COUNT as i16).contains(&target) {
            return false;
        }
        self.target_lane = target as u8;
        self.lane = self.target_lane;
        true
    }

    /// Start a jump. No double jumps; an active slide is cancelled.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if self.phase != GamePhase::Playing || self.is_jumping {
            return false;
        }
        self.is_sliding = false;
        self.slide_timer = 0.0;
        self.is_jumping = true;
        self.vertical_velocity = tuning.jump_velocity;
        true
    }

    /// Start a slide. Only from the ground and not while already sliding.
    pub fn slide(&mut self, tuning: &Tuning) -> bool {
        if self.phase != GamePhase::Playing || self.is_jumping || self.is_sliding {
            return false;
        }
        self.is_sliding = true;
        self.slide_timer = tuning.slide_duration;
        true
    }

    /// Forward speed after power-up effects
    pub fn effective_speed(&self) -> f32 {
        if self.has_powerup(PowerupKind::TimeWarp) {
            self.speed * TIME_WARP_FACTOR
        } else {
            self.speed
        }
    }
}

/// Advance speed, distance, lateral easing, jump, slide and power-up timer
pub fn update_kinematics(
    state: &mut RunState,
    tuning: &Tuning,
    dt: f32,
    events: &mut impl EventSink,
) {
    state.speed = (state.speed + tuning.speed_increase_rate * dt).min(tuning.max_speed);

    let effective = state.effective_speed();
    state.frame_start_distance = state.distance;
    state.distance += effective * dt;
    state.score += (effective * dt * tuning.distance_points_per_unit) as f64;
    state.elapsed += dt;

    // Ease toward the target lane
    let target_x = lane_x(state.target_lane);
    let t = (tuning.lane_switch_speed * dt).min(1.0);
    state.player_x += (target_x - state.player_x) * t;

    if state.is_jumping {
        state.vertical_velocity -= tuning.gravity * dt;
        state.player_y += state.vertical_velocity * dt;
        if state.player_y <= 0.0 {
            state.player_y = 0.0;
            state.vertical_velocity = 0.0;
            state.is_jumping = false;
        }
    }

    if state.is_sliding {
        state.slide_timer -= dt;
        if state.slide_timer <= 0.0 {
            state.slide_timer = 0.0;
            state.is_sliding = false;
        }
    }

    if let Some(kind) = state.active_powerup {
        state.powerup_timer -= dt;
        if state.powerup_timer <= 0.0 {
            state.powerup_timer = 0.0;
            state.active_powerup = None;
            events.notify(GameEvent::PowerupExpired { name: kind.name() });
        }
    }
}
