//! Flag Runner - a three-lane endless runner simulation
//!
//! Core modules:
//! - `sim`: Run simulation (kinematics, spawning, collisions, progression)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and HUD live outside this crate. A host drives
//! [`sim::Simulation::tick`] once per frame and draws from the read-only
//! state and the per-frame [`sim::FrameDelta`].

pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GamePhase, RunState, Simulation};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Largest step a single tick will simulate (seconds)
    pub const MAX_DT: f32 = 0.05;

    /// Corridor geometry
    pub const LANE_COUNT: u8 = 3;
    pub const LANE_WIDTH: f32 = 3.0;
    /// Lane the player starts in (center)
    pub const START_LANE: u8 = 1;

    /// Objects are evicted once they are this far behind the player
    pub const CLEANUP_MARGIN: f32 = 20.0;

    /// Spawner spacing: each entry is placed a random gap in [MIN, MAX) further ahead
    pub const SPAWN_GAP_MIN: f32 = 8.0;
    pub const SPAWN_GAP_MAX: f32 = 23.0;
    /// Where the spawner starts, leaving a clear runway at the start of a run
    pub const FIRST_SPAWN_Z: f32 = -30.0;
    /// Spacing between pickups in a collectible line
    pub const COLLECTIBLE_LINE_SPACING: f32 = 3.0;
    pub const COLLECTIBLE_LINE_MIN: u32 = 3;
    pub const COLLECTIBLE_LINE_MAX: u32 = 6;
    /// Chance that an entry also gets a roadside prop
    pub const SCENERY_CHANCE: f64 = 0.4;
    /// Props sit this far from the corridor center, plus up to SCENERY_SPREAD
    pub const SCENERY_INNER_OFFSET: f32 = LANE_WIDTH * 2.0 + 2.0;
    pub const SCENERY_SPREAD: f32 = 5.0;

    /// Obstacle hitbox padding (added to half width / half depth)
    pub const OBSTACLE_PAD_X: f32 = 0.5;
    pub const OBSTACLE_PAD_Z: f32 = 0.3;
    /// Jumping clears an obstacle once above this fraction of its height
    pub const JUMP_CLEAR_FRACTION: f32 = 0.7;
    /// Only obstacles taller than this can be slid under
    pub const SLIDE_CLEAR_MIN_HEIGHT: f32 = 2.0;

    /// Pickup radii
    pub const COLLECTIBLE_RADIUS: f32 = 1.2;
    pub const MAGNET_RADIUS: f32 = 4.0;
    pub const POWERUP_RADIUS: f32 = 1.5;

    /// Combo multiplier grows by one every COMBO_THRESHOLD consecutive pickups
    pub const COMBO_THRESHOLD: u32 = 5;
    pub const COMBO_MULTIPLIER_CAP: u32 = 5;

    /// Speed factor while Time Warp is active
    pub const TIME_WARP_FACTOR: f32 = 0.5;

    /// Render heights for world objects
    pub const COLLECTIBLE_HEIGHT: f32 = 1.0;
    pub const POWERUP_HEIGHT: f32 = 1.2;
}

/// World X coordinate of a lane's center line
#[inline]
pub fn lane_x(lane: u8) -> f32 {
    (lane as f32 - (consts::LANE_COUNT - 1) as f32 / 2.0) * consts::LANE_WIDTH
}

/// Combo multiplier for a given combo count
#[inline]
pub fn combo_multiplier(combo: u32) -> u32 {
    (1 + combo / consts::COMBO_THRESHOLD).min(consts::COMBO_MULTIPLIER_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_x_is_centered() {
        assert_eq!(lane_x(0), -consts::LANE_WIDTH);
        assert_eq!(lane_x(1), 0.0);
        assert_eq!(lane_x(2), consts::LANE_WIDTH);
    }

    #[test]
    fn test_combo_multiplier_steps_and_caps() {
        assert_eq!(combo_multiplier(0), 1);
        assert_eq!(combo_multiplier(4), 1);
        assert_eq!(combo_multiplier(5), 2);
        assert_eq!(combo_multiplier(14), 3);
        assert_eq!(combo_multiplier(1000), consts::COMBO_MULTIPLIER_CAP);
    }
}
