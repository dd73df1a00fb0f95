//! Run state and world objects
//!
//! Everything the simulation mutates lives in [`RunState`]. Presentation only
//! ever sees it through a shared reference.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::catalog::{CollectibleKind, ObstacleKind, PowerupKind};
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{combo_multiplier, lane_x};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the run to start
    Title,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended (crash or victory, see [`RunOutcome`])
    Dead,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Crashed(ObstacleKind),
    Victory,
}

/// What a world object is, with its placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    Obstacle { kind: ObstacleKind, lane: u8 },
    Collectible { kind: CollectibleKind, lane: u8 },
    Powerup { kind: PowerupKind, lane: u8 },
    /// Roadside prop; never collides
    Scenery { x: f32 },
}

impl ObjectKind {
    /// Lateral world position
    pub fn x(&self) -> f32 {
        match *self {
            ObjectKind::Obstacle { lane, .. }
            | ObjectKind::Collectible { lane, .. }
            | ObjectKind::Powerup { lane, .. } => lane_x(lane),
            ObjectKind::Scenery { x } => x,
        }
    }

    /// Height at which presentation should place the object
    pub fn height(&self) -> f32 {
        match self {
            ObjectKind::Obstacle { kind, .. } => kind.spec().height / 2.0,
            ObjectKind::Collectible { .. } => COLLECTIBLE_HEIGHT,
            ObjectKind::Powerup { .. } => POWERUP_HEIGHT,
            ObjectKind::Scenery { .. } => 0.0,
        }
    }
}

/// A spawned entity in the corridor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldObject {
    pub id: u32,
    pub kind: ObjectKind,
    /// Fixed spawn coordinate. Negative is ahead of the start line.
    pub world_z: f32,
    pub collected: bool,
}

impl WorldObject {
    /// Z relative to the player (player sits at 0, ahead is negative)
    #[inline]
    pub fn relative_z(&self, distance: f32) -> f32 {
        self.world_z + distance
    }

    /// Where presentation should draw this object this frame
    pub fn render_position(&self, distance: f32) -> Vec3 {
        Vec3::new(self.kind.x(), self.kind.height(), self.relative_z(distance))
    }
}

/// Complete run state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub phase: GamePhase,
    /// Set when phase becomes Dead
    pub outcome: Option<RunOutcome>,
    /// Distance travelled
    pub distance: f32,
    /// Distance at the start of the current frame
    pub frame_start_distance: f32,
    pub speed: f32,
    /// Seconds spent Playing
    pub elapsed: f32,

    /// Logical lane (always equal to target_lane)
    pub lane: u8,
    pub target_lane: u8,
    /// Visual lateral position, eases toward the target lane
    pub player_x: f32,
    /// Height above ground (0 = on the ground)
    pub player_y: f32,
    pub vertical_velocity: f32,
    pub is_jumping: bool,
    pub is_sliding: bool,
    pub slide_timer: f32,

    pub score: f64,
    pub flags_collected: u32,
    /// Consecutive collectibles without a miss
    pub combo: u32,
    pub max_combo: u32,
    pub flagic: u32,

    pub active_powerup: Option<PowerupKind>,
    pub powerup_timer: f32,

    /// Next milestone to announce
    pub milestone_index: usize,
    /// Zone the player is currently in
    pub zone_index: usize,

    /// Live world objects in spawn order
    pub objects: Vec<WorldObject>,
    /// Farthest-ahead Z the spawner has filled
    pub last_spawn_z: f32,

    next_id: u32,
}

impl RunState {
    /// Fresh state on the title screen
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Title,
            outcome: None,
            distance: 0.0,
            frame_start_distance: 0.0,
            speed: tuning.base_speed,
            elapsed: 0.0,
            lane: START_LANE,
            target_lane: START_LANE,
            player_x: lane_x(START_LANE),
            player_y: 0.0,
            vertical_velocity: 0.0,
            is_jumping: false,
            is_sliding: false,
            slide_timer: 0.0,
            score: 0.0,
            flags_collected: 0,
            combo: 0,
            max_combo: 0,
            flagic: 0,
            active_powerup: None,
            powerup_timer: 0.0,
            milestone_index: 0,
            zone_index: 0,
            objects: Vec::new(),
            last_spawn_z: FIRST_SPAWN_Z,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace this run with a fresh one on the title screen.
    ///
    /// Entity IDs keep counting up so they never repeat within a session.
    pub fn reset(&mut self, tuning: &Tuning) {
        let next_id = self.next_id;
        *self = Self::new(tuning);
        self.next_id = next_id;
    }

    /// Append a new object to the registry and return a copy of it
    pub fn spawn_object(&mut self, kind: ObjectKind, world_z: f32) -> WorldObject {
        let object = WorldObject {
            id: self.next_entity_id(),
            kind,
            world_z,
            collected: false,
        };
        self.objects.push(object);
        object
    }

    /// Current score multiplier, derived from the combo
    #[inline]
    pub fn combo_multiplier(&self) -> u32 {
        combo_multiplier(self.combo)
    }

    pub fn has_powerup(&self, kind: PowerupKind) -> bool {
        self.active_powerup == Some(kind)
    }

    /// Display name of the obstacle that ended the run
    pub fn death_cause(&self) -> Option<&'static str> {
        match self.outcome {
            Some(RunOutcome::Crashed(kind)) => Some(kind.name()),
            _ => None,
        }
    }

    pub fn is_victory(&self) -> bool {
        self.outcome == Some(RunOutcome::Victory)
    }

    /// Whole-number score for display
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }
}
