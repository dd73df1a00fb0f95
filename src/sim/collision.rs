//! Collision detection and response
//!
//! Everything is axis-aligned proximity in the XZ plane between the player
//! (at z = 0, lateral position `player_x`) and each object's scrolled
//! position. Vertical clearance only matters for obstacles.
//!
//! Along the track the test is swept: an object overlaps if any point of the
//! stretch the player covered this frame falls inside its hitbox, so thin
//! obstacles cannot be skipped at high speed.

use super::catalog::{CollectibleKind, ObstacleKind, PowerupKind};
use super::events::{EventSink, FrameDelta, GameEvent};
use super::state::{GamePhase, ObjectKind, RunOutcome, RunState};
use crate::consts::*;

/// How an obstacle overlap resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleContact {
    /// Player is high enough above it
    ClearedByJump,
    /// Player is sliding under a tall obstacle
    ClearedBySlide,
    /// Shield destroys the obstacle
    Shielded,
    /// Run ends
    Fatal,
}

/// True if the offsets fall inside the half extents on both axes
#[inline]
pub fn within(dx: f32, dz: f32, half_x: f32, half_z: f32) -> bool {
    dx.abs() < half_x && dz.abs() < half_z
}

/// Closest an object came to the player along the track while distance
/// moved from `from` to `to`
pub fn swept_dz(world_z: f32, from: f32, to: f32) -> f32 {
    let start = world_z + from;
    let end = world_z + to;
    if start <= 0.0 && end >= 0.0 {
        0.0
    } else {
        start.abs().min(end.abs())
    }
}

/// Hitbox half extents (x, z) of an obstacle
pub fn obstacle_half_extents(kind: ObstacleKind) -> (f32, f32) {
    let spec = kind.spec();
    (spec.width / 2.0 + OBSTACLE_PAD_X, spec.depth / 2.0 + OBSTACLE_PAD_Z)
}

/// Decide the result of touching an obstacle given the player's stance
pub fn obstacle_contact(state: &RunState, kind: ObstacleKind) -> ObstacleContact {
    let height = kind.spec().height;
    if state.player_y > height * JUMP_CLEAR_FRACTION {
        ObstacleContact::ClearedByJump
    } else if state.is_sliding && height > SLIDE_CLEAR_MIN_HEIGHT {
        ObstacleContact::ClearedBySlide
    } else if state.has_powerup(PowerupKind::Shield) {
        ObstacleContact::Shielded
    } else {
        ObstacleContact::Fatal
    }
}

/// Current collectible pickup radius
pub fn collectible_radius(state: &RunState) -> f32 {
    if state.has_powerup(PowerupKind::Magnet) {
        MAGNET_RADIUS
    } else {
        COLLECTIBLE_RADIUS
    }
}

/// Resolve player contact with every live object, in spawn order.
///
/// Stops at the first fatal contact. Collected objects are removed from the
/// registry at the end of the pass.
pub fn resolve_collisions(
    state: &mut RunState,
    delta: &mut FrameDelta,
    events: &mut impl EventSink,
) {
    let pickup_radius = collectible_radius(state);

    for i in 0..state.objects.len() {
        let object = state.objects[i];
        if object.collected {
            continue;
        }
        let dx = object.kind.x() - state.player_x;
        let dz = swept_dz(object.world_z, state.frame_start_distance, state.distance);

        match object.kind {
            ObjectKind::Obstacle { kind, .. } => {
                let (half_x, half_z) = obstacle_half_extents(kind);
                if !within(dx, dz, half_x, half_z) {
                    continue;
                }
                match obstacle_contact(state, kind) {
                    ObstacleContact::ClearedByJump | ObstacleContact::ClearedBySlide => {}
                    ObstacleContact::Shielded => {
                        log::debug!("Shield destroyed {}", kind.name());
                        state.objects[i].collected = true;
                    }
                    ObstacleContact::Fatal => {
                        log::info!(
                            "Run over: hit {} at distance {:.0}, score {}",
                            kind.name(),
                            state.distance,
                            state.display_score()
                        );
                        state.phase = GamePhase::Dead;
                        state.outcome = Some(RunOutcome::Crashed(kind));
                        events.notify(GameEvent::Died { cause: kind.name() });
                        break;
                    }
                }
            }
            ObjectKind::Collectible { kind, .. } => {
                if within(dx, dz, pickup_radius, pickup_radius) {
                    state.objects[i].collected = true;
                    collect_flag(state, kind);
                }
            }
            ObjectKind::Powerup { kind, .. } => {
                if within(dx, dz, POWERUP_RADIUS, POWERUP_RADIUS) {
                    state.objects[i].collected = true;
                    state.active_powerup = Some(kind);
                    state.powerup_timer = kind.spec().duration;
                    events.notify(GameEvent::PowerupAcquired { name: kind.name() });
                }
            }
            ObjectKind::Scenery { .. } => {}
        }
    }

    state.objects.retain(|object| {
        if object.collected {
            delta.removed(object.id);
        }
        !object.collected
    });
}

/// Apply the scoring for one collectible pickup
pub fn collect_flag(state: &mut RunState, kind: CollectibleKind) {
    let spec = kind.spec();
    let awarded = spec.points * state.combo_multiplier();
    state.score += awarded as f64;
    state.flagic += spec.flagic;
    state.flags_collected += 1;
    state.combo += 1;
    state.max_combo = state.max_combo.max(state.combo);
    log::debug!("Collected {} (+{}), combo {}", spec.name, awarded, state.combo);
}

/// Evict objects that scrolled past the trailing margin.
///
/// A collectible that leaves uncollected breaks the combo.
pub fn cleanup(state: &mut RunState, delta: &mut FrameDelta) {
    let limit = -state.distance + CLEANUP_MARGIN;
    let mut missed = false;
    state.objects.retain(|object| {
        if object.world_z <= limit {
            return true;
        }
        if !object.collected && matches!(object.kind, ObjectKind::Collectible { .. }) {
            missed = true;
        }
        delta.removed(object.id);
        false
    });
    if missed {
        log::debug!(
            "Missed a flag at distance {:.0}, combo {} reset",
            state.distance,
            state.combo
        );
        state.combo = 0;
    }
}
