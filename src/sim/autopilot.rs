//! Idle/demo controller
//!
//! Looks a short time ahead in each lane and picks the intents a cautious
//! player would: sidestep obstacles when a neighbouring lane is clear, slide
//! under tall ones, jump low ones, and drift toward flags otherwise.

use super::catalog::ObstacleKind;
use super::state::{GamePhase, ObjectKind, RunState};
use super::tick::TickInput;
use crate::consts::{LANE_COUNT, SLIDE_CLEAR_MIN_HEIGHT};

/// Seconds of track the autopilot considers
const LOOKAHEAD_SECS: f32 = 0.6;
/// Jump or slide when an obstacle is this many seconds away
const ACTION_LEAD_SECS: f32 = 0.3;
/// Objects this close behind the player still block a lane
const TRAILING_MARGIN: f32 = 2.0;

/// Nearest obstacle in `lane` within `reach`, with how far ahead it is
fn obstacle_ahead(state: &RunState, lane: u8, reach: f32) -> Option<(ObstacleKind, f32)> {
    state
        .objects
        .iter()
        .filter_map(|object| match object.kind {
            ObjectKind::Obstacle { kind, lane: l } if l == lane => {
                let ahead = -object.relative_z(state.distance);
                (-TRAILING_MARGIN..=reach).contains(&ahead).then_some((kind, ahead))
            }
            _ => None,
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

fn lane_is_clear(state: &RunState, lane: i16, reach: f32) -> bool {
    (0..LANE_COUNT as i16).contains(&lane) && obstacle_ahead(state, lane as u8, reach).is_none()
}

/// Lane holding the closest uncollected flag within `reach`
fn flag_lane(state: &RunState, reach: f32) -> Option<u8> {
    state
        .objects
        .iter()
        .filter_map(|object| match object.kind {
            ObjectKind::Collectible { lane, .. } | ObjectKind::Powerup { lane, .. } => {
                let ahead = -object.relative_z(state.distance);
                (0.0..=reach).contains(&ahead).then_some((lane, ahead))
            }
            _ => None,
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(lane, _)| lane)
}

/// Choose intents for this frame
pub fn steer(state: &RunState) -> TickInput {
    let mut input = TickInput::default();
    if state.phase != GamePhase::Playing {
        return input;
    }

    let speed = state.effective_speed().max(1.0);
    let reach = speed * LOOKAHEAD_SECS;
    let lane = state.target_lane as i16;

    if let Some((kind, ahead)) = obstacle_ahead(state, state.target_lane, reach) {
        if let Some(dir) = [-1i8, 1].into_iter().find(|&d| lane_is_clear(state, lane + d as i16, reach)) {
            input.shift = dir;
        } else if ahead <= speed * ACTION_LEAD_SECS {
            if kind.spec().height > SLIDE_CLEAR_MIN_HEIGHT && !state.is_jumping {
                input.slide = true;
            } else {
                input.jump = true;
            }
        }
        return input;
    }

    if let Some(target) = flag_lane(state, reach * 2.0) {
        let dir = (target as i16 - lane).signum() as i8;
        if dir != 0 && lane_is_clear(state, lane + dir as i16, reach) {
            input.shift = dir;
        }
    }

    input
}
