//! Zone, milestone and victory tracking
//!
//! Zones and milestones are two independent monotonic pointers over their
//! own distance-sorted tables.

use super::catalog::{Milestone, Zone};
use super::events::{EventSink, GameEvent};
use super::state::{GamePhase, RunOutcome, RunState};
use crate::tuning::Tuning;

/// Index of the last zone whose start is at or before `distance`
pub fn zone_index_for(zones: &[Zone], distance: f32) -> usize {
    zones
        .iter()
        .rposition(|zone| zone.start <= distance)
        .unwrap_or(0)
}

/// Update zone and milestone pointers, then check for victory
pub fn update_progression(
    state: &mut RunState,
    zones: &[Zone],
    milestones: &[Milestone],
    tuning: &Tuning,
    events: &mut impl EventSink,
) {
    let zone = zone_index_for(zones, state.distance);
    if zone > state.zone_index {
        state.zone_index = zone;
        let name = zones[zone].name;
        log::info!("Zone {} ({}) at distance {:.0}", zone, name, state.distance);
        events.notify(GameEvent::ZoneChanged { name });
    }

    while let Some(milestone) = milestones.get(state.milestone_index) {
        if state.distance < milestone.distance {
            break;
        }
        log::info!("Milestone reached: {}", milestone.name);
        events.notify(GameEvent::Milestone { name: milestone.name });
        state.milestone_index += 1;
    }

    if state.phase == GamePhase::Playing && state.distance >= tuning.victory_distance {
        log::info!(
            "Victory at distance {:.0}, score {}",
            state.distance,
            state.display_score()
        );
        state.phase = GamePhase::Dead;
        state.outcome = Some(RunOutcome::Victory);
        events.notify(GameEvent::Victory);
    }
}
