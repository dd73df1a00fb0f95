//! Run simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - Presentation sees state read-only, plus per-frame deltas and events

pub mod autopilot;
pub mod catalog;
pub mod collision;
pub mod events;
pub mod kinematics;
pub mod progression;
pub mod run;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod weighted;

pub use catalog::{
    CollectibleKind, MILESTONES, Milestone, ObstacleKind, PowerupKind, ZONES, Zone,
};
pub use collision::{ObstacleContact, cleanup, obstacle_contact, resolve_collisions};
pub use events::{EventSink, FrameDelta, GameEvent, LogSink, WorldDelta};
pub use kinematics::update_kinematics;
pub use progression::{update_progression, zone_index_for};
pub use run::{RunSummary, Simulation};
pub use spawn::{SpawnEntry, Spawner};
pub use state::{GamePhase, ObjectKind, RunOutcome, RunState, WorldObject};
pub use tick::{TickInput, sanitize_dt, tick};
pub use weighted::WeightedTable;
