//! Notifications and per-frame world deltas handed to presentation

use serde::Serialize;

use super::state::WorldObject;

/// Fire-and-forget gameplay notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    ZoneChanged { name: &'static str },
    Milestone { name: &'static str },
    PowerupAcquired { name: &'static str },
    PowerupExpired { name: &'static str },
    Died { cause: &'static str },
    Victory,
}

/// Receiver for gameplay notifications
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Sink that writes every event to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::ZoneChanged { name } => log::info!("Entering zone: {}", name),
            GameEvent::Milestone { name } => log::info!("Milestone: {}", name),
            GameEvent::PowerupAcquired { name } => log::info!("Power-up: {}", name),
            GameEvent::PowerupExpired { name } => log::debug!("Power-up expired: {}", name),
            GameEvent::Died { cause } => log::info!("Crashed into {}", cause),
            GameEvent::Victory => log::info!("Victory!"),
        }
    }
}

/// A change to the set of live world objects
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldDelta {
    Added(WorldObject),
    Removed(u32),
}

/// Registry changes produced by one tick, in the order they happened
#[derive(Debug, Clone, Default)]
pub struct FrameDelta {
    pub changes: Vec<WorldDelta>,
}

impl FrameDelta {
    pub fn added(&mut self, object: WorldObject) {
        self.changes.push(WorldDelta::Added(object));
    }

    pub fn removed(&mut self, id: u32) {
        self.changes.push(WorldDelta::Removed(id));
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// IDs removed this frame
    pub fn removed_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.changes.iter().filter_map(|c| match c {
            WorldDelta::Removed(id) => Some(*id),
            WorldDelta::Added(_) => None,
        })
    }

    /// Objects added this frame
    pub fn added_objects(&self) -> impl Iterator<Item = &WorldObject> + '_ {
        self.changes.iter().filter_map(|c| match c {
            WorldDelta::Added(object) => Some(object),
            WorldDelta::Removed(_) => None,
        })
    }
}
