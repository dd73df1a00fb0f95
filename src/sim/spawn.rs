//! Procedural world generation
//!
//! Keeps the corridor populated `spawn_distance` units ahead of the player.
//! Each step moves `last_spawn_z` further ahead by a random gap and places
//! one entry there (obstacle, collectible line, power-up, or nothing) plus an
//! optional roadside prop.

use rand::Rng;

use super::catalog::{CollectibleKind, ObstacleKind, PowerupKind};
use super::events::FrameDelta;
use super::state::{ObjectKind, RunState};
use super::weighted::WeightedTable;
use crate::consts::*;
use crate::tuning::Tuning;

/// What a spawn step places on the track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEntry {
    Obstacle,
    CollectibleLine,
    Powerup,
    Nothing,
}

/// Weighted tables driving generation
#[derive(Debug, Clone)]
pub struct Spawner {
    entries: WeightedTable<SpawnEntry>,
    rarity: WeightedTable<CollectibleKind>,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            // Percent of entries
            entries: WeightedTable::new([
                (35.0, SpawnEntry::Obstacle),
                (40.0, SpawnEntry::CollectibleLine),
                (10.0, SpawnEntry::Powerup),
                (15.0, SpawnEntry::Nothing),
            ]),
            rarity: WeightedTable::new(
                CollectibleKind::ALL
                    .iter()
                    .map(|&kind| (kind.spec().weight as f64, kind)),
            ),
        }
    }
}

impl Spawner {
    /// Fill the world up to `spawn_distance` ahead of the player
    pub fn populate<R: Rng + ?Sized>(
        &self,
        state: &mut RunState,
        tuning: &Tuning,
        rng: &mut R,
        delta: &mut FrameDelta,
    ) {
        // Never place anything at or behind the player
        if state.last_spawn_z > -state.distance {
            state.last_spawn_z = -state.distance;
        }

        let horizon = -state.distance - tuning.spawn_distance;
        while state.last_spawn_z > horizon {
            state.last_spawn_z -= rng.random_range(SPAWN_GAP_MIN..SPAWN_GAP_MAX);
            let z = state.last_spawn_z;

            let entry = match self.entries.sample(rng).unwrap_or(SpawnEntry::Nothing) {
                SpawnEntry::Powerup if state.distance <= tuning.powerup_min_distance => {
                    SpawnEntry::Nothing
                }
                entry => entry,
            };
            self.spawn_entry(entry, z, state, rng, delta);

            if rng.random_bool(SCENERY_CHANCE) {
                let side = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                let offset = SCENERY_INNER_OFFSET + rng.random_range(0.0..SCENERY_SPREAD);
                delta.added(state.spawn_object(ObjectKind::Scenery { x: side * offset }, z));
            }
        }
    }

    fn spawn_entry<R: Rng + ?Sized>(
        &self,
        entry: SpawnEntry,
        z: f32,
        state: &mut RunState,
        rng: &mut R,
        delta: &mut FrameDelta,
    ) {
        match entry {
            SpawnEntry::Obstacle => {
                let lane = rng.random_range(0..LANE_COUNT);
                let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
                log::debug!("Spawn {:?} in lane {} at z={:.1}", kind, lane, z);
                delta.added(state.spawn_object(ObjectKind::Obstacle { kind, lane }, z));
            }
            SpawnEntry::CollectibleLine => {
                let lane = rng.random_range(0..LANE_COUNT);
                let count = rng.random_range(COLLECTIBLE_LINE_MIN..=COLLECTIBLE_LINE_MAX);
                for i in 0..count {
                    let kind = self.rarity.sample(rng).unwrap_or(CollectibleKind::Pennant);
                    let pickup_z = z - i as f32 * COLLECTIBLE_LINE_SPACING;
                    delta.added(state.spawn_object(ObjectKind::Collectible { kind, lane }, pickup_z));
                }
            }
            SpawnEntry::Powerup => {
                let lane = rng.random_range(0..LANE_COUNT);
                let kind = PowerupKind::ALL[rng.random_range(0..PowerupKind::ALL.len())];
                log::debug!("Spawn power-up {:?} in lane {} at z={:.1}", kind, lane, z);
                delta.added(state.spawn_object(ObjectKind::Powerup { kind, lane }, z));
            }
            SpawnEntry::Nothing => {}
        }
    }
}
