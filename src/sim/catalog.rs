//! Static configuration tables
//!
//! Obstacle, collectible and power-up catalogs plus the milestone and zone
//! tables. Milestones and zones are sorted by ascending distance.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Hurdle,
    Crate,
    LogPile,
    Tent,
    FlagpoleBarrier,
}

/// Footprint and display name of an obstacle
#[derive(Debug, Clone, Copy)]
pub struct ObstacleSpec {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 5] = [
        ObstacleKind::Hurdle,
        ObstacleKind::Crate,
        ObstacleKind::LogPile,
        ObstacleKind::Tent,
        ObstacleKind::FlagpoleBarrier,
    ];

    pub fn spec(self) -> &'static ObstacleSpec {
        match self {
            ObstacleKind::Hurdle => &ObstacleSpec {
                name: "Hurdle",
                width: 2.4,
                height: 1.0,
                depth: 0.4,
            },
            ObstacleKind::Crate => &ObstacleSpec {
                name: "Crate",
                width: 2.0,
                height: 1.6,
                depth: 2.0,
            },
            ObstacleKind::LogPile => &ObstacleSpec {
                name: "Log Pile",
                width: 2.6,
                height: 0.9,
                depth: 1.2,
            },
            ObstacleKind::Tent => &ObstacleSpec {
                name: "Tent",
                width: 2.6,
                height: 2.5,
                depth: 2.2,
            },
            ObstacleKind::FlagpoleBarrier => &ObstacleSpec {
                name: "Flagpole Barrier",
                width: 2.8,
                height: 3.2,
                depth: 0.6,
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// Collectible types, most common first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Pennant,
    Banner,
    GoldenStandard,
}

#[derive(Debug, Clone, Copy)]
pub struct CollectibleSpec {
    pub name: &'static str,
    pub points: u32,
    pub flagic: u32,
    /// Relative spawn weight inside a collectible line
    pub weight: u32,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 3] = [
        CollectibleKind::Pennant,
        CollectibleKind::Banner,
        CollectibleKind::GoldenStandard,
    ];

    pub fn spec(self) -> &'static CollectibleSpec {
        match self {
            CollectibleKind::Pennant => &CollectibleSpec {
                name: "Pennant",
                points: 10,
                flagic: 1,
                weight: 70,
            },
            CollectibleKind::Banner => &CollectibleSpec {
                name: "Banner",
                points: 25,
                flagic: 3,
                weight: 20,
            },
            CollectibleKind::GoldenStandard => &CollectibleSpec {
                name: "Golden Standard",
                points: 100,
                flagic: 10,
                weight: 10,
            },
        }
    }
}

/// Power-up types. Only one can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Destroys obstacles on contact instead of ending the run
    Shield,
    /// Widens the collectible pickup radius
    Magnet,
    /// Halves forward motion
    TimeWarp,
}

#[derive(Debug, Clone, Copy)]
pub struct PowerupSpec {
    pub name: &'static str,
    /// Seconds the effect lasts
    pub duration: f32,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [PowerupKind::Shield, PowerupKind::Magnet, PowerupKind::TimeWarp];

    pub fn spec(self) -> &'static PowerupSpec {
        match self {
            PowerupKind::Shield => &PowerupSpec {
                name: "Shield",
                duration: 5.0,
            },
            PowerupKind::Magnet => &PowerupSpec {
                name: "Magnet",
                duration: 8.0,
            },
            PowerupKind::TimeWarp => &PowerupSpec {
                name: "Time Warp",
                duration: 5.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// Distance checkpoint that triggers a notification
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub distance: f32,
    pub name: &'static str,
}

pub static MILESTONES: &[Milestone] = &[
    Milestone { distance: 250.0, name: "Warmed Up" },
    Milestone { distance: 500.0, name: "Trail Blazer" },
    Milestone { distance: 1000.0, name: "Power Surge" },
    Milestone { distance: 2500.0, name: "Halfway Camp" },
    Milestone { distance: 5000.0, name: "Ridge Runner" },
    Milestone { distance: 7500.0, name: "Summit Fever" },
    Milestone { distance: 10000.0, name: "Flag Planted" },
];

/// Distance-keyed cosmetic region
#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub start: f32,
    pub name: &'static str,
    pub sky_color: Vec3,
    pub ground_color: Vec3,
}

pub static ZONES: &[Zone] = &[
    Zone {
        start: 0.0,
        name: "Meadow",
        sky_color: Vec3::new(0.53, 0.81, 0.98),
        ground_color: Vec3::new(0.36, 0.62, 0.27),
    },
    Zone {
        start: 2000.0,
        name: "Pine Woods",
        sky_color: Vec3::new(0.44, 0.62, 0.72),
        ground_color: Vec3::new(0.18, 0.36, 0.20),
    },
    Zone {
        start: 4000.0,
        name: "Red Canyon",
        sky_color: Vec3::new(0.96, 0.70, 0.45),
        ground_color: Vec3::new(0.66, 0.32, 0.18),
    },
    Zone {
        start: 6000.0,
        name: "Glacier Pass",
        sky_color: Vec3::new(0.78, 0.88, 0.96),
        ground_color: Vec3::new(0.86, 0.92, 0.96),
    },
    Zone {
        start: 8000.0,
        name: "Summit",
        sky_color: Vec3::new(0.22, 0.24, 0.45),
        ground_color: Vec3::new(0.55, 0.55, 0.60),
    },
];
