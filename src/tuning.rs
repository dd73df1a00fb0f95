//! Data-driven game balance
//!
//! Defaults reproduce the stock game. A host can override any subset of the
//! fields from JSON; missing fields keep their default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Balance knobs for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Speed at the start of a run (units/s)
    pub base_speed: f32,
    /// Speed cap
    pub max_speed: f32,
    /// Speed gained per second of play
    pub speed_increase_rate: f32,
    /// Lane easing rate; fraction of the remaining gap closed is `rate * dt`
    pub lane_switch_speed: f32,
    /// Initial upward velocity of a jump
    pub jump_velocity: f32,
    pub gravity: f32,
    /// Seconds a slide lasts
    pub slide_duration: f32,
    /// How far ahead of the player the world is kept populated
    pub spawn_distance: f32,
    pub distance_points_per_unit: f32,
    /// Power-ups only appear past this distance
    pub powerup_min_distance: f32,
    /// Reaching this distance wins the run
    pub victory_distance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 15.0,
            max_speed: 40.0,
            speed_increase_rate: 0.3,
            lane_switch_speed: 12.0,
            jump_velocity: 18.0,
            gravity: 50.0,
            slide_duration: 0.8,
            spawn_distance: 150.0,
            distance_points_per_unit: 1.0,
            powerup_min_distance: 1000.0,
            victory_distance: 10000.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate tuning from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that the values keep the simulation invariants intact
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("base_speed", self.base_speed),
            ("lane_switch_speed", self.lane_switch_speed),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("slide_duration", self.slide_duration),
            ("spawn_distance", self.spawn_distance),
            ("victory_distance", self.victory_distance),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let non_negative = [
            ("speed_increase_rate", self.speed_increase_rate),
            ("distance_points_per_unit", self.distance_points_per_unit),
            ("powerup_min_distance", self.powerup_min_distance),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be zero or positive",
                });
            }
        }

        if !self.max_speed.is_finite() || self.max_speed < self.base_speed {
            return Err(TuningError::Invalid {
                field: "max_speed",
                reason: "must be at least base_speed",
            });
        }

        Ok(())
    }
}
