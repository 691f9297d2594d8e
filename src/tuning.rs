//! Data-driven game balance
//!
//! Every gameplay number lives here so a JSON file can rebalance a build
//! without recompiling. Missing fields fall back to [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading or validating a tuning document
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    pub ship_step: f32,
    pub ship_x_limit: f32,
    pub ship_y_limit: f32,
    pub ship_roll: f32,
    pub ship_pitch: f32,
    pub tilt_smoothing: f32,
    pub ship_max_hp: u32,

    // === Obstacles ===
    pub base_obstacle_speed: f32,
    pub obstacle_far_boundary: f32,
    pub obstacle_hp: u32,
    pub wave_min: u32,
    pub wave_max: u32,
    pub spawn_x: (f32, f32),
    pub spawn_y: (f32, f32),
    pub spawn_z: (f32, f32),

    // === Projectiles ===
    pub projectile_step: f32,
    pub projectile_cutoff: f32,

    // === Collisions ===
    pub hit_radius: f32,
    pub hit_damage: u32,
    pub hit_score: u64,
    pub ram_radius: f32,

    // === Score & difficulty ===
    pub points_per_second: u64,
    pub difficulty_milestone: u64,
    pub speed_increment: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_step: SHIP_STEP,
            ship_x_limit: SHIP_X_LIMIT,
            ship_y_limit: SHIP_Y_LIMIT,
            ship_roll: SHIP_ROLL,
            ship_pitch: SHIP_PITCH,
            tilt_smoothing: TILT_SMOOTHING,
            ship_max_hp: SHIP_MAX_HP,

            base_obstacle_speed: BASE_OBSTACLE_SPEED,
            obstacle_far_boundary: OBSTACLE_FAR_BOUNDARY,
            obstacle_hp: OBSTACLE_HP,
            wave_min: WAVE_MIN,
            wave_max: WAVE_MAX,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            spawn_z: SPAWN_Z,

            projectile_step: PROJECTILE_STEP,
            projectile_cutoff: PROJECTILE_CUTOFF,

            hit_radius: HIT_RADIUS,
            hit_damage: HIT_DAMAGE,
            hit_score: HIT_SCORE,
            ram_radius: RAM_RADIUS,

            points_per_second: POINTS_PER_SECOND,
            difficulty_milestone: DIFFICULTY_MILESTONE,
            speed_increment: SPEED_INCREMENT,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
    TuningError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_range(field: &'static str, range: (f32, f32)) -> Result<(), TuningError> {
    if !(range.0.is_finite() && range.1.is_finite()) || range.0 > range.1 {
        return Err(invalid(field, format!("{:?} is not an ordered finite range", range)));
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(invalid(field, format!("{} must be positive", value)));
    }
    Ok(())
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        check_positive("ship_step", self.ship_step)?;
        check_positive("ship_x_limit", self.ship_x_limit)?;
        check_positive("ship_y_limit", self.ship_y_limit)?;
        if !(0.0..=1.0).contains(&self.tilt_smoothing) {
            return Err(invalid("tilt_smoothing", "must be within [0, 1]"));
        }
        if self.ship_max_hp == 0 {
            return Err(invalid("ship_max_hp", "must be at least 1"));
        }

        if !(self.base_obstacle_speed.is_finite() && self.base_obstacle_speed >= 0.0) {
            return Err(invalid("base_obstacle_speed", "must be non-negative"));
        }
        if self.obstacle_hp == 0 {
            return Err(invalid("obstacle_hp", "must be at least 1"));
        }
        if self.wave_min == 0 || self.wave_min > self.wave_max {
            return Err(invalid(
                "wave_min",
                format!("wave size range {}..={} is empty", self.wave_min, self.wave_max),
            ));
        }
        check_range("spawn_x", self.spawn_x)?;
        check_range("spawn_y", self.spawn_y)?;
        check_range("spawn_z", self.spawn_z)?;
        if !self.obstacle_far_boundary.is_finite() {
            return Err(invalid("obstacle_far_boundary", "must be finite"));
        }
        if self.spawn_z.1 >= 0.0 {
            return Err(invalid("spawn_z", "obstacles must spawn ahead of the ship (z < 0)"));
        }
        if self.spawn_z.1 >= self.obstacle_far_boundary {
            return Err(invalid("spawn_z", "spawn range reaches the far boundary"));
        }

        check_positive("projectile_step", self.projectile_step)?;
        if !(self.projectile_cutoff.is_finite() && self.projectile_cutoff < 0.0) {
            return Err(invalid("projectile_cutoff", "must be ahead of the ship (z < 0)"));
        }

        check_positive("hit_radius", self.hit_radius)?;
        check_positive("ram_radius", self.ram_radius)?;
        if self.hit_damage == 0 {
            return Err(invalid("hit_damage", "must be at least 1"));
        }
        if self.difficulty_milestone == 0 {
            return Err(invalid("difficulty_milestone", "must be at least 1"));
        }
        if !(self.speed_increment.is_finite() && self.speed_increment >= 0.0) {
            return Err(invalid("speed_increment", "must be non-negative"));
        }
        Ok(())
    }
}
