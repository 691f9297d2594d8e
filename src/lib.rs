//! Astro Blaster - simulation core of an arcade space shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (ship, obstacles, projectiles, collisions, score)
//! - `game`: Session lifecycle state machine (Idle/Playing/Defeated/GameOver)
//! - `renderer`: Read-only frame snapshots for the rendering collaborator
//! - `platform`: Input key mapping and frame clocks
//! - `persistence`: File-backed leaderboard
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod profanity;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, GameError, GamePhase, RunSummary};
pub use highscores::{HighScoreEntry, HighScores, Leaderboard, LeaderboardError};
pub use profanity::{NameFilter, PassThrough, WordListFilter};
pub use tuning::{Tuning, TuningError};

use glam::Vec3;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Ship displacement per frame while a direction is held
    pub const SHIP_STEP: f32 = 0.15;
    /// Lateral bound (x in [-LIMIT, LIMIT])
    pub const SHIP_X_LIMIT: f32 = 10.0;
    /// Vertical bound (y in [-LIMIT, LIMIT])
    pub const SHIP_Y_LIMIT: f32 = 3.0;
    /// Roll angle while moving sideways (radians)
    pub const SHIP_ROLL: f32 = 0.3;
    /// Pitch angle while climbing or diving (radians)
    pub const SHIP_PITCH: f32 = 0.2;
    /// Per-frame interpolation factor toward the target tilt
    pub const TILT_SMOOTHING: f32 = 0.1;
    pub const SHIP_MAX_HP: u32 = 100;

    /// Obstacle forward speed at session start (units per frame)
    pub const BASE_OBSTACLE_SPEED: f32 = 0.1;
    /// Obstacles at or past this forward coordinate are retired
    pub const OBSTACLE_FAR_BOUNDARY: f32 = 10.0;
    pub const OBSTACLE_HP: u32 = 20;
    pub const WAVE_MIN: u32 = 1;
    pub const WAVE_MAX: u32 = 20;
    /// Spawn ranges for new wave members
    pub const SPAWN_X: (f32, f32) = (-10.0, 10.0);
    pub const SPAWN_Y: (f32, f32) = (-3.0, 3.0);
    pub const SPAWN_Z: (f32, f32) = (-50.0, -20.0);

    /// Projectile travel per frame (toward -z)
    pub const PROJECTILE_STEP: f32 = 0.5;
    /// Projectiles at or beyond this forward coordinate are retired
    pub const PROJECTILE_CUTOFF: f32 = -50.0;

    /// Projectile/obstacle hit distance
    pub const HIT_RADIUS: f32 = 0.6;
    pub const HIT_DAMAGE: u32 = 5;
    pub const HIT_SCORE: u64 = 5;
    /// Ship/obstacle collision distance
    pub const RAM_RADIUS: f32 = 0.8;

    /// Points awarded per whole second of play
    pub const POINTS_PER_SECOND: u64 = 1;
    /// Score multiple that steps difficulty up
    pub const DIFFICULTY_MILESTONE: u64 = 200;
    /// Obstacle speed added per milestone
    pub const SPEED_INCREMENT: f32 = 0.05;

    /// Longest host frame delta fed into one step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
    /// Camera offset from the ship (up, behind)
    pub const CAMERA_OFFSET: [f32; 3] = [0.0, 2.0, 5.0];
    /// Longest accepted player name
    pub const MAX_NAME_LEN: usize = 16;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Exponential approach of `current` toward `target` by `factor`
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
