//! World state and core simulation types
//!
//! Everything a session mutates lives in [`World`]; it is built fresh on
//! every start/restart and dropped wholesale afterwards.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::score::ScoreBoard;
use crate::tuning::Tuning;

/// Visual tilt of the ship (radians)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tilt {
    /// Rotation about the x axis (climb/dive)
    pub pitch: f32,
    /// Rotation about the z axis (bank left/right)
    pub roll: f32,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub position: Vec3,
    pub tilt: Tilt,
    /// Hull points in [0, max_hp]
    pub hp: u32,
}

impl Ship {
    pub fn new(hp: u32) -> Self {
        Self {
            position: Vec3::ZERO,
            tilt: Tilt::default(),
            hp,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.hp == 0
    }
}

/// An incoming obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub position: Vec3,
    pub hp: u32,
    pub max_hp: u32,
}

impl Obstacle {
    pub fn new(id: u32, position: Vec3, max_hp: u32) -> Self {
        Self {
            id,
            position,
            hp: max_hp,
            max_hp,
        }
    }

    /// Remaining hp as a fraction of max (drives color intensity)
    pub fn intensity(&self) -> f32 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f32 / self.max_hp as f32
    }

    /// Apply damage, flooring hp at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// A projectile fired by the ship (straight-line travel)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub position: Vec3,
}

/// Complete session state (deterministic from its seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Wave generation RNG
    pub(crate) rng: Pcg32,
    pub ship: Ship,
    /// Active obstacles (sorted by id)
    pub obstacles: Vec<Obstacle>,
    /// Active projectiles (sorted by id)
    pub projectiles: Vec<Projectile>,
    pub scoreboard: ScoreBoard,
    /// Seconds since the session started
    pub elapsed_secs: f32,
    /// Frames stepped this session
    pub frames: u64,
    /// Waves spawned this session
    pub waves_spawned: u32,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Create a fresh world: centered ship at full hp, empty sets, zero score
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship::new(tuning.ship_max_hp),
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            scoreboard: ScoreBoard::new(tuning.base_obstacle_speed),
            elapsed_secs: 0.0,
            frames: 0,
            waves_spawned: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn score(&self) -> u64 {
        self.scoreboard.score
    }

    pub fn obstacle(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    /// Check the per-frame invariants (debug builds only)
    pub fn debug_assert_invariants(&self, tuning: &Tuning) {
        debug_assert!(self.ship.hp <= tuning.ship_max_hp, "ship hp above max");
        for obstacle in &self.obstacles {
            debug_assert!(obstacle.max_hp > 0, "obstacle {} has zero max hp", obstacle.id);
            debug_assert!(
                obstacle.hp > 0 && obstacle.hp <= obstacle.max_hp,
                "obstacle {} hp {} outside (0, {}]",
                obstacle.id,
                obstacle.hp,
                obstacle.max_hp
            );
        }
        debug_assert!(
            self.obstacles.windows(2).all(|w| w[0].id < w[1].id),
            "obstacle ids not unique/sorted"
        );
        debug_assert!(
            self.projectiles.windows(2).all(|w| w[0].id < w[1].id),
            "projectile ids not unique/sorted"
        );
    }
}
