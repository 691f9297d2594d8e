//! Read-only view of a frame for the renderer

use glam::Vec3;

use crate::consts::CAMERA_OFFSET;
use crate::game::GamePhase;
use crate::sim::{Tilt, World};

/// Load state of the ship mesh/material, reported by the renderer
///
/// Collision and movement use logical positions only, so the simulation runs
/// the same whatever this says.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Chase camera: fixed offset above and behind the ship, looking at it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraRig {
    pub fn follow(ship_position: Vec3) -> Self {
        Self {
            eye: ship_position + Vec3::from_array(CAMERA_OFFSET),
            target: ship_position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipView {
    pub position: Vec3,
    pub tilt: Tilt,
    pub hp: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub id: u32,
    pub position: Vec3,
    /// hp / max_hp in [0, 1]
    pub intensity: f32,
}

/// Everything the renderer and HUD need for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub ship: Option<ShipView>,
    pub obstacles: Vec<ObstacleView>,
    pub projectiles: Vec<Vec3>,
    pub score: u64,
    pub difficulty_level: u32,
    pub elapsed_secs: f32,
    pub waves: u32,
    pub camera: CameraRig,
    pub ship_asset: AssetStatus,
}

impl FrameSnapshot {
    pub fn capture(phase: GamePhase, world: Option<&World>, ship_asset: &AssetStatus) -> Self {
        let Some(world) = world else {
            return Self {
                phase,
                ship: None,
                obstacles: Vec::new(),
                projectiles: Vec::new(),
                score: 0,
                difficulty_level: 0,
                elapsed_secs: 0.0,
                waves: 0,
                camera: CameraRig::follow(Vec3::ZERO),
                ship_asset: ship_asset.clone(),
            };
        };

        Self {
            phase,
            ship: Some(ShipView {
                position: world.ship.position,
                tilt: world.ship.tilt,
                hp: world.ship.hp,
            }),
            obstacles: world
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    position: o.position,
                    intensity: o.intensity(),
                })
                .collect(),
            projectiles: world.projectiles.iter().map(|p| p.position).collect(),
            score: world.scoreboard.score,
            difficulty_level: world.scoreboard.difficulty_level,
            elapsed_secs: world.elapsed_secs,
            waves: world.waves_spawned,
            camera: CameraRig::follow(world.ship.position),
            ship_asset: ship_asset.clone(),
        }
    }
}

/// Obstacle color from remaining hp: dim ember (nearly dead) to bright red
pub fn obstacle_color(intensity: f32) -> [f32; 4] {
    let t = intensity.clamp(0.0, 1.0);
    [0.3 + 0.7 * t, 0.1 + 0.2 * t, 0.1, 1.0]
}
