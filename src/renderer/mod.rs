//! Rendering collaborator interface
//!
//! The simulation never draws. Each frame it hands a read-only
//! [`FrameSnapshot`] to a [`Renderer`], which owns meshes, materials and the
//! scene graph.

pub mod snapshot;

pub use snapshot::{AssetStatus, CameraRig, FrameSnapshot, ObstacleView, ShipView, obstacle_color};

/// Consumer of per-frame snapshots
pub trait Renderer {
    fn draw(&mut self, frame: &FrameSnapshot);
}

/// Headless renderer: logs a HUD line every `every` frames
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &FrameSnapshot) {
        self.frames += 1;
        if self.frames % self.every != 0 {
            return;
        }
        match &frame.ship {
            Some(ship) => log::info!(
                "[{:?}] score={} hp={} pos=({:.2}, {:.2}) obstacles={} projectiles={} wave={} t={:.1}s",
                frame.phase,
                frame.score,
                ship.hp,
                ship.position.x,
                ship.position.y,
                frame.obstacles.len(),
                frame.projectiles.len(),
                frame.waves,
                frame.elapsed_secs
            ),
            None => log::info!("[{:?}] no active world", frame.phase),
        }
    }
}
