//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - One ordered World mutation per frame
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod obstacles;
pub mod projectiles;
pub mod score;
pub mod ship;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, resolve_collisions};
pub use input::{Direction, InputState, MoveFlags};
pub use obstacles::{advance_obstacles, generate_wave};
pub use projectiles::{advance_projectiles, spawn_projectiles};
pub use score::ScoreBoard;
pub use ship::steer;
pub use state::{Obstacle, Projectile, Ship, Tilt, World};
pub use tick::{TickInput, TickOutcome, tick};
