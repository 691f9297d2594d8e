//! Projectile movement, retirement and firing

use super::state::{Projectile, World};
use crate::tuning::Tuning;

/// Move every projectile away from the ship and drop those past the cutoff
///
/// Returns how many projectiles were retired.
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>, tuning: &Tuning) -> usize {
    for projectile in projectiles.iter_mut() {
        projectile.position.z -= tuning.projectile_step;
    }
    let before = projectiles.len();
    projectiles.retain(|p| p.position.z > tuning.projectile_cutoff);
    before - projectiles.len()
}

/// Append one projectile at the ship's position per fire command
pub fn spawn_projectiles(world: &mut World, fire_commands: u32) {
    for _ in 0..fire_commands {
        let id = world.next_entity_id();
        world.projectiles.push(Projectile {
            id,
            position: world.ship.position,
        });
    }
}
