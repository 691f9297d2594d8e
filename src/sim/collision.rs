//! Collision detection and response
//!
//! Two all-pairs proximity passes per frame: projectiles against obstacles,
//! then the ship against whatever obstacles survived. Entity counts stay in
//! the tens, so there is no spatial partitioning.

use super::state::World;
use crate::distance;
use crate::tuning::Tuning;

/// What the collision pass did this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Projectile hits (each is worth a score bonus)
    pub hits: u32,
    /// Obstacles shot down this frame
    pub destroyed: Vec<u32>,
    /// Obstacles that rammed the ship this frame
    pub rammed: Vec<u32>,
    /// Ship hp reached zero
    pub ship_destroyed: bool,
}

/// Resolve projectile and ship collisions against the obstacle set
///
/// Projectile pass: every projectile within the hit radius of an obstacle
/// damages it and is consumed by that first hit. Several projectiles may hit
/// the same obstacle in one frame; every such hit counts, even past zero hp.
/// Obstacles left at zero hp are removed afterwards.
///
/// Ship pass: an obstacle within the ram radius costs the ship hp equal to
/// the obstacle's *current* hp and is always removed.
pub fn resolve_collisions(world: &mut World, tuning: &Tuning) -> CollisionReport {
    let mut report = CollisionReport::default();

    // --- PROJECTILES VS OBSTACLES ---
    let obstacles = &mut world.obstacles;
    world.projectiles.retain(|projectile| {
        let target = obstacles
            .iter_mut()
            .find(|o| distance(projectile.position, o.position) < tuning.hit_radius);
        match target {
            Some(obstacle) => {
                obstacle.take_damage(tuning.hit_damage);
                report.hits += 1;
                false
            }
            None => true,
        }
    });

    world.obstacles.retain(|o| {
        if o.hp == 0 {
            report.destroyed.push(o.id);
            false
        } else {
            true
        }
    });

    // --- SHIP VS OBSTACLES ---
    let ship = &mut world.ship;
    world.obstacles.retain(|o| {
        if distance(ship.position, o.position) < tuning.ram_radius {
            ship.hp = ship.hp.saturating_sub(o.hp);
            report.rammed.push(o.id);
            false
        } else {
            true
        }
    });

    report.ship_destroyed = ship.is_destroyed();
    report
}
