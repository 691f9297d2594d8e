//! Obstacle movement, retirement and wave spawning

use glam::Vec3;
use rand::Rng;

use super::state::{Obstacle, World};
use crate::tuning::Tuning;

/// Move every obstacle toward the ship and drop those past the far boundary
///
/// Returns how many obstacles were retired.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32, tuning: &Tuning) -> usize {
    for obstacle in obstacles.iter_mut() {
        obstacle.position.z += speed;
    }
    let before = obstacles.len();
    obstacles.retain(|o| o.position.z < tuning.obstacle_far_boundary);
    before - obstacles.len()
}

/// Spawn a full wave if (and only if) the obstacle set is empty
///
/// Returns the wave size, or `None` when obstacles remain. Spawning is
/// self-throttling: the next wave waits until the current one is cleared.
pub fn generate_wave(world: &mut World, tuning: &Tuning) -> Option<usize> {
    if !world.obstacles.is_empty() {
        return None;
    }

    let count = world.rng.random_range(tuning.wave_min..=tuning.wave_max) as usize;
    let mut wave = Vec::with_capacity(count);
    for _ in 0..count {
        let position = Vec3::new(
            world.rng.random_range(tuning.spawn_x.0..=tuning.spawn_x.1),
            world.rng.random_range(tuning.spawn_y.0..=tuning.spawn_y.1),
            world.rng.random_range(tuning.spawn_z.0..=tuning.spawn_z.1),
        );
        wave.push(Obstacle::new(world.next_entity_id(), position, tuning.obstacle_hp));
    }
    world.obstacles = wave;
    world.waves_spawned += 1;

    log::debug!(
        "Wave {}: {} obstacles (speed {:.2})",
        world.waves_spawned,
        count,
        world.scoreboard.obstacle_speed
    );

    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_spawns_on_empty_set() {
        let tuning = Tuning::default();
        for seed in 0..50 {
            let mut world = World::new(seed, &tuning);
            let count = generate_wave(&mut world, &tuning).unwrap();
            assert!((1..=20).contains(&count));
            assert_eq!(world.obstacles.len(), count);
            for obstacle in &world.obstacles {
                assert!(obstacle.position.z < 0.0);
                assert!(obstacle.position.x.abs() <= 10.0);
                assert!(obstacle.position.y.abs() <= 3.0);
                assert_eq!(obstacle.hp, 20);
                assert_eq!(obstacle.max_hp, 20);
            }
        }
    }

    #[test]
    fn test_no_spawn_while_obstacles_remain() {
        let tuning = Tuning::default();
        let mut world = World::new(3, &tuning);
        let id = world.next_entity_id();
        world.obstacles.push(Obstacle::new(id, Vec3::new(0.0, 0.0, -30.0), 20));

        assert_eq!(generate_wave(&mut world, &tuning), None);
        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.waves_spawned, 0);
    }

    #[test]
    fn test_wave_is_deterministic_per_seed() {
        let tuning = Tuning::default();
        let mut a = World::new(99, &tuning);
        let mut b = World::new(99, &tuning);
        generate_wave(&mut a, &tuning);
        generate_wave(&mut b, &tuning);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_advance_retires_past_far_boundary() {
        let tuning = Tuning::default();
        let mut obstacles = vec![
            Obstacle::new(1, Vec3::new(0.0, 0.0, 9.85), 20),
            Obstacle::new(2, Vec3::new(0.0, 0.0, 5.0), 20),
        ];

        let retired = advance_obstacles(&mut obstacles, 0.2, &tuning);
        assert_eq!(retired, 1);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, 2);
        assert!((obstacles[0].position.z - 5.2).abs() < 1e-6);
    }
}
