//! Per-frame simulation step
//!
//! Core game loop that advances the world by one frame in a fixed order:
//! ship, obstacles, projectiles, collisions, score.

use super::collision::{CollisionReport, resolve_collisions};
use super::input::MoveFlags;
use super::obstacles::{advance_obstacles, generate_wave};
use super::projectiles::{advance_projectiles, spawn_projectiles};
use super::score::sanitize_dt;
use super::ship::steer;
use super::state::World;
use crate::tuning::Tuning;

/// Input commands for a single frame (stable snapshot)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held movement keys
    pub flags: MoveFlags,
    /// Fire commands received since the previous frame
    pub fire: u32,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub collisions: CollisionReport,
    /// Size of the wave spawned this frame, if any
    pub wave_spawned: Option<usize>,
    /// Obstacles that flew past the ship
    pub obstacles_retired: usize,
    pub projectiles_retired: usize,
    /// Difficulty milestones crossed this frame
    pub milestones: u32,
}

impl TickOutcome {
    pub fn ship_destroyed(&self) -> bool {
        self.collisions.ship_destroyed
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput, tuning: &Tuning, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    let dt = sanitize_dt(dt);
    world.frames += 1;
    world.elapsed_secs += dt;

    // Ship
    world.ship = steer(&world.ship, &input.flags, tuning);

    // Obstacles
    let speed = world.scoreboard.obstacle_speed;
    outcome.obstacles_retired = advance_obstacles(&mut world.obstacles, speed, tuning);
    outcome.wave_spawned = generate_wave(world, tuning);

    // Projectiles
    outcome.projectiles_retired = advance_projectiles(&mut world.projectiles, tuning);
    spawn_projectiles(world, input.fire);

    // Collisions
    outcome.collisions = resolve_collisions(world, tuning);

    // Score
    outcome.milestones = world.scoreboard.award_hits(outcome.collisions.hits, tuning);
    outcome.milestones += world.scoreboard.accrue(dt, tuning);

    world.debug_assert_invariants(tuning);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Direction;
    use crate::sim::state::{Obstacle, Projectile};
    use glam::Vec3;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_first_frame_spawns_wave() {
        let tuning = Tuning::default();
        let mut world = World::new(12345, &tuning);
        let outcome = tick(&mut world, &TickInput::default(), &tuning, DT);

        let count = outcome.wave_spawned.unwrap();
        assert!((1..=20).contains(&count));
        assert_eq!(world.obstacles.len(), count);
        assert_eq!(world.waves_spawned, 1);

        // Wave still in flight: no second spawn
        let outcome = tick(&mut world, &TickInput::default(), &tuning, DT);
        assert_eq!(outcome.wave_spawned, None);
    }

    #[test]
    fn test_fired_projectile_resolves_same_frame() {
        let tuning = Tuning::default();
        let mut world = World::new(1, &tuning);
        let id = world.next_entity_id();
        // Lands on the ship's position after this frame's obstacle advance
        let start = Vec3::new(0.0, 0.0, -tuning.base_obstacle_speed);
        world.obstacles.push(Obstacle::new(id, start, 20));

        let input = TickInput {
            fire: 1,
            ..Default::default()
        };
        let outcome = tick(&mut world, &input, &tuning, DT);
        assert_eq!(outcome.collisions.hits, 1);
        assert_eq!(world.score(), 5);
        // The damaged obstacle still overlaps the ship and rams it
        assert_eq!(outcome.collisions.rammed, vec![id]);
        assert_eq!(world.ship.hp, 85);
    }

    #[test]
    fn test_projectiles_fly_and_retire() {
        let tuning = Tuning::default();
        let mut world = World::new(5, &tuning);
        // Park one far obstacle so no wave spawns
        let id = world.next_entity_id();
        world.obstacles.push(Obstacle::new(id, Vec3::new(9.0, 2.0, -1000.0), 20));
        let id = world.next_entity_id();
        world.projectiles.push(Projectile {
            id,
            position: Vec3::new(-5.0, 0.0, -49.0),
        });

        tick(&mut world, &TickInput::default(), &tuning, DT);
        assert_eq!(world.projectiles.len(), 1);
        let outcome = tick(&mut world, &TickInput::default(), &tuning, DT);
        assert_eq!(outcome.projectiles_retired, 1);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_time_bonus_once_per_second() {
        let tuning = Tuning::default();
        let mut world = World::new(5, &tuning);
        let id = world.next_entity_id();
        world.obstacles.push(Obstacle::new(id, Vec3::new(9.0, 2.0, -1000.0), 20));

        for _ in 0..120 {
            tick(&mut world, &TickInput::default(), &tuning, 1.0 / 60.0 + 1e-5);
        }
        assert_eq!(world.score(), 2);
        assert!((world.elapsed_secs - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_non_finite_dt_adds_no_time() {
        let tuning = Tuning::default();
        let mut world = World::new(5, &tuning);
        let id = world.next_entity_id();
        world.obstacles.push(Obstacle::new(id, Vec3::new(9.0, 2.0, -1000.0), 20));

        tick(&mut world, &TickInput::default(), &tuning, f32::INFINITY);
        tick(&mut world, &TickInput::default(), &tuning, f32::NAN);
        assert_eq!(world.frames, 2);
        assert_eq!(world.elapsed_secs, 0.0);
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn test_determinism() {
        // Two worlds with the same seed and inputs stay identical
        let tuning = Tuning::default();
        let mut world1 = World::new(99999, &tuning);
        let mut world2 = World::new(99999, &tuning);

        let mut flags = MoveFlags::default();
        flags.set(Direction::Right, true);
        let inputs = [
            TickInput { flags, fire: 1 },
            TickInput::default(),
            TickInput { flags, fire: 0 },
            TickInput { flags: MoveFlags::default(), fire: 2 },
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut world1, input, &tuning, DT);
                tick(&mut world2, input, &tuning, DT);
            }
        }

        assert_eq!(world1.ship, world2.ship);
        assert_eq!(world1.obstacles, world2.obstacles);
        assert_eq!(world1.projectiles, world2.projectiles);
        assert_eq!(world1.scoreboard, world2.scoreboard);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<[bool; 4]>(), 0u32..3).prop_map(|(keys, fire)| TickInput {
            flags: MoveFlags {
                left: keys[0],
                right: keys[1],
                up: keys[2],
                down: keys[3],
            },
            fire,
        })
    }

    proptest! {
        #[test]
        fn prop_hp_and_bounds_hold_every_frame(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..400),
        ) {
            let tuning = Tuning::default();
            let mut world = World::new(seed, &tuning);
            let mut last_score = 0;
            for input in &inputs {
                tick(&mut world, input, &tuning, DT);
                prop_assert!(world.ship.hp <= 100);
                prop_assert!(world.ship.position.x.abs() <= 10.0);
                prop_assert!(world.ship.position.y.abs() <= 3.0);
                for obstacle in &world.obstacles {
                    prop_assert!(obstacle.hp <= obstacle.max_hp);
                    prop_assert!(obstacle.hp > 0);
                }
                prop_assert!(world.score() >= last_score);
                last_score = world.score();
            }
        }
    }
}
