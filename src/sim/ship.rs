//! Ship movement and tilt

use super::input::MoveFlags;
use super::state::{Ship, Tilt};
use crate::approach;
use crate::tuning::Tuning;

/// Integrate held movement keys into a new ship position and tilt
///
/// Position moves a fixed step per frame on each axis with an active key and
/// is clamped to the play volume. Tilt eases toward a fixed target angle
/// selected by the keys (zero when idle or opposing).
pub fn steer(ship: &Ship, flags: &MoveFlags, tuning: &Tuning) -> Ship {
    let dx = flags.horizontal();
    let dy = flags.vertical();

    let mut position = ship.position;
    position.x = (position.x + dx * tuning.ship_step).clamp(-tuning.ship_x_limit, tuning.ship_x_limit);
    position.y = (position.y + dy * tuning.ship_step).clamp(-tuning.ship_y_limit, tuning.ship_y_limit);

    let target = Tilt {
        pitch: dy * tuning.ship_pitch,
        roll: dx * tuning.ship_roll,
    };
    let tilt = Tilt {
        pitch: approach(ship.tilt.pitch, target.pitch, tuning.tilt_smoothing),
        roll: approach(ship.tilt.roll, target.roll, tuning.tilt_smoothing),
    };

    Ship {
        position,
        tilt,
        hp: ship.hp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Direction;

    fn held(directions: &[Direction]) -> MoveFlags {
        let mut flags = MoveFlags::default();
        for &d in directions {
            flags.set(d, true);
        }
        flags
    }

    #[test]
    fn test_step_per_frame() {
        let tuning = Tuning::default();
        let ship = Ship::new(100);
        let moved = steer(&ship, &held(&[Direction::Right, Direction::Up]), &tuning);
        assert!((moved.position.x - 0.15).abs() < 1e-6);
        assert!((moved.position.y - 0.15).abs() < 1e-6);
        assert_eq!(moved.position.z, 0.0);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(100);
        let flags = held(&[Direction::Right, Direction::Down]);
        for _ in 0..500 {
            ship = steer(&ship, &flags, &tuning);
        }
        assert_eq!(ship.position.x, 10.0);
        assert_eq!(ship.position.y, -3.0);
    }

    #[test]
    fn test_tilt_targets() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(100);
        let flags = held(&[Direction::Left, Direction::Up]);
        for _ in 0..200 {
            ship = steer(&ship, &flags, &tuning);
        }
        assert!((ship.tilt.roll + 0.3).abs() < 1e-4);
        assert!((ship.tilt.pitch - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_tilt_eases_by_tenth() {
        let tuning = Tuning::default();
        let ship = Ship::new(100);
        let ship = steer(&ship, &held(&[Direction::Left]), &tuning);
        assert!((ship.tilt.roll + 0.03).abs() < 1e-6);

        // Released: eases back toward level
        let ship = steer(&ship, &MoveFlags::default(), &tuning);
        assert!((ship.tilt.roll + 0.027).abs() < 1e-6);
    }

    #[test]
    fn test_opposing_keys_hold_still() {
        let tuning = Tuning::default();
        let ship = Ship::new(100);
        let moved = steer(&ship, &held(&[Direction::Left, Direction::Right]), &tuning);
        assert_eq!(moved.position, ship.position);
        assert_eq!(moved.tilt.roll, 0.0);
    }

    #[test]
    fn test_hp_unchanged() {
        let tuning = Tuning::default();
        let ship = Ship::new(42);
        assert_eq!(steer(&ship, &held(&[Direction::Down]), &tuning).hp, 42);
    }
}
