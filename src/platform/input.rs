//! Raw input events mapped to simulation commands
//!
//! Both letter (WASD) and arrow bindings steer the ship; a pointer click
//! fires. Anything else is ignored.

use crate::sim::Direction;

/// A command for the game's inbound input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Movement key pressed (`true`) or released (`false`)
    SetFlag(Direction, bool),
    Fire,
}

/// Map a key name (browser `KeyboardEvent.key` style) to a direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "a" | "A" | "ArrowLeft" => Some(Direction::Left),
        "d" | "D" | "ArrowRight" => Some(Direction::Right),
        "w" | "W" | "ArrowUp" => Some(Direction::Up),
        "s" | "S" | "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

/// Map a key-down/key-up event to a command (None for unbound keys)
pub fn command_for_key(key: &str, pressed: bool) -> Option<InputCommand> {
    direction_for_key(key).map(|d| InputCommand::SetFlag(d, pressed))
}

/// A pointer click always fires
pub fn command_for_click() -> InputCommand {
    InputCommand::Fire
}
