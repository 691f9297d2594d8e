//! Latest command state from the input collaborator

use serde::{Deserialize, Serialize};

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Held movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveFlags {
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
        }
    }

    /// Net horizontal intent: -1 (left), 0 (none or opposing), 1 (right)
    pub fn horizontal(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    /// Net vertical intent: -1 (down), 0 (none or opposing), 1 (up)
    pub fn vertical(&self) -> f32 {
        (self.up as i8 - self.down as i8) as f32
    }
}

/// Movement flags plus fire commands received since the last frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    flags: MoveFlags,
    pending_fire: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_flag(&mut self, direction: Direction, pressed: bool) {
        self.flags.set(direction, pressed);
    }

    /// Queue one fire command (one per user action)
    pub fn fire(&mut self) {
        self.pending_fire = self.pending_fire.saturating_add(1);
    }

    pub fn pending_fire(&self) -> u32 {
        self.pending_fire
    }

    /// Drop queued fire commands, keeping held keys
    pub fn clear_fire(&mut self) {
        self.pending_fire = 0;
    }

    /// Snapshot for one frame; queued fire commands are consumed
    pub fn take_tick_input(&mut self) -> super::TickInput {
        let fire = std::mem::take(&mut self.pending_fire);
        super::TickInput {
            flags: self.flags,
            fire,
        }
    }
}
