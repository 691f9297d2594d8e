//! Frame clocks

use std::time::Instant;

/// Source of frame deltas (seconds)
pub trait Clock {
    /// Seconds since the previous tick
    fn tick(&mut self) -> f32;
}

/// Constant delta per tick, for headless and deterministic runs
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// 60 Hz
    pub fn sixty_hz() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl Clock for FixedClock {
    fn tick(&mut self) -> f32 {
        self.dt
    }
}

/// Wall-clock deltas between calls
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
