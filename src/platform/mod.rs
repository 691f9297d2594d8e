//! Platform abstraction layer
//!
//! Everything between the host environment and the simulation:
//! - Input events (key and pointer mapping)
//! - Time (frame clocks)

pub mod input;
pub mod time;

pub use input::{InputCommand, command_for_click, command_for_key, direction_for_key};
pub use time::{Clock, FixedClock, SystemClock};
