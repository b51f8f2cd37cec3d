//! Click-speed minigame.
//!
//! Count button presses inside a 10-second countdown and report
//! clicks per second when it runs out.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
