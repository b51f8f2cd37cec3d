//! Tic-tac-toe minigame.
//!
//! Two marks alternate on a 3x3 board; three in a row wins, a full
//! board without one is a draw.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
