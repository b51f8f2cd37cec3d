//! Minesweeper minigame.
//!
//! The casual 25-cell variant: pick a mine count and a reveal goal,
//! then uncover cells one at a time. A mine loses on the spot;
//! reaching the goal on safe cells wins.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
