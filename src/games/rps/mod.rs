//! Rock-paper-scissors minigame.
//!
//! One throw per round against a uniformly random computer choice,
//! with a running win/loss tally across rounds.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
