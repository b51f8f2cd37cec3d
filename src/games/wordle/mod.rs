//! Word-guessing minigame.
//!
//! Wordle-style play: a hidden five-letter target drawn from the
//! active language's word list, six attempts, and per-letter feedback
//! that respects duplicate-letter counts.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
