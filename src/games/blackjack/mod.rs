//! Blackjack minigame.
//!
//! One player against the house, drawn from a single 52-card deck.
//! The player hits or stands; standing runs the dealer out under the
//! stand-on-17 rule and settles the round.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
