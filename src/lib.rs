//! Arcade - Casual Mini-Game Engine Library
//!
//! Game logic for a collection of small casual games sharing a session
//! lifecycle, a score log, and bilingual word lists. A presentation layer
//! (not part of this crate) instantiates one game engine at a time,
//! forwards user actions into it, and renders the resulting state; the
//! engines never call back out.

// Allow dead code in library - some accessors exist for the presentation layer
#![allow(dead_code)]

pub mod core;
pub mod games;
pub mod scores;
pub mod utils;
pub mod words;

pub use crate::core::{CountdownTimer, GameSession, GameStatus, TimerTick, Transition};
pub use crate::games::{ActiveGame, GameId};
pub use crate::scores::{ScoreEntry, ScoreStore};
pub use crate::words::Language;
