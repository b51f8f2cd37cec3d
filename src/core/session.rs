//! Generic game session lifecycle shared by every game.
//!
//! A session is an explicit owned value created for one play-through.
//! The shell forwards user actions into the active engine and renders
//! the result; when the player leaves, the session is dropped. A
//! finished session is not resurrected - a fresh one is created to
//! play again.

use crate::games::GameId;
use crate::scores::{ScoreEntry, ScoreStore};
use chrono::{DateTime, Utc};

/// Lifecycle status of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    Finished,
}

/// Whether a mutator call was applied or ignored as out-of-turn input.
///
/// Invalid transitions are deliberately no-ops rather than errors;
/// the variant lets callers tell a no-op apart from an accepted action
/// without error plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    Accepted,
    Ignored,
}

impl Transition {
    pub fn is_accepted(self) -> bool {
        self == Transition::Accepted
    }
}

/// One complete play-through of a game, from start to finish.
///
/// Invariants: `end_time` is set if and only if the session is
/// `Finished`; `start_time` is set for every status except `Idle`.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub game: GameId,
    /// Name recorded in score entries when the session ends.
    pub player: String,
    pub status: GameStatus,
    pub score: u32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Create an idle session for the given game.
    pub fn new(game: GameId) -> Self {
        Self {
            game,
            player: "Player".to_string(),
            status: GameStatus::Idle,
            score: 0,
            start_time: None,
            end_time: None,
        }
    }

    /// Begin playing: reset the score to 0 and stamp the start time.
    /// Valid from `Idle` or `Finished`.
    pub fn start(&mut self, now: DateTime<Utc>) -> Transition {
        match self.status {
            GameStatus::Idle | GameStatus::Finished => {
                self.status = GameStatus::Playing;
                self.score = 0;
                self.start_time = Some(now);
                self.end_time = None;
                Transition::Accepted
            }
            _ => Transition::Ignored,
        }
    }

    /// Suspend play. Valid only from `Playing`.
    pub fn pause(&mut self) -> Transition {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                Transition::Accepted
            }
            _ => Transition::Ignored,
        }
    }

    /// Continue play. Valid only from `Paused`.
    pub fn resume(&mut self) -> Transition {
        match self.status {
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                Transition::Accepted
            }
            _ => Transition::Ignored,
        }
    }

    /// Finish the session with its final score, stamp the end time, and
    /// record the score in the log. Valid from `Playing` or `Paused`;
    /// an `Idle` session has nothing to end and a `Finished` one stays
    /// finished.
    ///
    /// The score write is fire-and-forget: storage failures are logged
    /// inside the store and never surface here.
    pub fn end(&mut self, final_score: u32, now: DateTime<Utc>, scores: &mut ScoreStore) -> Transition {
        match self.status {
            GameStatus::Playing | GameStatus::Paused => {
                self.status = GameStatus::Finished;
                self.score = final_score;
                self.end_time = Some(now);
                scores.append(ScoreEntry {
                    player: self.player.clone(),
                    score: final_score,
                    timestamp: now,
                    game: self.game,
                });
                Transition::Accepted
            }
            _ => Transition::Ignored,
        }
    }

    /// Overwrite the running score. Valid in any state except `Finished`.
    pub fn update_score(&mut self, new_score: u32) -> Transition {
        match self.status {
            GameStatus::Finished => Transition::Ignored,
            _ => {
                self.score = new_score;
                Transition::Accepted
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}
