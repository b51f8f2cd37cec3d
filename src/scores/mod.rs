//! Append-only per-game score history.
//!
//! Scores are mirrored to one JSON file per game under the store
//! directory. Persistence is best-effort: a failed write is logged and
//! gameplay continues, with the in-memory log staying authoritative
//! for the process lifetime. Losing scores is acceptable; blocking a
//! game over them is not.

use crate::games::GameId;
use crate::utils::persistence::{arcade_dir, load_json_or_default, save_json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// A single recorded score, immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub score: u32,
    pub timestamp: DateTime<Utc>,
    pub game: GameId,
}

/// Per-game score log with best-effort JSON persistence.
#[derive(Debug, Default)]
pub struct ScoreStore {
    dir: Option<PathBuf>,
    entries: HashMap<GameId, Vec<ScoreEntry>>,
}

impl ScoreStore {
    /// Open the default store under ~/.arcade/scores/, loading any
    /// previously recorded entries. Falls back to a memory-only store
    /// when the directory cannot be resolved.
    pub fn open() -> Self {
        match arcade_dir() {
            Ok(dir) => Self::with_dir(dir.join("scores")),
            Err(e) => {
                tracing::warn!(target: "arcade::scores", error = %e, "score directory unavailable, scores will not persist");
                Self::in_memory()
            }
        }
    }

    /// Open a store rooted at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        let mut entries = HashMap::new();
        for game in GameId::ALL {
            let log: Vec<ScoreEntry> = load_json_or_default(&dir.join(score_file(game)));
            if !log.is_empty() {
                entries.insert(game, log);
            }
        }
        Self {
            dir: Some(dir),
            entries,
        }
    }

    /// A store with no backing directory; entries live only in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Record a score at the end of the log for its game and persist.
    pub fn append(&mut self, entry: ScoreEntry) {
        let game = entry.game;
        self.entries.entry(game).or_default().push(entry);
        self.persist(game);
    }

    /// The top `limit` entries for a game by descending score. Ties
    /// keep insertion order. Empty when no scores are recorded.
    pub fn query(&self, game: GameId, limit: usize) -> Vec<ScoreEntry> {
        let mut scores = match self.entries.get(&game) {
            Some(log) => log.clone(),
            None => return Vec::new(),
        };
        // Stable sort so equal scores stay in insertion order
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(limit);
        scores
    }

    /// Drop every entry for a game, including its backing file.
    /// Idempotent: clearing an empty log is fine.
    pub fn clear(&mut self, game: GameId) {
        self.entries.remove(&game);
        if let Some(dir) = &self.dir {
            fs::remove_file(dir.join(score_file(game))).ok();
        }
    }

    /// All recorded entries for a game in insertion order.
    pub fn entries(&self, game: GameId) -> &[ScoreEntry] {
        self.entries.get(&game).map(Vec::as_slice).unwrap_or(&[])
    }

    fn persist(&self, game: GameId) {
        let dir = match &self.dir {
            Some(dir) => dir,
            None => return,
        };
        let log = self.entries.get(&game).map(Vec::as_slice).unwrap_or(&[]);
        if let Err(e) = save_json(&dir.join(score_file(game)), &log) {
            tracing::warn!(target: "arcade::scores", game = game.key(), error = %e, "failed to persist score log");
        }
    }
}

fn score_file(game: GameId) -> String {
    format!("{}.json", game.key())
}
