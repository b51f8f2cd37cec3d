//! Integration test: Session lifecycle and the score log
//!
//! Exercises the idle -> playing -> paused -> finished lifecycle, the
//! score append it triggers, top-N queries, clearing, and reopening a
//! store from disk.

use arcade::core::{GameSession, GameStatus, Transition};
use arcade::games::GameId;
use arcade::scores::{ScoreEntry, ScoreStore};
use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static SCRATCH_SEQ: AtomicUsize = AtomicUsize::new(0);

fn scratch_dir() -> PathBuf {
    let seq = SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("arcade-it-{}-{}", std::process::id(), seq))
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn entry(game: GameId, score: u32, secs: i64) -> ScoreEntry {
    ScoreEntry {
        player: "Player".to_string(),
        score,
        timestamp: at(secs),
        game,
    }
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[test]
fn test_full_lifecycle_records_exactly_one_score() {
    let mut scores = ScoreStore::in_memory();
    let mut session = GameSession::new(GameId::ClickSpeed);

    assert_eq!(session.start(at(100)), Transition::Accepted);
    assert_eq!(session.pause(), Transition::Accepted);
    assert_eq!(session.resume(), Transition::Accepted);
    assert_eq!(session.end(42, at(160), &mut scores), Transition::Accepted);

    assert_eq!(session.status, GameStatus::Finished);
    assert_eq!(session.score, 42);
    assert_eq!(session.start_time, Some(at(100)));
    assert_eq!(session.end_time, Some(at(160)));

    let logged = scores.query(GameId::ClickSpeed, 10);
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].score, 42);
    assert_eq!(logged[0].game, GameId::ClickSpeed);
}

#[test]
fn test_end_time_set_iff_finished() {
    let mut scores = ScoreStore::in_memory();
    let mut session = GameSession::new(GameId::Blackjack);
    assert!(session.end_time.is_none());

    let _ = session.start(at(0));
    assert!(session.end_time.is_none());
    let _ = session.pause();
    assert!(session.end_time.is_none());
    let _ = session.resume();
    let _ = session.end(5, at(9), &mut scores);
    assert!(session.end_time.is_some());

    // Restarting clears the stamp again
    let _ = session.start(at(20));
    assert!(session.end_time.is_none());
    assert_eq!(session.status, GameStatus::Playing);
}

#[test]
fn test_invalid_transitions_are_noops() {
    let mut scores = ScoreStore::in_memory();
    let mut session = GameSession::new(GameId::TicTacToe);

    assert_eq!(session.pause(), Transition::Ignored);
    assert_eq!(session.resume(), Transition::Ignored);
    assert_eq!(session.end(1, at(0), &mut scores), Transition::Ignored);
    assert_eq!(session.status, GameStatus::Idle);

    let _ = session.start(at(0));
    assert_eq!(session.resume(), Transition::Ignored);
    let _ = session.pause();
    assert_eq!(session.pause(), Transition::Ignored);
    assert_eq!(session.status, GameStatus::Paused);
    assert!(scores.query(GameId::TicTacToe, 10).is_empty());
}

#[test]
fn test_score_updates_stop_after_finish() {
    let mut scores = ScoreStore::in_memory();
    let mut session = GameSession::new(GameId::RockPaperScissors);

    let _ = session.start(at(0));
    let _ = session.update_score(3);
    let _ = session.update_score(7);
    assert_eq!(session.score, 7);

    let _ = session.end(7, at(5), &mut scores);
    assert_eq!(session.update_score(100), Transition::Ignored);
    assert_eq!(session.score, 7);
}

// =============================================================================
// Score log queries
// =============================================================================

#[test]
fn test_query_top_three_of_four() {
    let mut store = ScoreStore::in_memory();
    for (i, score) in [10, 50, 30, 20].into_iter().enumerate() {
        store.append(entry(GameId::Minesweeper, score, i as i64));
    }

    let top: Vec<u32> = store
        .query(GameId::Minesweeper, 3)
        .iter()
        .map(|e| e.score)
        .collect();
    assert_eq!(top, vec![50, 30, 20]);
}

#[test]
fn test_query_breaks_ties_by_insertion_order() {
    let mut store = ScoreStore::in_memory();
    store.append(entry(GameId::WordGuess, 10, 0));
    store.append(entry(GameId::WordGuess, 10, 1));
    store.append(entry(GameId::WordGuess, 10, 2));

    let times: Vec<DateTime<Utc>> = store
        .query(GameId::WordGuess, 10)
        .iter()
        .map(|e| e.timestamp)
        .collect();
    assert_eq!(times, vec![at(0), at(1), at(2)]);
}

#[test]
fn test_query_unknown_game_is_empty() {
    let store = ScoreStore::in_memory();
    assert!(store.query(GameId::Blackjack, 5).is_empty());
}

#[test]
fn test_clear_then_query_then_clear_again() {
    let mut store = ScoreStore::in_memory();
    store.append(entry(GameId::Blackjack, 10, 0));
    store.clear(GameId::Blackjack);
    assert!(store.query(GameId::Blackjack, 5).is_empty());
    // Second clear of an already-empty log is fine
    store.clear(GameId::Blackjack);
    assert!(store.query(GameId::Blackjack, 5).is_empty());
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_scores_survive_reopening_the_store() {
    let dir = scratch_dir();
    {
        let mut store = ScoreStore::with_dir(dir.clone());
        store.append(entry(GameId::Blackjack, 21, 0));
        store.append(entry(GameId::Blackjack, 17, 1));
        store.append(entry(GameId::WordGuess, 6, 2));
    }

    let store = ScoreStore::with_dir(dir.clone());
    let blackjack: Vec<u32> = store
        .query(GameId::Blackjack, 10)
        .iter()
        .map(|e| e.score)
        .collect();
    assert_eq!(blackjack, vec![21, 17]);
    assert_eq!(store.query(GameId::WordGuess, 10).len(), 1);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_sessions_share_a_store_across_games() {
    let dir = scratch_dir();
    let mut scores = ScoreStore::with_dir(dir.clone());

    let mut blackjack = GameSession::new(GameId::Blackjack);
    let _ = blackjack.start(at(0));
    let _ = blackjack.end(21, at(30), &mut scores);

    let mut wordle = GameSession::new(GameId::WordGuess);
    let _ = wordle.start(at(40));
    let _ = wordle.end(5, at(90), &mut scores);

    assert_eq!(scores.query(GameId::Blackjack, 10).len(), 1);
    assert_eq!(scores.query(GameId::WordGuess, 10).len(), 1);
    assert!(dir.join("blackjack.json").exists());
    assert!(dir.join("word-guess.json").exists());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_storage_failure_never_blocks_the_session() {
    // Point the store at a path whose parent is a file: every write
    // fails, the session must finish regardless
    let blocker = scratch_dir();
    fs::write(&blocker, "occupied").unwrap();

    let mut scores = ScoreStore::with_dir(blocker.join("scores"));
    let mut session = GameSession::new(GameId::ClickSpeed);
    let _ = session.start(at(0));
    assert_eq!(session.end(12, at(10), &mut scores), Transition::Accepted);
    assert_eq!(session.status, GameStatus::Finished);

    // The entry is still queryable in memory
    assert_eq!(scores.query(GameId::ClickSpeed, 10).len(), 1);

    fs::remove_file(blocker).ok();
}
