//! Word-guessing game logic: target selection, guess submission, and
//! per-letter feedback classification.

use super::types::{GuessRow, LetterFeedback, PuzzleState, WordPuzzle, MAX_ATTEMPTS};
use crate::core::Transition;
use crate::words::Language;
use rand::Rng;
use std::collections::HashMap;

/// Start a puzzle with a target picked uniformly from the language's
/// word list.
pub fn new_game<R: Rng>(language: Language, rng: &mut R) -> WordPuzzle {
    let words = language.word_list();
    let target = words[rng.gen_range(0..words.len())];

    WordPuzzle {
        language,
        target: target.to_string(),
        guesses: Vec::new(),
        max_attempts: MAX_ATTEMPTS,
        state: PuzzleState::AwaitingGuess,
    }
}

/// Submit a guess. Rejected without state change when the puzzle is
/// over or the guess length differs from the target; the guess text
/// itself is assumed pre-validated (lowercase letters).
pub fn submit_guess(puzzle: &mut WordPuzzle, guess: &str) -> Transition {
    if puzzle.is_over() || guess.chars().count() != puzzle.word_length() {
        return Transition::Ignored;
    }

    let feedback = classify(&puzzle.target, guess);
    let solved = guess == puzzle.target;
    puzzle.guesses.push(GuessRow {
        word: guess.to_string(),
        feedback,
    });

    if solved {
        puzzle.state = PuzzleState::Solved;
    } else if puzzle.guesses.len() >= puzzle.max_attempts {
        puzzle.state = PuzzleState::Exhausted;
    }
    Transition::Accepted
}

/// Classify each guess position as correct, present, or absent.
///
/// Exact matches are claimed first; the remaining target letters form
/// a multiset that `Present` marks consume left to right, so duplicate
/// letters in the guess are never credited beyond their count in the
/// target.
pub fn classify(target: &str, guess: &str) -> Vec<LetterFeedback> {
    let target_chars: Vec<char> = target.chars().collect();
    let guess_chars: Vec<char> = guess.chars().collect();
    let mut feedback = vec![LetterFeedback::Absent; guess_chars.len()];

    // Pass 1: exact matches; everything else feeds the leftover pool
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for (i, (&g, &t)) in guess_chars.iter().zip(target_chars.iter()).enumerate() {
        if g == t {
            feedback[i] = LetterFeedback::Correct;
        } else {
            *remaining.entry(t).or_insert(0) += 1;
        }
    }

    // Pass 2: non-exact positions claim leftovers left to right
    for (i, &g) in guess_chars.iter().enumerate() {
        if feedback[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g) {
            if *count > 0 {
                feedback[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }
    }

    feedback
}
