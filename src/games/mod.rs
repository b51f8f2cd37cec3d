//! Casual game engines: tic-tac-toe, click-speed, rock-paper-scissors,
//! blackjack, minesweeper, and word guessing.
//!
//! Each engine is a self-contained state machine driven synchronously
//! by discrete user actions. Out-of-turn input is ignored, never an
//! error.

#![allow(unused_imports)]

pub mod blackjack;
pub mod clickspeed;
pub mod minesweeper;
pub mod rps;
pub mod tictactoe;
pub mod wordle;

pub use blackjack::{BlackjackRound, Card, Deck, Hand, Outcome, Rank, RoundPhase, Suit};
pub use clickspeed::{ClickSpeedGame, CLICK_WINDOW_SECS};
pub use minesweeper::{MineCell, MinesweeperGame, MinesweeperResult, BOARD_CELLS};
pub use rps::{Choice, RoundResult, RpsGame, RpsRound};
pub use tictactoe::{Mark, TicTacToeGame, TicTacToeResult, BOARD_SIZE};
pub use wordle::{GuessRow, LetterFeedback, PuzzleState, WordPuzzle, MAX_ATTEMPTS};

use serde::{Deserialize, Serialize};

/// Identifies a game for session tracking and the score log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameId {
    TicTacToe,
    ClickSpeed,
    RockPaperScissors,
    Blackjack,
    Minesweeper,
    WordGuess,
}

impl GameId {
    pub const ALL: [GameId; 6] = [
        GameId::TicTacToe,
        GameId::ClickSpeed,
        GameId::RockPaperScissors,
        GameId::Blackjack,
        GameId::Minesweeper,
        GameId::WordGuess,
    ];

    /// Stable string key, also used as the score file stem.
    pub fn key(&self) -> &'static str {
        match self {
            GameId::TicTacToe => "tic-tac-toe",
            GameId::ClickSpeed => "click-speed",
            GameId::RockPaperScissors => "rock-paper-scissors",
            GameId::Blackjack => "blackjack",
            GameId::Minesweeper => "minesweeper",
            GameId::WordGuess => "word-guess",
        }
    }
}

/// A currently active game. The shell drives exactly one at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    TicTacToe(TicTacToeGame),
    ClickSpeed(ClickSpeedGame),
    RockPaperScissors(RpsGame),
    Blackjack(BlackjackRound),
    Minesweeper(MinesweeperGame),
    WordGuess(WordPuzzle),
}

impl ActiveGame {
    pub fn id(&self) -> GameId {
        match self {
            ActiveGame::TicTacToe(_) => GameId::TicTacToe,
            ActiveGame::ClickSpeed(_) => GameId::ClickSpeed,
            ActiveGame::RockPaperScissors(_) => GameId::RockPaperScissors,
            ActiveGame::Blackjack(_) => GameId::Blackjack,
            ActiveGame::Minesweeper(_) => GameId::Minesweeper,
            ActiveGame::WordGuess(_) => GameId::WordGuess,
        }
    }
}
