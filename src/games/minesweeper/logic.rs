//! Minesweeper game logic: board setup and cell reveals.

use super::types::{
    MineCell, MinesweeperGame, MinesweeperResult, BOARD_CELLS, MAX_MINES, MIN_MINES,
    MIN_REVEAL_GOAL,
};
use crate::core::Transition;
use rand::Rng;

/// Start a board with `mines` mines placed in distinct random cells.
/// Mine count and reveal goal are clamped to playable ranges (the goal
/// can never exceed the number of safe cells).
pub fn new_game<R: Rng>(mines: u32, reveal_goal: u32, rng: &mut R) -> MinesweeperGame {
    let mines = mines.clamp(MIN_MINES, MAX_MINES);
    let max_goal = BOARD_CELLS as u32 - mines;
    let reveal_goal = reveal_goal.clamp(MIN_REVEAL_GOAL.min(max_goal), max_goal);

    let mut board = vec![MineCell::default(); BOARD_CELLS];
    let mut placed = 0;
    while placed < mines {
        let index = rng.gen_range(0..BOARD_CELLS);
        if !board[index].has_mine {
            board[index].has_mine = true;
            placed += 1;
        }
    }

    MinesweeperGame {
        board,
        mine_count: mines,
        reveal_goal,
        result: None,
    }
}

/// Uncover one cell. Revealing a mine loses and uncovers every mine;
/// reaching the reveal goal on safe cells wins. Ignored when the game
/// is over or the cell is already revealed or out of range.
pub fn reveal(game: &mut MinesweeperGame, cell: usize) -> Transition {
    if game.is_over() || cell >= game.board.len() || game.board[cell].revealed {
        return Transition::Ignored;
    }

    game.board[cell].revealed = true;
    if game.board[cell].has_mine {
        for c in game.board.iter_mut() {
            if c.has_mine {
                c.revealed = true;
            }
        }
        game.result = Some(MinesweeperResult::Lost);
    } else if game.revealed_safe() >= game.reveal_goal {
        game.result = Some(MinesweeperResult::Won);
    }
    Transition::Accepted
}
