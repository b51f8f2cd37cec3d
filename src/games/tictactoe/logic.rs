//! Tic-tac-toe game logic: move handling and line scanning.

use super::types::{Mark, TicTacToeGame, TicTacToeResult, BOARD_SIZE};
use crate::core::Transition;

/// The eight winning lines: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Claim a cell for the mark whose turn it is. Ignored when the cell
/// is occupied or out of range, or the game is already decided.
pub fn play(game: &mut TicTacToeGame, cell: usize) -> Transition {
    if game.is_over() || cell >= BOARD_SIZE || game.board[cell].is_some() {
        return Transition::Ignored;
    }

    game.board[cell] = Some(game.next_mark);
    if let Some(mark) = winner(&game.board) {
        game.result = Some(TicTacToeResult::Won(mark));
    } else if game.board.iter().all(|c| c.is_some()) {
        game.result = Some(TicTacToeResult::Draw);
    } else {
        game.next_mark = game.next_mark.opponent();
    }
    Transition::Accepted
}

/// Scan the winning lines for three matching marks.
pub fn winner(board: &[Option<Mark>; BOARD_SIZE]) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some(mark);
            }
        }
    }
    None
}
