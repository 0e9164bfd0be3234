//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage and from the controller so
//! they can be exercised on arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, Win, check_winner};

use crate::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board: a winner takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(win) = check_winner(board) {
        GameStatus::Won(win.player())
    } else if is_full(board) {
        GameStatus::Tied
    } else {
        GameStatus::InProgress
    }
}
