//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Player, Position};

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// Every winning line, checked in this order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    player: Player,
    line: Line,
}

impl Win {
    /// Creates a win record.
    pub fn new(player: Player, line: Line) -> Self {
        Self { player, line }
    }

    /// Owner of the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three winning positions.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Winning line as raw board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] whose three cells carry the same
/// mark, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let player = board.get(a).mark()?;
        (board.get(b).mark() == Some(player) && board.get(c).mark() == Some(player))
            .then_some(Win::new(player, line))
    })
}
