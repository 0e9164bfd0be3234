//! Key and mouse mapping.
//!
//! Raw crossterm events become semantic [`Action`]s here; nothing in this
//! module touches game state.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_game::Position;

use crate::ui::{Hit, ScreenLayout};

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click a specific cell.
    Click(Position),
    /// Click the cell under the cursor.
    ClickCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Start a new round.
    Restart,
    /// Leave the program.
    Quit,
}

/// Map a key event to an action.
///
/// Returns `None` for key releases and keys without a binding.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_index((c as u8 - b'1') as usize).map(Action::Click)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ClickCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Map a mouse event to an action using the last rendered layout.
///
/// Only left-button presses count.
pub fn map_mouse(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    match layout.hit_test(mouse.column, mouse.row)? {
        Hit::Cell(position) => Some(Action::Click(position)),
        Hit::Restart => Some(Action::Restart),
    }
}

/// Moves cursor one step, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
