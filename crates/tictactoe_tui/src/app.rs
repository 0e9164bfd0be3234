//! Application state and logic.

use tictactoe_game::{Game, Position};
use tracing::{debug, info, instrument};

use crate::input::{Action, move_cursor};

/// Main application state: the game session plus UI-only state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell highlighted for keyboard play.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Click(position) => {
                self.cursor = position;
                self.click(position);
            }
            Action::ClickCursor => {
                self.click(self.cursor);
            }
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Restart => self.game.restart(),
            Action::Quit => {
                info!("User quit");
                self.running = false;
            }
        }
    }

    fn click(&mut self, position: Position) {
        let outcome = self.game.click_position(position);
        debug!(%outcome, "Click handled");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
