//! Tic-tac-toe game logic.
//!
//! A UI-free core: the [`Board`] model, the pure [`rules`] evaluator, the
//! running [`Score`] and the [`Game`] controller that mediates clicks and
//! restarts.
//!
//! # Example
//!
//! ```
//! use tictactoe_game::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.click(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.score().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod score;
mod types;

pub use game::{ClickOutcome, Game, GameState, MoveRejection};
pub use position::Position;
pub use rules::{Line, Win};
pub use score::Score;
pub use types::{Board, Cell, GameStatus, Player};
