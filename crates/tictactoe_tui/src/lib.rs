//! Terminal front end for tic-tac-toe.
//!
//! # Architecture
//!
//! - **input**: crossterm key/mouse events to [`Action`]s
//! - **app**: [`App`] applies actions to the game session
//! - **ui**: pure rendering plus the [`ScreenLayout`] used for mouse hit-testing
//! - **run**: terminal lifecycle and the event loop
//! - **config** / **theme** / **cli**: ambient settings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod error;
mod input;
mod run;
mod theme;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ThemeConfig, TuiConfig};
pub use error::{ConfigError, TuiError};
pub use input::{Action, Direction, map_key, map_mouse, move_cursor};
pub use run::run;
pub use theme::Theme;
pub use ui::{Hit, ScreenLayout, draw};
