//! Resolved colour palette.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use tracing::instrument;

use crate::config::ThemeConfig;
use crate::error::ConfigError;

/// Colours used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// X marks, title and turn indicator.
    pub primary: Color,
    /// O marks and control borders.
    pub secondary: Color,
    /// Winning cells and end-of-game status.
    pub accent: Color,
}

impl Theme {
    /// Parses every colour in `config`.
    #[instrument(skip(config))]
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            primary: parse_color("primary", config.primary())?,
            secondary: parse_color("secondary", config.secondary())?,
            accent: parse_color("accent", config.accent())?,
        })
    }

    /// Style for a player's mark.
    pub fn mark(&self, player: tictactoe_game::Player) -> Style {
        let color = match player {
            tictactoe_game::Player::X => self.primary,
            tictactoe_game::Player::O => self.secondary,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style for a cell on the winning line.
    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the keyboard cursor.
    pub fn cursor(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Style for hints and separators.
    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x19, 0x76, 0xD2),
            secondary: Color::Rgb(0x21, 0x96, 0xF3),
            accent: Color::Rgb(0xFF, 0xC1, 0x07),
        }
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value.trim())
        .map_err(|_| ConfigError::new(format!("Invalid {} colour: {:?}", name, value)))
}
