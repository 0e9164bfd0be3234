//! TOML configuration for the terminal front end.
//!
//! Every field has a default, so the file is optional and may set only
//! the keys it cares about:
//!
//! ```toml
//! log_file = "tictactoe.log"
//! log_filter = "info,tictactoe_game=debug"
//! mouse = true
//!
//! [theme]
//! primary = "#1976D2"
//! secondary = "#2196F3"
//! accent = "#FFC107"
//! ```

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ConfigError;

/// Colour palette, as strings understood by ratatui (`#RRGGBB` or names).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct ThemeConfig {
    /// X marks, headings and the turn indicator.
    primary: String,
    /// O marks and control borders.
    secondary: String,
    /// Winning line and end-of-game status.
    accent: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#1976D2".to_string(),
            secondary: "#2196F3".to_string(),
            accent: "#FFC107".to_string(),
        }
    }
}

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct TuiConfig {
    /// Log destination; stdout belongs to the terminal UI.
    log_file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,
    /// Capture mouse clicks on cells and the restart control.
    mouse: bool,
    /// Colour palette.
    theme: ThemeConfig,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            mouse: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}
