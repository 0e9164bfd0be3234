//! Command-line interface for the tic-tac-toe TUI.

use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use crate::config::TuiConfig;
use crate::error::ConfigError;

/// Tic Tac Toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Override the log file location
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    #[instrument(skip(self), fields(config = %self.config.display()))]
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = TuiConfig::load_or_default(&self.config)?;
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        Ok(config)
    }
}
