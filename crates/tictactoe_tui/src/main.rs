//! Tic Tac Toe - terminal front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Theme, TuiConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config().context("Failed to load configuration")?;

    init_tracing(&config)?;
    info!(config = %cli.config.display(), "Configuration resolved");

    let theme = Theme::from_config(config.theme()).context("Invalid theme")?;
    tictactoe_tui::run(theme, *config.mouse())?;

    Ok(())
}

/// Logs go to a file so they don't interfere with the TUI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
