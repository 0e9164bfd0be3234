//! Error types for the terminal front end.

use derive_more::{Display, Error};
use tracing::instrument;

/// Terminal I/O failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("TUI error: {} at {}:{}", message, file, line)]
pub struct TuiError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TuiError {
    /// Creates a new TUI error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for TuiError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Terminal I/O error: {}", err))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_with_location() {
        let err: TuiError = std::io::Error::other("boom").into();
        assert!(err.message.contains("boom"));
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("TUI error: Terminal I/O error: boom"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("bad colour");
        assert!(err.to_string().starts_with("Config error: bad colour at "));
    }
}
