//! CLI error types and result alias.

use jdbc_dialect::DialectError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(jdbc_codec::config))]
    Config(String),

    /// Dialect, store or config error from the library
    #[error(transparent)]
    #[diagnostic(transparent)]
    Dialect(#[from] DialectError),

    /// Command error
    #[error("Command error: {0}")]
    #[diagnostic(code(jdbc_codec::command))]
    Command(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Command(format!("Failed to serialize JSON: {}", err))
    }
}
