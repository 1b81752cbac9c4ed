//! Error types for dialect lookup, custom dialects and configuration.

// These warnings are false positives - the fields are used by derive macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Result type for dialect operations.
pub type DialectResult<T> = Result<T, DialectError>;

/// Errors that can occur while resolving dialects or loading their definitions.
///
/// Malformed connection URLs are deliberately absent: parsing degrades to
/// partial results instead of failing.
#[derive(Error, Debug, Diagnostic)]
pub enum DialectError {
    /// No dialect with this id in the registry snapshot.
    #[error("unknown dialect `{id}`")]
    #[diagnostic(
        code(jdbc_codec::dialect::unknown),
        help("run `jdbc-codec dialect list` to see the available dialects")
    )]
    UnknownDialect { id: String },

    /// A custom dialect record failed validation.
    #[error("invalid custom dialect `{name}`: {message}")]
    #[diagnostic(code(jdbc_codec::dialect::invalid_custom))]
    InvalidCustomDialect { name: String, message: String },

    /// Error reading or writing a file.
    #[error("failed to access file: {path}")]
    #[diagnostic(code(jdbc_codec::io_error))]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A custom dialect file is not valid JSON for the expected record.
    #[error("failed to parse dialect file: {path}")]
    #[diagnostic(code(jdbc_codec::dialect::json_error))]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML")]
    #[diagnostic(code(jdbc_codec::config::toml_error))]
    TomlError {
        #[source]
        source: toml::de::Error,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    #[diagnostic(code(jdbc_codec::config::error))]
    ConfigError { message: String },
}

impl DialectError {
    /// Create an unknown dialect error.
    pub fn unknown_dialect(id: impl Into<String>) -> Self {
        Self::UnknownDialect { id: id.into() }
    }

    /// Create an invalid custom dialect error.
    pub fn invalid_custom(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCustomDialect {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error for the given path.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Whether this error reports an unknown dialect id.
    pub fn is_unknown_dialect(&self) -> bool {
        matches!(self, Self::UnknownDialect { .. })
    }
}

#[cfg(test)]
#[allow(unused_assignments)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_dialect_error() {
        let err = DialectError::unknown_dialect("DB2");

        assert!(err.is_unknown_dialect());
        assert_eq!(err.to_string(), "unknown dialect `DB2`");
    }

    #[test]
    fn test_invalid_custom_error() {
        let err = DialectError::invalid_custom("H2", "default port must be non-zero");

        match err {
            DialectError::InvalidCustomDialect { name, message } => {
                assert_eq!(name, "H2");
                assert_eq!(message, "default port must be non-zero");
            }
            _ => panic!("Expected InvalidCustomDialect"),
        }
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = DialectError::io(
            "/tmp/drivers/h2.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );

        assert!(!err.is_unknown_dialect());
        assert_eq!(err.to_string(), "failed to access file: /tmp/drivers/h2.json");
    }

    #[test]
    fn test_diagnostic_code() {
        let err = DialectError::config("bad section");
        let code = err.code().map(|c| c.to_string());

        assert_eq!(code.as_deref(), Some("jdbc_codec::config::error"));
    }
}
