//! Logging setup.
//!
//! Library code emits events with the `tracing` macros; binaries install a
//! subscriber once at startup.
//!
//! # Environment Variables
//!
//! - `JDBC_CODEC_DEBUG=true|1|yes` - Enable debug logging
//! - `JDBC_CODEC_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `JDBC_CODEC_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use jdbc_dialect::logging;
//!
//! // Honour the environment, or do nothing if it asks for no logging
//! logging::init();
//!
//! // Or with explicit settings
//! logging::init_with("debug", "compact");
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `JDBC_CODEC_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("JDBC_CODEC_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Check if the environment requests logging at all.
pub fn is_requested() -> bool {
    is_debug_enabled() || env::var("JDBC_CODEC_LOG_LEVEL").is_ok()
}

/// Get the log level from `JDBC_CODEC_LOG_LEVEL`.
///
/// Defaults to "debug" if `JDBC_CODEC_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };

    env::var("JDBC_CODEC_LOG_LEVEL")
        .map(|level| normalize_level(&level).unwrap_or(fallback))
        .unwrap_or(fallback)
}

/// Get the log format from `JDBC_CODEC_LOG_FORMAT`, defaulting to "json".
pub fn get_log_format() -> &'static str {
    env::var("JDBC_CODEC_LOG_FORMAT")
        .map(|format| normalize_format(&format))
        .unwrap_or("json")
}

fn normalize_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

fn normalize_format(format: &str) -> &'static str {
    match format.to_lowercase().as_str() {
        "pretty" => "pretty",
        "compact" => "compact",
        _ => "json",
    }
}

/// Initialize logging from the environment.
///
/// Does nothing unless `JDBC_CODEC_DEBUG` or `JDBC_CODEC_LOG_LEVEL` is set.
/// Subsequent calls to any `init` function are no-ops.
pub fn init() {
    if is_requested() {
        init_with(get_log_level(), get_log_format());
    }
}

/// Initialize logging with an explicit level and format.
///
/// Unknown levels fall back to "warn", unknown formats to "json". Events are
/// written to stderr so command output on stdout stays clean.
pub fn init_with(level: &str, format: &str) {
    let level = normalize_level(level).unwrap_or("warn");
    let format = normalize_format(format);

    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!(
                "jdbc_codec={level},jdbc_dialect={level},jdbc_cli={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            match format {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json().with_writer(std::io::stderr))
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact().with_writer(std::io::stderr))
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty().with_writer(std::io::stderr))
                        .init();
                }
            }

            tracing::info!(level, format, "Logging initialized");
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            // Without a subscriber events are dropped unless the host installs one
            let _ = (level, format);
        }
    });
}
