//! Configuration file parsing for `jdbc-codec.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use tracing::info;

use crate::codec::{BuildDefaults, DEFAULT_HOST};
use crate::dialect::DialectDescriptor;
use crate::error::{DialectError, DialectResult};
use crate::store::CustomDialectStore;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "jdbc-codec.toml";

/// Main configuration structure for `jdbc-codec.toml`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Custom dialect settings.
    #[serde(default)]
    pub dialects: DialectsConfig,

    /// Fallbacks used when building URLs.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> DialectResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DialectError::io(path, e))?;

        let config = Self::from_str(&content)?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> DialectResult<Self> {
        let expanded = expand_env_vars(content);

        let config: Self =
            toml::from_str(&expanded).map_err(|e| DialectError::TomlError { source: e })?;
        config.validate()?;
        Ok(config)
    }

    /// Directory holding custom dialect records, if configured.
    pub fn custom_dir(&self) -> Option<PathBuf> {
        self.dialects
            .custom_dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Custom dialect store over the configured directory.
    pub fn store(&self) -> Option<CustomDialectStore> {
        self.custom_dir().map(CustomDialectStore::new)
    }

    /// Build fallbacks for `dialect`: configured host and database name,
    /// the dialect's default port.
    pub fn build_defaults(&self, dialect: &DialectDescriptor) -> BuildDefaults {
        BuildDefaults::new(
            self.defaults.host.as_str(),
            dialect.default_port(),
            self.defaults.database.as_str(),
        )
    }

    fn validate(&self) -> DialectResult<()> {
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(DialectError::config(format!(
                "unknown log level `{}`, expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.to_lowercase().as_str()) {
            return Err(DialectError::config(format!(
                "unknown log format `{}`, expected one of {}",
                self.logging.format,
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 3] = ["json", "pretty", "compact"];

/// Custom dialect configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DialectsConfig {
    /// Directory of custom dialect JSON records (supports `${ENV_VAR}`).
    pub custom_dir: Option<String>,
}

/// URL build fallbacks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Host used when none is given.
    #[serde(default = "default_host")]
    pub host: String,

    /// Database name used when none is given.
    #[serde(default)]
    pub database: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            database: String::new(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, pretty or compact.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

static ENV_VAR: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

/// Expand environment variables in the format `${VAR_NAME}`.
///
/// Unset variables are left as written.
fn expand_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &regex_lite::Captures<'_>| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
