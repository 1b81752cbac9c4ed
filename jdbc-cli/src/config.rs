//! Runtime context: configuration file, custom dialect store and logging.

use std::path::{Path, PathBuf};

use jdbc_dialect::config::CONFIG_FILE_NAME;
use jdbc_dialect::{CodecConfig, CustomDialectStore, DialectRegistry, logging};
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::error::{CliError, CliResult};

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    config: CodecConfig,
    config_path: Option<PathBuf>,
    store: Option<CustomDialectStore>,
}

impl Context {
    /// Load the context for the given global flags.
    ///
    /// An explicit `--config` must exist; otherwise `./jdbc-codec.toml` is
    /// read when present. `--dialects-dir` wins over the configured directory.
    pub fn load(args: &GlobalArgs) -> CliResult<Self> {
        let config_path = match &args.config {
            Some(path) if !path.exists() => {
                return Err(CliError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Some(path.clone()),
            None => {
                let local = Path::new(CONFIG_FILE_NAME);
                local.exists().then(|| local.to_path_buf())
            }
        };

        let config = match &config_path {
            Some(path) => CodecConfig::from_file(path)?,
            None => CodecConfig::default(),
        };

        let store = match &args.dialects_dir {
            Some(dir) => Some(CustomDialectStore::new(dir)),
            None => config.store(),
        };

        Ok(Self::new(config, config_path, store))
    }

    /// Create a context from parts.
    pub fn new(
        config: CodecConfig,
        config_path: Option<PathBuf>,
        store: Option<CustomDialectStore>,
    ) -> Self {
        Self {
            config,
            config_path,
            store,
        }
    }

    /// Install the log subscriber.
    ///
    /// `--verbose` forces debug output; the `JDBC_CODEC_*` environment comes
    /// next; the config file's `[logging]` table is the fallback.
    pub fn init_logging(&self, verbose: bool) {
        if verbose {
            logging::init_with("debug", logging::get_log_format());
        } else if logging::is_requested() {
            logging::init();
        } else {
            logging::init_with(&self.config.logging.level, &self.config.logging.format);
        }

        debug!(
            config = ?self.config_path,
            dialects_dir = ?self.store.as_ref().map(|s| s.dir().display().to_string()),
            "Context loaded"
        );
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Get the config file path, if one was read.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Get the custom dialect store, if a directory is configured.
    pub fn store(&self) -> Option<&CustomDialectStore> {
        self.store.as_ref()
    }

    /// Get the custom dialect store or fail with a hint.
    pub fn require_store(&self) -> CliResult<&CustomDialectStore> {
        self.store.as_ref().ok_or_else(|| {
            CliError::Config(
                "No custom dialect directory; pass --dialects-dir or set [dialects] custom_dir"
                    .to_string(),
            )
        })
    }

    /// Build a registry snapshot of built-ins plus stored custom dialects.
    pub fn registry(&self) -> CliResult<DialectRegistry> {
        match &self.store {
            Some(store) => Ok(store.registry()?),
            None => Ok(DialectRegistry::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdbc_dialect::CustomDialect;
    use tempfile::TempDir;

    #[test]
    fn test_registry_without_store_is_builtin() {
        let ctx = Context::new(CodecConfig::default(), None, None);
        let registry = ctx.registry().unwrap();
        assert_eq!(registry.len(), 5);
        assert!(ctx.require_store().is_err());
    }

    #[test]
    fn test_registry_includes_stored_dialects() {
        let dir = TempDir::new().unwrap();
        let store = CustomDialectStore::new(dir.path());
        store
            .save(&CustomDialect::new("H2", "org.h2.Driver", "jdbc:h2:tcp://", 9092, '/'))
            .unwrap();

        let ctx = Context::new(CodecConfig::default(), None, Some(store));
        let registry = ctx.registry().unwrap();
        assert!(registry.contains("H2"));
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_load_dialects_dir_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[dialects]\ncustom_dir = \"/from/config\"\n").unwrap();

        let args = GlobalArgs {
            config: Some(config_path.clone()),
            dialects_dir: Some(dir.path().join("override")),
            verbose: false,
        };
        let ctx = Context::load(&args).unwrap();

        assert_eq!(ctx.config_path(), Some(config_path.as_path()));
        assert_eq!(ctx.store().unwrap().dir(), dir.path().join("override"));
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let args = GlobalArgs {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Default::default()
        };
        let err = Context::load(&args).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
