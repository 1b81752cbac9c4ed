//! Directory-backed storage for custom dialect records.
//!
//! Every `*.json` file in the directory holds one [`CustomDialect`]. Loading is
//! lenient: a file that cannot be read or parsed is skipped with a warning so
//! one broken record does not hide the others.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::custom::CustomDialect;
use crate::error::{DialectError, DialectResult};
use crate::registry::DialectRegistry;

const RECORD_EXTENSION: &str = "json";

/// A directory of custom dialect records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDialectStore {
    dir: PathBuf,
}

impl CustomDialectStore {
    /// Create a store over `dir`. The directory need not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every readable record, ordered by file name.
    ///
    /// A missing directory holds no records.
    pub fn load_all(&self) -> DialectResult<Vec<CustomDialect>> {
        let records: Vec<_> = self
            .entries()?
            .into_iter()
            .map(|(_, record)| record)
            .collect();

        info!(dir = %self.dir.display(), count = records.len(), "Custom dialects loaded");
        Ok(records)
    }

    /// Load the record whose name is `name`.
    pub fn load(&self, name: &str) -> DialectResult<CustomDialect> {
        self.find(name)?
            .map(|(_, record)| record)
            .ok_or_else(|| DialectError::unknown_dialect(name))
    }

    /// Validate and write a record, replacing any record with the same name.
    ///
    /// Returns the path written.
    pub fn save(&self, record: &CustomDialect) -> DialectResult<PathBuf> {
        record.validate()?;

        fs::create_dir_all(&self.dir).map_err(|e| DialectError::io(&self.dir, e))?;

        let path = match self.find(&record.name)? {
            Some((existing, _)) => existing,
            None => self.dir.join(record.file_name()),
        };
        let json = record.to_json().map_err(|source| DialectError::JsonError {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(&path, json).map_err(|e| DialectError::io(&path, e))?;

        info!(name = %record.name, path = %path.display(), "Custom dialect saved");
        Ok(path)
    }

    /// Delete the record whose name is `name`.
    pub fn remove(&self, name: &str) -> DialectResult<PathBuf> {
        let (path, _) = self
            .find(name)?
            .ok_or_else(|| DialectError::unknown_dialect(name))?;

        fs::remove_file(&path).map_err(|e| DialectError::io(&path, e))?;

        info!(name, path = %path.display(), "Custom dialect removed");
        Ok(path)
    }

    /// Build a registry snapshot of the built-ins plus every stored record.
    pub fn registry(&self) -> DialectResult<DialectRegistry> {
        Ok(DialectRegistry::builtin().with_custom(self.load_all()?))
    }

    fn find(&self, name: &str) -> DialectResult<Option<(PathBuf, CustomDialect)>> {
        Ok(self
            .entries()?
            .into_iter()
            .find(|(_, record)| record.name == name))
    }

    fn entries(&self) -> DialectResult<Vec<(PathBuf, CustomDialect)>> {
        if !self.dir.exists() {
            debug!(dir = %self.dir.display(), "Custom dialect directory does not exist");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(|e| DialectError::io(&self.dir, e))? {
            let path = entry.map_err(|e| DialectError::io(&self.dir, e))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == RECORD_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            match read_record(&path) {
                Ok(record) => entries.push((path, record)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable custom dialect")
                }
            }
        }
        Ok(entries)
    }
}

fn read_record(path: &Path) -> DialectResult<CustomDialect> {
    let content = fs::read_to_string(path).map_err(|e| DialectError::io(path, e))?;
    CustomDialect::from_json(&content).map_err(|source| DialectError::JsonError {
        path: path.display().to_string(),
        source,
    })
}
