//! Registry snapshots: the built-in dialects plus any custom ones.

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::classifier::{self, Classification};
use crate::custom::CustomDialect;
use crate::dialect::{BUILTIN_DIALECTS, DialectDescriptor};
use crate::error::{DialectError, DialectResult};

/// An immutable, ordered set of dialects keyed by id.
///
/// Built-ins come first in table order, then custom dialects in the order they
/// were merged. A snapshot is a plain value: clone it, hand it to another
/// thread, or build a fresh one per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectRegistry {
    dialects: IndexMap<SmolStr, DialectDescriptor>,
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DialectRegistry {
    /// Create a snapshot with only the built-in dialects.
    pub fn builtin() -> Self {
        let dialects = BUILTIN_DIALECTS
            .iter()
            .map(|dialect| (SmolStr::from(dialect.id()), dialect.clone()))
            .collect();
        Self { dialects }
    }

    /// Merge custom dialects into a new snapshot.
    ///
    /// Records that fail validation, reuse a built-in id, or repeat an id
    /// already present are skipped.
    pub fn with_custom<I>(self, customs: I) -> Self
    where
        I: IntoIterator<Item = CustomDialect>,
    {
        let mut dialects = self.dialects;

        for custom in customs {
            if let Err(e) = custom.validate() {
                warn!(name = %custom.name, error = %e, "Skipping invalid custom dialect");
                continue;
            }
            if dialects.contains_key(custom.name.as_str()) {
                warn!(name = %custom.name, "Skipping custom dialect with duplicate id");
                continue;
            }

            let descriptor = custom.to_descriptor();
            debug!(id = %descriptor, prefix = descriptor.jdbc_prefix(), "Custom dialect registered");
            dialects.insert(SmolStr::from(descriptor.id()), descriptor);
        }

        Self { dialects }
    }

    /// Look up a dialect by id.
    pub fn lookup(&self, id: &str) -> DialectResult<&DialectDescriptor> {
        self.get(id).ok_or_else(|| DialectError::unknown_dialect(id))
    }

    /// Get a dialect by id.
    pub fn get(&self, id: &str) -> Option<&DialectDescriptor> {
        self.dialects.get(id)
    }

    /// Check if a dialect id exists in this snapshot.
    pub fn contains(&self, id: &str) -> bool {
        self.dialects.contains_key(id)
    }

    /// Number of dialects.
    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    /// Check if the snapshot has no dialects.
    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }

    /// All dialects in order.
    pub fn all(&self) -> impl Iterator<Item = &DialectDescriptor> {
        self.dialects.values()
    }

    /// All dialect ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.dialects.keys().map(SmolStr::as_str)
    }

    /// The built-in dialects of this snapshot.
    pub fn builtins(&self) -> impl Iterator<Item = &DialectDescriptor> {
        self.all().filter(|dialect| dialect.is_builtin())
    }

    /// The custom dialects of this snapshot.
    pub fn customs(&self) -> impl Iterator<Item = &DialectDescriptor> {
        self.all().filter(|dialect| !dialect.is_builtin())
    }

    /// Check if `id` names a built-in dialect, ignoring ASCII case.
    pub fn is_reserved(id: &str) -> bool {
        BUILTIN_DIALECTS
            .iter()
            .any(|dialect| dialect.id().eq_ignore_ascii_case(id))
    }

    /// Identify the built-in dialect that uses `driver_class`.
    pub fn classify(&self, driver_class: &str) -> Classification {
        classifier::classify_among(self.builtins(), driver_class)
    }

    /// Find any dialect in this snapshot, built-in first, using `driver_class`.
    pub fn resolve_driver(&self, driver_class: &str) -> Option<&DialectDescriptor> {
        self.builtins()
            .chain(self.customs())
            .find(|dialect| dialect.driver_class() == driver_class)
    }
}
