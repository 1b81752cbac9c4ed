//! User-defined dialects.
//!
//! A custom dialect is stored as one JSON record per file:
//!
//! ```json
//! {
//!   "name": "H2",
//!   "driverClass": "org.h2.Driver",
//!   "defaultPort": 9092,
//!   "jdbcName": "jdbc:h2:tcp://",
//!   "separator": "/"
//! }
//! ```
//!
//! Custom dialects always locate the database name positionally; there is no
//! way to declare a key/value dialect.

use serde::{Deserialize, Serialize};

use crate::dialect::DialectDescriptor;
use crate::error::{DialectError, DialectResult};
use crate::registry::DialectRegistry;

/// A custom dialect record as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDialect {
    /// Dialect id.
    pub name: String,
    /// Fully qualified JDBC driver class name.
    pub driver_class: String,
    /// Port assumed when a URL does not carry one.
    pub default_port: u16,
    /// JDBC URL prefix, e.g. `jdbc:h2:tcp://`.
    pub jdbc_name: String,
    /// Character between `host:port` and the database name.
    pub separator: char,
}

impl CustomDialect {
    /// Create a new record.
    pub fn new(
        name: impl Into<String>,
        driver_class: impl Into<String>,
        jdbc_name: impl Into<String>,
        default_port: u16,
        separator: char,
    ) -> Self {
        Self {
            name: name.into(),
            driver_class: driver_class.into(),
            default_port,
            jdbc_name: jdbc_name.into(),
            separator,
        }
    }

    /// Parse a record from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the record as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Check that the record can be registered and stored.
    pub fn validate(&self) -> DialectResult<()> {
        let invalid = |message: &str| Err(DialectError::invalid_custom(&self.name, message));

        if self.name.trim().is_empty() {
            return invalid("name must not be empty");
        }
        if DialectRegistry::is_reserved(&self.name) {
            return invalid("name is reserved by a built-in dialect");
        }
        if !is_file_stem(&self.name) {
            return invalid("name must not contain path separators or start with `.`");
        }
        if self.driver_class.trim().is_empty() {
            return invalid("driver class must not be empty");
        }
        if self.jdbc_name.trim().is_empty() {
            return invalid("JDBC prefix must not be empty");
        }
        if self.default_port == 0 {
            return invalid("default port must be non-zero");
        }
        if self.separator.is_whitespace() {
            return invalid("separator must not be whitespace");
        }
        Ok(())
    }

    /// Convert into a registry descriptor.
    pub fn to_descriptor(&self) -> DialectDescriptor {
        DialectDescriptor::custom(
            self.name.as_str(),
            self.driver_class.as_str(),
            self.jdbc_name.as_str(),
            self.default_port,
            self.separator,
        )
    }

    /// File name used when the record is stored.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}

fn is_file_stem(name: &str) -> bool {
    !name.starts_with('.') && !name.contains(['/', '\\']) && !name.contains('\0')
}
