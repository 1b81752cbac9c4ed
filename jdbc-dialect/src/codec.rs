//! Parsing JDBC URLs into parts and rebuilding them from edited parts.
//!
//! Parsing never fails: a URL that does not have the `host:port` shape the
//! dialect expects degrades to the dialect's default port with no address and
//! no database name, which callers treat as "unknown, ask the user".
//!
//! Rebuilding keeps every driver parameter of the previous URL that the codec
//! does not interpret.
//!
//! ```rust
//! use jdbc_dialect::{BuildDefaults, ConnectionParts, DialectRegistry, UrlCodec};
//!
//! let registry = DialectRegistry::builtin();
//! let codec = UrlCodec::new(&registry);
//!
//! let parts = codec.parse("MariaDB", "jdbc:mariadb://localhost:3306/mydb").unwrap();
//! assert_eq!(parts.server_address.as_deref(), Some("localhost"));
//! assert_eq!(parts.port, Some(3306));
//! assert_eq!(parts.database_name.as_deref(), Some("mydb"));
//!
//! let url = codec
//!     .build(
//!         "PostgreSQL",
//!         Some("jdbc:postgresql://a:5432/old?ssl=true"),
//!         &ConnectionParts::default().with_database_name("new"),
//!         &BuildDefaults::new("a", 5432, "old"),
//!     )
//!     .unwrap();
//! assert_eq!(url, "jdbc:postgresql://a:5432/new?ssl=true");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dialect::DialectDescriptor;
use crate::error::DialectResult;
use crate::registry::DialectRegistry;

/// Host used when neither the edited parts nor an old URL provide one.
pub const DEFAULT_HOST: &str = "localhost";

/// The structured parts of a connection URL.
///
/// Any field may be absent when the URL did not contain enough structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionParts {
    /// Server host name or address.
    pub server_address: Option<String>,
    /// Server port.
    pub port: Option<u16>,
    /// Database name; may be empty when the URL names no database.
    pub database_name: Option<String>,
}

impl ConnectionParts {
    /// Create parts with all three fields present.
    pub fn new(
        server_address: impl Into<String>,
        port: u16,
        database_name: impl Into<String>,
    ) -> Self {
        Self {
            server_address: Some(server_address.into()),
            port: Some(port),
            database_name: Some(database_name.into()),
        }
    }

    /// Parts of a URL the codec could not split: only the default port.
    pub fn port_only(port: u16) -> Self {
        Self {
            port: Some(port),
            ..Default::default()
        }
    }

    /// Set the server address.
    pub fn with_server_address(mut self, server_address: impl Into<String>) -> Self {
        self.server_address = Some(server_address.into());
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database name.
    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = Some(database_name.into());
        self
    }

    /// Check if the server address is known.
    pub fn has_server_address(&self) -> bool {
        self.server_address.is_some()
    }

    /// Get the database name, treating an empty name as unset.
    pub fn database_name(&self) -> Option<&str> {
        self.database_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Values used by [`DialectDescriptor::build_url`] for parts that are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDefaults {
    /// Fallback server address.
    pub server_address: String,
    /// Fallback port.
    pub port: u16,
    /// Fallback database name.
    pub database_name: String,
}

impl BuildDefaults {
    /// Create defaults from explicit values.
    pub fn new(
        server_address: impl Into<String>,
        port: u16,
        database_name: impl Into<String>,
    ) -> Self {
        Self {
            server_address: server_address.into(),
            port,
            database_name: database_name.into(),
        }
    }

    /// `localhost`, the dialect's default port and an empty database name.
    pub fn for_dialect(dialect: &DialectDescriptor) -> Self {
        Self::new(DEFAULT_HOST, dialect.default_port(), "")
    }

    /// Use previously parsed parts, falling back to [`Self::for_dialect`]
    /// field by field.
    pub fn from_parts(dialect: &DialectDescriptor, parts: &ConnectionParts) -> Self {
        Self::for_dialect(dialect).with_parts(parts)
    }

    /// Replace each default with the corresponding part when it is present.
    pub fn with_parts(self, parts: &ConnectionParts) -> Self {
        Self {
            server_address: parts
                .server_address
                .clone()
                .unwrap_or(self.server_address),
            port: parts.port.unwrap_or(self.port),
            database_name: parts.database_name.clone().unwrap_or(self.database_name),
        }
    }
}

impl DialectDescriptor {
    /// Parse a connection URL of this dialect into its parts.
    pub fn parse_url(&self, url: &str) -> ConnectionParts {
        let stripped = self.strip_prefix(url);

        let Some(segment) = self.strategy().extract(stripped, self) else {
            debug!(dialect = %self, "No database boundary in URL, using default port");
            return ConnectionParts::port_only(self.default_port());
        };

        let mut address = stripped[..segment.boundary].split(':');
        let parts = match (address.next(), address.next(), address.next()) {
            (Some(host), Some(port), None) if !host.is_empty() && !port.is_empty() => {
                match port.parse::<u16>() {
                    Ok(port) => Some(ConnectionParts::new(host, port, segment.name)),
                    Err(_) => {
                        debug!(dialect = %self, port, "Port segment is not a valid port number");
                        None
                    }
                }
            }
            _ => None,
        };

        match parts {
            Some(parts) => {
                debug!(
                    dialect = %self,
                    host = ?parts.server_address,
                    port = ?parts.port,
                    database = ?parts.database_name,
                    "Connection URL parsed"
                );
                parts
            }
            None => {
                debug!(dialect = %self, "Address is not host:port, using default port");
                ConnectionParts::port_only(self.default_port())
            }
        }
    }

    /// Build a connection URL of this dialect.
    ///
    /// Driver parameters are carried over from `old_url` unchanged. Absent
    /// parts are taken from `defaults`; no part is validated.
    pub fn build_url(
        &self,
        old_url: Option<&str>,
        parts: &ConnectionParts,
        defaults: &BuildDefaults,
    ) -> String {
        let strategy = self.strategy();
        let parameters = old_url
            .map(|url| strategy.extract_parameters(url))
            .unwrap_or_default();

        let database_name = parts
            .database_name
            .as_deref()
            .unwrap_or(&defaults.database_name);
        let database_segment = strategy.build(self, database_name);

        let server_address = parts
            .server_address
            .as_deref()
            .unwrap_or(&defaults.server_address);
        let port = parts.port.unwrap_or(defaults.port);

        let url = format!(
            "{}{}:{}{}{}",
            self.jdbc_prefix(),
            server_address,
            port,
            database_segment,
            parameters
        );
        debug!(dialect = %self, kept_parameters = !parameters.is_empty(), "Connection URL built");
        url
    }
}

/// Parses and builds connection URLs by dialect id against a registry snapshot.
#[derive(Debug, Clone, Copy)]
pub struct UrlCodec<'r> {
    registry: &'r DialectRegistry,
}

impl<'r> UrlCodec<'r> {
    /// Create a codec over a registry snapshot.
    pub fn new(registry: &'r DialectRegistry) -> Self {
        Self { registry }
    }

    /// Get the registry snapshot this codec resolves dialects in.
    pub fn registry(&self) -> &'r DialectRegistry {
        self.registry
    }

    /// Parse `url` with the dialect named `dialect_id`.
    pub fn parse(&self, dialect_id: &str, url: &str) -> DialectResult<ConnectionParts> {
        let dialect = self.registry.lookup(dialect_id)?;
        Ok(dialect.parse_url(url))
    }

    /// Build a URL with the dialect named `dialect_id`.
    pub fn build(
        &self,
        dialect_id: &str,
        old_url: Option<&str>,
        parts: &ConnectionParts,
        defaults: &BuildDefaults,
    ) -> DialectResult<String> {
        let dialect = self.registry.lookup(dialect_id)?;
        Ok(dialect.build_url(old_url, parts, defaults))
    }
}
