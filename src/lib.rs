//! # jdbc-codec
//!
//! Parse vendor JDBC connection URLs into server address, port and database
//! name, then rebuild them from edited parts while keeping every driver
//! parameter the original URL carried.
//!
//! jdbc-codec provides:
//! - Built-in dialects for MariaDB, MySQL, MS SQL, PostgreSQL and Oracle
//! - User-defined dialects stored as JSON records
//! - Driver class classification
//! - A `jdbc-codec.toml` configuration file
//!
//! ## Quick Start
//!
//! ```rust
//! use jdbc_codec::prelude::*;
//!
//! let registry = DialectRegistry::builtin();
//! let codec = UrlCodec::new(&registry);
//!
//! let old = "jdbc:postgresql://a:5432/old?ssl=true";
//! let parts = codec.parse("PostgreSQL", old)?;
//! assert_eq!(parts, ConnectionParts::new("a", 5432, "old"));
//!
//! let edited = ConnectionParts::new("b", 5432, "new");
//! let defaults = BuildDefaults::from_parts(registry.lookup("PostgreSQL")?, &parts);
//! let url = codec.build("PostgreSQL", Some(old), &edited, &defaults)?;
//! assert_eq!(url, "jdbc:postgresql://b:5432/new?ssl=true");
//!
//! assert_eq!(classify("org.postgresql.Driver").as_str(), "PostgreSQL");
//! # Ok::<(), jdbc_codec::DialectError>(())
//! ```
//!
//! ## Custom dialects
//!
//! ```rust
//! use jdbc_codec::prelude::*;
//!
//! let h2 = CustomDialect::new("H2", "org.h2.Driver", "jdbc:h2:tcp://", 9092, '/');
//! let registry = DialectRegistry::builtin().with_custom([h2]);
//!
//! let parts = UrlCodec::new(&registry).parse("H2", "jdbc:h2:tcp://db:9092/test")?;
//! assert_eq!(parts.database_name(), Some("test"));
//! # Ok::<(), jdbc_codec::DialectError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Dialect table, codec, registry, store and configuration.
pub mod dialect {
    pub use jdbc_dialect::*;
}

pub use jdbc_dialect::logging;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dialect::{
        BuildDefaults, Classification, CodecConfig, ConnectionParts, CustomDialect,
        CustomDialectStore, DialectDescriptor, DialectError, DialectRegistry, DialectResult,
        Strategy, UrlCodec, classify,
    };
}

// Re-export key types at the crate root
pub use dialect::{
    BUILTIN_DIALECTS, CUSTOM_SENTINEL, ConnectionParts, DialectError, DialectRegistry,
    DialectResult, UrlCodec, classify,
};
