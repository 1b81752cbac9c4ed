//! # jdbc-dialect
//!
//! Parse vendor JDBC connection URLs into parts and rebuild them from edited
//! parts without losing the driver parameters in between.
//!
//! This crate provides:
//! - The built-in dialect table (MariaDB, MySQL, MS SQL, PostgreSQL, Oracle)
//! - Registry snapshots that merge user-defined dialects at runtime
//! - The URL codec (`parse` / `build`) and the driver class classifier
//! - A directory store for custom dialect JSON records
//! - Configuration parser for `jdbc-codec.toml` files
//!
//! ## Example
//!
//! ```rust
//! use jdbc_dialect::{BuildDefaults, ConnectionParts, DialectRegistry, UrlCodec};
//!
//! let registry = DialectRegistry::builtin();
//! let codec = UrlCodec::new(&registry);
//!
//! let old = "jdbc:sqlserver://host:1443;databaseName=sales;encrypt=true";
//! let parts = codec.parse("MS SQL", old)?;
//! assert_eq!(parts.database_name.as_deref(), Some("sales"));
//!
//! let url = codec.build(
//!     "MS SQL",
//!     Some(old),
//!     &ConnectionParts::default().with_database_name("archive"),
//!     &BuildDefaults::new("host", 1443, "sales"),
//! )?;
//! assert_eq!(url, "jdbc:sqlserver://host:1443;databaseName=archive;encrypt=true");
//! # Ok::<(), jdbc_dialect::DialectError>(())
//! ```

pub mod classifier;
pub mod codec;
pub mod config;
pub mod custom;
pub mod dialect;
pub mod error;
pub mod logging;
pub mod registry;
pub mod store;

pub use classifier::{CUSTOM_SENTINEL, Classification, classify};
pub use codec::{BuildDefaults, ConnectionParts, UrlCodec};
pub use config::CodecConfig;
pub use custom::CustomDialect;
pub use dialect::{BUILTIN_DIALECTS, DialectDescriptor, DialectOrigin, Strategy};
pub use error::{DialectError, DialectResult};
pub use registry::DialectRegistry;
pub use store::CustomDialectStore;
