//! Dialect descriptors and the built-in dialect table.
//!
//! A dialect describes one kind of database connection URL: its JDBC prefix,
//! default port, the separator between `host:port` and the database name, and
//! the [`Strategy`] used to locate that name.
//!
//! ```rust
//! use jdbc_dialect::dialect::{BUILTIN_DIALECTS, Strategy};
//!
//! let mssql = BUILTIN_DIALECTS.iter().find(|d| d.id() == "MS SQL").unwrap();
//! assert_eq!(mssql.jdbc_prefix(), "jdbc:sqlserver://");
//! assert_eq!(mssql.strategy(), Strategy::KeyValueEmbedded);
//! ```

mod strategy;

pub use strategy::{DATABASE_NAME_KEY, DatabaseSegment, Strategy};

use serde::Serialize;
use smol_str::SmolStr;

/// Id of the built-in MariaDB dialect.
pub const MARIADB: &str = "MariaDB";
/// Id of the built-in MySQL dialect.
pub const MYSQL: &str = "MySQL";
/// Id of the built-in Microsoft SQL Server dialect.
pub const MS_SQL: &str = "MS SQL";
/// Id of the built-in PostgreSQL dialect.
pub const POSTGRESQL: &str = "PostgreSQL";
/// Id of the built-in Oracle dialect.
pub const ORACLE: &str = "Oracle";

/// The built-in dialects, in presentation order.
pub static BUILTIN_DIALECTS: [DialectDescriptor; 5] = [
    DialectDescriptor::builtin(
        MARIADB,
        "org.mariadb.jdbc.Driver",
        "jdbc:mariadb://",
        3306,
        '/',
        Strategy::SeparatorPositional,
        "org.mariadb.jdbc:mariadb-java-client",
    ),
    DialectDescriptor::builtin(
        MYSQL,
        "com.mysql.cj.jdbc.Driver",
        "jdbc:mysql://",
        3306,
        '/',
        Strategy::SeparatorPositional,
        "com.mysql:mysql-connector-j",
    ),
    DialectDescriptor::builtin(
        MS_SQL,
        "com.microsoft.sqlserver.jdbc.SQLServerDriver",
        "jdbc:sqlserver://",
        1443,
        ';',
        Strategy::KeyValueEmbedded,
        "com.microsoft.sqlserver:mssql-jdbc",
    ),
    DialectDescriptor::builtin(
        POSTGRESQL,
        "org.postgresql.Driver",
        "jdbc:postgresql://",
        5432,
        '/',
        Strategy::SeparatorPositional,
        "org.postgresql:postgresql",
    ),
    DialectDescriptor::builtin(
        ORACLE,
        "oracle.jdbc.driver.OracleDriver",
        "jdbc:oracle:thin:@",
        1521,
        ':',
        Strategy::SeparatorPositional,
        "com.oracle.database.jdbc:ojdbc11",
    ),
];

/// Where a dialect definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectOrigin {
    /// Compiled into the dialect table.
    #[serde(rename = "built-in")]
    BuiltIn,
    /// Supplied by the user at runtime.
    Custom,
}

impl DialectOrigin {
    /// Get the origin as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuiltIn => "built-in",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for DialectOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable description of one database connection URL format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialectDescriptor {
    id: SmolStr,
    driver_class: SmolStr,
    jdbc_prefix: SmolStr,
    default_port: u16,
    separator: char,
    strategy: Strategy,
    origin: DialectOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    driver_artifact: Option<SmolStr>,
}

impl DialectDescriptor {
    const fn builtin(
        id: &'static str,
        driver_class: &'static str,
        jdbc_prefix: &'static str,
        default_port: u16,
        separator: char,
        strategy: Strategy,
        driver_artifact: &'static str,
    ) -> Self {
        Self {
            id: SmolStr::new_static(id),
            driver_class: SmolStr::new_static(driver_class),
            jdbc_prefix: SmolStr::new_static(jdbc_prefix),
            default_port,
            separator,
            strategy,
            origin: DialectOrigin::BuiltIn,
            driver_artifact: Some(SmolStr::new_static(driver_artifact)),
        }
    }

    /// Custom dialects always locate the database positionally.
    pub(crate) fn custom(
        id: impl Into<SmolStr>,
        driver_class: impl Into<SmolStr>,
        jdbc_prefix: impl Into<SmolStr>,
        default_port: u16,
        separator: char,
    ) -> Self {
        Self {
            id: id.into(),
            driver_class: driver_class.into(),
            jdbc_prefix: jdbc_prefix.into(),
            default_port,
            separator,
            strategy: Strategy::SeparatorPositional,
            origin: DialectOrigin::Custom,
            driver_artifact: None,
        }
    }

    /// Get the dialect id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the fully qualified JDBC driver class name.
    pub fn driver_class(&self) -> &str {
        &self.driver_class
    }

    /// Get the JDBC URL prefix, e.g. `jdbc:postgresql://`.
    pub fn jdbc_prefix(&self) -> &str {
        &self.jdbc_prefix
    }

    /// Get the port assumed when a URL does not carry one.
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Get the character between `host:port` and the database name.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Get the database name strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get where this dialect was defined.
    pub fn origin(&self) -> DialectOrigin {
        self.origin
    }

    /// Check if this is one of the built-in dialects.
    pub fn is_builtin(&self) -> bool {
        self.origin == DialectOrigin::BuiltIn
    }

    /// Maven coordinates of the driver, used by driver download tooling.
    pub fn driver_artifact(&self) -> Option<&str> {
        self.driver_artifact.as_deref()
    }

    /// Remove the JDBC prefix from `url` if it is present.
    pub fn strip_prefix<'u>(&self, url: &'u str) -> &'u str {
        url.strip_prefix(self.jdbc_prefix.as_str()).unwrap_or(url)
    }
}

impl std::fmt::Display for DialectDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
