//! Integration tests for parsing and rebuilding connection URLs.
//!
//! These tests drive the codec through the public facade the way an
//! application would: look a dialect up by id, parse, edit, rebuild.

use jdbc_codec::prelude::*;
use jdbc_codec::CUSTOM_SENTINEL;
use pretty_assertions::assert_eq;

fn codec_parse(dialect: &str, url: &str) -> ConnectionParts {
    let registry = DialectRegistry::builtin();
    UrlCodec::new(&registry)
        .parse(dialect, url)
        .expect("dialect is built in")
}

/// Test parsing a MariaDB URL
#[test]
fn test_parse_mariadb() {
    assert_eq!(
        codec_parse("MariaDB", "jdbc:mariadb://localhost:3306/mydb"),
        ConnectionParts::new("localhost", 3306, "mydb")
    );
}

/// Test parsing an Oracle thin URL, whose separator is `:`
#[test]
fn test_parse_oracle() {
    assert_eq!(
        codec_parse("Oracle", "jdbc:oracle:thin:@myhost:1521:orcl"),
        ConnectionParts::new("myhost", 1521, "orcl")
    );
}

/// Test parsing an MS SQL URL with the database name among its parameters
#[test]
fn test_parse_mssql() {
    assert_eq!(
        codec_parse(
            "MS SQL",
            "jdbc:sqlserver://host:1443;databaseName=sales;encrypt=true"
        ),
        ConnectionParts::new("host", 1443, "sales")
    );
}

/// Test that only the database name changes when rebuilding
#[test]
fn test_build_postgresql_keeps_parameters() {
    let registry = DialectRegistry::builtin();
    let codec = UrlCodec::new(&registry);

    let url = codec
        .build(
            "PostgreSQL",
            Some("jdbc:postgresql://a:5432/old?ssl=true"),
            &ConnectionParts::default().with_database_name("new"),
            &BuildDefaults::new("a", 5432, "old"),
        )
        .unwrap();

    assert_eq!(url, "jdbc:postgresql://a:5432/new?ssl=true");
}

/// Test classification of built-in and foreign driver classes
#[test]
fn test_classify() {
    assert_eq!(classify("oracle.jdbc.driver.OracleDriver").as_str(), "Oracle");
    assert_eq!(classify("org.unknown.Driver").as_str(), CUSTOM_SENTINEL);
}

/// Test that a URL without a separator degrades to the default port
#[test]
fn test_malformed_url_falls_back() {
    let parts = codec_parse("MariaDB", "jdbc:mariadb://onlyhost");

    assert_eq!(parts, ConnectionParts::port_only(3306));
    assert!(!parts.has_server_address());
    assert_eq!(parts.database_name(), None);
}

/// Test that too many address segments degrade to the default port
#[test]
fn test_extra_colon_falls_back() {
    assert_eq!(
        codec_parse("MySQL", "jdbc:mysql://a:b:3306/db"),
        ConnectionParts::port_only(3306)
    );
}

/// Test that an unknown dialect id is an error, not a guess
#[test]
fn test_unknown_dialect_is_error() {
    let registry = DialectRegistry::builtin();
    let err = UrlCodec::new(&registry)
        .parse("DB2", "jdbc:db2://host:50000/sample")
        .unwrap_err();

    assert!(err.is_unknown_dialect());
}

/// Test the round trip for every positional dialect
#[test]
fn test_round_trip_positional_dialects() {
    let h2 = CustomDialect::new("H2", "org.h2.Driver", "jdbc:h2:tcp://", 9092, '/');
    let registry = DialectRegistry::builtin().with_custom([h2]);

    let cases = [("db.example.com", 1), ("10.0.0.7", 5433), ("h", u16::MAX)];

    for dialect in registry
        .all()
        .filter(|d| d.strategy() == Strategy::SeparatorPositional)
    {
        for (host, port) in cases {
            let name = format!("db_{port}");
            let url = dialect.build_url(
                None,
                &ConnectionParts::new(host, port, name.as_str()),
                &BuildDefaults::for_dialect(dialect),
            );

            assert_eq!(
                dialect.parse_url(&url),
                ConnectionParts::new(host, port, name.as_str()),
                "round trip through {url}"
            );
        }
    }
}

/// Test that parameters survive edits of each part
#[test]
fn test_parameters_preserved_for_every_edit() {
    let registry = DialectRegistry::builtin();
    let dialect = registry.lookup("MySQL").unwrap();
    let old = "jdbc:mysql://db:3306/shop?useSSL=false&serverTimezone=UTC";
    let defaults = BuildDefaults::from_parts(dialect, &dialect.parse_url(old));

    let edits = [
        ConnectionParts::default().with_server_address("replica"),
        ConnectionParts::default().with_port(3307),
        ConnectionParts::default().with_database_name("orders"),
    ];

    for edit in &edits {
        let url = dialect.build_url(Some(old), edit, &defaults);
        assert!(
            url.ends_with("?useSSL=false&serverTimezone=UTC"),
            "parameters lost in {url}"
        );
    }
}

/// Test that MS SQL never duplicates the database name parameter
#[test]
fn test_mssql_parameter_isolation() {
    let registry = DialectRegistry::builtin();
    let codec = UrlCodec::new(&registry);

    let url = codec
        .build(
            "MS SQL",
            Some("jdbc:sqlserver://host:1443;databaseName=old;encrypt=true"),
            &ConnectionParts::default().with_database_name("sales"),
            &BuildDefaults::new("host", 1443, "old"),
        )
        .unwrap();

    assert_eq!(url, "jdbc:sqlserver://host:1443;databaseName=sales;encrypt=true");
    assert_eq!(url.matches("databaseName=").count(), 1);
}

/// Test that a missing MS SQL database parameter parses as an empty name
#[test]
fn test_mssql_without_database_name() {
    let parts = codec_parse("MS SQL", "jdbc:sqlserver://host:1443;encrypt=true");

    assert_eq!(parts.server_address.as_deref(), Some("host"));
    assert_eq!(parts.database_name.as_deref(), Some(""));
    assert_eq!(parts.database_name(), None);
}

/// Test that snapshots are independent values
#[test]
fn test_snapshots_do_not_share_custom_dialects() {
    let base = DialectRegistry::builtin();
    let extended = base
        .clone()
        .with_custom([CustomDialect::new("H2", "org.h2.Driver", "jdbc:h2:tcp://", 9092, '/')]);

    assert!(!base.contains("H2"));
    assert!(extended.contains("H2"));
    assert_eq!(extended.len(), base.len() + 1);
}

/// Test that snapshots can be shared across threads
#[test]
fn test_parallel_parse() {
    let registry = DialectRegistry::builtin();

    std::thread::scope(|scope| {
        for port in [3306u16, 3307, 3308, 3309] {
            let registry = &registry;
            scope.spawn(move || {
                let url = format!("jdbc:mariadb://host:{port}/db");
                let parts = UrlCodec::new(registry).parse("MariaDB", &url).unwrap();
                assert_eq!(parts.port, Some(port));
            });
        }
    });
}
