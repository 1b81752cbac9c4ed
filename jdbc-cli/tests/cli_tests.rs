//! Integration tests for the jdbc-codec CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the jdbc-codec binary, isolated from the caller's environment
#[allow(deprecated)]
fn codec_cmd(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jdbc-codec").unwrap();
    cmd.current_dir(cwd.path())
        .env_remove("JDBC_CODEC_CONFIG")
        .env_remove("JDBC_CODEC_DIALECTS_DIR")
        .env_remove("JDBC_CODEC_DEBUG")
        .env_remove("JDBC_CODEC_LOG_LEVEL");
    cmd
}

fn dialects_dir(cwd: &TempDir) -> String {
    cwd.path().join("dialects").display().to_string()
}

#[test]
fn test_help_command() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse and rebuild JDBC connection URLs"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("dialect"));
}

#[test]
fn test_version_command() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("MS SQL"));
}

// =============================================================================
// parse
// =============================================================================

#[test]
fn test_parse_positional_json() {
    let cwd = TempDir::new().unwrap();
    let output = codec_cmd(&cwd)
        .args(["parse", "-d", "MySQL", "jdbc:mysql://db:3307/shop?ssl=true", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parts["serverAddress"], "db");
    assert_eq!(parts["port"], 3307);
    assert_eq!(parts["databaseName"], "shop");
}

#[test]
fn test_parse_key_value_dialect() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .args([
            "parse",
            "--dialect",
            "MS SQL",
            "jdbc:sqlserver://host:1443;databaseName=sales;encrypt=true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("host"))
        .stdout(predicate::str::contains("1443"))
        .stdout(predicate::str::contains("sales"));
}

#[test]
fn test_parse_malformed_url_reports_default_port() {
    let cwd = TempDir::new().unwrap();
    let output = codec_cmd(&cwd)
        .args(["parse", "-d", "PostgreSQL", "jdbc:postgresql://nohost", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parts["port"], 5432);
    assert!(parts["serverAddress"].is_null());
}

#[test]
fn test_parse_unknown_dialect_fails() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .args(["parse", "-d", "DB2", "jdbc:db2://host:50000/x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dialect `DB2`"));
}

// =============================================================================
// build
// =============================================================================

#[test]
fn test_build_keeps_parameters_from_old_url() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .args([
            "build",
            "-d",
            "PostgreSQL",
            "--from",
            "jdbc:postgresql://a:5432/old?ssl=true",
            "--host",
            "b",
            "--database",
            "new",
        ])
        .assert()
        .success()
        .stdout("jdbc:postgresql://b:5432/new?ssl=true\n");
}

#[test]
fn test_build_from_scratch_uses_defaults() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .args(["build", "-d", "Oracle", "--database", "orcl"])
        .assert()
        .success()
        .stdout("jdbc:oracle:thin:@localhost:1521:orcl\n");
}

#[test]
fn test_build_uses_config_defaults() {
    let cwd = TempDir::new().unwrap();
    fs::write(
        cwd.path().join("jdbc-codec.toml"),
        "[defaults]\nhost = \"db.internal\"\ndatabase = \"app\"\n",
    )
    .unwrap();

    codec_cmd(&cwd)
        .args(["build", "-d", "MariaDB"])
        .assert()
        .success()
        .stdout("jdbc:mariadb://db.internal:3306/app\n");
}

#[test]
fn test_build_key_value_dialect() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .args([
            "build",
            "-d",
            "MS SQL",
            "--from",
            "jdbc:sqlserver://host:1443;databaseName=sales;encrypt=true",
            "--database",
            "archive",
        ])
        .assert()
        .success()
        .stdout("jdbc:sqlserver://host:1443;databaseName=archive;encrypt=true\n");
}

// =============================================================================
// classify
// =============================================================================

#[test]
fn test_classify_builtin_driver() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .args(["classify", "org.postgresql.Driver"])
        .assert()
        .success()
        .stdout("PostgreSQL\n");
}

#[test]
fn test_classify_unknown_driver_is_custom() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .args(["classify", "org.h2.Driver"])
        .assert()
        .success()
        .stdout("Custom\n");
}

// =============================================================================
// dialect
// =============================================================================

#[test]
fn test_dialect_list_shows_builtins() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .args(["dialect", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MariaDB"))
        .stdout(predicate::str::contains("oracle.jdbc.driver.OracleDriver"))
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_dialect_show_json() {
    let cwd = TempDir::new().unwrap();
    let output = codec_cmd(&cwd)
        .args(["dialect", "show", "MS SQL", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let dialect: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dialect["id"], "MS SQL");
    assert_eq!(dialect["defaultPort"], 1443);
    assert_eq!(dialect["strategy"], "key-value-embedded");
    assert_eq!(dialect["origin"], "built-in");
}

#[test]
fn test_dialect_add_requires_directory() {
    let cwd = TempDir::new().unwrap();
    codec_cmd(&cwd)
        .args([
            "dialect",
            "add",
            "--name",
            "H2",
            "--driver-class",
            "org.h2.Driver",
            "--jdbc-prefix",
            "jdbc:h2:tcp://",
            "--port",
            "9092",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dialects-dir"));
}

#[test]
fn test_dialect_add_use_and_remove() {
    let cwd = TempDir::new().unwrap();
    let dir = dialects_dir(&cwd);

    codec_cmd(&cwd)
        .args([
            "dialect",
            "add",
            "--dialects-dir",
            &dir,
            "--name",
            "H2",
            "--driver-class",
            "org.h2.Driver",
            "--jdbc-prefix",
            "jdbc:h2:tcp://",
            "--port",
            "9092",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added dialect `H2`"));
    assert!(cwd.path().join("dialects").join("H2.json").exists());

    codec_cmd(&cwd)
        .args([
            "build",
            "--dialects-dir",
            &dir,
            "-d",
            "H2",
            "--host",
            "h2host",
            "--database",
            "test",
        ])
        .assert()
        .success()
        .stdout("jdbc:h2:tcp://h2host:9092/test\n");

    // Custom drivers never classify as a built-in
    codec_cmd(&cwd)
        .args(["classify", "--dialects-dir", &dir, "org.h2.Driver"])
        .assert()
        .success()
        .stdout("Custom\n");

    codec_cmd(&cwd)
        .args(["dialect", "remove", "--dialects-dir", &dir, "H2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed dialect `H2`"));

    codec_cmd(&cwd)
        .args(["dialect", "show", "--dialects-dir", &dir, "H2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dialect `H2`"));
}

#[test]
fn test_dialect_add_rejects_reserved_name() {
    let cwd = TempDir::new().unwrap();
    let dir = dialects_dir(&cwd);

    codec_cmd(&cwd)
        .args([
            "dialect",
            "add",
            "--dialects-dir",
            &dir,
            "--name",
            "mysql",
            "--driver-class",
            "x.Driver",
            "--jdbc-prefix",
            "jdbc:x://",
            "--port",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn test_dialects_dir_from_config() {
    let cwd = TempDir::new().unwrap();
    let dir = cwd.path().join("records");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("Derby.json"),
        r#"{"name":"Derby","driverClass":"org.apache.derby.jdbc.ClientDriver","defaultPort":1527,"jdbcName":"jdbc:derby://","separator":"/"}"#,
    )
    .unwrap();
    fs::write(
        cwd.path().join("jdbc-codec.toml"),
        "[dialects]\ncustom_dir = \"records\"\n",
    )
    .unwrap();

    codec_cmd(&cwd)
        .args(["dialect", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Derby"));
}

#[test]
fn test_invalid_config_fails() {
    let cwd = TempDir::new().unwrap();
    fs::write(cwd.path().join("jdbc-codec.toml"), "[logging]\nlevel = \"loud\"\n").unwrap();

    codec_cmd(&cwd)
        .args(["classify", "org.postgresql.Driver"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level"));
}
