//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn itemctl() -> Command {
    let mut cmd = Command::cargo_bin("itemctl").unwrap();
    // Keep the developer's environment out of the tests
    cmd.env_remove("DATABASE_URL")
        .env_remove("ITEMCTL_BIND")
        .env_remove("ITEMCTL_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_serve_help() {
    itemctl()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_migrate_help() {
    itemctl()
        .arg("migrate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_unknown_command_fails() {
    itemctl().arg("frobnicate").assert().failure();
}

// === Migrate Tests ===

#[test]
fn test_migrate_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("items.db");
    let url = format!("sqlite://{}", db_path.display());

    itemctl()
        .current_dir(dir.path())
        .arg("migrate")
        .arg("--database-url")
        .arg(&url)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 items"));

    assert!(db_path.exists());

    // Second run is a no-op on an existing schema
    itemctl()
        .current_dir(dir.path())
        .arg("migrate")
        .arg("--database-url")
        .arg(&url)
        .assert()
        .success();
}

// === Config Tests ===

#[test]
fn test_config_show_uses_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[server]\nbind = \"127.0.0.1:9123\"\n\n[database]\nurl = \"sqlite://from-file.db\"\n",
    )
    .unwrap();

    itemctl()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config_path)
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:9123"))
        .stdout(predicate::str::contains("sqlite://from-file.db"));
}

#[test]
fn test_config_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    itemctl()
        .current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("config")
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_invalid_log_level_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "log_level = \"verbose[\"\n").unwrap();

    itemctl()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config_path)
        .arg("config")
        .arg("path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize tracing"))
        .stderr(predicate::str::contains("invalid log level"));
}

// === Completions Tests ===

#[test]
fn test_completions_bash() {
    itemctl()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("itemctl"));
}
