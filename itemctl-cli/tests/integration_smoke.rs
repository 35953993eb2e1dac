//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn itemctl() -> Command {
    let mut cmd = Command::cargo_bin("itemctl").unwrap();
    // Keep the developer's environment (and any ./.env) out of the picture
    cmd.current_dir(std::env::temp_dir())
        .env_remove("DATABASE_URL")
        .env_remove("DB_NAME")
        .env_remove("PORT")
        .env_remove("CORS_ALLOW_ORIGIN");
    cmd
}

#[test]
fn test_help_lists_commands() {
    itemctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("ping"));
}

#[test]
fn test_serve_help() {
    itemctl()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Access-Control-Allow-Origin"))
        .stdout(predicate::str::contains("--db-name"));
}

#[test]
fn test_ping_without_database_name_fails() {
    itemctl()
        .arg("ping")
        .assert()
        .failure()
        .stderr(predicate::str::contains("database name is not set"));
}

#[test]
fn test_serve_rejects_bad_origin_before_connecting() {
    itemctl()
        .arg("serve")
        .arg("--allow-origin")
        .arg("bad\norigin")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid CORS origin"));
}
