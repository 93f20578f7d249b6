//! Integration tests for the roadpath CLI surface: help, defaults, errors

mod common;

use common::roadpath;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: roadpath"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roadpath"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("20 cities and 24 roads"));
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_unknown_city_is_data_error() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .args(["search", "--from", "Atlantis", "--to", "Lahore"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("city not found: Atlantis"));
}

#[test]
fn test_same_start_and_goal_is_usage_error() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .args(["search", "--from", "Lahore", "--to", "lahore"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("same city"));
}

#[test]
fn test_unknown_algorithm_rejected() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .args(["search", "--algo", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let output = roadpath(dir.path())
        .args(["--format", "json", "search", "--from", "Atlantis"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "city_not_found");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_json_usage_error_from_clap() {
    let dir = tempdir().unwrap();
    let output = roadpath(dir.path())
        .args(["--format", "json", "search", "--bogus"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_mode_requires_animate() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .args(["search", "--mode", "visited"])
        .assert()
        .code(2);
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .args(["--quiet", "search", "--from", "Atlantis"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_defaults_drive_search() {
    let dir = tempdir().unwrap();
    common::write_file(
        dir.path(),
        "config.toml",
        "default_algorithm = \"bfs\"\ndefault_start = \"Lahore\"\ndefault_goal = \"Multan\"\n",
    );

    let output = roadpath(dir.path())
        .args(["--format", "json", "search"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = common::stdout_json(&output);
    assert_eq!(json["algorithm"], "BFS");
    assert_eq!(json["from"], "Lahore");
    assert_eq!(json["to"], "Multan");
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = tempdir().unwrap();
    roadpath(dir.path())
        .args(["--config"])
        .arg(dir.path().join("missing.toml"))
        .arg("cities")
        .assert()
        .failure();
}

#[test]
fn test_invalid_config_value() {
    let dir = tempdir().unwrap();
    common::write_file(dir.path(), "config.toml", "[replay]\ndelay_ms = 999999\n");

    roadpath(dir.path())
        .arg("cities")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("replay.delay_ms"));
}
