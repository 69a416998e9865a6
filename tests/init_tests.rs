//! Integration tests for init and profile commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{fitlog_cmd, init_profile};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    init_profile(temp.path());

    let config_path = temp.path().join(".fitlog/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("snapshot = \"workouts.json\""));
    assert!(content.contains("name = \"Ada\""));
    assert!(content.contains("age = 36"));

    // Nothing saved until the first workout
    assert!(!temp.path().join("workouts.json").exists());
}

#[test]
fn test_init_rejects_invalid_age() {
    let temp = TempDir::new().unwrap();

    fitlog_cmd()
        .arg("init")
        .arg(temp.path())
        .args(["--name", "Ada", "--age", "thirty", "--weight", "61.5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Age must be a positive whole number"));

    assert!(!temp.path().join(".fitlog").exists());
}

#[test]
fn test_init_rejects_invalid_weight() {
    let temp = TempDir::new().unwrap();

    fitlog_cmd()
        .arg("init")
        .arg(temp.path())
        .args(["--name", "Ada", "--age", "36", "--weight", "6.1.5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Weight (kg)"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_profile(temp.path());

    fitlog_cmd()
        .arg("init")
        .arg(temp.path())
        .args(["--name", "Bob", "--age", "40", "--weight", "80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_restores_existing_snapshot() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("workouts.json"),
        r#"[{"date":"2024-01-01","exercise_type":"Running","duration_minutes":30,"calories_burned":300}]"#,
    )
    .unwrap();

    fitlog_cmd()
        .arg("init")
        .arg(temp.path())
        .args(["--name", "Ada", "--age", "36", "--weight", "61.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 1 workout(s)"));
}

#[test]
fn test_profile_shows_values() {
    let temp = TempDir::new().unwrap();
    init_profile(temp.path());

    fitlog_cmd()
        .current_dir(temp.path())
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("name = Ada"))
        .stdout(predicate::str::contains("age = 36"))
        .stdout(predicate::str::contains("weight_kg = 61.5"));
}

#[test]
fn test_commands_outside_workspace_fail() {
    let temp = TempDir::new().unwrap();

    fitlog_cmd()
        .current_dir(temp.path())
        .env("FITLOG_ROOT", temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FITLOG_ROOT"));
}

#[test]
fn test_fitlog_root_env_var() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_profile(temp.path());

    fitlog_cmd()
        .current_dir(elsewhere.path())
        .env("FITLOG_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts recorded"));
}
