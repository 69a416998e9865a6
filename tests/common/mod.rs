#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn fitlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fitlog").unwrap();
    cmd.env_remove("FITLOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a workspace for a default profile
pub fn init_profile(dir: &Path) {
    fitlog_cmd()
        .arg("init")
        .arg(dir)
        .args(["--name", "Ada", "--age", "36", "--weight", "61.5"])
        .assert()
        .success();
}

/// Add a workout in an initialized workspace
pub fn add_workout(dir: &Path, date: &str, kind: &str, duration: &str, calories: &str) {
    fitlog_cmd()
        .current_dir(dir)
        .args([
            "add",
            "--date",
            date,
            "--type",
            kind,
            "--duration",
            duration,
            "--calories",
            calories,
        ])
        .assert()
        .success();
}
