//! Integration tests for `oh-my-resume install`.
//!
//! Every test points `HOME` at a temp dir so the real
//! `~/.config/opencode/oh-my-resume.json` is never touched.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn omr(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("oh-my-resume"));
    cmd.env("NO_COLOR", "1").env("HOME", home.path());
    cmd
}

fn config_dir(home: &TempDir) -> PathBuf {
    home.path().join(".config").join("opencode")
}

fn config_path(home: &TempDir) -> PathBuf {
    config_dir(home).join("oh-my-resume.json")
}

// ---------------------------------------------------------------------------
// Fresh install
// ---------------------------------------------------------------------------

#[test]
fn test_install_fresh_creates_directory_and_file() {
    let home = TempDir::new().expect("temp dir");

    omr(&home)
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("installed successfully"))
        .stdout(predicate::str::contains("oh-my-resume.json"));

    assert!(config_dir(&home).is_dir());
    assert!(config_path(&home).is_file());
}

#[test]
fn test_install_fresh_writes_default_document() {
    let home = TempDir::new().expect("temp dir");
    omr(&home).arg("install").assert().success();

    let content = std::fs::read_to_string(config_path(&home)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(
        json,
        serde_json::json!({
            "$schema": "https://raw.githubusercontent.com/goalSetter09/oh-my-resume/main/assets/oh-my-resume.schema.json",
            "agents": {
                "interview-prep": { "model": "anthropic/claude-sonnet-4-5" }
            }
        })
    );
}

#[test]
fn test_install_fresh_prints_next_steps() {
    let home = TempDir::new().expect("temp dir");
    omr(&home)
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains(r#"{ "plugin": ["oh-my-resume"] }"#));
}

#[test]
fn test_install_into_existing_directory() {
    let home = TempDir::new().expect("temp dir");
    std::fs::create_dir_all(config_dir(&home)).unwrap();
    std::fs::write(config_dir(&home).join("opencode.json"), "{}").unwrap();

    omr(&home).arg("install").assert().success();

    assert!(config_path(&home).is_file());
    assert_eq!(
        std::fs::read_to_string(config_dir(&home).join("opencode.json")).unwrap(),
        "{}"
    );
}

#[test]
fn test_install_quiet_suppresses_output_but_writes_file() {
    let home = TempDir::new().expect("temp dir");
    omr(&home)
        .args(["install", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(config_path(&home).is_file());
}

// ---------------------------------------------------------------------------
// NO_COLOR handling
// ---------------------------------------------------------------------------

#[test]
fn test_install_with_no_color_unset_succeeds() {
    let home = TempDir::new().expect("temp dir");
    omr(&home)
        .env_remove("NO_COLOR")
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("installed successfully"));
    assert!(config_path(&home).is_file());
}

#[test]
fn test_install_accepts_conventional_no_color_values() {
    for value in ["1", "", "yes", "true", "0"] {
        let home = TempDir::new().expect("temp dir");
        omr(&home)
            .env("NO_COLOR", value)
            .arg("install")
            .assert()
            .success()
            .stdout(predicate::str::contains("installed successfully"));
        assert!(config_path(&home).is_file(), "NO_COLOR={value:?}");
    }
}

#[test]
fn test_install_no_color_output_has_no_ansi_escapes() {
    let home = TempDir::new().expect("temp dir");
    omr(&home)
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

// ---------------------------------------------------------------------------
// Existing config
// ---------------------------------------------------------------------------

#[test]
fn test_install_existing_file_is_byte_identical_and_warns() {
    let home = TempDir::new().expect("temp dir");
    std::fs::create_dir_all(config_dir(&home)).unwrap();
    let original = b"{ \"agents\": { \"interview-prep\": { \"model\": \"mine\" } } }\n   not even json";
    std::fs::write(config_path(&home), original).unwrap();

    omr(&home)
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"))
        .stdout(predicate::str::contains("delete the file first"));

    assert_eq!(std::fs::read(config_path(&home)).unwrap(), original);
}

#[test]
fn test_install_twice_second_run_warns() {
    let home = TempDir::new().expect("temp dir");
    omr(&home).arg("install").assert().success();
    let first = std::fs::read(config_path(&home)).unwrap();

    omr(&home)
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read(config_path(&home)).unwrap(), first);
}

// ---------------------------------------------------------------------------
// Filesystem failures
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn test_install_unwritable_home_reports_error_and_exits_one() {
    let home = TempDir::new().expect("temp dir");
    // A regular file where the `.config` directory should be.
    std::fs::write(home.path().join(".config"), "").unwrap();

    omr(&home)
        .arg("install")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("cannot create config directory"));
}
