//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with no per-user config in reach
fn cli_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio-hero").expect("Failed to find folio-hero binary");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Write a config file with the given phrases and a fast cadence
fn write_config(dir: &TempDir, phrases: &[&str]) -> PathBuf {
    let config = serde_json_config(phrases);
    let path = dir.path().join("hero.json");
    fs::write(&path, config).unwrap();
    path
}

fn serde_json_config(phrases: &[&str]) -> String {
    let config = json!({
        "personal": {
            "name": "Grace Tester",
            "location": "Arlington, VA",
            "email": "grace@example.com",
            "phone": "+1-555-0199",
            "github": "https://github.com/grace",
            "linkedin": "https://linkedin.com/in/grace"
        },
        "phrases": phrases,
        "timing": { "type_ms": 10, "delete_ms": 5, "hold_ms": 100 }
    });
    serde_json::to_string_pretty(&config).unwrap()
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_builtin_default() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK"))
        .stdout(predicate::str::contains("Phrases (3):"))
        .stdout(predicate::str::contains("hold 2000ms"));
}

#[test]
fn test_check_config_file() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, &["Compiler Hacker", "Runner"]);

    cli_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Grace Tester"))
        .stdout(predicate::str::contains("\"Compiler Hacker\""))
        .stdout(predicate::str::contains("type 10ms, delete 5ms, hold 100ms"));
}

#[test]
fn test_check_config_with_non_ascii_phrases() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, &["Café \"Owner\"", "日本語 Speaker"]);

    cli_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phrases (2):"))
        .stdout(predicate::str::contains("日本語 Speaker"))
        .stdout(predicate::str::contains("Café"));
}

#[test]
fn test_check_rejects_empty_phrase_list() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, &[]);

    cli_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_check_missing_config_file() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .arg("--config")
        .arg(home.path().join("nope.json"))
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load hero config"));
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_init_writes_loadable_config() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("nested").join("hero.json");

    cli_cmd(&home)
        .arg("init")
        .arg("--path")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    cli_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, &["Keep me"]);

    cli_cmd(&home)
        .arg("init")
        .arg("--path")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert!(fs::read_to_string(&path).unwrap().contains("Keep me"));

    cli_cmd(&home)
        .arg("init")
        .arg("--path")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
    assert!(!fs::read_to_string(&path).unwrap().contains("Keep me"));
}

// ============================================================================
// Contact Command Tests
// ============================================================================

#[test]
fn test_contact_lists_details_and_links() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, &["x"]);

    cli_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("contact")
        .assert()
        .success()
        .stdout(predicate::str::contains("Let's Connect!"))
        .stdout(predicate::str::contains("grace@example.com"))
        .stdout(predicate::str::contains("+1-555-0199"))
        .stdout(predicate::str::contains("Arlington, VA"))
        .stdout(predicate::str::contains("https://github.com/grace"))
        .stdout(predicate::str::contains("https://linkedin.com/in/grace"));
}

// ============================================================================
// Resume Command Tests
// ============================================================================

#[test]
fn test_resume_copies_asset() {
    let home = TempDir::new().unwrap();
    let source = home.path().join("cv.pdf");
    fs::write(&source, b"%PDF resume").unwrap();

    let config = serde_json_config(&["x"]).replacen(
        "\"phrases\"",
        &format!(
            "\"resume\": {{ \"source\": {:?}, \"file_name\": \"grace.pdf\" }},\n  \"phrases\"",
            source.display().to_string()
        ),
        1,
    );
    let path = home.path().join("hero.json");
    fs::write(&path, config).unwrap();
    let dest = home.path().join("downloads");

    cli_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("resume")
        .arg("--dest")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Resume saved to"));

    assert_eq!(fs::read(dest.join("grace.pdf")).unwrap(), b"%PDF resume");
}

#[test]
fn test_resume_missing_asset_fails() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, &["x"]);

    cli_cmd(&home)
        .current_dir(home.path())
        .arg("--config")
        .arg(&path)
        .arg("resume")
        .arg("--dest")
        .arg(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resume not found"));
}

// ============================================================================
// Type Command Tests
// ============================================================================

#[test]
fn test_type_one_cycle_prints_frames() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, &["Hi"]);

    cli_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("type")
        .arg("--cycles")
        .arg("1")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm a Hi|"));
}

#[test]
fn test_type_phrase_override() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .arg("type")
        .arg("--phrase")
        .arg("Rustacean")
        .arg("--type-ms")
        .arg("5")
        .arg("--delete-ms")
        .arg("5")
        .arg("--hold-ms")
        .arg("100")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm a Rustacean|"));
}

#[test]
fn test_type_rejects_zero_hold() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .arg("type")
        .arg("--phrase")
        .arg("x")
        .arg("--hold-ms")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("hold delay must be greater than zero"));
}
