//! Tests for CLI argument handling via the built binary.
//!
//! Only paths that fail before the terminal is touched are exercised here.
//! `Command::output` pipes stderr, so every run stops at the terminal check
//! unless startup failed earlier.

use std::process::Command;
use tempfile::TempDir;

fn region_selector_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_region-selector"))
}

#[test]
fn test_help_lists_overrides() {
    let output = region_selector_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--country"));
    assert!(stdout.contains("--currency"));
    assert!(stdout.contains("--language"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_unknown_country_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = region_selector_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .arg("--country")
        .arg("QQ")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown country code 'QQ'"), "stderr: {stderr}");
}

#[test]
fn test_invalid_config_file_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nlanguage = \"xx\"\n").unwrap();

    let output = region_selector_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown language code 'xx'"), "stderr: {stderr}");
}

#[test]
fn test_override_replaces_invalid_config_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\ncountry = \"XX\"\n").unwrap();

    let output = region_selector_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--country")
        .arg("DE")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Unknown country code"), "stderr: {stderr}");
    assert!(stderr.contains("stderr is not a terminal"), "stderr: {stderr}");
}

#[test]
fn test_non_terminal_stderr_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = region_selector_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stderr is not a terminal"), "stderr: {stderr}");
}
