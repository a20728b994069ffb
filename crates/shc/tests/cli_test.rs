//! Integration tests for the `shc` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling without requiring a live controller.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `shc` binary with env isolation.
///
/// Clears all `SHC_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn shc_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("shc");
    cmd.env("HOME", "/tmp/shc-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/shc-cli-test-nonexistent")
        .env_remove("SHC_PROFILE")
        .env_remove("SHC_ADDRESS")
        .env_remove("SHC_PORT")
        .env_remove("SHC_API_VERSION")
        .env_remove("SHC_VALIDATE_CERT")
        .env_remove("SHC_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// A local port with nothing listening on it.
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = shc_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    shc_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("smart-home controller")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("rooms"))
            .and(predicate::str::contains("scenarios"))
            .and(predicate::str::contains("messages")),
    );
}

#[test]
fn test_version_flag() {
    shc_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shc"));
}

#[test]
fn test_scenarios_help_lists_trigger() {
    shc_cmd()
        .args(["scenarios", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trigger"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    shc_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    shc_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    shc_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_path() {
    shc_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    shc_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_version = \"1.0\""));
}

#[test]
fn test_config_profiles_empty() {
    shc_cmd()
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No profiles configured"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = shc_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    shc_cmd()
        .args(["--output", "xml", "rooms", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_devices_list_no_address() {
    shc_cmd()
        .args(["devices", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No controller address configured"));
}

#[test]
fn test_unknown_profile() {
    shc_cmd()
        .args(["--profile", "cabin", "rooms", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("profile 'cabin' not found"));
}

#[test]
fn test_unreachable_controller() {
    let port = closed_port().to_string();
    shc_cmd()
        .args(["--address", "127.0.0.1", "--port", &port, "rooms", "list"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Could not reach the controller"));
}
