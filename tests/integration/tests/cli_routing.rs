//! CLI binary integration tests.
//!
//! These tests exercise the compiled `mindvault` binary to verify that
//! top-level command routing, help text, and error handling work as expected.

use std::path::PathBuf;
use std::process::Command;

/// Locate the compiled `mindvault` binary in the workspace target directory.
///
/// Cargo sets `CARGO_MANIFEST_DIR` to the manifest directory of the package
/// being tested. We navigate up to the workspace root and look inside
/// `target/debug/`.
fn mindvault_bin() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> workspace root
    let workspace_root = manifest_dir
        .parent()
        .expect("tests/ parent")
        .parent()
        .expect("workspace root");
    let bin = workspace_root.join("target").join("debug").join("mindvault");
    assert!(
        bin.exists(),
        "mindvault binary not found at {}; run `cargo build -p mindvault-cli` first",
        bin.display()
    );
    bin
}

fn mindvault_cmd() -> Command {
    Command::new(mindvault_bin())
}

#[test]
fn test_cli_version() {
    let output = mindvault_cmd()
        .arg("version")
        .output()
        .expect("failed to run mindvault");
    assert!(output.status.success(), "version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("mindvault"),
        "version output should contain 'mindvault', got: {}",
        stdout
    );
}

#[test]
fn test_cli_help() {
    let output = mindvault_cmd()
        .arg("--help")
        .output()
        .expect("failed to run mindvault");
    assert!(output.status.success(), "--help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("journal"),
        "help output should mention 'journal', got: {}",
        stdout
    );
    assert!(
        stdout.contains("ask"),
        "help output should mention 'ask', got: {}",
        stdout
    );
}

#[test]
fn test_cli_unknown_command() {
    let output = mindvault_cmd()
        .arg("nonexistent-command")
        .output()
        .expect("failed to run mindvault");
    assert!(
        !output.status.success(),
        "unknown command should return non-zero exit code"
    );
}

#[test]
fn test_cli_config_path_honors_override() {
    let output = mindvault_cmd()
        .args(["--config", "/tmp/custom.json5", "config", "path"])
        .output()
        .expect("failed to run mindvault config path");
    assert!(output.status.success(), "config path should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("/tmp/custom.json5"),
        "config path should print the override, got: {}",
        stdout
    );
}

#[test]
fn test_cli_ingest_help() {
    let output = mindvault_cmd()
        .args(["ingest", "--help"])
        .output()
        .expect("failed to run mindvault ingest --help");
    assert!(output.status.success(), "ingest --help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("knowledge") || stdout.contains("Ingest"),
        "ingest help should describe knowledge ingestion, got: {}",
        stdout
    );
}
