//! CLI integration tests.
//!
//! These tests run the `gantry` binary with isolated storage
//! directories and never touch a real backend: they cover argument
//! validation, registry capability checks, and preference persistence.

use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary with isolated HOME/XDG directories.
fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gantry"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
fn run_cli_failure(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn whoami_without_session_prints_hint() {
    let home = tempfile::tempdir().unwrap();

    let output = run_cli(&["admin", "whoami"], home.path());
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}

#[test]
fn config_color_round_trips() {
    let home = tempfile::tempdir().unwrap();

    run_cli_success(&["config", "color", "never"], home.path());

    let shown = run_cli_success(&["config", "show"], home.path());
    assert!(shown.contains("\"never\""));
}

#[test]
fn unknown_resource_is_rejected_before_any_request() {
    let home = tempfile::tempdir().unwrap();

    // Port 1 would refuse the connection, but the registry rejects first
    let stderr = run_cli_failure(
        &["admin", "list", "charts", "--api-url", "http://127.0.0.1:1"],
        home.path(),
    );
    assert!(stderr.contains("Unknown resource"));
}

#[test]
fn export_requires_an_exportable_resource() {
    let home = tempfile::tempdir().unwrap();

    let stderr = run_cli_failure(
        &["admin", "export", "docs", "--api-url", "http://127.0.0.1:1"],
        home.path(),
    );
    assert!(stderr.contains("does not have a CSV export"));
}

#[test]
fn update_requires_an_updatable_resource() {
    let home = tempfile::tempdir().unwrap();

    let stderr = run_cli_failure(
        &[
            "admin",
            "update",
            "logs",
            "1",
            "--data",
            "{}",
            "--api-url",
            "http://127.0.0.1:1",
        ],
        home.path(),
    );
    assert!(stderr.contains("does not support update"));
}

#[test]
fn login_failure_leaves_no_session_behind() {
    let home = tempfile::tempdir().unwrap();

    // Nothing listens on port 1; the transport failure must propagate
    run_cli_failure(
        &[
            "admin",
            "login",
            "--name",
            "Jane Doe",
            "--email",
            "jane@aiplabro.com",
            "--api-url",
            "http://127.0.0.1:1",
        ],
        home.path(),
    );

    let output = run_cli(&["admin", "whoami"], home.path());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}
