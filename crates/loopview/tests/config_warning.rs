//! Integration tests for config warning behavior.
//!
//! These tests verify that the CLI properly warns users when config files have errors.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_watch(dir: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_loopview"))
        .current_dir(dir)
        .env("HOME", dir.join("home"))
        .args(["watch", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute loopview");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for loopview")
}

fn write_project_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".loopview");
    fs::create_dir_all(&config_dir).expect("Failed to create .loopview dir");
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

/// Test that an invalid config file produces a warning in stderr and the
/// command still runs with defaults.
#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "invalid toml [[[");

    let output = run_watch(temp_dir.path(), "localhost:3000\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config files in stderr, got: {}",
        stderr
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("http://localhost:3000"));
}

/// Test that a valid config file does not produce warnings.
#[test]
fn test_no_warning_on_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(
        temp_dir.path(),
        r#"
[preview]
open_panel = true
"#,
    );

    let output = run_watch(temp_dir.path(), "");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        !stderr.contains("Warning: Could not load config"),
        "Expected no warning for valid config, got: {}",
        stderr
    );
}

/// Test that project config settings drive the watcher.
#[test]
fn test_project_config_disables_panel_and_seeds_current_url() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(
        temp_dir.path(),
        r#"
[preview]
open_panel = false
current_url = "localhost:3000"
"#,
    );

    let output = run_watch(temp_dir.path(), "localhost:3000\nlocalhost:3001\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"type":"url","url":"http://localhost:3001"}"#
    );
}

/// Test that a config with a non-local current URL is rejected as a whole.
#[test]
fn test_config_warning_on_remote_current_url() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(
        temp_dir.path(),
        r#"
[preview]
intercept_clicks = false
current_url = "https://example.com"
"#,
    );

    let output = run_watch(temp_dir.path(), "localhost:3000\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        stderr.contains("Invalid configuration"),
        "Expected validation warning, got: {}",
        stderr
    );
    // Defaults apply, so interception stays on despite the file
    assert!(String::from_utf8_lossy(&output.stdout).contains("http://localhost:3000"));
}
