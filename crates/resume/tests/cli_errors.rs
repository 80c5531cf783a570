//! Integration tests for the CLI error path.
//!
//! Failures must reach the user as the human-readable Display message on
//! stderr with a non-zero exit, never as a Debug-formatted struct. The
//! config directory is pointed at a temp dir so the tests are independent
//! of the developer's real config.

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_resume_with_home(home: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_resume"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("Failed to execute resume binary")
}

/// Write a config with a host into every per-platform config root under
/// `home`, so `dirs::config_dir()` finds it wherever the test runs.
fn write_host_config(home: &Path) {
    let content = r#"{"ssh_host": "dev@vm", "ssh_agent_forwarding": false}"#;
    for root in [home.join(".config"), home.join("Library/Application Support")] {
        let dir = root.join("resume");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.json"), content).unwrap();
    }
}

#[test]
fn test_missing_host_prints_setup_hint_not_debug() {
    let home = tempfile::tempdir().unwrap();

    let output = run_resume_with_home(home.path(), &["--list"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No SSH host configured. Run: resume --setup"),
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("HostNotConfigured"), "stderr: {stderr}");
}

#[test]
fn test_invalid_name_prints_display_message_not_debug() {
    let home = tempfile::tempdir().unwrap();
    write_host_config(home.path());

    // Rejected by validation before any remote traffic, so no ssh is run.
    let output = run_resume_with_home(home.path(), &["--remove", "bad name"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid session name: 'bad name'"),
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("InvalidName {"), "stderr: {stderr}");
}
