//! Tests for the CLI surface: argument handling and exit codes.

mod common;

use common::blink_binary;
use std::process::Command;

#[test]
fn test_no_arguments_is_usage_error() {
    let output = Command::new(blink_binary())
        .output()
        .expect("Failed to run blink binary");

    assert_eq!(output.status.code(), Some(1), "usage errors exit with 1");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage"),
        "Expected usage text on stderr, got:\n{}",
        stderr
    );
}

#[test]
fn test_help_exits_zero() {
    let output = Command::new(blink_binary())
        .arg("--help")
        .output()
        .expect("Failed to run blink binary");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
}

#[test]
fn test_missing_file_exits_two() {
    let output = Command::new(blink_binary())
        .arg("no/such/file.blink")
        .output()
        .expect("Failed to run blink binary");

    assert_eq!(output.status.code(), Some(2), "file-read errors exit with 2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error reading file no/such/file.blink"),
        "Expected file-read diagnostic, got:\n{}",
        stderr
    );
}

#[test]
fn test_successful_run_exits_zero() {
    let temp = tempfile::tempdir().expect("Failed to create temporary directory");
    let source_path = temp.path().join("ok.blink");
    std::fs::write(&source_path, r#"print("fine");"#).expect("Failed to write test program");

    let output = Command::new(blink_binary())
        .arg(&source_path)
        .output()
        .expect("Failed to run blink binary");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "fine\n");
}
