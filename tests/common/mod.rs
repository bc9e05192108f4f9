//! Common test utilities for Blink integration tests.
//!
//! This module provides shared helper functions used across all
//! integration test files. Each helper writes the program to a
//! temporary file and runs the built `blink` binary on it.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

/// Returns the path to the blink binary built by cargo.
pub fn blink_binary() -> String {
    env!("CARGO_BIN_EXE_blink").to_string()
}

/// Writes `source` to a temporary file and runs the interpreter on it.
pub fn run_source(source: &str) -> Output {
    let temp = tempdir().expect("Failed to create temporary directory");
    let source_path = temp.path().join("program.blink");
    fs::write(&source_path, source).expect("Failed to write test program");

    Command::new(blink_binary())
        .arg(&source_path)
        .output()
        .expect("Failed to run blink binary")
}

/// Runs a program expected to succeed and returns its stdout.
pub fn run_ok(source: &str) -> String {
    let output = run_source(source);
    assert!(
        output.status.success(),
        "Expected program {:?} to succeed, got exit {:?}:\n[stderr] {}",
        source,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Runs a program expected to fail and returns `(exit code, stderr)`.
pub fn run_err(source: &str) -> (Option<i32>, String) {
    let output = run_source(source);
    assert!(
        !output.status.success(),
        "Expected program {:?} to fail, got stdout:\n{}",
        source,
        String::from_utf8_lossy(&output.stdout)
    );
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}
