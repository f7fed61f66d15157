// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ProcessBuilder, find_executable};
use crate::error::ProcessError;

#[test]
fn run_captures_stdout() {
    let output = ProcessBuilder::new("sh")
        .args(["-c", "printf hello"])
        .run()
        .unwrap();
    assert!(output.success());
    assert_eq!(output.stdout(), b"hello");
}

#[test]
fn run_captures_stderr_separately() {
    let output = ProcessBuilder::new("sh")
        .args(["-c", "printf out; printf err >&2"])
        .run()
        .unwrap();
    assert_eq!(output.stdout(), b"out");
    assert_eq!(output.stderr(), "err");
}

#[test]
fn run_feeds_stdin() {
    let output = ProcessBuilder::new("cat").stdin(&b"piped bytes"[..]).run().unwrap();
    assert_eq!(output.stdout(), b"piped bytes");
}

#[test]
fn run_reports_exit_code_without_failing() {
    let output = ProcessBuilder::new("sh").args(["-c", "exit 3"]).run().unwrap();
    assert_eq!(output.exit_code(), 3);
    assert!(!output.success());
}

#[test]
fn run_checked_classifies_non_zero_exit() {
    let err = ProcessBuilder::new("sh")
        .args(["-c", "echo boom >&2; exit 1"])
        .run_checked()
        .unwrap_err();
    match err {
        ProcessError::NonZeroExit {
            command,
            code,
            stderr,
        } => {
            assert!(command.starts_with("sh"));
            assert_eq!(code, 1);
            assert_eq!(stderr, "boom");
        }
        other => panic!("expected NonZeroExit, got {other:?}"),
    }
}

#[test]
fn spawn_failure_carries_command_line() {
    let err = ProcessBuilder::new("/nonexistent/binary-xyz").run().unwrap_err();
    match err {
        ProcessError::SpawnFailed { command, .. } => {
            assert!(command.contains("binary-xyz"));
        }
        other => panic!("expected SpawnFailed, got {other:?}"),
    }
}

#[test]
fn clean_env_scrubs_inherited_variables() {
    let output = ProcessBuilder::new("/usr/bin/env")
        .clean_env()
        .env("ONLY_VAR", "1")
        .run()
        .unwrap();
    let text = String::from_utf8_lossy(output.stdout());
    assert!(text.contains("ONLY_VAR=1"));
    assert!(!text.contains("PATH="));
}

#[test]
fn command_line_quotes_arguments_with_spaces() {
    let builder = ProcessBuilder::new("git").args(["commit", "-m", "two words"]);
    assert_eq!(builder.command_line(), "git commit -m \"two words\"");
}

#[test]
fn find_executable_resolves_and_caches() {
    let first = find_executable("sh").unwrap();
    let second = find_executable("sh").unwrap();
    assert_eq!(first, second);
    assert!(find_executable("definitely-not-a-real-binary-xyz").is_err());
}
