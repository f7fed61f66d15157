// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the gitops binary.
//!
//! Drives the compiled executable end-to-end against real temporary
//! repositories.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn run_git(args: &[&str], cwd: &Path) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Bare repository seeded with `app.yaml`, returned as a file:// locator.
fn seeded_bare_remote(base: &Path, contents: &str) -> String {
    let seed = base.join("seed");
    fs::create_dir(&seed).unwrap();
    run_git(&["init", "-q"], &seed);
    run_git(&["config", "user.email", "test@test.com"], &seed);
    run_git(&["config", "user.name", "Test"], &seed);
    fs::write(seed.join("app.yaml"), contents).unwrap();
    run_git(&["add", "."], &seed);
    run_git(&["commit", "-m", "Initial commit"], &seed);

    let bare = base.join("origin.git");
    run_git(
        &[
            "clone",
            "--bare",
            "-q",
            seed.to_str().unwrap(),
            bare.to_str().unwrap(),
        ],
        base,
    );
    format!("file://{}", bare.display())
}

fn gitops(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gitops"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run gitops binary")
}

#[test]
fn version_prints_package_version() {
    let base = temp_dir();
    let output = gitops(&["version"], base.path());
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );
}

#[test]
fn no_command_fails_with_message() {
    let base = temp_dir();
    let output = gitops(&[], base.path());
    assert!(!output.status.success());
}

#[test]
fn format_patch_without_strategy_is_usage_error() {
    let base = temp_dir();
    let url = seeded_bare_remote(base.path(), "replicas: 1\n");
    let output = gitops(&["format-patch", &format!("{url}#app.yaml")], base.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no patch strategy selected"), "got: {stderr}");
}

#[test]
fn format_patch_with_bad_address_is_usage_error() {
    let base = temp_dir();
    let output = gitops(
        &["format-patch", "not a url", "--sed", "s/a/b/"],
        base.path(),
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("composite url required"), "got: {stderr}");
}

#[test]
fn format_patch_writes_patch_to_stdout_by_default() {
    let base = temp_dir();
    let url = seeded_bare_remote(base.path(), "replicas: 1\n");
    let output = gitops(
        &[
            "format-patch",
            &format!("{url}#app.yaml"),
            "--sed",
            "s/replicas: 1/replicas: 2/",
            "-m",
            "Scale to two",
        ],
        base.path(),
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("From "));
    assert!(stdout.contains("Subject: [PATCH] Scale to two"));
    assert!(stdout.contains("+replicas: 2"));
}

#[test]
fn format_patch_then_push_patch_updates_remote() {
    let base = temp_dir();
    let url = seeded_bare_remote(base.path(), "replicas: 1\n");
    let patch_path = base.path().join("scale.patch");

    let output = gitops(
        &[
            "format-patch",
            &format!("{url}#app.yaml"),
            "--yq",
            ".replicas = 5",
            "--out",
            patch_path.to_str().unwrap(),
            "-m",
            "Scale to five",
        ],
        base.path(),
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(patch_path.exists());

    let output = gitops(
        &["push-patch", &url, "--patch", patch_path.to_str().unwrap()],
        base.path(),
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let shown = Command::new("git")
        .args(["show", "HEAD:app.yaml"])
        .current_dir(base.path().join("origin.git"))
        .output()
        .unwrap();
    assert_eq!(shown.stdout, b"replicas: 5\n");
}

#[test]
fn no_changes_abort_reports_and_fails() {
    let base = temp_dir();
    let url = seeded_bare_remote(base.path(), "replicas: 1\n");

    let local = base.path().join("same.yaml");
    fs::write(&local, "replicas: 1\n").unwrap();

    let output = gitops(
        &[
            "format-patch",
            &format!("{url}#app.yaml"),
            "--file",
            local.to_str().unwrap(),
        ],
        base.path(),
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no changes detected"), "got: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn push_patch_missing_file_is_usage_error() {
    let base = temp_dir();
    let url = seeded_bare_remote(base.path(), "replicas: 1\n");
    let output = gitops(
        &["push-patch", &url, "--patch", "no-such.patch"],
        base.path(),
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("patch file not found"), "got: {stderr}");
}
