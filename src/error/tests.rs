// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;

#[test]
fn usage_error_display() {
    let err = usage("repository url required");
    assert_eq!(err.to_string(), "usage error: repository url required");
}

#[test]
fn no_changes_display() {
    assert_eq!(GitopsError::NoChanges.to_string(), "no changes detected");
}

#[test]
fn clone_failed_carries_url_and_message() {
    let err: GitopsError = GitError::CloneFailed {
        url: "https://example.com/repo.git".to_string(),
        message: "fatal: repository not found".to_string(),
    }
    .into();
    let text = err.to_string();
    assert!(text.contains("https://example.com/repo.git"));
    assert!(text.contains("repository not found"));
}

#[test]
fn non_zero_exit_carries_command_and_stderr() {
    let err = ProcessError::NonZeroExit {
        command: "git push --quiet".to_string(),
        code: 1,
        stderr: "rejected: non-fast-forward".to_string(),
    };
    let text = err.to_string();
    assert!(text.contains("git push --quiet"));
    assert!(text.contains("non-fast-forward"));
}

#[test]
fn filter_parse_names_the_filter() {
    let err = TransformError::FilterParse {
        filter: ".a |".to_string(),
    };
    assert!(err.to_string().contains(".a |"));
}

#[test]
fn transform_process_error_is_transparent() {
    let err: TransformError = ProcessError::NonZeroExit {
        command: "sed -E -e s/a/b/".to_string(),
        code: 4,
        stderr: "unterminated `s' command".to_string(),
    }
    .into();
    assert!(err.to_string().contains("unterminated"));
}

#[test]
fn boxed_conversions_compile_to_top_level() {
    fn takes_gitops(_: GitopsError) {}
    takes_gitops(TransformError::NoExpressions.into());
    takes_gitops(
        FsError::NotFound("config/app.yaml".to_string()).into(),
    );
    takes_gitops(std::io::Error::other("broken pipe").into());
}

#[test]
fn gitops_error_stays_small() {
    assert!(std::mem::size_of::<GitopsError>() <= 24);
}
