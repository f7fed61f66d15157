// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! Read-only queries use gix in-process; every mutation shells out to the
//! git CLI so that transports, credential helpers, and the mailbox
//! patch format behave exactly as they do for third-party tooling.

use std::path::Path;

use crate::error::{GitError, GitopsResult, GixError, ProcessError};
use crate::process::ProcessBuilder;

/// Identity applied to commits created inside ephemeral clones.
///
/// Passed to git as `-c user.name=... -c user.email=...` so runs do not
/// depend on ambient git configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

impl Default for CommitIdentity {
    fn default() -> Self {
        Self {
            name: "gitops".to_string(),
            email: "gitops@localhost".to_string(),
        }
    }
}

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without
/// modification.
pub trait GitQuery {
    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> GitopsResult<Option<String>>;

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or status check fails.
    fn has_uncommitted_changes(path: &Path) -> GitopsResult<bool>;
}

// --- Mutation Trait (Write operations) ---

/// Git mutation operations that modify repository state.
pub trait GitMutation {
    /// Shallow (depth-1) clone of `url` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CloneFailed`] carrying the locator and git's
    /// stderr if the clone does not complete.
    fn clone_shallow(url: &str, dest: &Path) -> GitopsResult<()>;

    /// Stage a single file.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the add operation fails.
    fn stage(repo_path: &Path, file: &str) -> GitopsResult<()>;

    /// Commit staged changes with the given message and identity.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit operation fails.
    fn commit(repo_path: &Path, message: &str, identity: &CommitIdentity) -> GitopsResult<()>;

    /// Export the most recent commit as a mailbox-formatted patch,
    /// returned as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if HEAD has no parent or the export fails.
    fn export_head_patch(repo_path: &Path) -> GitopsResult<Vec<u8>>;

    /// Apply a mailbox-formatted patch file to the repository.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the patch does not apply cleanly.
    fn apply_mailbox(
        repo_path: &Path,
        patch: &Path,
        identity: &CommitIdentity,
    ) -> GitopsResult<()>;

    /// Push the current branch to its configured upstream.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on any non-zero exit, including rejected
    /// non-fast-forward pushes. Never retries or forces.
    fn push(repo_path: &Path) -> GitopsResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn current_branch(path: &Path) -> GitopsResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn has_uncommitted_changes(path: &Path) -> GitopsResult<bool> {
        use gix::status::UntrackedFiles;

        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;

        let has_changes = repo
            .status(gix::progress::Discard)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to prepare status check".to_string(),
            })?
            .untracked_files(UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to check repository status".to_string(),
            })?
            .next()
            .is_some();

        Ok(has_changes)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI through the process seam.
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command, returning raw stdout bytes.
    /// ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub(crate) fn git_command_raw(args: &[&str], cwd: &Path) -> GitopsResult<Vec<u8>> {
        let output = ProcessBuilder::new("git")
            .args(args.iter().copied())
            .cwd(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .run_checked()
            .map_err(|e| match e {
                ProcessError::NonZeroExit {
                    command, stderr, ..
                } => GitError::CommandFailed {
                    command,
                    message: stderr,
                },
                other => GitError::CommandFailed {
                    command: format!("git {}", args.join(" ")),
                    message: other.to_string(),
                },
            })?;
        Ok(output.stdout().to_vec())
    }

    /// Execute a git command, returning trimmed stdout text.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> GitopsResult<String> {
        let stdout = Self::git_command_raw(args, cwd)?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }

    fn identity_args(identity: &CommitIdentity) -> [String; 4] {
        [
            "-c".to_string(),
            format!("user.name={}", identity.name),
            "-c".to_string(),
            format!("user.email={}", identity.email),
        ]
    }
}

impl GitMutation for ShellBackend {
    fn clone_shallow(url: &str, dest: &Path) -> GitopsResult<()> {
        let dest_str = dest.to_str().ok_or_else(|| GitError::CloneFailed {
            url: url.to_string(),
            message: "invalid destination path".to_string(),
        })?;
        let args = ["clone", "--quiet", "--depth", "1", url, dest_str];

        let parent = dest.parent().unwrap_or_else(|| Path::new("."));
        Self::git_command(&args, parent).map_err(|e| {
            GitError::CloneFailed {
                url: url.to_string(),
                message: match e {
                    crate::error::GitopsError::Git(git) => match *git {
                        GitError::CommandFailed { message, .. } => message,
                        other => other.to_string(),
                    },
                    other => other.to_string(),
                },
            }
        })?;
        Ok(())
    }

    fn stage(repo_path: &Path, file: &str) -> GitopsResult<()> {
        Self::git_command(&["add", "--", file], repo_path)?;
        Ok(())
    }

    fn commit(repo_path: &Path, message: &str, identity: &CommitIdentity) -> GitopsResult<()> {
        let identity_args = Self::identity_args(identity);
        let mut args: Vec<&str> = identity_args.iter().map(String::as_str).collect();
        args.extend(["commit", "--quiet", "-m", message]);
        Self::git_command(&args, repo_path)?;
        Ok(())
    }

    fn export_head_patch(repo_path: &Path) -> GitopsResult<Vec<u8>> {
        Self::git_command_raw(&["format-patch", "HEAD^", "--stdout"], repo_path)
    }

    fn apply_mailbox(
        repo_path: &Path,
        patch: &Path,
        identity: &CommitIdentity,
    ) -> GitopsResult<()> {
        let patch_str = patch.to_str().ok_or_else(|| GitError::CommandFailed {
            command: "git am".to_string(),
            message: "invalid patch path".to_string(),
        })?;
        let identity_args = Self::identity_args(identity);
        let mut args: Vec<&str> = identity_args.iter().map(String::as_str).collect();
        args.extend(["am", patch_str]);
        Self::git_command(&args, repo_path)?;
        Ok(())
    }

    fn push(repo_path: &Path) -> GitopsResult<()> {
        Self::git_command(&["push", "--quiet"], repo_path)?;
        Ok(())
    }
}
