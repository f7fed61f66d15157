// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scoped, ephemeral repository clones.
//!
//! ```text
//! Unacquired --acquire--> Acquired --release--> Released
//!                             |                    ^
//!                             '------- Drop -------'
//! ```
//!
//! A workspace owns its temporary directory exclusively, is used by
//! exactly one pipeline invocation, and is never reused. Release fires on
//! every exit path, including unwinds.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, trace};

use crate::error::{FsError, GitopsResult};
use crate::git::{CommitIdentity, GitMutation, GitQuery, GixBackend, ShellBackend};

/// A temporary shallow clone of a repository, removed unconditionally when
/// the owning pipeline run ends.
#[derive(Debug)]
pub struct Workspace {
    dir: Option<TempDir>,
}

impl Workspace {
    /// Allocates a fresh temporary directory and shallow-clones `locator`
    /// into it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GitError::CloneFailed`] if the clone does
    /// not complete - authentication failure, network failure, and
    /// nonexistent references included.
    pub fn acquire(locator: &str) -> GitopsResult<Self> {
        let dir = tempfile::tempdir()?;
        let root = dir.path().join("repo");
        debug!(url = locator, dest = %root.display(), "clone");
        ShellBackend::clone_shallow(locator, &root)?;
        Ok(Self { dir: Some(dir) })
    }

    /// The root of the cloned working tree.
    ///
    /// # Panics
    ///
    /// Panics if called after [`Self::release`]; the workspace state
    /// machine has no transition back from `Released`.
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.dir
            .as_ref()
            .expect("workspace used after release")
            .path()
            .join("repo")
    }

    /// Whether [`Self::release`] already ran.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.dir.is_none()
    }

    /// Reads a file relative to the workspace root.
    ///
    /// # Errors
    ///
    /// Returns [`FsError`] if the path does not exist or cannot be read.
    pub fn read_file(&self, relative: &str) -> GitopsResult<Vec<u8>> {
        let path = self.root().join(relative);
        if !path.exists() {
            return Err(FsError::NotFound(path.display().to_string()).into());
        }
        fs::read(&path).map_err(|source| {
            FsError::IoError {
                path: path.display().to_string(),
                source,
            }
            .into()
        })
    }

    /// Overwrites a file relative to the workspace root.
    ///
    /// # Errors
    ///
    /// Returns [`FsError`] if the file cannot be created or written.
    pub fn write_file(&self, relative: &str, bytes: &[u8]) -> GitopsResult<()> {
        let path = self.root().join(relative);
        fs::write(&path, bytes).map_err(|source| {
            FsError::IoError {
                path: path.display().to_string(),
                source,
            }
            .into()
        })
    }

    /// True iff the working tree differs from HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the status check fails.
    pub fn has_uncommitted_changes(&self) -> GitopsResult<bool> {
        GixBackend::has_uncommitted_changes(&self.root())
    }

    /// Current branch name, if HEAD is not detached.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if head resolution fails.
    pub fn current_branch(&self) -> GitopsResult<Option<String>> {
        GixBackend::current_branch(&self.root())
    }

    /// Stages a single file.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the add operation fails.
    pub fn stage(&self, relative: &str) -> GitopsResult<()> {
        ShellBackend::stage(&self.root(), relative)
    }

    /// Commits staged changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit operation fails.
    pub fn commit(&self, message: &str, identity: &CommitIdentity) -> GitopsResult<()> {
        ShellBackend::commit(&self.root(), message, identity)
    }

    /// Writes the mailbox-formatted representation of exactly the most
    /// recent commit to `destination`.
    ///
    /// # Errors
    ///
    /// Fails if HEAD has no parent (e.g. the clone was empty), the export
    /// command fails, or the sink cannot be written.
    pub fn export_last_commit(&self, destination: &mut dyn Write) -> GitopsResult<()> {
        let patch = ShellBackend::export_head_patch(&self.root())?;
        destination.write_all(&patch)?;
        Ok(())
    }

    /// Applies a mailbox-formatted patch file.
    ///
    /// # Errors
    ///
    /// Fails if the patch does not apply cleanly against current HEAD.
    pub fn apply_patch(&self, patch: &Path, identity: &CommitIdentity) -> GitopsResult<()> {
        ShellBackend::apply_mailbox(&self.root(), patch, identity)
    }

    /// Pushes the current branch to its configured upstream.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on any non-zero exit, including rejected
    /// non-fast-forward pushes.
    pub fn push(&self) -> GitopsResult<()> {
        ShellBackend::push(&self.root())
    }

    /// Recursively removes the temporary directory. Idempotent; also
    /// fired by `Drop`, so every exit path tears the workspace down.
    pub fn release(&mut self) {
        if let Some(dir) = self.dir.take() {
            trace!(path = %dir.path().display(), "release workspace");
            // Drop of TempDir removes the tree; close() would only surface
            // errors we cannot act on here.
            drop(dir);
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.release();
    }
}
