// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Patch generation and publication pipelines.
//!
//! ```text
//! PatchGenerator::run(dest)
//!   clone -> read -> transform -> write -> diff? -> add -> commit -> export
//!                                           |
//!                                           '-- byte-identical => NoChanges
//!
//! PatchPublisher::run()
//!   clone -> am -> push
//! ```
//!
//! Both pipelines run strictly sequentially; the workspace is scoped to
//! the run and released on every exit path. Nothing is durable before
//! `commit`; nothing leaves the temporary clone before `push`.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{GitopsError, GitopsResult, usage};
use crate::git::CommitIdentity;
use crate::strategy::Strategy;
use crate::workspace::Workspace;

/// Commit message used when the caller supplies none.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update managed file";

/// Prepares a single-file change as a mailbox-formatted patch containing
/// exactly one commit. The origin repository is never touched; the commit
/// exists only in the temporary clone that the patch is exported from.
#[derive(Debug)]
pub struct PatchGenerator<'a> {
    /// Repository locator accepted by the underlying clone operation.
    pub locator: &'a str,
    /// Path of the target file, relative to the repository root.
    pub file_path: &'a str,
    /// The transformation to apply to the file's current contents.
    pub strategy: Strategy,
    /// Commit message; empty selects [`DEFAULT_COMMIT_MESSAGE`].
    pub message: &'a str,
    /// Identity for the commit created in the ephemeral clone.
    pub identity: CommitIdentity,
}

impl PatchGenerator<'_> {
    /// Runs the pipeline, writing the patch artifact to `destination`.
    ///
    /// # Errors
    ///
    /// - [`GitopsError::Usage`] for an empty locator.
    /// - [`GitopsError::NoChanges`] when the transform output is
    ///   byte-identical to the input; no artifact is produced.
    /// - Clone, transform, git, and I/O failures as classified in
    ///   [`crate::error`].
    pub fn run(&self, destination: &mut dyn Write) -> GitopsResult<()> {
        if self.locator.is_empty() {
            return Err(usage("repository url required"));
        }

        let workspace = Workspace::acquire(self.locator)?;

        let original = workspace.read_file(self.file_path)?;
        debug!(file = self.file_path, bytes = original.len(), "read");

        let updated = self.strategy.transform(&original)?;
        workspace.write_file(self.file_path, &updated)?;

        if !workspace.has_uncommitted_changes()? {
            return Err(GitopsError::NoChanges);
        }

        let message = if self.message.is_empty() {
            DEFAULT_COMMIT_MESSAGE
        } else {
            self.message
        };

        workspace.stage(self.file_path)?;
        workspace.commit(message, &self.identity)?;
        workspace.export_last_commit(destination)?;

        info!(file = self.file_path, "patch generated");
        Ok(())
    }
}

/// Applies a previously generated patch against a fresh clone and pushes
/// the result upstream. This is the only operation in the system that
/// mutates a remote repository's history.
#[derive(Debug)]
pub struct PatchPublisher<'a> {
    /// Repository locator accepted by the underlying clone operation.
    pub locator: &'a str,
    /// Path to the patch file on local disk.
    pub patch_file: &'a Path,
    /// Identity for the commits recreated by patch application.
    pub identity: CommitIdentity,
}

impl PatchPublisher<'_> {
    /// Runs the pipeline.
    ///
    /// # Errors
    ///
    /// - [`GitopsError::Usage`] for an empty locator or a missing patch
    ///   file.
    /// - Clone, apply, and push failures as classified in
    ///   [`crate::error`]; a rejected non-fast-forward push is an error,
    ///   never retried or forced.
    pub fn run(&self) -> GitopsResult<()> {
        if self.locator.is_empty() {
            return Err(usage("repository url required"));
        }

        let patch: PathBuf = self
            .patch_file
            .canonicalize()
            .map_err(|_| usage(format!("patch file not found: {}", self.patch_file.display())))?;

        let workspace = Workspace::acquire(self.locator)?;

        workspace.apply_patch(&patch, &self.identity)?;

        let branch = workspace.current_branch()?.unwrap_or_default();
        info!(branch = %branch, "pushing patch upstream");
        workspace.push()?;

        Ok(())
    }
}
