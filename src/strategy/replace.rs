// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whole-file replacement.

use std::fs;
use std::path::PathBuf;

use crate::error::TransformError;

/// Replaces the target file's contents with those of a local file. The
/// current contents are ignored entirely.
#[derive(Debug, Clone)]
pub struct ReplaceStrategy {
    local_file: PathBuf,
}

impl ReplaceStrategy {
    #[must_use]
    pub fn new(local_file: impl Into<PathBuf>) -> Self {
        Self {
            local_file: local_file.into(),
        }
    }

    /// Emits the full contents of the configured local file.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ReplaceSource`] if the file cannot be
    /// read.
    pub fn transform(&self, _input: &[u8]) -> Result<Vec<u8>, TransformError> {
        fs::read(&self.local_file).map_err(|source| TransformError::ReplaceSource {
            path: self.local_file.display().to_string(),
            source,
        })
    }
}
