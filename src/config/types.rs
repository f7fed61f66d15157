// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for gitops-rs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::git::CommitIdentity;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; empty disables file logging.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// Commit configuration for ephemeral clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Commit message used when the caller supplies none.
    pub message: String,
    /// Author/committer name for generated commits.
    pub author_name: String,
    /// Author/committer email for generated commits.
    pub author_email: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        let identity = CommitIdentity::default();
        Self {
            message: crate::pipeline::DEFAULT_COMMIT_MESSAGE.to_string(),
            author_name: identity.name,
            author_email: identity.email,
        }
    }
}

impl CommitConfig {
    /// The configured identity as passed to git.
    #[must_use]
    pub fn identity(&self) -> CommitIdentity {
        CommitIdentity {
            name: self.author_name.clone(),
            email: self.author_email.clone(),
        }
    }
}

/// External tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Stream-editor binary (name or path).
    pub sed: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            sed: "sed".to_string(),
        }
    }
}
