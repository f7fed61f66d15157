// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitops-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitops.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. GITOPS_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITOPS_COMMIT_MESSAGE="Sync"   → commit.message = "Sync"
//! GITOPS_TOOLS_SED=/usr/bin/sed  → tools.sed = "/usr/bin/sed"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{CommitConfig, GlobalConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Commit options for ephemeral clones.
    pub commit: CommitConfig,
    /// External tool paths.
    pub tools: ToolsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitops_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitops.toml")
    ///     .with_env_prefix("GITOPS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for values no pipeline run could work with.
    pub fn validate(&self) -> Result<()> {
        if self.tools.sed.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "tools".to_string(),
                key: "sed".to_string(),
                message: "stream-editor binary must not be empty".to_string(),
            }
            .into());
        }
        if self.commit.message.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "commit".to_string(),
                key: "message".to_string(),
                message: "default commit message must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
