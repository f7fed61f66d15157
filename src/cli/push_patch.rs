// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! push-patch command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `push-patch` command.
///
/// Pushes the given patch file to the given gitops repository.
#[derive(Debug, Clone, Args)]
pub struct PushPatchArgs {
    /// Repository locator to apply the patch to.
    #[arg(value_name = "URL")]
    pub repository: String,

    /// Path to the patch file.
    #[arg(long = "patch", value_name = "PATH", required = true)]
    pub patch: PathBuf,
}
