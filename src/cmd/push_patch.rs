// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! push-patch command implementation for gitops-rs.

use crate::cli::push_patch::PushPatchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::PatchPublisher;

/// Main handler for the push-patch command.
///
/// # Errors
///
/// Returns an error if the patch cannot be applied or pushed.
pub fn run_push_patch_command(args: &PushPatchArgs, config: &Config) -> Result<()> {
    let publisher = PatchPublisher {
        locator: &args.repository,
        patch_file: &args.patch,
        identity: config.commit.identity(),
    };
    publisher.run()?;
    Ok(())
}
