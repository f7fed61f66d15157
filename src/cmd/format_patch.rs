// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! format-patch command implementation for gitops-rs.

use std::fs::File;
use std::io::Write;

use crate::address::CompositeAddress;
use crate::cli::format_patch::FormatPatchArgs;
use crate::config::Config;
use crate::error::{Result, usage};
use crate::pipeline::PatchGenerator;
use crate::strategy::Strategy;

/// Main handler for the format-patch command.
///
/// # Errors
///
/// Returns an error for a malformed composite address, a missing strategy
/// selection, or any pipeline failure.
pub fn run_format_patch_command(args: &FormatPatchArgs, config: &Config) -> Result<()> {
    let address = CompositeAddress::parse(&args.address);
    if address.repository().is_empty() {
        return Err(usage("composite url required: <repo-url>#<path>").into());
    }

    let strategy = select_strategy(args, config)?;

    // CLI message wins; the configured default covers a blank one.
    let message = if args.message.is_empty() {
        &config.commit.message
    } else {
        &args.message
    };

    let generator = PatchGenerator {
        locator: address.repository(),
        file_path: address.file_path(),
        strategy,
        message,
        identity: config.commit.identity(),
    };

    let mut destination = open_destination(&args.out)?;
    generator.run(destination.as_mut())?;
    destination.flush()?;
    Ok(())
}

/// Builds the transform strategy from the selected flag.
///
/// Selection priority mirrors the strategy flags' documentation order:
/// file > yq > jq > sed.
fn select_strategy(args: &FormatPatchArgs, config: &Config) -> Result<Strategy> {
    if let Some(file) = &args.file {
        Ok(Strategy::replace(file))
    } else if let Some(filter) = &args.yq {
        Ok(Strategy::yaml_filter(filter))
    } else if let Some(filter) = &args.jq {
        Ok(Strategy::json_filter(filter))
    } else if !args.sed.is_empty() {
        Ok(Strategy::stream_edit(config.tools.sed.clone(), args.sed.clone()))
    } else {
        Err(usage("no patch strategy selected").into())
    }
}

/// Opens the patch destination; `-` (or empty) selects stdout.
fn open_destination(out: &str) -> Result<Box<dyn Write>> {
    if out.is_empty() || out == "-" {
        Ok(Box::new(std::io::stdout()))
    } else {
        Ok(Box::new(File::create(out)?))
    }
}
