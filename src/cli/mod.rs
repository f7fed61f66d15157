// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitops-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitops [global options] <command>
//! format-patch URL#FILE [--sed EXPR]... [--yq F] [--jq F] [--file PATH]
//!              [--out PATH|-] [--message MSG]
//! push-patch URL --patch PATH
//! version
//! ```

pub mod format_patch;
pub mod global;
pub mod push_patch;


use crate::cli::format_patch::FormatPatchArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::push_patch::PushPatchArgs;
use clap::{Parser, Subcommand};

/// GitOps Patch Utility - Rust Port
///
/// A utility CLI for interacting with gitops repositories.
#[derive(Debug, Parser)]
#[command(
    name = "gitops",
    author,
    version,
    about = "Utility CLI for interacting with gitops repositories",
    long_about = "gitops-rs Copyright (C) 2026 Gitops-rs Contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Prepares single-file changes to remote repositories as\n\
                  mailbox-formatted patches and pushes such patches upstream.\n\
                  See `gitops <command> --help` for more information about a\n\
                  command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, gitops will look for an optional `gitops.toml`\n\
                  in the current directory. Additional TOML files can be\n\
                  specified with --config and are loaded after it, each\n\
                  overriding the previous. GITOPS_* environment variables\n\
                  override all files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prepares a patch for submission.
    #[command(name = "format-patch")]
    FormatPatch(FormatPatchArgs),

    /// Pushes a patch to a repository.
    #[command(name = "push-patch")]
    PushPatch(PushPatchArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
