// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! format-patch command arguments.
//!
//! ```text
//! format-patch URL#FILE --sed 's/a/b/' [--sed ...]
//!   → pipe the file through a stream editor
//! format-patch URL#FILE --yq '.spec.replicas = 3'
//!   → declarative YAML filter
//! format-patch URL#FILE --jq '.version = "2.0"'
//!   → declarative JSON filter
//! format-patch URL#FILE --file new.yaml
//!   → replace the file wholesale
//! ```
//!
//! The four strategy flags are mutually exclusive; exactly one selects
//! the transformation for this invocation.

use clap::{ArgGroup, Args};
use std::path::PathBuf;

/// Arguments for the `format-patch` command.
///
/// Prepares one commit with its patch, formatted to resemble a UNIX
/// mailbox. The output is compatible with git-format-patch and works with
/// `gitops push-patch`.
#[derive(Debug, Clone, Args)]
#[command(group = ArgGroup::new("strategy").multiple(false))]
pub struct FormatPatchArgs {
    /// Composite address of the file to patch: <repo-url>#<path>.
    #[arg(value_name = "URL#FILE")]
    pub address: String,

    /// sed expression used to update the provided file.
    /// Can be specified multiple times; applied in order.
    #[arg(long = "sed", value_name = "EXPR", group = "strategy", action = clap::ArgAction::Append)]
    pub sed: Vec<String>,

    /// yq filter used to update the provided file.
    #[arg(long = "yq", value_name = "FILTER", group = "strategy")]
    pub yq: Option<String>,

    /// jq filter used to update the provided file.
    #[arg(long = "jq", value_name = "FILTER", group = "strategy")]
    pub jq: Option<String>,

    /// Local file to replace the remote file.
    #[arg(long = "file", value_name = "PATH", group = "strategy")]
    pub file: Option<PathBuf>,

    /// Path to write the patch file; '-' writes to stdout.
    #[arg(long = "out", value_name = "PATH", default_value = "-")]
    pub out: String,

    /// Message to use for the commit; when left blank a generic message
    /// is used.
    #[arg(short = 'm', long = "message", value_name = "MSG", default_value = "")]
    pub message: String,
}
