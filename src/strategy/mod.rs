// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transform strategies.
//!
//! ```text
//! Strategy::transform(input bytes) -> output bytes
//!     |
//!     +-- Replace      emit a local file, ignore input
//!     +-- StreamEdit   external line editor, ordered expressions
//!     +-- JsonFilter   declarative query over one JSON object
//!     +-- YamlFilter   declarative query per YAML document
//! ```
//!
//! Exactly one variant is active per invocation; the orchestration layer
//! never inspects which. Strategies are stateless across invocations.

mod engine;
mod json;
mod replace;
mod stream_edit;
mod yaml;

pub use json::JsonFilterStrategy;
pub use replace::ReplaceStrategy;
pub use stream_edit::StreamEditStrategy;
pub use yaml::YamlFilterStrategy;

use std::path::PathBuf;

use crate::error::TransformError;

/// A pluggable content transformation, selected once per invocation.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Replace the file with a local file's contents.
    Replace(ReplaceStrategy),
    /// Pipe the file through an external stream editor.
    StreamEdit(StreamEditStrategy),
    /// Filter the file as a JSON object.
    JsonFilter(JsonFilterStrategy),
    /// Filter the file as a YAML document stream.
    YamlFilter(YamlFilterStrategy),
}

impl Strategy {
    /// Whole-file replacement from `local_file`.
    #[must_use]
    pub fn replace(local_file: impl Into<PathBuf>) -> Self {
        Self::Replace(ReplaceStrategy::new(local_file))
    }

    /// Stream editing with `program` and an ordered expression list.
    #[must_use]
    pub fn stream_edit(program: impl Into<String>, expressions: Vec<String>) -> Self {
        Self::StreamEdit(StreamEditStrategy::new(program, expressions))
    }

    /// Declarative JSON query.
    #[must_use]
    pub fn json_filter(filter: impl Into<String>) -> Self {
        Self::JsonFilter(JsonFilterStrategy::new(filter))
    }

    /// Declarative YAML query.
    #[must_use]
    pub fn yaml_filter(filter: impl Into<String>) -> Self {
        Self::YamlFilter(YamlFilterStrategy::new(filter))
    }

    /// Transforms `input` into new file contents.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError`] when the selected variant fails; see
    /// the variant types for the specific failure modes.
    pub fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        match self {
            Self::Replace(s) => s.transform(input),
            Self::StreamEdit(s) => s.transform(input),
            Self::JsonFilter(s) => s.transform(input),
            Self::YamlFilter(s) => s.transform(input),
        }
    }
}

#[cfg(test)]
mod tests;
