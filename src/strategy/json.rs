// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative filtering of JSON documents.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::engine;
use crate::error::TransformError;

/// Runs a declarative query against the input, which must be a single
/// JSON object, and emits one 4-space-indented JSON value per query
/// result, in order.
#[derive(Debug, Clone)]
pub struct JsonFilterStrategy {
    filter: String,
}

impl JsonFilterStrategy {
    #[must_use]
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
        }
    }

    /// Evaluates the filter over the parsed input.
    ///
    /// The filter is compiled before the input is touched; the result
    /// sequence is lazy and consumed exactly once, and a result
    /// representing an error fails the whole transform, discarding
    /// pending results. An empty result sequence yields empty output.
    ///
    /// # Errors
    ///
    /// [`TransformError::FilterParse`] for a malformed filter,
    /// [`TransformError::InvalidJson`] when the input is not a JSON
    /// object, [`TransformError::FilterEval`] when evaluation errors.
    pub fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        let mut out = Vec::new();

        engine::evaluate(
            &self.filter,
            || {
                std::iter::once(
                    serde_json::from_slice::<serde_json::Map<String, serde_json::Value>>(input)
                        .map(serde_json::Value::Object)
                        .map_err(|source| TransformError::InvalidJson { source }),
                )
            },
            |_, value| {
                let mut serializer = serde_json::Serializer::with_formatter(
                    &mut out,
                    PrettyFormatter::with_indent(b"    "),
                );
                value
                    .serialize(&mut serializer)
                    .map_err(|e| TransformError::Serialize {
                        message: e.to_string(),
                    })?;
                out.push(b'\n');
                Ok(())
            },
        )?;

        Ok(out)
    }
}
