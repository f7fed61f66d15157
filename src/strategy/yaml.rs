// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative filtering of YAML document streams.

use serde::Deserialize;
use tracing::trace;

use super::engine;
use crate::error::TransformError;

/// Runs a declarative query against each document of a YAML stream, in
/// document order, and emits every matching node re-serialized as
/// 2-space-indented YAML. Results from successive documents are separated
/// by the standard `---` marker.
#[derive(Debug, Clone)]
pub struct YamlFilterStrategy {
    filter: String,
}

impl YamlFilterStrategy {
    #[must_use]
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
        }
    }

    /// Evaluates the filter per document.
    ///
    /// Documents are decoded strictly sequentially and tagged with a
    /// monotonically increasing index; a decode failure on any document
    /// aborts the whole transform with that index. End of input is normal
    /// termination, so an empty stream yields empty output.
    ///
    /// # Errors
    ///
    /// [`TransformError::FilterParse`] for a malformed filter,
    /// [`TransformError::InvalidYaml`] for an undecodable document,
    /// [`TransformError::FilterEval`] when evaluation errors.
    pub fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        let mut out = Vec::new();
        let mut last_document = None;

        engine::evaluate(
            &self.filter,
            || {
                serde_yaml::Deserializer::from_slice(input)
                    .enumerate()
                    .map(|(index, document)| {
                        trace!(document = index, "decoding");
                        let value = serde_yaml::Value::deserialize(document).map_err(|e| {
                            TransformError::InvalidYaml {
                                index,
                                message: e.to_string(),
                            }
                        })?;
                        serde_json::to_value(&value).map_err(|e| TransformError::InvalidYaml {
                            index,
                            message: e.to_string(),
                        })
                    })
            },
            |document, value| {
                if last_document.is_some_and(|last| last != document) {
                    out.extend_from_slice(b"---\n");
                }
                last_document = Some(document);
                let rendered =
                    serde_yaml::to_string(&value).map_err(|e| TransformError::Serialize {
                        message: e.to_string(),
                    })?;
                out.extend_from_slice(rendered.as_bytes());
                Ok(())
            },
        )?;

        Ok(out)
    }
}
