// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-oriented stream editing through an external editor process.

use crate::error::TransformError;
use crate::process::{ProcessBuilder, find_executable};

/// Pipes the input through an external `sed`-compatible editor, applying
/// an ordered list of edit expressions. Earlier expressions' effects are
/// visible to later ones, per conventional stream-editor semantics.
#[derive(Debug, Clone)]
pub struct StreamEditStrategy {
    program: String,
    expressions: Vec<String>,
}

impl StreamEditStrategy {
    #[must_use]
    pub fn new(program: impl Into<String>, expressions: Vec<String>) -> Self {
        Self {
            program: program.into(),
            expressions,
        }
    }

    /// Runs the editor over `input` and returns its stdout.
    ///
    /// The editor runs in a scrubbed environment; stderr is captured
    /// separately and carried in the error on non-zero exit, together
    /// with the invoked command line.
    ///
    /// # Errors
    ///
    /// [`TransformError::NoExpressions`] when the expression list is
    /// empty (raised before any subprocess is spawned), or a process
    /// error when the editor fails.
    pub fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        if self.expressions.is_empty() {
            return Err(TransformError::NoExpressions);
        }

        let mut args = vec!["-E".to_string()];
        for expression in &self.expressions {
            args.push("-e".to_string());
            args.push(expression.clone());
        }

        // Resolve before scrubbing the environment; the child has no PATH.
        let program = find_executable(&self.program)?;

        let output = ProcessBuilder::new(program)
            .args(args)
            .clean_env()
            .stdin(input.to_vec())
            .run_checked()?;

        Ok(output.stdout().to_vec())
    }
}
