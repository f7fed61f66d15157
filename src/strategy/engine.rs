// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filter-language engine plumbing shared by the structured-filter
//! strategies.
//!
//! The query language itself is an opaque black box: a filter string and
//! input values go in, result values come out. This module owns the only
//! contact surface with the engine - one-time environment initialization,
//! filter compilation, and evaluation.

use std::sync::OnceLock;

use jaq_core::load::{Arena, File, Loader};
use jaq_core::{Compiler, Ctx, FilterT, RcIter};
use jaq_json::Val;
use tracing::debug;

use crate::error::TransformError;

/// One-time initialization of the filter evaluator environment.
///
/// The engine's standard library is parsed from embedded source; this hook
/// forces that load exactly once per process, on first use of a
/// structured-filter strategy, and is never re-run. `OnceLock` serializes
/// racing first uses, so concurrent strategies cannot observe a
/// half-initialized environment.
static EVALUATOR_INIT: OnceLock<()> = OnceLock::new();

fn init_evaluator() {
    EVALUATOR_INIT.get_or_init(|| {
        let definitions = jaq_std::defs().chain(jaq_json::defs()).count();
        debug!(definitions, "filter evaluator initialized");
    });
}

/// Compile `filter`, then lazily obtain input values and evaluate the
/// filter over each of them in order.
///
/// `emit` receives `(input_index, result_value)` for every value the
/// filter produces, as soon as it is produced; a result representing an
/// error aborts the evaluation and suppresses pending results.
///
/// Compilation happens before `inputs` is invoked, so a malformed filter
/// is reported before any input is read.
///
/// # Errors
///
/// [`TransformError::FilterParse`] for a malformed filter,
/// [`TransformError::FilterEval`] for an error produced during
/// evaluation, or whatever `inputs`/`emit` return.
pub(super) fn evaluate<I>(
    filter: &str,
    inputs: impl FnOnce() -> I,
    mut emit: impl FnMut(usize, serde_json::Value) -> Result<(), TransformError>,
) -> Result<(), TransformError>
where
    I: Iterator<Item = Result<serde_json::Value, TransformError>>,
{
    init_evaluator();

    let parse_error = || TransformError::FilterParse {
        filter: filter.to_string(),
    };

    let program = File {
        code: filter,
        path: (),
    };
    let loader = Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = Arena::default();
    let modules = loader.load(&arena, program).map_err(|_| parse_error())?;
    let compiled = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(|_| parse_error())?;

    for (index, value) in inputs().enumerate() {
        let value = value?;
        let empty = RcIter::new(core::iter::empty());
        for result in compiled.run((Ctx::new([], &empty), Val::from(value))) {
            let result = result.map_err(|e| TransformError::FilterEval {
                message: format!("{e:?}"),
            })?;
            emit(index, result.into())?;
        }
    }

    Ok(())
}
