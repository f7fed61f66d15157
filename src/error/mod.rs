// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              GitopsError (~24 bytes)
//!                     |
//!   +---------+------+------+---------+
//!   |     |        |       |      |   |
//!   v     v        v       v      v   v
//! Usage  Git  Transform  Proc   Cfg  Fs  NoChanges  Io
//!        Box     Box      Box   Box  Box             Box
//!
//! Sub-errors (unboxed internally):
//!   Git        CloneFailed, CommandFailed, Gix
//!   Transform  NoExpressions, FilterParse, FilterEval,
//!              InvalidJson, InvalidYaml, ReplaceSource, Process
//!   Process    ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Config     ParseError, InvalidValue
//!   Fs         NotFound, IoError
//!
//! All variants boxed => GitopsError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GitopsError`].
pub type GitopsResult<T> = std::result::Result<T, GitopsError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum GitopsError {
    /// Missing or invalid caller input, detected before any external
    /// process runs.
    #[error("usage error: {0}")]
    Usage(Box<str>),

    /// The transform produced output byte-identical to the input; the
    /// pipeline aborts rather than submit an empty patch.
    #[error("no changes detected")]
    NoChanges,

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Transform strategy failed to produce output.
    #[error("transform error: {0}")]
    Transform(#[from] Box<TransformError>),

    /// External process execution failed.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a [`GitopsError::Usage`] from a message.
pub fn usage(message: impl Into<String>) -> GitopsError {
    GitopsError::Usage(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GitopsError {
                fn from(err: $error) -> Self {
                    GitopsError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    TransformError => Transform,
    ProcessError => Process,
    ConfigError => Config,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// gix has multiple error types that are converted through this enum.
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Clone operation failed (authentication, network, missing ref, ...).
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Git command execution failed; carries the attempted command line
    /// and captured stderr.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Transform Errors ---

/// Transform strategy errors.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The stream-edit strategy was configured with an empty expression
    /// list. Raised before any subprocess is spawned.
    #[error("stream edit: no expressions provided")]
    NoExpressions,

    /// The filter expression did not parse. Raised before input is read.
    #[error("failed to parse filter expression '{filter}'")]
    FilterParse { filter: String },

    /// The filter produced an error value during evaluation; pending
    /// results are discarded.
    #[error("filter evaluation failed: {message}")]
    FilterEval { message: String },

    /// Input is not a single JSON object.
    #[error("input is not a valid JSON object: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// A document in the YAML input stream failed to decode; the whole
    /// transform aborts.
    #[error("bad input document {index}: {message}")]
    InvalidYaml { index: usize, message: String },

    /// The local replacement file could not be read.
    #[error("failed to read replacement file '{path}': {source}")]
    ReplaceSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a filter result failed.
    #[error("failed to serialize filter result: {message}")]
    Serialize { message: String },

    /// The external edit process failed.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

// --- Process Errors ---

/// Process execution errors.
///
/// Every external invocation in this system is classified through these
/// variants; each carries the attempted command line.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status; carries captured stderr.
    #[error("process '{command}' exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    /// Failed to feed stdin or read process output.
    #[error("failed to exchange data with process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
