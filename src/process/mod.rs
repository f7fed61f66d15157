// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous external-process execution.
//!
//! Every external invocation in the system - git plumbing and the stream
//! editor alike - goes through this one seam, so command construction,
//! failure classification, and testing are uniform.
//!
//! ```text
//! ProcessBuilder
//!  • new/args/cwd/env/clean_env/stdin
//!              |
//!              v
//!        run() / run_checked()
//!              |
//!              v
//!       ProcessOutput
//!  { exit_code, stdout bytes, stderr text }
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{OnceLock, RwLock};

use tracing::{debug, trace};

use crate::error::ProcessError;

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

/// Get the executable cache, initializing if needed.
fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

/// Resolve an executable name to a full path via PATH, memoized per process.
///
/// # Errors
///
/// Returns [`ProcessError::ExecutableNotFound`] if the name cannot be
/// resolved.
pub fn find_executable(name: &str) -> Result<PathBuf, ProcessError> {
    if let Some(path) = exe_cache().read().ok().and_then(|c| c.get(name).cloned()) {
        return Ok(path);
    }
    let path = which::which(name).map_err(|_| ProcessError::ExecutableNotFound {
        name: name.to_string(),
    })?;
    if let Ok(mut cache) = exe_cache().write() {
        cache.insert(name.to_string(), path.clone());
    }
    Ok(path)
}

/// Output from a completed process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: Vec<u8>,
    stderr: String,
}

impl ProcessOutput {
    /// Returns the process exit code (0 = success).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns captured stdout as raw bytes.
    #[must_use]
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    /// Returns captured stderr as text.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Builder for configuring and running an external process.
#[derive(Debug)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    env: Vec<(String, String)>,
    clean_env: bool,
    stdin: Option<Vec<u8>>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the
    /// executable name to be resolved via PATH by the OS.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
            clean_env: false,
            stdin: None,
        }
    }

    /// Appends arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the working directory.
    #[must_use]
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Sets an environment variable for the child.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Starts the child from an empty environment instead of inheriting
    /// the parent's. Variables set via [`Self::env`] still apply.
    #[must_use]
    pub const fn clean_env(mut self) -> Self {
        self.clean_env = true;
        self
    }

    /// Provides bytes to feed to the child's stdin.
    #[must_use]
    pub fn stdin(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(bytes.into());
        self
    }

    /// Returns the full command line as a string (for logging and errors).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program.display());
        for arg in &self.args {
            if arg.contains(' ') {
                use std::fmt::Write as _;
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                use std::fmt::Write as _;
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process, feeds stdin, and waits for completion.
    ///
    /// The exit code is reported in the output and NOT validated here;
    /// use [`Self::run_checked`] to classify non-zero exits as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or its streams
    /// cannot be exchanged.
    pub fn run(self) -> Result<ProcessOutput, ProcessError> {
        let cmd_line = self.command_line();

        if let Some(cwd) = &self.cwd {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        if self.clean_env {
            command.env_clear();
        }
        for (key, value) in &self.env {
            command.env(key, value);
        }
        command.stdin(if self.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;

        trace!(pid = ?child.id(), "spawned");

        // Feed stdin from a separate thread; writing inline could deadlock
        // once the child fills its stdout pipe.
        let writer = self.stdin.and_then(|bytes| {
            child.stdin.take().map(|mut stdin| {
                std::thread::spawn(move || {
                    let _ = stdin.write_all(&bytes);
                })
            })
        });

        let output = child
            .wait_with_output()
            .map_err(|e| ProcessError::OutputError {
                command: cmd_line.clone(),
                message: e.to_string(),
            })?;

        if let Some(handle) = writer {
            let _ = handle.join();
        }

        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        trace!(cmd = %cmd_line, exit_code, "completed");

        Ok(ProcessOutput {
            exit_code,
            stdout: output.stdout,
            stderr,
        })
    }

    /// Like [`Self::run`], but a non-zero exit is an error carrying the
    /// command line and captured stderr.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::NonZeroExit`] on non-zero exit, or any
    /// error from [`Self::run`].
    pub fn run_checked(self) -> Result<ProcessOutput, ProcessError> {
        let cmd_line = self.command_line();
        let output = self.run()?;
        if !output.success() {
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
                stderr: output.stderr().to_string(),
            });
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests;
