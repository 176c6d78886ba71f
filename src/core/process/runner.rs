// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! ProcessBuilder::run(&runner)
//!              |
//!              v
//!   runner.spawn_and_wait(&builder)
//!     SystemRunner: std::process::Command
//!     (tests: scripted fakes)
//!              |
//!              v
//!     validate exit_code
//!    (skip if ALLOW_FAILURE)
//!              |
//!              v
//!       ProcessOutput
//!    { exit_code, stdout, stderr }
//! ```

use std::io::ErrorKind;
use std::process::{Command, Stdio};
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::{GitmeupResult, ProcessError};

/// Something that can spawn a configured process and wait for it.
///
/// Implementations only report spawn failures as errors; exit codes are
/// judged by [`ProcessBuilder::run`].
pub trait ProcessRunner {
    /// Spawns the process described by `builder` and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the process cannot be spawned.
    fn spawn_and_wait(&self, builder: &ProcessBuilder) -> GitmeupResult<ProcessOutput>;
}

/// Runs processes on the host through `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn spawn_and_wait(&self, builder: &ProcessBuilder) -> GitmeupResult<ProcessOutput> {
        let mut command = Command::new(builder.program());
        command.args(builder.args_slice());

        if let Some(cwd) = builder.working_dir() {
            command.current_dir(cwd);
        }
        for (key, value) in builder.env_vars() {
            command.env(key, value);
        }

        let spawn_error = |source: std::io::Error| {
            if source.kind() == ErrorKind::NotFound {
                ProcessError::ExecutableNotFound {
                    name: builder.program().display().to_string(),
                }
            } else {
                ProcessError::SpawnFailed {
                    command: builder.command_line(),
                    source,
                }
            }
        };

        if inherits_stdio(builder.process_flags()) {
            let status = command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(spawn_error)?;
            return Ok(ProcessOutput::new(
                status.code().unwrap_or(-1),
                String::new(),
                String::new(),
            ));
        }

        let output = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(spawn_error)?;

        Ok(ProcessOutput::new(
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

/// Whether the child shares our terminal: stdin, stdout and stderr alike.
///
/// Captured runs get a null stdin so they can never wait on input.
pub(crate) const fn inherits_stdio(flags: ProcessFlags) -> bool {
    flags.contains(ProcessFlags::INHERIT_STDIO)
}

impl ProcessBuilder {
    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero status and `ALLOW_FAILURE` is not set.
    pub fn run<R>(&self, runner: &R) -> GitmeupResult<ProcessOutput>
    where
        R: ProcessRunner + ?Sized,
    {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let output = runner.spawn_and_wait(self)?;

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
                stderr: output.stderr().to_string(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }
}
