// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command execution.
//!
//! ```text
//! GitCli::command(args) --> ProcessBuilder --> runner --> git
//! ```

use std::path::{Path, PathBuf};

use crate::core::process::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::core::process::runner::ProcessRunner;
use crate::error::{GitmeupResult, ProcessError};

/// Git CLI bound to a process runner.
///
/// Every invocation ALWAYS sets `GCM_INTERACTIVE=never` and
/// `GIT_TERMINAL_PROMPT=0` so a credential helper can never block the run.
pub struct GitCli<'a, R: ProcessRunner + ?Sized> {
    runner: &'a R,
    program: String,
    cwd: Option<PathBuf>,
}

impl<'a, R: ProcessRunner + ?Sized> GitCli<'a, R> {
    /// Creates a git wrapper running `program` through `runner`.
    pub fn new(runner: &'a R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
            cwd: None,
        }
    }

    /// Runs every command in `dir` instead of the current directory.
    #[must_use]
    pub fn with_cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub const fn runner(&self) -> &'a R {
        self.runner
    }

    /// Check that the git program can be found before running anything.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if the program is neither a
    /// path to an existing file nor found in PATH.
    pub fn locate(&self) -> GitmeupResult<PathBuf> {
        let as_path = Path::new(&self.program);
        if as_path.components().count() > 1 && as_path.is_file() {
            return Ok(as_path.to_path_buf());
        }
        ProcessBuilder::find(&self.program).ok_or_else(|| {
            ProcessError::ExecutableNotFound {
                name: self.program.clone(),
            }
            .into()
        })
    }

    /// Build a git invocation with the standard environment.
    pub fn command<I, S>(&self, args: I) -> ProcessBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = ProcessBuilder::new(&self.program)
            .args(args)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .name("git");
        if let Some(cwd) = &self.cwd {
            builder = builder.cwd(cwd);
        }
        builder
    }

    /// Run git and return its stdout.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::NonZeroExit` carrying git's exit code and stderr
    /// when git fails, or a spawn error when git cannot be started.
    pub fn output(&self, args: &[&str]) -> GitmeupResult<String> {
        let output = self.command(args.iter().copied()).run(self.runner)?;
        Ok(output.stdout().to_string())
    }

    /// Run git with extra flags and hand back the full process output.
    ///
    /// # Errors
    ///
    /// Same as [`GitCli::output`], minus the exit code check when
    /// `ALLOW_FAILURE` is among `flags`.
    pub fn run_with(&self, args: &[&str], flags: ProcessFlags) -> GitmeupResult<ProcessOutput> {
        self.command(args.iter().copied()).flag(flags).run(self.runner)
    }
}
