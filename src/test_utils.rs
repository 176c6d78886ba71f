// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities.
//!
//! Provides a scripted [`ProcessRunner`] so git and executor logic can be
//! tested without spawning processes.

use std::cell::RefCell;

use crate::core::process::builder::{ProcessBuilder, ProcessOutput};
use crate::core::process::runner::ProcessRunner;
use crate::error::GitmeupResult;

/// Successful output with the given stdout.
pub(crate) fn ok(stdout: &str) -> ProcessOutput {
    ProcessOutput::new(0, stdout.to_string(), String::new())
}

/// Failed output with the given exit code and stderr.
pub(crate) fn fail(code: i32, stderr: &str) -> ProcessOutput {
    ProcessOutput::new(code, String::new(), stderr.to_string())
}

/// Runner that answers from a table of argument lists and records every call.
///
/// Calls with no matching rule succeed with empty output.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    rules: Vec<(Vec<String>, ProcessOutput)>,
    calls: RefCell<Vec<ProcessBuilder>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answers calls whose arguments equal `args` with `output`.
    pub(crate) fn on(mut self, args: &[&str], output: ProcessOutput) -> Self {
        self.rules
            .push((args.iter().map(ToString::to_string).collect(), output));
        self
    }

    /// Arguments of every recorded call, in order.
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .map(|b| b.args_slice().to_vec())
            .collect()
    }

    /// Every recorded builder, in order.
    pub(crate) fn builders(&self) -> Vec<ProcessBuilder> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn spawn_and_wait(&self, builder: &ProcessBuilder) -> GitmeupResult<ProcessOutput> {
        self.calls.borrow_mut().push(builder.clone());
        let output = self
            .rules
            .iter()
            .find(|(args, _)| args.as_slice() == builder.args_slice())
            .map_or_else(|| ok(""), |(_, output)| output.clone());
        Ok(output)
    }
}
