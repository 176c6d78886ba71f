// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Printing and applying the proposed commands.
//!
//! ```text
//! CommandList
//!    | empty -> "no git commands produced" (NoCommands)
//!    v
//! print plan
//!    | !apply -> "Dry run. ..." (DryRun)
//!    v
//! shlex-split every command (UnparseableCommand before anything runs)
//!    v
//! for cmd: "> cmd", run with inherited stdio
//!    | exit != 0 -> ProcessError::Aborted { code }
//!    v
//! "Commands executed." + final `git status -sb` (Applied)
//! ```

use std::io::Write;

use tracing::{info, warn};

use crate::core::process::builder::ProcessFlags;
use crate::core::process::runner::ProcessRunner;
use crate::error::{FormatError, GitmeupResult, ProcessError};
use crate::git::GitCli;
use crate::reply::CommandList;

/// Suggested follow-up shown after a successful apply.
pub const REVIEW_HINT: &str = "  git log --oneline --graph --decorate -n 10";

/// How the executor finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The model produced no usable commands.
    NoCommands,
    /// Commands were printed only.
    DryRun,
    /// Every command ran and succeeded.
    Applied,
}

/// Print the plan and, when `apply` is set, run it in order.
///
/// Stops at the first failing command; commands already run are not undone.
///
/// # Errors
///
/// Returns:
/// - `FormatError::UnparseableCommand` if any command has unbalanced quotes.
///   Nothing has been run at that point.
/// - `ProcessError::Aborted` with the child's exit code for the first
///   command that fails.
/// - A spawn error if git cannot be started.
/// - `io::Error` if writing to `out` fails.
pub fn run_commands<R, W>(
    commands: &CommandList,
    apply: bool,
    git: &GitCli<'_, R>,
    out: &mut W,
) -> GitmeupResult<ExecOutcome>
where
    R: ProcessRunner + ?Sized,
    W: Write,
{
    if commands.is_empty() {
        writeln!(out, "gitmeup: no git commands produced by the model.")?;
        return Ok(ExecOutcome::NoCommands);
    }

    writeln!(out, "gitmeup proposed commands:\n")?;
    for command in commands {
        writeln!(out, "{command}")?;
    }
    writeln!(out)?;

    if !apply {
        writeln!(out, "Dry run. Re-run with --apply to execute these commands.")?;
        return Ok(ExecOutcome::DryRun);
    }

    let argvs = commands
        .iter()
        .map(|command| split_command(command))
        .collect::<GitmeupResult<Vec<_>>>()?;

    writeln!(out, "Executing commands...")?;
    for (command, argv) in commands.iter().zip(argvs) {
        writeln!(out, "> {command}")?;
        out.flush()?;

        let output = git
            .command(argv.into_iter().skip(1))
            .flag(ProcessFlags::INHERIT_STDIO | ProcessFlags::ALLOW_FAILURE)
            .run(git.runner())?;
        if !output.success() {
            warn!(command = %command, code = output.exit_code(), "command failed");
            return Err(ProcessError::Aborted {
                command: command.clone(),
                code: output.exit_code(),
            }
            .into());
        }
    }
    info!(count = commands.len(), "all commands applied");

    writeln!(out, "\nCommands executed.\n")?;
    write_final_status(git, out)?;
    Ok(ExecOutcome::Applied)
}

/// Split one command line with POSIX shell-word rules.
///
/// `#` is never a comment: a word starting with it stays a literal argument.
///
/// # Errors
///
/// Returns `FormatError::UnparseableCommand` for unbalanced quotes or an
/// empty result.
pub fn split_command(command: &str) -> GitmeupResult<Vec<String>> {
    match shlex::split(&escape_comment_marks(command)) {
        Some(argv) if !argv.is_empty() => Ok(argv),
        _ => Err(FormatError::UnparseableCommand {
            command: command.to_string(),
        }
        .into()),
    }
}

/// Backslash-escape every unquoted `#` that begins a word.
fn escape_comment_marks(command: &str) -> String {
    let mut escaped = String::with_capacity(command.len());
    let mut quote: Option<char> = None;
    let mut word_start = true;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some('\'') => {
                if c == '\'' {
                    quote = None;
                }
                escaped.push(c);
            }
            Some(_) => {
                escaped.push(c);
                if c == '\\' {
                    escaped.extend(chars.next());
                } else if c == '"' {
                    quote = None;
                }
            }
            None => {
                if c == '#' && word_start {
                    escaped.push('\\');
                }
                escaped.push(c);
                if c == '\\' {
                    escaped.extend(chars.next());
                } else if c == '\'' || c == '"' {
                    quote = Some(c);
                }
                word_start = c.is_whitespace();
                continue;
            }
        }
        word_start = false;
    }
    escaped
}

/// Best-effort `git status -sb` followed by the review hint.
fn write_final_status<R, W>(git: &GitCli<'_, R>, out: &mut W) -> GitmeupResult<()>
where
    R: ProcessRunner + ?Sized,
    W: Write,
{
    writeln!(out, "Final git status:\n")?;
    match git.status_short_branch() {
        Ok(status) => {
            if !status.success() {
                warn!(
                    code = status.exit_code(),
                    stderr = %status.stderr().trim(),
                    "final status failed"
                );
            }
            writeln!(out, "{}\n", status.stdout().trim_end())?;
        }
        Err(e) => warn!(error = %e, "final status unavailable"),
    }
    writeln!(out, "Review your history with:")?;
    writeln!(out, "{REVIEW_HINT}")?;
    Ok(())
}
