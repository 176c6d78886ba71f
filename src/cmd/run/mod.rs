// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The gitmeup pipeline.
//!
//! ```text
//! api key ──> ensure_repo ──> is_clean ──yes──> CleanTree
//!                                │no
//!                                v
//!                        collect_context
//!                                v
//!                      build_user_prompt
//!                                v
//!                    ModelClient::complete
//!                                v
//!            extract_shell_block + CommandList::parse
//!                                v
//!                 run_commands ──> NoCommands | DryRun | Applied
//! ```

use std::io::Write;

use tracing::{debug, info};

use crate::config::Settings;
use crate::core::process::runner::{ProcessRunner, SystemRunner};
use crate::error::{GitmeupError, GitmeupResult, Result};
use crate::exec::{ExecOutcome, run_commands};
use crate::git::GitCli;
use crate::llm::{ModelClient, OpenAiClient};
use crate::prompt::{SYSTEM_PROMPT, build_user_prompt};
use crate::reply::commands_from_reply;

/// Terminal non-error state of a run. All of them exit with status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing to commit; the model was not called.
    CleanTree,
    /// The reply had a shell block but no git commands in it.
    NoCommands,
    /// Commands were printed, not run.
    DryRun,
    /// Every command ran.
    Applied,
}

impl From<ExecOutcome> for RunOutcome {
    fn from(outcome: ExecOutcome) -> Self {
        match outcome {
            ExecOutcome::NoCommands => Self::NoCommands,
            ExecOutcome::DryRun => Self::DryRun,
            ExecOutcome::Applied => Self::Applied,
        }
    }
}

/// Run gitmeup against the current directory with the real git and model.
///
/// # Errors
///
/// Returns a `ConfigError::MissingKey` before touching git when no API key
/// is configured, `ProcessError::ExecutableNotFound` when the git program
/// cannot be found, otherwise any error from [`run_pipeline`].
pub async fn run_gitmeup_command(settings: &Settings, apply: bool) -> Result<RunOutcome> {
    let api_key = settings.api_key().map_err(GitmeupError::from)?;
    let client = OpenAiClient::new(&settings.model, api_key)?;

    let runner = SystemRunner;
    let git = GitCli::new(&runner, &settings.git.program);
    let git_path = git.locate()?;
    debug!(git = %git_path.display(), "using git");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_pipeline(settings, apply, &git, &client, &mut out).await?;
    Ok(outcome)
}

/// Inspect, ask the model, then print or apply its commands.
///
/// # Errors
///
/// Returns:
/// - `GitError::NotARepository` outside a work tree.
/// - `ProcessError::NonZeroExit` if an inspection command fails.
/// - A `NetworkError` if the model request fails.
/// - `FormatError::NoCommandBlock` if the reply has no shell block.
/// - Any error from [`run_commands`].
pub async fn run_pipeline<R, M, W>(
    settings: &Settings,
    apply: bool,
    git: &GitCli<'_, R>,
    model: &M,
    out: &mut W,
) -> GitmeupResult<RunOutcome>
where
    R: ProcessRunner + ?Sized,
    M: ModelClient,
    W: Write,
{
    git.ensure_repo()?;

    if git.is_clean()? {
        writeln!(out, "Working tree clean. Nothing to commit.")?;
        return Ok(RunOutcome::CleanTree);
    }

    let context = git.collect_context(&settings.git.extra_excludes)?;
    let prompt = build_user_prompt(&context);
    debug!(prompt_bytes = prompt.len(), "prompt built");

    info!(model = %settings.model.name, "asking the model for commands");
    let raw = model.complete(SYSTEM_PROMPT, &prompt).await?;

    let commands = commands_from_reply(&raw, &settings.invocation_prefix())?;
    info!(count = commands.len(), "parsed commands");

    let outcome = run_commands(&commands, apply, git, out)?;
    Ok(outcome.into())
}
