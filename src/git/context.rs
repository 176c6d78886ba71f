// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working-tree inspection.
//!
//! ```text
//! ensure_repo      rev-parse --is-inside-work-tree == "true"
//! is_clean         status --porcelain is blank
//! collect_context  diff --stat
//!                  status --short
//!                  diff -- . :(exclude)<images> [:(exclude)<extra>]
//! ```

use tracing::{debug, info};

use super::cmd::GitCli;
use crate::core::process::builder::{ProcessFlags, ProcessOutput};
use crate::core::process::runner::ProcessRunner;
use crate::error::{GitError, GitmeupResult};

/// Binary image formats kept out of the diff body.
///
/// They still show up in `diff --stat` and `status --short`.
pub const IMAGE_EXCLUDES: [&str; 6] = ["*.png", "*.jpg", "*.jpeg", "*.gif", "*.svg", "*.webp"];

/// Snapshot of pending changes handed to the prompt builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeContext {
    /// `git diff --stat`
    pub stat: String,
    /// `git status --short`
    pub status: String,
    /// `git diff` with images excluded
    pub diff: String,
}

/// Arguments for the detailed diff.
///
/// The image set always comes first; `extra` patterns are appended after it.
#[must_use]
pub fn diff_args(extra: &[String]) -> Vec<String> {
    let mut args = vec!["diff".to_string(), "--".to_string(), ".".to_string()];
    args.extend(
        IMAGE_EXCLUDES
            .iter()
            .copied()
            .chain(extra.iter().map(String::as_str))
            .map(|pattern| format!(":(exclude){pattern}")),
    );
    args
}

impl<R: ProcessRunner + ?Sized> GitCli<'_, R> {
    /// Fail unless the current directory is inside a git work tree.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` when git fails or answers anything
    /// but `true`. Spawn failures (git missing) are passed through.
    pub fn ensure_repo(&self) -> GitmeupResult<()> {
        let output = self.run_with(
            &["rev-parse", "--is-inside-work-tree"],
            ProcessFlags::ALLOW_FAILURE,
        )?;
        if output.success() && output.stdout().trim() == "true" {
            Ok(())
        } else {
            debug!(
                exit_code = output.exit_code(),
                stderr = %output.stderr().trim(),
                "not inside a work tree"
            );
            Err(GitError::NotARepository.into())
        }
    }

    /// True when `status --porcelain` reports nothing.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::NonZeroExit` if git fails.
    pub fn is_clean(&self) -> GitmeupResult<bool> {
        let porcelain = self.output(&["status", "--porcelain"])?;
        Ok(porcelain.trim().is_empty())
    }

    /// Gather stat, short status and the filtered diff, in that order.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::NonZeroExit` for the first git call that fails.
    pub fn collect_context(&self, extra_excludes: &[String]) -> GitmeupResult<ChangeContext> {
        let stat = self.output(&["diff", "--stat"])?;
        let status = self.output(&["status", "--short"])?;

        let args = diff_args(extra_excludes);
        let diff = self.output(&args.iter().map(String::as_str).collect::<Vec<_>>())?;

        info!(
            stat_bytes = stat.len(),
            status_bytes = status.len(),
            diff_bytes = diff.len(),
            "collected change context"
        );
        Ok(ChangeContext { stat, status, diff })
    }

    /// `git status -sb`, run with failure allowed.
    ///
    /// # Errors
    ///
    /// Only spawn failures are reported; a non-zero exit comes back as output.
    pub fn status_short_branch(&self) -> GitmeupResult<ProcessOutput> {
        self.run_with(&["status", "-sb"], ProcessFlags::ALLOW_FAILURE)
    }
}
