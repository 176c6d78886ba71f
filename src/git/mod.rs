// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!   context.rs (ensure_repo, is_clean,
//!               collect_context, status_short_branch)
//!            |
//!            v
//!   cmd.rs  GitCli { runner, program, cwd }
//!     GCM_INTERACTIVE=never
//!     GIT_TERMINAL_PROMPT=0
//!            |
//!            v
//!   core::process::ProcessRunner
//!     SystemRunner (git CLI)
//! ```
//!
//! Everything goes through the git CLI so the same binary that later applies
//! the commands also inspects the tree.

pub mod cmd;
pub mod context;

pub use cmd::GitCli;
pub use context::{ChangeContext, IMAGE_EXCLUDES};
