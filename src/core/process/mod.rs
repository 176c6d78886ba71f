// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous process spawning.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .flag()
//!   .run(&runner)
//!       --> ProcessRunner::spawn_and_wait
//!           SystemRunner: std::process::Command
//!       --> validate exit code (skip if ALLOW_FAILURE)
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
pub mod runner;
