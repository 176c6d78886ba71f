// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args + Settings --> cmd::run::run_gitmeup_command
//! ```

pub mod run;
