// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process management.
//!
//! ```text
//!       core
//!        |
//!        v
//!     process
//!        |
//!  ProcessBuilder --> ProcessRunner --> ProcessOutput
//!                     SystemRunner
//! ```

pub mod process;
