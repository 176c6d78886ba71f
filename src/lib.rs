// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd::run (pipeline)
//!                |                     |
//!                v                     |
//!              config                  |
//!        TOML, layered settings        |
//!                                      |
//!      +-------------+-----------+-----+------+-----------+
//!      v             v           v            v           v
//!     git          prompt       llm         reply        exec
//!  inspection    payload    Responses   fence state   print/apply
//!  via CLI                   (reqwest)  + git lines   fail-fast
//!      |                                                  |
//!      +-------------------------+------------------------+
//!                                v
//!   +-----------------------------------------+
//!   |  core   process runner (trait + std)    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod exec;
pub mod git;
pub mod llm;
pub mod logging;
pub mod prompt;
pub mod reply;

#[cfg(test)]
pub(crate) mod test_utils;
