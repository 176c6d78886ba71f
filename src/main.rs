// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> run_gitmeup_command
//!                                              |
//!                         Ok(_)  -> exit 0     |
//!                         Err(e) -> message, exit_code_of(e)
//! ```

use std::process::ExitCode;

use gitmeup::cli;
use gitmeup::cmd::run::run_gitmeup_command;
use gitmeup::error::{FormatError, GitmeupError, exit_code_of};
use gitmeup::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.settings() {
        Ok(settings) => {
            tracing::debug!(?settings, "settings loaded");
            run_gitmeup_command(&settings, cli.apply).await
        }
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(outcome) => {
            tracing::debug!(?outcome, "finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::from(exit_code_of(&e))
        }
    }
}

/// Print an error the way the user should see it.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<GitmeupError>() {
        Some(GitmeupError::Format(format)) => {
            eprintln!("{format}");
            if let FormatError::NoCommandBlock { raw } = format.as_ref() {
                println!("Raw output:\n{raw}");
            }
        }
        Some(known) => eprintln!("{}", known.message()),
        None => eprintln!("Error: {err:#}"),
    }
}
