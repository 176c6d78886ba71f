// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitmeup using clap derive.
//!
//! # Usage
//!
//! ```text
//! gitmeup [--model NAME] [--apply] [--api-key KEY] [--base-url URL]
//!         [-c FILE]... [-l LEVEL] [--log-file FILE] [--file-log-level LEVEL]
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{LOCAL_CONFIG_FILE, Settings};
use crate::error::GitmeupResult;
use clap::Parser;

/// Generate Conventional Commits from current git changes using an LLM.
#[derive(Debug, Parser)]
#[command(
    name = "gitmeup",
    author,
    version,
    about = "Generate Conventional Commits from current git changes using an LLM.",
    long_about = "gitmeup Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the pending changes of the current repository, asks the\n\
                  model for atomic Conventional Commits and prints the matching\n\
                  git add/rm/mv + git commit commands. Nothing is run unless\n\
                  --apply is given.",
    after_help = "CONFIG FILES:\n\n\
                  gitmeup reads `gitmeup.toml` from the current directory when it\n\
                  exists, then every file given with --config, in order. Command\n\
                  line options and their environment variables override both."
)]
pub struct Cli {
    /// Options for config files and logging
    #[command(flatten)]
    pub global: GlobalOptions,

    /// OpenAI model name [default: gpt-4.1-mini].
    #[arg(long, value_name = "NAME", env = "GITMEUP_MODEL")]
    pub model: Option<String>,

    /// Execute generated git commands. Without this flag, just print them.
    #[arg(long)]
    pub apply: bool,

    /// OpenAI API key.
    #[arg(long = "api-key", value_name = "KEY", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Root of an OpenAI-compatible API [default: https://api.openai.com/v1].
    #[arg(long = "base-url", value_name = "URL", env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Config loader with every source these arguments name.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if an override cannot be applied.
    pub fn config_loader(&self) -> GitmeupResult<ConfigLoader> {
        let mut loader = ConfigLoader::new().add_toml_file_optional(LOCAL_CONFIG_FILE);
        for path in &self.global.configs {
            loader = loader.add_toml_file(path);
        }
        loader
            .set_opt("model.name", self.model.clone())?
            .set_opt("model.api_key", self.api_key.clone())?
            .set_opt("model.base_url", self.base_url.clone())
    }

    /// Load and validate settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a config file is missing or invalid.
    pub fn settings(&self) -> GitmeupResult<Settings> {
        let loader = self.config_loader()?;
        for line in loader.format_loaded_files() {
            tracing::debug!("config source {line}");
        }
        loader.build()
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
#[must_use]
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
