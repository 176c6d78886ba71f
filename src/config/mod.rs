// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitmeup.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitmeup.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. CLI overrides (--model/GITMEUP_MODEL, --api-key/OPENAI_API_KEY,
//!    --base-url/OPENAI_BASE_URL)
//! ```
//!
//! # File Layout
//!
//! ```toml
//! [model]
//! name = "gpt-4.1-mini"
//! base_url = "https://api.openai.com/v1"
//!
//! [git]
//! program = "git"
//! extra_excludes = ["*.lock"]
//! ```
//!
//! The resulting [`Settings`] value is built once in `main` and handed to
//! every component.

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ConfigError, GitmeupResult};

use loader::ConfigLoader;

/// Model used when neither config nor CLI names one.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Root of the OpenAI-compatible API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Version-control executable invoked for inspection and mutation.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Local config file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "gitmeup.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Model service options.
    pub model: ModelConfig,
    /// Git invocation options.
    pub git: GitConfig,
}

/// Language-model service configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Model identifier sent with the request.
    pub name: String,
    /// API root; `/responses` is appended.
    pub base_url: String,
    /// API credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[hidden]"))
            .finish()
    }
}

/// Git configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Executable name or path.
    pub program: String,
    /// Pathspec globs excluded from the diff body in addition to the image set.
    pub extra_excludes: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_GIT_PROGRAM.to_string(),
            extra_excludes: Vec::new(),
        }
    }
}

impl Settings {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitmeup::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("gitmeup.toml")
    ///     .set("model.name", "gpt-4.1")?
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, does not match the
    /// `Settings` structure, or fails validation.
    pub fn parse(content: &str) -> GitmeupResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty model name, an empty
    /// base URL, or a git program that is empty or contains whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.name.trim().is_empty() {
            return Err(invalid("model", "name", "model name must not be empty"));
        }
        if self.model.base_url.trim().is_empty() {
            return Err(invalid("model", "base_url", "base URL must not be empty"));
        }
        if self.git.program.is_empty() {
            return Err(invalid("git", "program", "program must not be empty"));
        }
        if self.git.program.chars().any(char::is_whitespace) {
            return Err(invalid(
                "git",
                "program",
                &format!("program must not contain whitespace, got '{}'", self.git.program),
            ));
        }
        Ok(())
    }

    /// The API credential.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when no non-blank key was supplied.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.model
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingKey {
                section: "model".to_string(),
                key: "api_key".to_string(),
                hint: "Missing OpenAI API key. Set OPENAI_API_KEY or use --api-key.".to_string(),
            })
    }

    /// Leading text that marks a reply line as a git invocation.
    #[must_use]
    pub fn invocation_prefix(&self) -> String {
        format!("{} ", self.git.program)
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
