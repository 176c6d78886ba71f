// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            GitmeupError (~16 bytes)
//!                     |
//!     +------+------+-+----+-------+------+
//!     |      |      |      |       |      |
//!     v      v      v      v       v      v
//!    Git    Net    Cfg   Format   Proc    Io
//!    Box    Box    Box    Box     Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Git     NotARepository
//!   Network HttpError, Reqwest, InvalidResponse
//!   Config  ParseError, MissingKey, InvalidValue
//!   Format  NoCommandBlock, UnparseableCommand
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit, Aborted
//!
//! exit_code(): NonZeroExit/Aborted => child's code, everything else => 1
//! message():   user-facing text without the category prefix
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GitmeupError`].
pub type GitmeupResult<T> = std::result::Result<T, GitmeupError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum GitmeupError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Request to the model service failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// The model reply did not have the expected shape.
    #[error("format error: {0}")]
    Format(#[from] Box<FormatError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl GitmeupError {
    /// Process exit status for this error.
    ///
    /// A failing child process hands its own exit code through, everything
    /// else exits with 1. Codes outside `1..=255` collapse to 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Process(err) => match err.as_ref() {
                ProcessError::NonZeroExit { code, .. } | ProcessError::Aborted { code, .. } => {
                    u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1)
                }
                _ => 1,
            },
            _ => 1,
        }
    }

    /// Text shown to the user on stderr.
    ///
    /// Sub-errors print without the category prefix; a missing credential
    /// prints only its hint.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Git(err) => err.to_string(),
            Self::Network(err) => err.to_string(),
            Self::Config(err) => match err.as_ref() {
                ConfigError::MissingKey { hint, .. } => hint.clone(),
                other => other.to_string(),
            },
            Self::Format(err) => err.to_string(),
            Self::Process(err) => err.to_string(),
            Self::Io(_) => self.to_string(),
        }
    }
}

/// Exit status for an `anyhow` error, looking through to a [`GitmeupError`].
#[must_use]
pub fn exit_code_of(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<GitmeupError>()
        .map_or(1, GitmeupError::exit_code)
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GitmeupError {
                fn from(err: $error) -> Self {
                    GitmeupError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    NetworkError => Network,
    ConfigError => Config,
    FormatError => Format,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The working directory is not inside a git work tree.
    #[error("gitmeup must be run inside a git repository.")]
    NotARepository,
}

// --- Network Errors ---

/// Model service request errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url} - {body}")]
    HttpError {
        status: u16,
        url: String,
        body: String,
    },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Response body was not a usable model reply.
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse or merge configuration sources.
    #[error("failed to load configuration: {message}")]
    ParseError { message: String },

    /// Missing required configuration value.
    #[error("missing required config key '{key}' in section '[{section}]': {hint}")]
    MissingKey {
        section: String,
        key: String,
        hint: String,
    },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Format Errors ---

/// Errors in the shape of the model reply.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No fenced shell block could be extracted.
    #[error("gitmeup: failed to extract bash command block from model output.")]
    NoCommandBlock { raw: String },

    /// A command line could not be split into shell words.
    #[error("cannot split command into shell words: {command}")]
    UnparseableCommand { command: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("Error running {command}:\n{stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    /// A generated command failed while applying; later commands were skipped.
    #[error("Command failed with exit code {code}. Aborting.")]
    Aborted { command: String, code: i32 },
}

#[cfg(test)]
mod tests;
