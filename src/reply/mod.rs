// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turning the model reply into commands.
//!
//! ```text
//! raw reply
//!    |
//!    v
//! fence::extract_shell_block     first ```bash / ```sh / ```shell / ``` block
//!    |   (empty => FormatError::NoCommandBlock)
//!    v
//! commands::CommandList::parse   keep lines starting with "git "
//! ```

pub mod commands;
pub mod fence;

pub use commands::CommandList;
pub use fence::{FenceState, extract_shell_block};

use crate::error::{FormatError, GitmeupResult};

/// Extract the shell block from `raw` and parse it into commands.
///
/// # Errors
///
/// Returns `FormatError::NoCommandBlock` carrying `raw` when no accepted block
/// with content exists.
pub fn commands_from_reply(raw: &str, prefix: &str) -> GitmeupResult<CommandList> {
    let block = extract_shell_block(raw);
    if block.is_empty() {
        return Err(FormatError::NoCommandBlock {
            raw: raw.to_string(),
        }
        .into());
    }
    Ok(CommandList::parse(&block, prefix))
}
