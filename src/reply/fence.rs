// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fenced block extraction.
//!
//! ```text
//!            ``` + (""|bash|sh|shell)
//!  Outside ----------------------------> InsideAccepted --``` --> stop
//!     |                                   (collect lines)
//!     |  ``` + other tag
//!     +------------------------------> InsideRejected --``` --> stop
//!                                         (skip lines)
//! ```

const FENCE: &str = "```";

/// Languages whose blocks are taken as commands. Matched case-insensitively.
const SHELL_TAGS: [&str; 3] = ["bash", "sh", "shell"];

/// Where the scanner is relative to the first fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceState {
    /// Before any fence.
    Outside,
    /// Inside a block tagged as shell, or untagged.
    InsideAccepted,
    /// Inside a block in some other language.
    InsideRejected,
}

impl FenceState {
    /// State entered by an opening fence line.
    ///
    /// The tag is whatever follows the backticks; an untagged fence counts
    /// as shell.
    #[must_use]
    pub fn open(fence_line: &str) -> Self {
        let tag = fence_line
            .trim()
            .strip_prefix(FENCE)
            .map_or("", str::trim);
        if tag.is_empty() || SHELL_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
            Self::InsideAccepted
        } else {
            Self::InsideRejected
        }
    }
}

/// Content of the first fenced block, if it is a shell block.
///
/// Scanning stops at the first closing fence, so a rejected first block
/// hides any later block. Returns the collected lines joined with `\n` and
/// trimmed; empty when nothing was accepted.
#[must_use]
pub fn extract_shell_block(text: &str) -> String {
    let mut state = FenceState::Outside;
    let mut lines = Vec::new();

    for line in text.lines() {
        let is_fence = line.starts_with(FENCE);
        match (state, is_fence) {
            (FenceState::Outside, true) => state = FenceState::open(line),
            (FenceState::InsideAccepted | FenceState::InsideRejected, true) => break,
            (FenceState::InsideAccepted, false) => lines.push(line),
            (FenceState::Outside | FenceState::InsideRejected, false) => {}
        }
    }

    lines.join("\n").trim().to_string()
}
