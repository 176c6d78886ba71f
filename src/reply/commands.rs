// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command list parsing.

/// Ordered git command lines taken from a shell block.
///
/// Every entry starts with the invocation prefix it was parsed with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandList {
    commands: Vec<String>,
}

impl CommandList {
    /// Keep trimmed lines that start with `prefix`, in order.
    ///
    /// Blank lines, `#` comments and anything else are dropped. Quotes are
    /// kept as written.
    #[must_use]
    pub fn parse(block: &str, prefix: &str) -> Self {
        let commands = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter(|line| line.starts_with(prefix))
            .map(str::to_string)
            .collect();
        Self { commands }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.commands.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.commands
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
