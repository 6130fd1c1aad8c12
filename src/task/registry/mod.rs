// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task registry for resolving task names and aliases.
//!
//! ```text
//! input ["manifests", "mods-*"]
//!   resolve_aliases: "manifests" --> [jar-manifest, sources-manifest, javadoc-manifest]
//!   match_pattern:   "mods-*"    --> [mods-toml]
//!   dedupe + preserve order
//! ```

use std::collections::BTreeSet;

use anyhow::Context;
use wax::{Glob, Program};

use crate::config::types::Aliases;
use crate::error::{Result, TaskError};

/// Nested alias expansion stops at this depth.
const MAX_ALIAS_DEPTH: usize = 16;

/// Registry for looking up tasks by name or pattern.
pub struct TaskRegistry {
    task_names: BTreeSet<String>,
    aliases: Aliases,
}

impl TaskRegistry {
    #[must_use]
    pub const fn new(aliases: Aliases) -> Self {
        Self {
            task_names: BTreeSet::new(),
            aliases,
        }
    }

    pub fn register(&mut self, name: impl Into<String>) {
        self.task_names.insert(name.into());
    }

    pub fn register_all(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        for name in names {
            self.task_names.insert(name.into());
        }
    }

    #[must_use]
    pub const fn all_tasks(&self) -> &BTreeSet<String> {
        &self.task_names
    }

    #[must_use]
    pub const fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Expands aliases, recursively. Non-alias patterns are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if aliases nest deeper than 16 levels, which only
    /// happens when an alias refers back to itself.
    pub fn resolve_aliases(&self, patterns: &[String]) -> Result<Vec<String>> {
        self.expand(patterns, 0)
    }

    fn expand(&self, patterns: &[String], depth: usize) -> Result<Vec<String>> {
        if depth > MAX_ALIAS_DEPTH {
            anyhow::bail!("alias expansion too deep, check [aliases] for cycles");
        }

        let mut result = Vec::new();
        for pattern in patterns {
            if let Some(targets) = self.aliases.get(pattern) {
                result.extend(self.expand(targets, depth + 1)?);
            } else {
                result.push(pattern.clone());
            }
        }
        Ok(result)
    }

    /// Matches a glob pattern against registered task names.
    ///
    /// `"*"` matches all tasks, `"*-manifest"` the three archive manifests.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn match_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        if self.task_names.contains(pattern) {
            return Ok(vec![pattern.to_string()]);
        }

        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        Ok(self
            .task_names
            .iter()
            .filter(|name| glob.is_match(name.as_str()))
            .cloned()
            .collect())
    }

    /// Resolves task specifications to concrete task names.
    ///
    /// Expands aliases, matches globs, and drops duplicates while keeping
    /// first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::NotFound` for a plain name that is not registered,
    /// or an error for an invalid glob. A glob matching nothing only warns.
    pub fn resolve(&self, specs: &[String]) -> Result<Vec<String>> {
        let expanded = self.resolve_aliases(specs)?;

        let mut result = Vec::new();
        let mut seen = BTreeSet::new();

        for pattern in &expanded {
            let matches = self.match_pattern(pattern)?;

            if matches.is_empty() {
                if is_plain_name(pattern) {
                    return Err(TaskError::NotFound(pattern.clone()).into());
                }
                tracing::warn!(pattern = %pattern, "Pattern matched no tasks");
            }

            for name in matches {
                if seen.insert(name.clone()) {
                    result.push(name);
                }
            }
        }

        Ok(result)
    }
}

fn is_plain_name(pattern: &str) -> bool {
    !pattern.contains(['*', '?', '[', ']', '{', '}', '<', '>'])
}
