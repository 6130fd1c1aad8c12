// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CI output file.
//!
//! Appends `key=value` lines to a file owned by the CI runner
//! (`GITHUB_OUTPUT` on GitHub Actions). The path is always passed in; this
//! module never reads the environment.

use std::path::Path;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};
use crate::utility::fs::write::append_text;

/// Ordered key/value pairs written as one `key=value` line each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiOutputRecord {
    entries: Vec<(String, String)>,
}

impl CiOutputRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, keeping insertion order.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// The fixed record for a build: `modid`, `version` (the full version)
    /// and `minecraft_version`.
    #[must_use]
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self::new()
            .with("modid", config.project.id.as_str())
            .with("version", config.full_version())
            .with("minecraft_version", config.platform.minecraft_version.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rejects entries that would corrupt the line format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty key, a key containing
    /// `=` or a line break, or a value containing a line break.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let breaks = |s: &str| s.contains(['\n', '\r']);
        for (key, value) in &self.entries {
            if key.is_empty() || key.contains('=') || breaks(key) {
                return Err(ConfigError::invalid(
                    "ci",
                    key.as_str(),
                    "keys must be non-empty and contain neither '=' nor line breaks",
                ));
            }
            if breaks(value) {
                return Err(ConfigError::invalid(
                    "ci",
                    key.as_str(),
                    "values must not contain line breaks",
                ));
            }
        }
        Ok(())
    }

    /// The text appended to the output file.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect()
    }

    /// Validates and appends all lines to `path` in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the file cannot be written.
    /// Nothing is written when validation fails.
    pub async fn append_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        append_text(path, &self.render()).await
    }
}
