// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set() / .set_assignment("k=v")
//!        |
//!        v
//!    build() --> ProjectConfig (paths resolved, validated)
//! ```

use std::path::PathBuf;

use super::ProjectConfig;
use crate::error::{ConfigError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies a `section.key=value` assignment from the command line.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the assignment has no `=` or an
    /// empty key.
    pub fn set_assignment(self, assignment: &str) -> Result<Self> {
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(ConfigError::invalid(
                "cli",
                assignment,
                "expected an assignment of the form section.key=value",
            )
            .into());
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::invalid("cli", assignment, "empty key").into());
        }
        self.set(key, value.trim())
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing (`ConfigError::NotFound`).
    /// - Configuration files have invalid TOML syntax (`ConfigError::ParseError`).
    /// - The merged configuration cannot be deserialized into `ProjectConfig`
    ///   (`ConfigError::ParseError`).
    /// - A required field is missing or a mod id is invalid.
    pub fn build(self) -> Result<ProjectConfig> {
        let Self {
            builder,
            env_prefix,
            files,
        } = self;
        let builder = match &env_prefix {
            Some(prefix) => builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            ),
            None => builder,
        };
        let cfg = builder.build().map_err(|e| classify_source_error(e, &files))?;
        let mut config: ProjectConfig =
            cfg.try_deserialize().map_err(|e| ConfigError::ParseError {
                path: MERGED.to_string(),
                message: e.to_string(),
            })?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

/// Names the settings merged from every source in parse errors.
const MERGED: &str = "<merged>";

/// Turns errors from reading the sources into [`ConfigError`]s.
///
/// A missing required file becomes `NotFound` naming it, a file with bad
/// TOML becomes `ParseError`. Anything else is passed through.
fn classify_source_error(
    err: config::ConfigError,
    files: &[(String, PathBuf)],
) -> anyhow::Error {
    match err {
        config::ConfigError::FileParse { uri, cause } => ConfigError::ParseError {
            path: uri.unwrap_or_else(|| "<string>".to_string()),
            message: cause.to_string(),
        }
        .into(),
        config::ConfigError::Foreign(cause) if is_not_found(cause.as_ref()) => {
            let missing = files
                .iter()
                .find(|(source, path)| source == "file" && !path.is_file())
                .map_or_else(|| cause.to_string(), |(_, path)| path.display().to_string());
            ConfigError::NotFound(missing).into()
        }
        other => anyhow::Error::new(other),
    }
}

fn is_not_found(cause: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    cause
        .downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
