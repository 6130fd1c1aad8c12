// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ModbuildError (~24 bytes)
//!                     |
//!   +--------+--------+--------+--------+
//!   |        |        |        |        |
//!   v        v        v        v        v
//! Config   Task    Manifest  Publish    Fs
//!  Box      Box      Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Config   NotFound, ParseError, MissingKey, InvalidValue
//!   Task     NotFound, Interrupted
//!   Manifest Serialize, Parse, Render
//!   Publish  InvalidCredentials (soft: falls back to local)
//!   Fs       NotFound, PermissionDenied, IoError
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModbuildError`].
pub type ModbuildResult<T> = std::result::Result<T, ModbuildError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ModbuildError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Task execution error.
    #[error("task error: {0}")]
    Task(#[from] Box<TaskError>),

    /// Descriptor or archive manifest could not be produced.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// Publishing setup error.
    #[error("publish error: {0}")]
    Publish(#[from] Box<PublishError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModbuildError {
                fn from(err: $error) -> Self {
                    ModbuildError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    TaskError => Task,
    ManifestError => Manifest,
    PublishError => Publish,
    FsError => Fs,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be parsed, or the merged settings do
    /// not fit [`ProjectConfig`](crate::config::ProjectConfig).
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// A required field was absent or empty when it was needed.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::MissingKey`].
    pub fn missing(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingKey {
            section: section.into(),
            key: key.into(),
        }
    }

    /// Shorthand for [`ConfigError::InvalidValue`].
    pub fn invalid(
        section: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            section: section.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}

// --- Task Errors ---

/// Task execution errors.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Task was not found.
    #[error("task '{0}' not found")]
    NotFound(String),

    /// Task was interrupted.
    #[error("task '{0}' was interrupted")]
    Interrupted(String),
}

// --- Manifest Errors ---

/// Errors producing or reading generated documents.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// TOML serialization failed.
    #[error("failed to serialize descriptor: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// TOML parsing failed.
    #[error("failed to parse descriptor: {0}")]
    Parse(#[from] toml::de::Error),

    /// A document could not be rendered.
    #[error("failed to render {what}: {message}")]
    Render { what: String, message: String },
}

// --- Publish Errors ---

/// Publishing errors.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Remote repository credentials are incomplete.
    ///
    /// Never fatal: the resolver falls back to the local repository.
    #[error("incomplete credentials for {url}: missing {missing}")]
    InvalidCredentials { url: String, missing: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error that happened on `path`.
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests;
