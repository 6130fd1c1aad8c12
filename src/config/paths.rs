// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/
//!   build/
//!     generated/
//!       resources/          (descriptor: META-INF/<manifest_name>)
//!       archive/<variant>/  (META-INF/MANIFEST.MF)
//!     libs/                 (archives built by the host build)
//!     publish/              (POM for remote publishing)
//!     repo/                 (local Maven repository fallback)
//! ```
//!
//! All paths are optional and resolved from `root` if not set.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Project and output paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root (default: current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Build directory (default: root/build).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<PathBuf>,
    /// Generated resources packaged into the main archive
    /// (default: build/generated/resources).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_resources: Option<PathBuf>,
    /// Archive manifests, one subdirectory per variant
    /// (default: build/generated/archive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_manifests: Option<PathBuf>,
    /// Archives produced by the host build (default: build/libs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub libs: Option<PathBuf>,
    /// Staging directory for remote publishing (default: build/publish).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_staging: Option<PathBuf>,
    /// Local Maven repository used when remote publishing is not possible
    /// (default: build/repo).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_repository: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolve all relative paths against `root` and fill in defaults.
    pub fn resolve(&mut self) {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        self.root = Some(root.clone());

        let resolve = |path: &mut Option<PathBuf>, parent: &Path, default: &str| match path {
            Some(p) if p.is_relative() => {
                *path = Some(parent.join(p.clone()));
            }
            None => {
                *path = Some(parent.join(default));
            }
            _ => {}
        };

        resolve(&mut self.build, &root, "build");

        let build = self.build.clone().unwrap_or_else(|| root.join("build"));

        resolve(&mut self.generated_resources, &build, "generated/resources");
        resolve(&mut self.archive_manifests, &build, "generated/archive");
        resolve(&mut self.libs, &build, "libs");
        resolve(&mut self.publish_staging, &build, "publish");
        resolve(&mut self.local_repository, &build, "repo");
    }

    /// Get a resolved path, returning an error if it was never set.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` naming `key` if the path is unset.
    pub fn require<'a>(path: Option<&'a Path>, key: &str) -> Result<&'a Path> {
        path.ok_or_else(|| ConfigError::missing("paths", key).into())
    }

    /// Generated resources directory.
    ///
    /// # Errors
    ///
    /// Returns an error if paths were not resolved.
    pub fn generated_resources(&self) -> Result<&Path> {
        Self::require(self.generated_resources.as_deref(), "generated_resources")
    }

    /// Archive manifest directory.
    ///
    /// # Errors
    ///
    /// Returns an error if paths were not resolved.
    pub fn archive_manifests(&self) -> Result<&Path> {
        Self::require(self.archive_manifests.as_deref(), "archive_manifests")
    }

    /// Built archives directory.
    ///
    /// # Errors
    ///
    /// Returns an error if paths were not resolved.
    pub fn libs(&self) -> Result<&Path> {
        Self::require(self.libs.as_deref(), "libs")
    }

    /// Remote publishing staging directory.
    ///
    /// # Errors
    ///
    /// Returns an error if paths were not resolved.
    pub fn publish_staging(&self) -> Result<&Path> {
        Self::require(self.publish_staging.as_deref(), "publish_staging")
    }

    /// Local Maven repository.
    ///
    /// # Errors
    ///
    /// Returns an error if paths were not resolved.
    pub fn local_repository(&self) -> Result<&Path> {
        Self::require(self.local_repository.as_deref(), "local_repository")
    }
}
