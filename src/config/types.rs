// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! # Config Structure
//!
//! ```text
//! ProjectConfig: GlobalConfig, ProjectInfo, LicenseConfig, LoaderConfig,
//!                PlatformConfig, LinksConfig, PublishConfig, CiConfig,
//!                PathsConfig, dependencies[], properties{}, submods[]
//! Aliases: alias name → [task list]
//! ```
//!
//! # Dependency Descriptor
//!
//! ```text
//! [[dependencies]]
//! mod_id = "neoforge"       type     = required | optional
//! version_range = "[21,)"   ordering = NONE | BEFORE | AFTER
//!                           side     = BOTH | CLIENT | SERVER
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Whether a dependency must be present at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    #[default]
    Required,
    Optional,
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Optional => write!(f, "optional"),
        }
    }
}

impl std::str::FromStr for DependencyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "optional" => Ok(Self::Optional),
            _ => Err(ConfigError::invalid(
                "dependencies",
                "type",
                format!("expected 'required' or 'optional', got '{s}'"),
            )),
        }
    }
}

/// Load ordering relative to a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadOrdering {
    #[default]
    None,
    Before,
    After,
}

/// Physical side a dependency applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    #[default]
    Both,
    Client,
    Server,
}

/// One dependency of a mod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyDescriptor {
    /// Id of the mod depended upon.
    pub mod_id: String,
    /// Maven version range, e.g. `[21.0,)`.
    pub version_range: String,
    #[serde(rename = "type", default)]
    pub kind: DependencyKind,
    #[serde(default)]
    pub ordering: LoadOrdering,
    #[serde(default)]
    pub side: Side,
}

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what would be written without touching the filesystem.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Identity of the primary mod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectInfo {
    /// Mod id, also used as the Maven artifact id.
    pub id: String,
    /// Maven group.
    pub group: String,
    /// Display name.
    pub name: String,
    pub version: String,
    pub vendor: String,
    /// Free-form author list, e.g. `"Alice, Bob"`.
    pub authors: String,
    pub description: String,
    /// Homepage shown by the mod list screen.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,
}

/// License information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LicenseConfig {
    /// SPDX identifier or free-form license name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// License file copied to the root of every archive variant, relative
    /// to `paths.root`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Mod loader settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Language loader, e.g. `javafml`.
    pub name: String,
    /// Accepted loader version range.
    pub version: String,
    /// File name of the descriptor inside `META-INF/`.
    pub manifest_name: String,
    /// Value of the `FMLModType` archive attribute.
    pub mod_type: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            name: "javafml".to_string(),
            version: String::new(),
            manifest_name: "neoforge.mods.toml".to_string(),
            mod_type: "MOD".to_string(),
        }
    }
}

/// Target game platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformConfig {
    pub minecraft_version: String,
}

/// Project links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// Issue tracker URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<String>,
    /// Continuous integration URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<String>,
}

/// Publishing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Remote Maven repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Modrinth project id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modrinth: Option<String>,
    /// `CurseForge` project id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curseforge: Option<String>,
}

impl PublishConfig {
    /// Returns whether at least one external publish service is configured.
    #[must_use]
    pub fn has_services(&self) -> bool {
        non_empty(self.modrinth.as_deref()).is_some()
            || non_empty(self.curseforge.as_deref()).is_some()
    }
}

/// CI integration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CiConfig {
    /// File receiving `key=value` output lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Additional mod packaged in the same archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubmodConfig {
    pub id: String,
    pub name: String,
    /// Defaults to the project version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Defaults to the project URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Defaults to the project authors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_file: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyDescriptor>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

/// Task aliases mapping alias names to task patterns.
pub type Aliases = BTreeMap<String, Vec<String>>;

/// Returns the trimmed value unless it is blank.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
