// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project configuration.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modbuild.toml (cwd)
//! 3. --config FILE (repeatable)
//! 4. MODBUILD_* env vars
//! 5. --set key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODBUILD_GLOBAL__DRY=true          → global.dry = true
//! MODBUILD_PUBLISH__USERNAME=ci-bot  → publish.username = "ci-bot"
//! MODBUILD_PUBLISH__PASSWORD=...     → publish.password = "..."
//! ```
//!
//! # Example
//!
//! ```toml
//! [project]
//! id = "examplemod"
//! group = "com.example"
//! name = "Example Mod"
//! version = "1.2.3"
//!
//! [license]
//! name = "MIT"
//!
//! [loader]
//! version = "[4,)"
//!
//! [[dependencies]]
//! mod_id = "neoforge"
//! version_range = "[21.0,)"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{
    Aliases, CiConfig, DependencyDescriptor, GlobalConfig, LicenseConfig, LinksConfig,
    LoaderConfig, PlatformConfig, ProjectInfo, PublishConfig, SubmodConfig,
};

/// Mod ids accepted by the loader.
static MOD_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]{1,63}$").unwrap_or_else(|e| unreachable!("static regex: {e}"))
});

/// Returns whether `id` is a valid mod id.
#[must_use]
pub fn is_valid_mod_id(id: &str) -> bool {
    MOD_ID.is_match(id)
}

/// Complete project configuration.
///
/// Built once per invocation and shared read-only with every task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub global: GlobalConfig,
    pub project: ProjectInfo,
    pub license: LicenseConfig,
    pub loader: LoaderConfig,
    pub platform: PlatformConfig,
    pub links: LinksConfig,
    pub publish: PublishConfig,
    pub ci: CiConfig,
    pub paths: PathsConfig,
    /// Task aliases.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: Aliases,
    /// Dependencies of the primary mod.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyDescriptor>,
    /// Free-form properties of the primary mod.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    /// Additional mods shipped in the same archive.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submods: Vec<SubmodConfig>,
}

impl ProjectConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modbuild::config::ProjectConfig;
    ///
    /// let config = ProjectConfig::builder()
    ///     .add_toml_file("modbuild.toml")
    ///     .add_toml_file_optional("modbuild.local.toml")
    ///     .with_env_prefix("MODBUILD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Version string used for archives and CI output:
    /// `<minecraft_version>-<version>`, or the bare version when no
    /// platform version is configured.
    #[must_use]
    pub fn full_version(&self) -> String {
        let minecraft = self.platform.minecraft_version.trim();
        if minecraft.is_empty() {
            self.project.version.clone()
        } else {
            format!("{minecraft}-{}", self.project.version)
        }
    }

    /// Resolve all paths and check the fields every task relies on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for an absent required field and
    /// `ConfigError::InvalidValue` for malformed or duplicate mod ids.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve();
        self.validate()?;
        Ok(())
    }

    /// Check required fields and mod id syntax.
    ///
    /// # Errors
    ///
    /// See [`ProjectConfig::resolve_and_validate`].
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let required = [
            ("project", "id", &self.project.id),
            ("project", "group", &self.project.group),
            ("project", "version", &self.project.version),
            ("license", "name", &self.license.name),
            ("loader", "name", &self.loader.name),
            ("loader", "version", &self.loader.version),
        ];
        for (section, key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::missing(section, key));
            }
        }

        let mut seen = BTreeSet::new();
        let ids = std::iter::once(("project", self.project.id.as_str()))
            .chain(self.submods.iter().map(|s| ("submods", s.id.as_str())));
        for (section, id) in ids {
            if !is_valid_mod_id(id) {
                return Err(ConfigError::invalid(
                    section,
                    "id",
                    format!("'{id}' is not a valid mod id (expected ^[a-z][a-z0-9_]{{1,63}}$)"),
                ));
            }
            if !seen.insert(id) {
                return Err(ConfigError::invalid(
                    section,
                    "id",
                    format!("mod id '{id}' is declared more than once"),
                ));
            }
        }

        let dependencies = self
            .dependencies
            .iter()
            .chain(self.submods.iter().flat_map(|s| s.dependencies.iter()));
        for dependency in dependencies {
            if !is_valid_mod_id(&dependency.mod_id) {
                return Err(ConfigError::invalid(
                    "dependencies",
                    "mod_id",
                    format!("'{}' is not a valid mod id", dependency.mod_id),
                ));
            }
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Sensitive fields are shown as `[hidden]`. Output is ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_project_options(&mut options);
        self.format_loader_options(&mut options);
        self.format_publish_options(&mut options);
        self.format_paths_options(&mut options);

        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "dependencies".into(),
            self.dependencies
                .iter()
                .map(|d| format!("{}@{}", d.mod_id, d.version_range))
                .collect::<Vec<_>>()
                .join(", "),
        );
        for (key, value) in &self.properties {
            options.insert(format!("properties.{key}"), value.clone());
        }
        if !self.submods.is_empty() {
            options.insert(
                "submods".into(),
                self.submods
                    .iter()
                    .map(|s| s.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        let p = &self.project;
        for (key, value) in [
            ("id", &p.id),
            ("group", &p.group),
            ("name", &p.name),
            ("version", &p.version),
            ("vendor", &p.vendor),
            ("authors", &p.authors),
            ("url", &p.url),
        ] {
            options.insert(format!("project.{key}"), value.clone());
        }
        options.insert("project.full_version".into(), self.full_version());
        options.insert("license.name".into(), self.license.name.clone());
        if let Some(url) = &self.license.url {
            options.insert("license.url".into(), url.clone());
        }
        if let Some(file) = &self.license.file {
            options.insert("license.file".into(), file.display().to_string());
        }
        options.insert(
            "platform.minecraft_version".into(),
            self.platform.minecraft_version.clone(),
        );
        if let Some(issues) = &self.links.issues {
            options.insert("links.issues".into(), issues.clone());
        }
        if let Some(ci) = &self.links.ci {
            options.insert("links.ci".into(), ci.clone());
        }
    }

    fn format_loader_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("loader.name".into(), self.loader.name.clone());
        options.insert("loader.version".into(), self.loader.version.clone());
        options.insert(
            "loader.manifest_name".into(),
            self.loader.manifest_name.clone(),
        );
        options.insert("loader.mod_type".into(), self.loader.mod_type.clone());
    }

    fn format_publish_options(&self, options: &mut BTreeMap<String, String>) {
        let publish = &self.publish;
        let fields = [
            ("publish.url", &publish.url),
            ("publish.username", &publish.username),
            ("publish.modrinth", &publish.modrinth),
            ("publish.curseforge", &publish.curseforge),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                options.insert(key.into(), value.clone());
            }
        }
        if publish.password.is_some() {
            options.insert("publish.password".into(), "[hidden]".into());
        }
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert("paths.root".into(), fmt(&self.paths.root));
        options.insert("paths.build".into(), fmt(&self.paths.build));
        options.insert(
            "paths.generated_resources".into(),
            fmt(&self.paths.generated_resources),
        );
        options.insert(
            "paths.archive_manifests".into(),
            fmt(&self.paths.archive_manifests),
        );
        options.insert("paths.libs".into(), fmt(&self.paths.libs));
        options.insert(
            "paths.local_repository".into(),
            fmt(&self.paths.local_repository),
        );
        if let Some(output) = &self.ci.output {
            options.insert("ci.output".into(), output.display().to_string());
        }
    }
}
