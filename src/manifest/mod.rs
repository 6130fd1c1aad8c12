// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod-loader descriptor generation.
//!
//! ```text
//! ProjectConfig --generate()--> ManifestDocument --render()--> TOML text
//!                                      ^                          |
//!                                      +--------parse()-----------+
//!
//! modLoader / loaderVersion / license / issueTrackerURL?
//! [[mods]]                       one per primary mod and submod
//! [[dependencies.<modid>]]       only mods with dependencies
//! [modproperties.<modid>]        only mods with properties
//! [mc-publish]                   only if modrinth or curseforge is set
//! ```
//!
//! Generation is pure and deterministic: maps are ordered and no timestamp
//! is embedded. Validation completes before anything is rendered, so a
//! missing field never produces a partial descriptor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::config::types::{
    DependencyDescriptor, DependencyKind, LoadOrdering, Side, SubmodConfig, non_empty,
};
use crate::error::{ConfigError, ManifestError, Result};

/// Directory inside the archive holding the descriptor.
pub const META_INF: &str = "META-INF";

/// The descriptor read by the mod loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    #[serde(rename = "modLoader")]
    pub mod_loader: String,
    #[serde(rename = "loaderVersion")]
    pub loader_version: String,
    pub license: String,
    #[serde(
        rename = "issueTrackerURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub issue_tracker_url: Option<String>,
    pub mods: Vec<ModEntry>,
    #[serde(rename = "mc-publish", default, skip_serializing_if = "Option::is_none")]
    pub publish: Option<PublishServices>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, Vec<DependencyEntry>>,
    #[serde(
        rename = "modproperties",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub mod_properties: BTreeMap<String, BTreeMap<String, String>>,
}

/// One `[[mods]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModEntry {
    #[serde(rename = "modId")]
    pub mod_id: String,
    pub version: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "displayURL")]
    pub display_url: String,
    pub authors: String,
    pub description: String,
    #[serde(rename = "logoFile", default, skip_serializing_if = "Option::is_none")]
    pub logo_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,
}

/// One `[[dependencies.<modid>]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    #[serde(rename = "modId")]
    pub mod_id: String,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
    #[serde(rename = "versionRange")]
    pub version_range: String,
    pub ordering: LoadOrdering,
    pub side: Side,
}

impl From<&DependencyDescriptor> for DependencyEntry {
    fn from(descriptor: &DependencyDescriptor) -> Self {
        Self {
            mod_id: descriptor.mod_id.clone(),
            kind: descriptor.kind,
            version_range: descriptor.version_range.clone(),
            ordering: descriptor.ordering,
            side: descriptor.side,
        }
    }
}

/// External publish service ids (`[mc-publish]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishServices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modrinth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curseforge: Option<String>,
}

/// Returns the trimmed value or a `MissingKey` error naming the field.
fn required(section: &str, key: &str, value: &str) -> std::result::Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ConfigError::missing(section, key))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    non_empty(value).map(str::to_string)
}

/// Builds the descriptor for `config`.
///
/// # Errors
///
/// Returns `ConfigError::MissingKey` naming the first absent required field:
/// loader name/version, license name, or a mod entry's id, version, name,
/// url, authors or description.
pub fn generate(config: &ProjectConfig) -> std::result::Result<ManifestDocument, ConfigError> {
    let mod_loader = required("loader", "name", &config.loader.name)?;
    let loader_version = required("loader", "version", &config.loader.version)?;
    let license = required("license", "name", &config.license.name)?;

    let project = &config.project;
    let primary = ModEntry {
        mod_id: required("project", "id", &project.id)?,
        version: required("project", "version", &project.version)?,
        display_name: required("project", "name", &project.name)?,
        display_url: required("project", "url", &project.url)?,
        authors: required("project", "authors", &project.authors)?,
        description: required("project", "description", &project.description)?,
        logo_file: optional(project.logo_file.as_deref()),
        credits: optional(project.credits.as_deref()),
    };

    let mut mods = vec![primary];
    let mut dependencies = BTreeMap::new();
    let mut mod_properties = BTreeMap::new();

    insert_groups(
        &mods[0].mod_id,
        &config.dependencies,
        &config.properties,
        &mut dependencies,
        &mut mod_properties,
    );

    for submod in &config.submods {
        let entry = submod_entry(config, submod)?;
        insert_groups(
            &entry.mod_id,
            &submod.dependencies,
            &submod.properties,
            &mut dependencies,
            &mut mod_properties,
        );
        mods.push(entry);
    }

    let publish = config.publish.has_services().then(|| PublishServices {
        modrinth: optional(config.publish.modrinth.as_deref()),
        curseforge: optional(config.publish.curseforge.as_deref()),
    });

    Ok(ManifestDocument {
        mod_loader,
        loader_version,
        license,
        issue_tracker_url: optional(config.links.issues.as_deref()),
        mods,
        publish,
        dependencies,
        mod_properties,
    })
}

fn submod_entry(
    config: &ProjectConfig,
    submod: &SubmodConfig,
) -> std::result::Result<ModEntry, ConfigError> {
    let mod_id = required("submods", "id", &submod.id)?;
    let section = format!("submods.{mod_id}");
    let project = &config.project;

    Ok(ModEntry {
        version: required(
            &section,
            "version",
            submod.version.as_deref().unwrap_or(&project.version),
        )?,
        display_name: required(&section, "name", &submod.name)?,
        display_url: required(
            &section,
            "url",
            submod.url.as_deref().unwrap_or(&project.url),
        )?,
        authors: required(
            &section,
            "authors",
            submod.authors.as_deref().unwrap_or(&project.authors),
        )?,
        description: required(&section, "description", &submod.description)?,
        logo_file: optional(submod.logo_file.as_deref()),
        credits: None,
        mod_id,
    })
}

fn insert_groups(
    mod_id: &str,
    descriptors: &[DependencyDescriptor],
    properties: &BTreeMap<String, String>,
    dependencies: &mut BTreeMap<String, Vec<DependencyEntry>>,
    mod_properties: &mut BTreeMap<String, BTreeMap<String, String>>,
) {
    if !descriptors.is_empty() {
        dependencies.insert(
            mod_id.to_string(),
            descriptors.iter().map(DependencyEntry::from).collect(),
        );
    }
    if !properties.is_empty() {
        mod_properties.insert(mod_id.to_string(), properties.clone());
    }
}

/// Serializes the descriptor to TOML.
///
/// # Errors
///
/// Returns `ManifestError::Serialize` if TOML serialization fails.
pub fn render(document: &ManifestDocument) -> std::result::Result<String, ManifestError> {
    Ok(toml::to_string_pretty(document)?)
}

/// Parses a descriptor previously produced by [`render`].
///
/// # Errors
///
/// Returns `ManifestError::Parse` if the text is not a valid descriptor.
pub fn parse(text: &str) -> std::result::Result<ManifestDocument, ManifestError> {
    Ok(toml::from_str(text)?)
}

/// Location of the descriptor in the generated-resources area.
///
/// # Errors
///
/// Returns an error if `paths.generated_resources` was not resolved.
pub fn descriptor_path(config: &ProjectConfig) -> Result<PathBuf> {
    Ok(config
        .paths
        .generated_resources()?
        .join(META_INF)
        .join(&config.loader.manifest_name))
}
