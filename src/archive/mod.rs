// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Archive manifest attributes.
//!
//! ```text
//! ProjectConfig + ArchiveClassifier + timestamp
//!        |
//!        v
//! build_attributes() --> ArchiveAttributes --> render_manifest_mf()
//!                                                   |
//!              <archive_manifests>/<variant>/META-INF/MANIFEST.MF
//!
//! license.file --> <archive_manifests>/<variant>/<file name>
//! ```
//!
//! The timestamp is a parameter so that each archive task stamps the time it
//! actually ran.

use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};
use crate::manifest::META_INF;

/// Format of `Implementation-Timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Maximum line length in bytes, line terminator excluded.
const MAX_LINE_BYTES: usize = 72;

/// Archive variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArchiveClassifier {
    #[default]
    Main,
    Sources,
    Javadoc,
}

impl ArchiveClassifier {
    pub const ALL: [Self; 3] = [Self::Main, Self::Sources, Self::Javadoc];

    /// Suffix appended to the implementation title and artifact file name.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Main => "",
            Self::Sources => "-sources",
            Self::Javadoc => "-javadoc",
        }
    }

    /// Maven classifier, `None` for the main archive.
    #[must_use]
    pub const fn maven_classifier(self) -> Option<&'static str> {
        match self {
            Self::Main => None,
            Self::Sources => Some("sources"),
            Self::Javadoc => Some("javadoc"),
        }
    }

    /// Output subdirectory name.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Sources => "sources",
            Self::Javadoc => "javadoc",
        }
    }
}

impl fmt::Display for ArchiveClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ArchiveClassifier {
    type Err = ConfigError;

    /// Accepts `main`, `sources`, `javadoc`, and the empty string for main.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "main" => Ok(Self::Main),
            "sources" => Ok(Self::Sources),
            "javadoc" => Ok(Self::Javadoc),
            other => Err(ConfigError::invalid(
                "archive",
                "classifier",
                format!("unknown classifier '{other}' (expected main, sources or javadoc)"),
            )),
        }
    }
}

/// Ordered `(name, value)` attributes of one archive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArchiveAttributes {
    entries: Vec<(String, String)>,
}

impl ArchiveAttributes {
    fn push(&mut self, name: &str, value: impl Into<String>) {
        self.entries.push((name.to_string(), value.into()));
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes the attributes for `classifier` stamped with `timestamp`.
///
/// Performs no validation beyond what [`ProjectConfig::validate`] already
/// guarantees.
#[must_use]
pub fn build_attributes(
    config: &ProjectConfig,
    classifier: ArchiveClassifier,
    timestamp: DateTime<FixedOffset>,
) -> ArchiveAttributes {
    let project = &config.project;
    let mut attributes = ArchiveAttributes::default();

    attributes.push("Specification-Title", project.id.as_str());
    attributes.push("Specification-Vendor", project.vendor.as_str());
    attributes.push("Specification-Version", project.version.as_str());
    attributes.push(
        "Implementation-Title",
        format!("{}{}", project.id, classifier.suffix()),
    );
    attributes.push("Implementation-Version", config.full_version());
    attributes.push("Implementation-Vendor", project.vendor.as_str());
    attributes.push(
        "Implementation-Timestamp",
        timestamp.format(TIMESTAMP_FORMAT).to_string(),
    );
    attributes.push(
        "Minecraft-Version",
        config.platform.minecraft_version.as_str(),
    );
    attributes.push("FMLModType", config.loader.mod_type.as_str());
    attributes.push("License", config.license.name.as_str());

    attributes
}

/// Renders a `MANIFEST.MF` document.
///
/// `Manifest-Version: 1.0` comes first, lines end with CRLF, and any line
/// longer than 72 bytes continues on the next line after a single space.
/// Multi-byte characters are never split. The main section is terminated by
/// an empty line.
#[must_use]
pub fn render_manifest_mf(attributes: &ArchiveAttributes) -> String {
    let mut out = String::new();
    push_wrapped(&mut out, "Manifest-Version: 1.0");
    for (name, value) in attributes.iter() {
        push_wrapped(&mut out, &format!("{name}: {value}"));
    }
    out.push_str("\r\n");
    out
}

fn push_wrapped(out: &mut String, line: &str) {
    let mut rest = line;
    let mut limit = MAX_LINE_BYTES;
    while rest.len() > limit {
        let mut split = limit;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        out.push_str(&rest[..split]);
        out.push_str("\r\n ");
        rest = &rest[split..];
        // continuation lines spend one byte on the leading space
        limit = MAX_LINE_BYTES - 1;
    }
    out.push_str(rest);
    out.push_str("\r\n");
}

/// Location of the manifest for `classifier`.
///
/// # Errors
///
/// Returns an error if `paths.archive_manifests` was not resolved.
pub fn manifest_path(config: &ProjectConfig, classifier: ArchiveClassifier) -> Result<PathBuf> {
    Ok(config
        .paths
        .archive_manifests()?
        .join(classifier.dir_name())
        .join(META_INF)
        .join("MANIFEST.MF"))
}

/// Source and staged location of `license.file` for `classifier`, or `None`
/// when no license file is configured.
///
/// A relative `license.file` is taken from `paths.root`. The copy sits next
/// to `META-INF/`, at the archive root.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `license.file` has no file name,
/// or an error if `paths.archive_manifests` was not resolved.
pub fn license_file_paths(
    config: &ProjectConfig,
    classifier: ArchiveClassifier,
) -> Result<Option<(PathBuf, PathBuf)>> {
    let Some(file) = config
        .license
        .file
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
    else {
        return Ok(None);
    };
    let Some(name) = file.file_name() else {
        return Err(ConfigError::invalid(
            "license",
            "file",
            format!("'{}' does not name a file", file.display()),
        )
        .into());
    };

    let src = match config.paths.root.as_deref() {
        Some(root) if file.is_relative() => root.join(file),
        _ => file.to_path_buf(),
    };
    let dst = config
        .paths
        .archive_manifests()?
        .join(classifier.dir_name())
        .join(name);
    Ok(Some((src, dst)))
}
