// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish target selection and Maven layout.
//!
//! ```text
//! publish.url + username + password all set ──> Remote { url, username }
//! publish.url set, credentials incomplete    ──> warn, Local { local_repository }
//! publish.url unset                          ──> Local { local_repository }
//!
//! <repo>/com/example/examplemod/<version>/
//!     examplemod-<version>.pom
//!     examplemod-<version>.jar
//!     examplemod-<version>-sources.jar
//!     examplemod-<version>-javadoc.jar
//! ```
//!
//! Uploading to a remote repository is left to the host build; only the
//! target decision and the POM are produced here.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::archive::ArchiveClassifier;
use crate::config::ProjectConfig;
use crate::config::types::{PublishConfig, non_empty};
use crate::error::{ManifestError, PublishError};

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const POM_SCHEMA: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Where artifacts go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishTarget {
    /// Remote Maven repository with complete credentials.
    Remote { url: String, username: String },
    /// Local directory laid out as a Maven repository.
    Local { dir: PathBuf },
}

impl fmt::Display for PublishTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote { url, username } => write!(f, "remote {url} (as {username})"),
            Self::Local { dir } => write!(f, "local {}", dir.display()),
        }
    }
}

/// Checks the remote credentials.
///
/// Returns `Ok(None)` when no remote URL is configured.
///
/// # Errors
///
/// Returns `PublishError::InvalidCredentials` naming the missing fields when
/// a URL is set but the username or password is blank.
pub fn remote_credentials(
    publish: &PublishConfig,
) -> Result<Option<(String, String)>, PublishError> {
    let Some(url) = non_empty(publish.url.as_deref()) else {
        return Ok(None);
    };
    let username = non_empty(publish.username.as_deref());
    let password = non_empty(publish.password.as_deref());

    let missing: Vec<&str> = [("username", username), ("password", password)]
        .into_iter()
        .filter_map(|(name, value)| value.is_none().then_some(name))
        .collect();
    match username {
        Some(username) if missing.is_empty() => Ok(Some((url.to_string(), username.to_string()))),
        _ => Err(PublishError::InvalidCredentials {
            url: url.to_string(),
            missing: missing.join(" and "),
        }),
    }
}

/// Picks the publish target.
///
/// Incomplete credentials are not fatal: a warning is logged and the local
/// repository is used instead.
#[must_use]
pub fn resolve_target(publish: &PublishConfig, local_repository: &Path) -> PublishTarget {
    let local = || PublishTarget::Local {
        dir: local_repository.to_path_buf(),
    };
    match remote_credentials(publish) {
        Ok(Some((url, username))) => PublishTarget::Remote { url, username },
        Ok(None) => {
            tracing::debug!("no remote repository configured");
            local()
        }
        Err(e) => {
            tracing::warn!(
                dir = %local_repository.display(),
                "{e}; publishing to the local repository instead"
            );
            local()
        }
    }
}

/// Maven coordinates of the primary mod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinates {
    /// Group and artifact from the project, version is the full version.
    #[must_use]
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            group: config.project.group.clone(),
            artifact: config.project.id.clone(),
            version: config.full_version(),
        }
    }

    /// `group/with/slashes/<artifact>/<version>` relative to a repository.
    #[must_use]
    pub fn version_dir(&self) -> PathBuf {
        let mut dir: PathBuf = self.group.split('.').collect();
        dir.push(&self.artifact);
        dir.push(&self.version);
        dir
    }

    /// `<artifact>-<version>[-classifier].<extension>`
    #[must_use]
    pub fn file_name(&self, classifier: ArchiveClassifier, extension: &str) -> String {
        format!(
            "{}-{}{}.{extension}",
            self.artifact,
            self.version,
            classifier.suffix()
        )
    }

    /// Archive path inside `repository`.
    #[must_use]
    pub fn artifact_path(&self, repository: &Path, classifier: ArchiveClassifier) -> PathBuf {
        repository
            .join(self.version_dir())
            .join(self.file_name(classifier, "jar"))
    }

    /// POM path inside `repository`.
    #[must_use]
    pub fn pom_path(&self, repository: &Path) -> PathBuf {
        repository
            .join(self.version_dir())
            .join(self.file_name(ArchiveClassifier::Main, "pom"))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

type XmlWriter = Writer<Vec<u8>>;

fn xml_err(e: impl fmt::Display) -> ManifestError {
    ManifestError::Render {
        what: "POM".to_string(),
        message: e.to_string(),
    }
}

fn start(writer: &mut XmlWriter, name: &str) -> Result<(), ManifestError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)
}

fn end(writer: &mut XmlWriter, name: &str) -> Result<(), ManifestError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)
}

fn text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), ManifestError> {
    start(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    end(writer, name)
}

fn optional_element(
    writer: &mut XmlWriter,
    name: &str,
    text: Option<&str>,
) -> Result<(), ManifestError> {
    match non_empty(text) {
        Some(text) => text_element(writer, name, text),
        None => Ok(()),
    }
}

/// Renders the POM for the primary mod.
///
/// Blank optional fields are left out.
///
/// # Errors
///
/// Returns `ManifestError::Render` if the XML cannot be written.
pub fn render_pom(config: &ProjectConfig) -> Result<String, ManifestError> {
    let coordinates = Coordinates::from_config(config);
    let project = &config.project;
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    let mut root = BytesStart::new("project");
    root.push_attribute(("xmlns", POM_NAMESPACE));
    root.push_attribute(("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"));
    root.push_attribute(("xsi:schemaLocation", POM_SCHEMA));
    writer.write_event(Event::Start(root)).map_err(xml_err)?;

    text_element(&mut writer, "modelVersion", "4.0.0")?;
    text_element(&mut writer, "groupId", &coordinates.group)?;
    text_element(&mut writer, "artifactId", &coordinates.artifact)?;
    text_element(&mut writer, "version", &coordinates.version)?;
    optional_element(&mut writer, "name", Some(&project.name))?;
    optional_element(&mut writer, "description", Some(&project.description))?;
    optional_element(&mut writer, "url", Some(&project.url))?;

    start(&mut writer, "licenses")?;
    start(&mut writer, "license")?;
    text_element(&mut writer, "name", &config.license.name)?;
    optional_element(&mut writer, "url", config.license.url.as_deref())?;
    end(&mut writer, "license")?;
    end(&mut writer, "licenses")?;

    if let Some(issues) = non_empty(config.links.issues.as_deref()) {
        start(&mut writer, "issueManagement")?;
        text_element(&mut writer, "url", issues)?;
        end(&mut writer, "issueManagement")?;
    }
    if let Some(ci) = non_empty(config.links.ci.as_deref()) {
        start(&mut writer, "ciManagement")?;
        text_element(&mut writer, "url", ci)?;
        end(&mut writer, "ciManagement")?;
    }

    end(&mut writer, "project")?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(xml_err)?;
    xml.push('\n');
    Ok(xml)
}
