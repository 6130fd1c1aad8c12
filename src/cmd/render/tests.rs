// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::{DateTime, FixedOffset, TimeZone};

use super::render_document;
use crate::archive::ArchiveClassifier;
use crate::cli::render::{RenderArgs, RenderTarget};
use crate::config::ProjectConfig;

fn config() -> ProjectConfig {
    ProjectConfig::parse(
        r#"
[project]
id = "examplemod"
group = "com.example"
name = "Example Mod"
version = "1.2.3"
vendor = "Example Co"
authors = "Alice"
description = "Adds examples."
url = "https://example.com/examplemod"

[license]
name = "MIT"

[loader]
version = "[4,)"

[platform]
minecraft_version = "1.21"
"#,
    )
    .unwrap()
}

fn timestamp() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .unwrap()
}

fn args(target: RenderTarget, json: bool) -> RenderArgs {
    RenderArgs {
        target,
        classifier: ArchiveClassifier::Main,
        json,
    }
}

fn render(target: RenderTarget, json: bool) -> anyhow::Result<String> {
    render_document(&config(), &args(target, json), timestamp())
}

#[test]
fn test_mods_toml_native_and_json_agree() {
    let native = render(RenderTarget::ModsToml, false).unwrap();
    assert!(native.contains("modLoader = \"javafml\""));

    let json: serde_json::Value =
        serde_json::from_str(&render(RenderTarget::ModsToml, true).unwrap()).unwrap();
    assert_eq!(json["modLoader"], "javafml");
    assert_eq!(json["mods"][0]["modId"], "examplemod");
    assert_eq!(json["mods"][0]["version"], "1.2.3");
}

#[test]
fn test_jar_manifest_json_keeps_attribute_order() {
    let mut args = args(RenderTarget::JarManifest, true);
    args.classifier = ArchiveClassifier::Javadoc;
    let output = render_document(&config(), &args, timestamp()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 10);
    assert_eq!(list[0]["name"], "Specification-Title");
    assert_eq!(list[3]["value"], "examplemod-javadoc");
    assert_eq!(list[6]["value"], "2026-01-02T03:04:05+0000");
}

#[test]
fn test_jar_manifest_native() {
    let output = render(RenderTarget::JarManifest, false).unwrap();
    assert!(output.starts_with("Manifest-Version: 1.0\r\n"));
    assert!(output.ends_with("\r\n\r\n"));
}

#[test]
fn test_ci_output() {
    insta::assert_snapshot!(render(RenderTarget::CiOutput, false).unwrap().trim_end(), @r"
    modid=examplemod
    version=1.21-1.2.3
    minecraft_version=1.21
    ");

    let json: serde_json::Value =
        serde_json::from_str(&render(RenderTarget::CiOutput, true).unwrap()).unwrap();
    assert_eq!(json["version"], "1.21-1.2.3");
}

#[test]
fn test_pom() {
    let pom = render(RenderTarget::Pom, false).unwrap();
    assert!(pom.contains("<artifactId>examplemod</artifactId>"));
    assert!(render(RenderTarget::Pom, true).is_err());
}

#[test]
fn test_missing_field_is_reported() {
    let mut config = config();
    config.project.authors.clear();
    let err = render_document(&config, &args(RenderTarget::ModsToml, false), timestamp())
        .unwrap_err();
    assert!(format!("{err:#}").contains("authors"));
}
