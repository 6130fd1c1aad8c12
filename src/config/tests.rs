// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{DependencyKind, LoadOrdering, Side};
use super::{ConfigLoader, PathsConfig, ProjectConfig, is_valid_mod_id};
use crate::error::ConfigError;
use std::path::PathBuf;

const MINIMAL: &str = r#"
[project]
id = "examplemod"
group = "com.example"
version = "1.2.3"

[license]
name = "MIT"

[loader]
version = "[4,)"
"#;

fn config_error(err: &anyhow::Error) -> Option<&ConfigError> {
    err.downcast_ref::<ConfigError>()
}

#[test]
fn test_minimal_config_defaults() {
    let config = ProjectConfig::parse(MINIMAL).unwrap();

    assert_eq!(config.project.id, "examplemod");
    assert_eq!(config.loader.name, "javafml");
    assert_eq!(config.loader.manifest_name, "neoforge.mods.toml");
    assert_eq!(config.loader.mod_type, "MOD");
    assert!(config.dependencies.is_empty());
    assert!(config.properties.is_empty());
    assert!(config.ci.output.is_none());
}

#[test]
fn test_full_version() {
    let mut config = ProjectConfig::parse(MINIMAL).unwrap();
    assert_eq!(config.full_version(), "1.2.3");

    config.platform.minecraft_version = "1.21".to_string();
    assert_eq!(config.full_version(), "1.21-1.2.3");
}

#[test]
fn test_missing_required_field_names_the_key() {
    let toml = MINIMAL.replace("id = \"examplemod\"", "");
    let err = ProjectConfig::parse(&toml).unwrap_err();

    match config_error(&err) {
        Some(ConfigError::MissingKey { section, key }) => {
            assert_eq!(section, "project");
            assert_eq!(key, "id");
        }
        other => panic!("expected MissingKey, got {other:?} ({err:#})"),
    }
}

#[test]
fn test_blank_loader_version_is_missing() {
    let toml = MINIMAL.replace("version = \"[4,)\"", "version = \"  \"");
    let err = ProjectConfig::parse(&toml).unwrap_err();
    assert!(matches!(
        config_error(&err),
        Some(ConfigError::MissingKey { key, .. }) if key == "version"
    ));
}

#[test]
fn test_invalid_mod_id_rejected() {
    let toml = MINIMAL.replace("examplemod", "Example-Mod");
    let err = ProjectConfig::parse(&toml).unwrap_err();
    assert!(matches!(
        config_error(&err),
        Some(ConfigError::InvalidValue { section, key, .. }) if section == "project" && key == "id"
    ));
}

#[test]
fn test_duplicate_submod_id_rejected() {
    let toml = format!(
        "{MINIMAL}\n[[submods]]\nid = \"examplemod\"\nname = \"Twin\"\ndescription = \"dup\"\n"
    );
    let err = ProjectConfig::parse(&toml).unwrap_err();
    assert!(err.to_string().contains("more than once"), "{err:#}");
}

#[test]
fn test_mod_id_rules() {
    let cases: Vec<_> = ["examplemod", "a1", "my_mod", "x", "1mod", "Mod", "has-dash"]
        .into_iter()
        .map(|id| (id, is_valid_mod_id(id)))
        .collect();
    insta::assert_debug_snapshot!(cases, @r#"
    [
        (
            "examplemod",
            true,
        ),
        (
            "a1",
            true,
        ),
        (
            "my_mod",
            true,
        ),
        (
            "x",
            false,
        ),
        (
            "1mod",
            false,
        ),
        (
            "Mod",
            false,
        ),
        (
            "has-dash",
            false,
        ),
    ]
    "#);
}

#[test]
fn test_dependencies_parse_with_defaults() {
    let toml = format!(
        r#"{MINIMAL}
[[dependencies]]
mod_id = "neoforge"
version_range = "[21.0,)"

[[dependencies]]
mod_id = "jei"
version_range = "[19,)"
type = "optional"
ordering = "AFTER"
side = "CLIENT"
"#
    );
    let config = ProjectConfig::parse(&toml).unwrap();

    assert_eq!(config.dependencies.len(), 2);
    let neoforge = &config.dependencies[0];
    assert_eq!(neoforge.kind, DependencyKind::Required);
    assert_eq!(neoforge.ordering, LoadOrdering::None);
    assert_eq!(neoforge.side, Side::Both);

    let jei = &config.dependencies[1];
    assert_eq!(jei.kind, DependencyKind::Optional);
    assert_eq!(jei.ordering, LoadOrdering::After);
    assert_eq!(jei.side, Side::Client);
}

#[test]
fn test_dependency_kind_parse() {
    assert_eq!("Required".parse::<DependencyKind>().unwrap(), DependencyKind::Required);
    assert_eq!("optional".parse::<DependencyKind>().unwrap(), DependencyKind::Optional);
    assert!("mandatory".parse::<DependencyKind>().is_err());
}

#[test]
fn test_paths_resolve_defaults() {
    let mut paths = PathsConfig {
        root: Some(PathBuf::from("/work/examplemod")),
        ..Default::default()
    };
    paths.resolve();

    let normalize = |p: &Option<PathBuf>| p.as_ref().map(|p| p.to_string_lossy().replace('\\', "/"));

    assert_eq!(normalize(&paths.build).as_deref(), Some("/work/examplemod/build"));
    assert_eq!(
        normalize(&paths.generated_resources).as_deref(),
        Some("/work/examplemod/build/generated/resources")
    );
    assert_eq!(
        normalize(&paths.archive_manifests).as_deref(),
        Some("/work/examplemod/build/generated/archive")
    );
    assert_eq!(normalize(&paths.libs).as_deref(), Some("/work/examplemod/build/libs"));
    assert_eq!(
        normalize(&paths.local_repository).as_deref(),
        Some("/work/examplemod/build/repo")
    );
}

#[test]
fn test_paths_resolve_keeps_absolute_and_nests_relative() {
    let mut paths = PathsConfig {
        root: Some(PathBuf::from("/work")),
        build: Some(PathBuf::from("out")),
        local_repository: Some(PathBuf::from("/srv/maven")),
        ..Default::default()
    };
    paths.resolve();

    assert_eq!(paths.build, Some(PathBuf::from("/work/out")));
    assert_eq!(paths.libs, Some(PathBuf::from("/work/out/libs")));
    assert_eq!(paths.local_repository, Some(PathBuf::from("/srv/maven")));
}

#[test]
fn test_unresolved_path_is_missing_key() {
    let paths = PathsConfig::default();
    let err = paths.libs().unwrap_err();
    assert!(matches!(
        config_error(&err),
        Some(ConfigError::MissingKey { key, .. }) if key == "libs"
    ));
}

#[test]
fn test_format_options_hides_password() {
    let toml = format!(
        "{MINIMAL}\n[publish]\nurl = \"https://maven.example.com\"\nusername = \"bot\"\npassword = \"s3cret\"\n"
    );
    let config = ProjectConfig::parse(&toml).unwrap();
    let options = config.format_options();

    assert!(options.iter().any(|o| o.contains("[hidden]")));
    assert!(!options.iter().any(|o| o.contains("s3cret")));
}

#[test]
fn test_format_options_deterministic() {
    let config = ProjectConfig::parse(MINIMAL).unwrap();
    let first = config.format_options();
    let second = config.format_options();
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted, "options should be sorted by key");
}

#[test]
fn test_deny_unknown_fields() {
    let toml = format!("{MINIMAL}\n[project_typo]\nid = \"x\"\n");
    assert!(ProjectConfig::parse(&toml).is_err());

    let toml = MINIMAL.replace("[license]", "[license]\nspdx = \"MIT\"");
    assert!(ProjectConfig::parse(&toml).is_err());
}

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "{MINIMAL}\n[global]\ndry = true\n").expect("failed to write temp file");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert!(config.global.dry);
    assert_eq!(config.project.group, "com.example");
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let loader = ConfigLoader::new().add_toml_file("/nonexistent/path/to/modbuild.toml");
    assert!(loader.build().is_err());
}

#[test]
fn test_config_loader_add_toml_file_invalid_toml() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "this is not valid toml {{{{{{").expect("failed to write");

    let result = ConfigLoader::new().add_toml_file(file.path()).build();
    assert!(result.is_err(), "build should fail with invalid TOML");
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new()
        .add_toml_str(MINIMAL)
        .add_toml_file_optional("/nonexistent/modbuild.toml");

    assert_eq!(loader.loaded_files().len(), 1);
    assert!(loader.build().is_ok(), "missing optional file is not an error");
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str(MINIMAL)
        .add_toml_str("[global]\n dry = true");

    insta::assert_debug_snapshot!(loader.format_loaded_files(), @r#"
    [
        "1. [string] <string>",
        "2. [string] <string>",
    ]
    "#);
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("MODBUILDTEST_PUBLISH__USERNAME", "ci-bot");
    }

    let config = ConfigLoader::new()
        .add_toml_str(MINIMAL)
        .with_env_prefix("MODBUILDTEST")
        .build()
        .expect("build should succeed");

    // SAFETY: same as above.
    unsafe {
        std::env::remove_var("MODBUILDTEST_PUBLISH__USERNAME");
    }

    assert_eq!(config.publish.username.as_deref(), Some("ci-bot"));
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str(MINIMAL)
        .set("project.version", "2.0.0")
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert_eq!(config.project.version, "2.0.0");
}

#[test]
fn test_config_loader_set_assignment() {
    let config = ConfigLoader::new()
        .add_toml_str(MINIMAL)
        .set_assignment("platform.minecraft_version = 1.21.1")
        .expect("assignment should parse")
        .build()
        .expect("build should succeed");

    assert_eq!(config.platform.minecraft_version, "1.21.1");
    assert!(ConfigLoader::new().set_assignment("no-equals-sign").is_err());
    assert!(ConfigLoader::new().set_assignment("=value").is_err());
}

#[test]
fn test_config_loader_layered_sources() {
    let config = ConfigLoader::new()
        .add_toml_str(MINIMAL)
        .add_toml_str("[project]\nversion = \"1.3.0\"\nvendor = \"Example Co\"\n")
        .build()
        .expect("build should succeed");

    assert_eq!(config.project.version, "1.3.0", "later source overrides");
    assert_eq!(config.project.id, "examplemod", "earlier value persists");
    assert_eq!(config.project.vendor, "Example Co");
}

#[test]
fn test_config_loader_type_mismatch() {
    let toml = format!("{MINIMAL}\n[global]\ndry = \"not a boolean\"\n");
    let result = ConfigLoader::new().add_toml_str(&toml).build();
    assert!(result.is_err(), "build should fail with type mismatch");
}

#[test]
fn test_empty_loader_fails_validation() {
    let err = ConfigLoader::default().build().unwrap_err();
    assert!(matches!(
        config_error(&err),
        Some(ConfigError::MissingKey { .. })
    ));
}
