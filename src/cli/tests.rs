// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::archive::ArchiveClassifier;
use crate::cli::render::RenderTarget;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["modbuild", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "modbuild",
        "-l",
        "5",
        "-c",
        "ci.toml",
        "--config",
        "local.toml",
        "-s",
        "project.version=2.0.0",
        "build",
        "--dry",
    ])
    .unwrap();

    assert_eq!(
        cli.global.configs,
        [PathBuf::from("ci.toml"), PathBuf::from("local.toml")]
    );
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "project.version=2.0.0",
        "global.output_log_level=5",
        "global.file_log_level=5",
        "global.dry=true",
    ]
    "#);
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["modbuild", "-l", "7", "version"]).is_err());
    assert!(Cli::try_parse_from(["modbuild", "--file-log-level", "6", "version"]).is_ok());
}

#[test]
fn test_parse_build() {
    let cli = Cli::try_parse_from([
        "modbuild",
        "build",
        "--clean",
        "--ci-output",
        "/tmp/out",
        "mods-toml",
        "*-manifest",
    ])
    .unwrap();

    let Some(Command::Build(args)) = cli.command else {
        panic!("expected build command");
    };
    assert!(args.clean);
    assert_eq!(args.ci_output, Some(PathBuf::from("/tmp/out")));
    assert_eq!(args.tasks, ["mods-toml", "*-manifest"]);
}

#[test]
fn test_parse_render() {
    let cli = Cli::try_parse_from([
        "modbuild",
        "render",
        "jar-manifest",
        "--classifier",
        "sources",
        "--json",
    ])
    .unwrap();

    let Some(Command::Render(args)) = cli.command else {
        panic!("expected render command");
    };
    assert_eq!(args.target, RenderTarget::JarManifest);
    assert_eq!(args.classifier, ArchiveClassifier::Sources);
    assert!(args.json);
}

#[test]
fn test_render_defaults_to_main_archive() {
    let cli = Cli::try_parse_from(["modbuild", "render", "pom"]).unwrap();
    let Some(Command::Render(args)) = cli.command else {
        panic!("expected render command");
    };
    assert_eq!(args.target, RenderTarget::Pom);
    assert_eq!(args.classifier, ArchiveClassifier::Main);
}

#[test]
fn test_render_rejects_unknown_classifier() {
    assert!(
        Cli::try_parse_from(["modbuild", "render", "jar-manifest", "--classifier", "docs"])
            .is_err()
    );
}
