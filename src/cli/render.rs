// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `render` command.

use clap::{Args, ValueEnum};

use crate::archive::ArchiveClassifier;

/// Document printed by `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderTarget {
    /// The mod-loader descriptor.
    ModsToml,
    /// `MANIFEST.MF` of the archive selected by --classifier.
    JarManifest,
    /// The CI output lines.
    CiOutput,
    /// The Maven POM.
    Pom,
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Document to print.
    #[arg(value_enum, value_name = "DOCUMENT")]
    pub target: RenderTarget,

    /// Archive variant for jar-manifest: main, sources or javadoc.
    #[arg(long, value_name = "CLASSIFIER", default_value = "main")]
    pub classifier: ArchiveClassifier,

    /// Prints JSON instead of the native format.
    #[arg(long)]
    pub json: bool,
}
