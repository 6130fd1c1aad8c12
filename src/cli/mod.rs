// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modbuild [global options] <command>
//! build [tasks...]
//! render <mods-toml|jar-manifest|ci-output|pom>
//! publish
//! list
//! options | configs | version
//! ```

pub mod build;
pub mod global;
pub mod render;

#[cfg(test)]
mod tests;

use crate::cli::build::{BuildArgs, ListArgs, PublishArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::render::RenderArgs;
use clap::{Parser, Subcommand};

/// Mod Build Metadata Tool
///
/// Generates the loader descriptor, archive manifests, CI outputs and
/// publish layout of a mod project.
#[derive(Debug, Parser)]
#[command(
    name = "modbuild",
    author,
    version,
    about = "Mod Build Metadata Tool",
    long_about = "modbuild Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Generates the metadata a mod archive needs: the loader\n\
                  descriptor, MANIFEST.MF for each archive variant, CI output\n\
                  lines and a Maven publish layout.\n\n\
                  `modbuild build` runs every task. Do `modbuild build <task>...`\n\
                  to run specific tasks. See `modbuild <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, modbuild loads `modbuild.toml` from the current\n\
                  directory if it exists. Additional files can be given with\n\
                  --config, those are loaded after it and override it. Then\n\
                  MODBUILD_<SECTION>__<KEY> environment variables and --set\n\
                  options are applied. Use --no-default-config to only use\n\
                  --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files in load order.
    Configs,

    /// Generates the descriptor, archive manifests and CI output.
    Build(BuildArgs),

    /// Prints a generated document without writing it.
    Render(RenderArgs),

    /// Publishes to the remote staging area or the local repository.
    Publish(PublishArgs),

    /// Lists available tasks.
    List(ListArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
