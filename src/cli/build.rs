// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the task-running commands.
//!
//! ```text
//! build   [TASK...] [--clean] [--ci-output FILE | $GITHUB_OUTPUT]
//! publish [--clean]
//! list    [--aliases] [TASK...]
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Deletes each task's previous outputs before generating.
    #[arg(long)]
    pub clean: bool,

    /// File receiving `key=value` lines for the CI runner. Without it (and
    /// without `ci.output` in the config) the ci-output task is skipped.
    #[arg(long = "ci-output", value_name = "FILE", env = "GITHUB_OUTPUT")]
    pub ci_output: Option<PathBuf>,

    /// Tasks to run, all by default. Aliases and globs like '*-manifest'
    /// are supported.
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,
}

/// Arguments for the `publish` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PublishArgs {
    /// Deletes the previously published version before publishing.
    #[arg(long)]
    pub clean: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Shows only aliases.
    #[arg(short = 'a', long)]
    pub aliases: bool,

    /// When given, acts like the tasks given to `build` and shows only the
    /// tasks that would run.
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,
}
