// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.
//!
//! ```text
//! BuildArgs.tasks --TaskRegistry--> names --filter--> pipeline() --> TaskManager
//!                                                      (fixed order)
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::build::BuildArgs;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::task::manager::TaskManager;
use crate::task::registry::TaskRegistry;
use crate::task::tasks::pipeline;
use crate::task::{Task, Taskable};

/// CI output file: the command line (or `GITHUB_OUTPUT`) wins over
/// `ci.output`.
#[must_use]
pub fn ci_output_path(args: &BuildArgs, config: &ProjectConfig) -> Option<PathBuf> {
    args.ci_output
        .clone()
        .or_else(|| config.ci.output.clone())
        .filter(|p| !p.as_os_str().is_empty())
}

/// Registry over the tasks of `tasks`, with the configured aliases.
#[must_use]
pub fn registry_for(config: &ProjectConfig, tasks: &[Task]) -> TaskRegistry {
    let mut registry = TaskRegistry::new(config.aliases.clone());
    registry.register_all(tasks.iter().map(|task| task.name()));
    registry
}

/// Picks the tasks matching `patterns` out of the pipeline, keeping the
/// pipeline order. No patterns selects everything.
///
/// # Errors
///
/// Returns an error if a pattern names an unknown task or is an invalid glob.
pub fn select_tasks(
    config: &ProjectConfig,
    patterns: &[String],
    ci_output: Option<&Path>,
    include_publish: bool,
) -> Result<Vec<Task>> {
    let tasks = pipeline(ci_output, include_publish);
    if patterns.is_empty() {
        return Ok(tasks);
    }

    let registry = registry_for(config, &tasks);
    let selected: BTreeSet<String> = registry.resolve(patterns)?.into_iter().collect();
    Ok(tasks
        .into_iter()
        .filter(|task| selected.contains(task.name()))
        .collect())
}

/// Runs `tasks` with Ctrl+C wired to the cancellation token.
///
/// # Errors
///
/// Returns the first task failure.
pub(crate) async fn execute(
    config: Arc<ProjectConfig>,
    tasks: Vec<Task>,
    dry_run: bool,
    clean: bool,
) -> Result<()> {
    let mut manager = TaskManager::new(config)
        .with_dry_run(dry_run)
        .with_do_clean(clean);
    manager.extend(tasks);

    if manager.task_count() == 0 {
        tracing::warn!("No tasks selected");
        return Ok(());
    }
    tracing::info!(tasks = ?manager.task_names(), "Resolved tasks to run");

    let cancel_token = manager.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Received Ctrl+C, interrupting tasks...");
            cancel_token.cancel();
        }
    });

    manager.run_all().await
}

/// Main handler for the build command.
///
/// # Errors
///
/// Returns an error if task resolution fails or a task fails.
pub async fn run_build_command(args: &BuildArgs, config: &ProjectConfig) -> Result<()> {
    let ci_output = ci_output_path(args, config);
    if ci_output.is_none() {
        tracing::debug!("No CI output file, skipping ci-output task");
    }

    let tasks = select_tasks(config, &args.tasks, ci_output.as_deref(), false)?;
    execute(
        Arc::new(config.clone()),
        tasks,
        config.global.dry,
        args.clean,
    )
    .await?;

    tracing::info!("Build completed successfully");
    Ok(())
}
