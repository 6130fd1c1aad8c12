// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish command implementation.

use std::sync::Arc;

use crate::cli::build::PublishArgs;
use crate::cmd::build::execute;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::task::Task;
use crate::task::tasks::publish::PublishTask;

/// Main handler for the publish command.
///
/// The publish task resolves the target and logs it.
///
/// # Errors
///
/// Returns an error if the publish paths are unresolved or a file operation
/// fails. Incomplete credentials are not an error: the local repository is
/// used instead.
pub async fn run_publish_command(args: &PublishArgs, config: &ProjectConfig) -> Result<()> {
    tracing::info!(version = %config.full_version(), "Publishing");

    execute(
        Arc::new(config.clone()),
        vec![Task::Publish(PublishTask::new())],
        config.global.dry,
        args.clean,
    )
    .await?;

    tracing::info!("Publish completed successfully");
    Ok(())
}
