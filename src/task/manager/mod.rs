// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task manager for orchestrating task execution.
//!
//! ```text
//! TaskManager::new(config)
//!   .with_cancel_token()  .with_dry_run()  .with_do_clean()
//!   .add(task) ...
//!   .run_all().await
//!       per task: [Clean] --> Generate, strictly one after another
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use crate::config::ProjectConfig;
use crate::error::{Result, TaskError};

use super::{Task, TaskContext, Taskable};

/// Runs tasks sequentially in the order they were added.
pub struct TaskManager {
    tasks: Vec<Task>,
    cancel_token: CancellationToken,
    config: Arc<ProjectConfig>,
    dry_run: bool,
    do_clean: bool,
}

impl TaskManager {
    #[must_use]
    pub fn new(config: Arc<ProjectConfig>) -> Self {
        Self {
            tasks: Vec::new(),
            cancel_token: CancellationToken::new(),
            config,
            dry_run: false,
            do_clean: false,
        }
    }

    /// Shares an existing token, e.g. one cancelled by a Ctrl+C handler.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enables the clean phase.
    #[must_use]
    pub const fn with_do_clean(mut self, enable: bool) -> Self {
        self.do_clean = enable;
        self
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn extend(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.tasks.extend(tasks);
    }

    #[must_use]
    pub const fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Names of the queued tasks in execution order.
    #[must_use]
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(Taskable::name).collect()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub const fn is_clean_enabled(&self) -> bool {
        self.do_clean
    }

    /// Requests cancellation; running tasks stop at the next phase boundary.
    pub fn interrupt_all(&self) {
        tracing::info!("Interrupting all tasks");
        self.cancel_token.cancel();
    }

    fn create_context(&self) -> TaskContext {
        TaskContext::new(Arc::clone(&self.config), self.cancel_token.clone())
            .with_dry_run(self.dry_run)
            .with_do_clean(self.do_clean)
    }

    /// Runs all tasks sequentially.
    ///
    /// # Errors
    ///
    /// Returns the first task failure with the task name as context, or
    /// `TaskError::Interrupted` if cancellation was requested.
    pub async fn run_all(&self) -> Result<()> {
        if self.tasks.is_empty() {
            tracing::debug!("No tasks to run");
            return Ok(());
        }

        tracing::info!(
            task_count = self.tasks.len(),
            dry_run = self.dry_run,
            "Starting task execution"
        );

        let ctx = self.create_context();

        for (i, task) in self.tasks.iter().enumerate() {
            if self.is_cancelled() {
                return Err(TaskError::Interrupted(task.name().to_string()))
                    .context("Task execution interrupted");
            }

            tracing::info!(
                task = %task.name(),
                index = i + 1,
                total = self.tasks.len(),
                "Running task"
            );

            task.run(&ctx)
                .await
                .with_context(|| format!("Task '{}' failed", task.name()))?;
        }

        tracing::info!("All tasks completed successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
