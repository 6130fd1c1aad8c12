// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task execution system.
//!
//! # Architecture
//!
//! ```text
//! TaskManager
//!      |
//!      v
//!   Task enum ----> TaskContext (Arc<ProjectConfig>, cancel token, dry-run)
//!      |
//!      v
//!   Phases: Clean (only with --clean) --> Generate
//!
//! Pipeline order:
//!   mods-toml --> jar-manifest --> sources-manifest --> javadoc-manifest
//!             --> ci-output --> publish
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`TaskManager`](manager::TaskManager) | Runs tasks in order with cancellation |
//! | [`Task`] | Enum dispatching to concrete task implementations |
//! | [`Taskable`] | Trait defining the common task interface |
//! | [`Phase`] | Two-phase lifecycle: Clean → Generate |
//! | [`TaskContext`] | Execution context with config and cancellation token |
//!
//! The [`Task`] enum implements `Taskable` via `impl_taskable_for_task!`,
//! which generates one match arm per variant.

pub mod helpers;
pub mod manager;
pub mod registry;
pub mod tasks;

use futures_util::future::BoxFuture;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::ProjectConfig;
use crate::error::{Result, TaskError};

use tasks::archive_manifest::ArchiveManifestTask;
use tasks::ci_output::CiOutputTask;
use tasks::mods_toml::ModsTomlTask;
use tasks::publish::PublishTask;

/// Task execution phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Remove the files this task produced.
    Clean,

    /// Produce the task's outputs.
    Generate,
}

impl Phase {
    /// Returns all phases in execution order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Clean, Self::Generate]
    }

    /// Returns the display name for this phase.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Generate => "generate",
        }
    }
}

/// Common interface for all task types.
///
/// Methods return `BoxFuture` so the `Task` enum can delegate without
/// knowing the concrete future types.
pub trait Taskable {
    /// Returns the task name.
    fn name(&self) -> &str;

    /// Returns whether this task should run for the given context.
    fn enabled(&self, _ctx: &TaskContext) -> bool {
        true
    }

    /// Removes this task's outputs.
    fn do_clean<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>>;

    /// Produces this task's outputs.
    fn do_generate<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>>;
}

/// Context provided to tasks during execution.
#[derive(Clone)]
pub struct TaskContext {
    config: Arc<ProjectConfig>,
    cancel_token: CancellationToken,
    dry_run: bool,
    do_clean: bool,
}

impl TaskContext {
    #[must_use]
    pub const fn new(config: Arc<ProjectConfig>, cancel_token: CancellationToken) -> Self {
        Self {
            config,
            cancel_token,
            dry_run: false,
            do_clean: false,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<ProjectConfig> {
        &self.config
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    /// In dry-run mode tasks log what they would write and touch nothing.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Whether the clean phase runs before generating.
    #[must_use]
    pub const fn do_clean(&self) -> bool {
        self.do_clean
    }

    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub const fn with_do_clean(mut self, enable: bool) -> Self {
        self.do_clean = enable;
        self
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// A build task.
#[derive(Debug, Clone)]
pub enum Task {
    /// Mod-loader descriptor.
    ModsToml(ModsTomlTask),
    /// `MANIFEST.MF` for one archive variant.
    ArchiveManifest(ArchiveManifestTask),
    /// `key=value` lines for the CI runner.
    CiOutput(CiOutputTask),
    /// Local repository or remote staging.
    Publish(PublishTask),
}

impl Task {
    /// Runs the task through its enabled phases.
    ///
    /// Checks for cancellation before each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if a phase fails or the task is interrupted.
    pub async fn run(&self, ctx: &TaskContext) -> Result<()> {
        if !Taskable::enabled(self, ctx) {
            tracing::debug!(task = %Taskable::name(self), "Skipping disabled task");
            return Ok(());
        }

        for phase in Phase::all() {
            if *phase == Phase::Clean && !ctx.do_clean() {
                continue;
            }
            if ctx.is_cancelled() {
                return Err(TaskError::Interrupted(Taskable::name(self).to_string()).into());
            }
            tracing::debug!(task = %Taskable::name(self), phase = phase.name(), "Starting phase");
            match phase {
                Phase::Clean => Taskable::do_clean(self, ctx).await?,
                Phase::Generate => Taskable::do_generate(self, ctx).await?,
            }
        }

        Ok(())
    }
}

macro_rules! impl_taskable_for_task {
    ($($variant:ident),+ $(,)?) => {
        impl Taskable for Task {
            fn name(&self) -> &str {
                match self {
                    $(Task::$variant(t) => Taskable::name(t),)+
                }
            }

            fn enabled(&self, ctx: &TaskContext) -> bool {
                match self {
                    $(Task::$variant(t) => Taskable::enabled(t, ctx),)+
                }
            }

            fn do_clean<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
                match self {
                    $(Task::$variant(t) => Taskable::do_clean(t, ctx),)+
                }
            }

            fn do_generate<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
                match self {
                    $(Task::$variant(t) => Taskable::do_generate(t, ctx),)+
                }
            }
        }
    };
}

impl_taskable_for_task!(ModsToml, ArchiveManifest, CiOutput, Publish);

#[cfg(test)]
mod tests;
