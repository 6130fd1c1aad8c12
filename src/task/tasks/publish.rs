// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish task.
//!
//! ```text
//! resolve_target()
//!   Local { dir }        → dir/<group path>/<id>/<version>/{pom, jars}
//!   Remote { url, .. }   → publish_staging/<id>-<version>.pom, upload by host build
//! ```
//!
//! Archives are taken from `paths.libs`; absent ones are skipped.

use std::path::Path;

use futures_util::future::BoxFuture;
use tracing::info;

use crate::archive::ArchiveClassifier;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::publish::{Coordinates, PublishTarget, render_pom, resolve_target};
use crate::task::helpers::{copy_artifact, remove_output, write_output};
use crate::task::{TaskContext, Taskable};

pub const NAME: &str = "publish";

/// Publishes the POM and archives.
#[derive(Debug, Clone, Default)]
pub struct PublishTask;

impl PublishTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves where this build publishes to.
    ///
    /// # Errors
    ///
    /// Returns an error if `paths.local_repository` was not resolved.
    pub fn target(config: &ProjectConfig) -> Result<PublishTarget> {
        let local = config.paths.local_repository()?;
        Ok(resolve_target(&config.publish, local))
    }

    /// Deletes the staged POM and this version's local repository directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is unresolved or cannot be removed.
    pub async fn do_clean(&self, ctx: &TaskContext) -> Result<()> {
        let config = ctx.config();
        let coordinates = Coordinates::from_config(config);

        let staged = config
            .paths
            .publish_staging()?
            .join(coordinates.file_name(ArchiveClassifier::Main, "pom"));
        remove_output(ctx, &staged, "staged POM").await?;

        let version_dir = config
            .paths
            .local_repository()?
            .join(coordinates.version_dir());
        remove_output(ctx, &version_dir, "local repository version").await
    }

    /// Writes the POM and, for a local target, copies the archives.
    ///
    /// # Errors
    ///
    /// Returns an error if the POM cannot be rendered or a file operation fails.
    pub async fn do_generate(&self, ctx: &TaskContext) -> Result<()> {
        let config = ctx.config();
        let coordinates = Coordinates::from_config(config);
        let pom = render_pom(config)?;

        match Self::target(config)? {
            PublishTarget::Local { dir } => {
                info!(
                    task = NAME,
                    repository = %dir.display(),
                    %coordinates,
                    "Publishing to local repository"
                );
                write_output(ctx, &coordinates.pom_path(&dir), pom.as_bytes(), "POM").await?;
                let copied = Self::copy_archives(ctx, config, &coordinates, &dir).await?;
                info!(task = NAME, archives = copied, "Local publish complete");
            }
            PublishTarget::Remote { url, username } => {
                let staged = config
                    .paths
                    .publish_staging()?
                    .join(coordinates.file_name(ArchiveClassifier::Main, "pom"));
                write_output(ctx, &staged, pom.as_bytes(), "POM").await?;
                info!(
                    task = NAME,
                    repository = %url,
                    %username,
                    %coordinates,
                    "Remote credentials complete, upload is performed by the host build"
                );
            }
        }
        Ok(())
    }

    async fn copy_archives(
        ctx: &TaskContext,
        config: &ProjectConfig,
        coordinates: &Coordinates,
        repository: &Path,
    ) -> Result<usize> {
        let libs = config.paths.libs()?;
        let mut copied = 0;
        for classifier in ArchiveClassifier::ALL {
            let src = libs.join(coordinates.file_name(classifier, "jar"));
            let dst = coordinates.artifact_path(repository, classifier);
            if copy_artifact(ctx, &src, &dst, "archive").await? {
                copied += 1;
            }
        }
        Ok(copied)
    }
}

impl Taskable for PublishTask {
    fn name(&self) -> &'static str {
        NAME
    }

    fn do_clean<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_clean(ctx))
    }

    fn do_generate<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_generate(ctx))
    }
}
