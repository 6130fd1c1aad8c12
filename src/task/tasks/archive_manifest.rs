// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Archive manifest task, one instance per variant.
//!
//! The timestamp is taken when the generate phase runs. A configured
//! `license.file` is staged beside each variant's `META-INF/`.

use chrono::Local;
use futures_util::future::BoxFuture;

use crate::archive::{
    ArchiveClassifier, build_attributes, license_file_paths, manifest_path, render_manifest_mf,
};
use crate::error::Result;
use crate::task::helpers::{copy_artifact, remove_output, write_output};
use crate::task::{TaskContext, Taskable};

/// Writes `MANIFEST.MF` for one archive variant.
#[derive(Debug, Clone)]
pub struct ArchiveManifestTask {
    classifier: ArchiveClassifier,
}

impl ArchiveManifestTask {
    #[must_use]
    pub const fn new(classifier: ArchiveClassifier) -> Self {
        Self { classifier }
    }

    #[must_use]
    pub const fn classifier(&self) -> ArchiveClassifier {
        self.classifier
    }

    /// Task name for a variant.
    #[must_use]
    pub const fn task_name(classifier: ArchiveClassifier) -> &'static str {
        match classifier {
            ArchiveClassifier::Main => "jar-manifest",
            ArchiveClassifier::Sources => "sources-manifest",
            ArchiveClassifier::Javadoc => "javadoc-manifest",
        }
    }

    /// Deletes this variant's manifest and staged license file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is unresolved or a file cannot be removed.
    pub async fn do_clean(&self, ctx: &TaskContext) -> Result<()> {
        let path = manifest_path(ctx.config(), self.classifier)?;
        remove_output(ctx, &path, "archive manifest").await?;

        if let Some((_, staged)) = license_file_paths(ctx.config(), self.classifier)? {
            remove_output(ctx, &staged, "license file").await?;
        }
        Ok(())
    }

    /// Writes this variant's manifest stamped with the current time, then
    /// stages the license file. A missing license file is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is unresolved or writing fails.
    pub async fn do_generate(&self, ctx: &TaskContext) -> Result<()> {
        let config = ctx.config();
        let timestamp = Local::now().fixed_offset();
        let attributes = build_attributes(config, self.classifier, timestamp);
        let path = manifest_path(config, self.classifier)?;

        tracing::debug!(
            task = Self::task_name(self.classifier),
            classifier = %self.classifier,
            attributes = attributes.len(),
            "Built archive attributes"
        );
        write_output(
            ctx,
            &path,
            render_manifest_mf(&attributes).as_bytes(),
            "archive manifest",
        )
        .await?;

        if let Some((src, dst)) = license_file_paths(config, self.classifier)? {
            copy_artifact(ctx, &src, &dst, "license file").await?;
        }
        Ok(())
    }
}

impl Taskable for ArchiveManifestTask {
    fn name(&self) -> &'static str {
        Self::task_name(self.classifier)
    }

    fn do_clean<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_clean(ctx))
    }

    fn do_generate<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_generate(ctx))
    }
}
