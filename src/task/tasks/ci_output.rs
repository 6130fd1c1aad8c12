// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CI output task.
//!
//! Only added to the pipeline when an output path is known. The file belongs
//! to the CI runner, so the clean phase leaves it alone.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::info;

use crate::ci::CiOutputRecord;
use crate::error::Result;
use crate::task::{TaskContext, Taskable};

pub const NAME: &str = "ci-output";

/// Appends `modid`, `version` and `minecraft_version` to the CI output file.
#[derive(Debug, Clone)]
pub struct CiOutputTask {
    path: PathBuf,
}

impl CiOutputTask {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the record.
    ///
    /// # Errors
    ///
    /// Returns an error if a value contains a line break or the file cannot
    /// be written.
    pub async fn do_generate(&self, ctx: &TaskContext) -> Result<()> {
        let record = CiOutputRecord::from_config(ctx.config());
        record.validate()?;

        if ctx.is_dry_run() {
            info!(
                path = %self.path.display(),
                "[DRY-RUN] would append CI output: {}",
                record.render().trim_end().replace('\n', ", ")
            );
            return Ok(());
        }

        record.append_to(&self.path).await?;
        info!(path = %self.path.display(), "Appended CI output");
        Ok(())
    }
}

impl Taskable for CiOutputTask {
    fn name(&self) -> &'static str {
        NAME
    }

    fn do_clean<'a>(&'a self, _ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(std::future::ready(Ok(())))
    }

    fn do_generate<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_generate(ctx))
    }
}
