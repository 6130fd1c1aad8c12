// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Descriptor task.
//!
//! ```text
//! ModsTomlTask
//! ProjectConfig → generate() → render() → <generated_resources>/META-INF/<manifest_name>
//! Phases: Clean (delete descriptor) → Generate (validate, then write)
//! ```

use futures_util::future::BoxFuture;

use crate::error::Result;
use crate::manifest::{descriptor_path, generate, render};
use crate::task::helpers::{remove_output, write_output};
use crate::task::{TaskContext, Taskable};

pub const NAME: &str = "mods-toml";

/// Writes the mod-loader descriptor.
#[derive(Debug, Clone, Default)]
pub struct ModsTomlTask;

impl ModsTomlTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Deletes the descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is unresolved or the file cannot be removed.
    pub async fn do_clean(&self, ctx: &TaskContext) -> Result<()> {
        let path = descriptor_path(ctx.config())?;
        remove_output(ctx, &path, "descriptor").await
    }

    /// Generates and writes the descriptor.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` before touching the filesystem if a
    /// required field is absent, or an error if writing fails.
    pub async fn do_generate(&self, ctx: &TaskContext) -> Result<()> {
        let config = ctx.config();
        let document = generate(config)?;
        let text = render(&document)?;
        let path = descriptor_path(config)?;

        tracing::debug!(
            task = NAME,
            mods = document.mods.len(),
            publish_block = document.publish.is_some(),
            "Rendered descriptor"
        );
        write_output(ctx, &path, text.as_bytes(), "descriptor").await
    }
}

impl Taskable for ModsTomlTask {
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
