// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dry-run aware file operations shared by tasks.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`write_output`] | Atomically write a generated file |
//! | [`remove_output`] | Remove a generated file or directory |
//! | [`copy_artifact`] | Copy an archive into a repository layout |

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::task::TaskContext;
use crate::utility::fs::copy::{copy_file_async, remove_if_exists};
use crate::utility::fs::write::write_atomic;

/// Writes `contents` to `path` unless running dry.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn write_output(
    ctx: &TaskContext,
    path: &Path,
    contents: &[u8],
    label: &str,
) -> Result<()> {
    if ctx.is_dry_run() {
        info!(
            path = %path.display(),
            bytes = contents.len(),
            "[DRY-RUN] would write {}", label
        );
        return Ok(());
    }

    write_atomic(path, contents).await?;
    info!(path = %path.display(), "Wrote {}", label);
    Ok(())
}

/// Removes `path` unless running dry. A missing path is fine.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub async fn remove_output(ctx: &TaskContext, path: &Path, label: &str) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    if ctx.is_dry_run() {
        info!(path = %path.display(), "[DRY-RUN] would delete {}", label);
    } else if remove_if_exists(path).await? {
        info!(path = %path.display(), "Deleted {}", label);
    }
    Ok(())
}

/// Copies `src` to `dst` unless running dry. Missing sources are skipped.
///
/// Returns whether the source existed.
///
/// # Errors
///
/// Returns an error if the copy fails.
pub async fn copy_artifact(
    ctx: &TaskContext,
    src: &Path,
    dst: &Path,
    label: &str,
) -> Result<bool> {
    if !src.exists() {
        info!(src = %src.display(), "No {} found, skipping", label);
        return Ok(false);
    }

    if ctx.is_dry_run() {
        info!(
            src = %src.display(),
            dst = %dst.display(),
            "[DRY-RUN] would copy {}", label
        );
    } else {
        copy_file_async(src, dst).await?;
        tracing::debug!(src = %src.display(), dst = %dst.display(), "Copied {}", label);
    }
    Ok(true)
}

#[cfg(test)]
mod tests;
