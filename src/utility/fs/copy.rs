// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tokio::fs;

/// Copies a single file, creating the destination's parent directories.
///
/// # Example
/// ```no_run
/// use modbuild::utility::fs::copy::copy_file_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_file_async(Path::new("build/libs/a.jar"), Path::new("repo/a/1.0/a-1.0.jar")).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an error if the directory cannot be created or the copy fails.
pub async fn copy_file_async(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::copy(src, dst)
        .await
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;
    Ok(())
}

/// Removes a file or directory tree. A missing path is not an error.
///
/// Returns whether something was removed.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub async fn remove_if_exists(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to inspect {}", path.display()));
        }
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    }
    .with_context(|| format!("failed to remove {}", path.display()))?;
    Ok(true)
}
