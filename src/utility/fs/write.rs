// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{FsError, Result};

/// Writes `contents` to `path` so readers never observe a partial file.
///
/// The data goes to a temporary file in the destination directory which is
/// then renamed over `path`. Parent directories are created as needed.
///
/// # Example
/// ```no_run
/// use modbuild::utility::fs::write::write_atomic;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// write_atomic(Path::new("build/out.toml"), "key = 1\n".as_bytes()).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written or renamed.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = parent_dir(path);
    fs::create_dir_all(&parent)
        .await
        .map_err(|e| FsError::from_io(&parent, e))
        .with_context(|| format!("failed to create directory {}", parent.display()))?;

    let target = path.to_path_buf();
    let contents = contents.to_vec();
    tokio::task::spawn_blocking(move || -> Result<()> {
        let mut temp = tempfile::NamedTempFile::new_in(&parent)
            .map_err(|e| FsError::from_io(&parent, e))?;
        temp.write_all(&contents)
            .map_err(|e| FsError::from_io(temp.path(), e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| FsError::from_io(temp.path(), e))?;
        temp.persist(&target)
            .map_err(|e| FsError::from_io(&target, e.error))?;
        Ok(())
    })
    .await
    .context("write task panicked")?
    .with_context(|| format!("failed to write {}", path.display()))
}

/// Appends UTF-8 text to `path`, creating the file if needed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub async fn append_text(path: &Path, text: &str) -> Result<()> {
    let parent = parent_dir(path);
    fs::create_dir_all(&parent)
        .await
        .map_err(|e| FsError::from_io(&parent, e))?;

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| FsError::from_io(path, e))
        .with_context(|| format!("failed to open {} for appending", path.display()))?;
    file.write_all(text.as_bytes())
        .await
        .map_err(|e| FsError::from_io(path, e))?;
    file.flush().await.map_err(|e| FsError::from_io(path, e))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
