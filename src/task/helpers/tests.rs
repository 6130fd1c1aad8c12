// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{copy_artifact, remove_output, write_output};
use crate::config::ProjectConfig;
use crate::task::TaskContext;
use std::sync::Arc;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

fn ctx(dry_run: bool) -> TaskContext {
    TaskContext::new(Arc::new(ProjectConfig::default()), CancellationToken::new())
        .with_dry_run(dry_run)
}

#[tokio::test]
async fn test_write_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out/file.txt");

    write_output(&ctx(false), &path, b"hello", "test file").await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
}

#[tokio::test]
async fn test_write_output_dry_run() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out/file.txt");

    write_output(&ctx(true), &path, b"hello", "test file").await.unwrap();
    assert!(!path.exists());
    assert!(!temp.path().join("out").exists());
}

#[tokio::test]
async fn test_remove_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.txt");
    std::fs::write(&path, "x").unwrap();

    remove_output(&ctx(true), &path, "test file").await.unwrap();
    assert!(path.exists(), "dry run keeps the file");

    remove_output(&ctx(false), &path, "test file").await.unwrap();
    assert!(!path.exists());

    // already gone
    remove_output(&ctx(false), &path, "test file").await.unwrap();
}

#[tokio::test]
async fn test_copy_artifact() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("libs/a.jar");
    let dst = temp.path().join("repo/a/1.0/a-1.0.jar");

    assert!(!copy_artifact(&ctx(false), &src, &dst, "archive").await.unwrap());
    assert!(!dst.exists());

    std::fs::create_dir_all(src.parent().unwrap()).unwrap();
    std::fs::write(&src, "jar").unwrap();

    assert!(copy_artifact(&ctx(true), &src, &dst, "archive").await.unwrap());
    assert!(!dst.exists());

    assert!(copy_artifact(&ctx(false), &src, &dst, "archive").await.unwrap());
    assert_eq!(std::fs::read_to_string(&dst).unwrap(), "jar");
}
