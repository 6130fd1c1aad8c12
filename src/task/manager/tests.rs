// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use super::TaskManager;
use crate::config::ProjectConfig;
use crate::error::TaskError;
use crate::task::tasks::pipeline;

fn project(root: &Path) -> Arc<ProjectConfig> {
    Arc::new(
        ProjectConfig::parse(&format!(
            r#"
[project]
id = "examplemod"
group = "com.example"
name = "Example Mod"
version = "1.2.3"
authors = "Alice"
description = "Adds examples."
url = "https://example.com"

[license]
name = "MIT"

[loader]
version = "[4,)"

[paths]
root = '{}'
"#,
            root.display()
        ))
        .unwrap(),
    )
}

#[test]
fn test_task_manager_new() {
    let manager = TaskManager::new(Arc::new(ProjectConfig::default()));

    insta::assert_yaml_snapshot!(
        serde_json::json!({
            "task_count": manager.task_count(),
            "is_cancelled": manager.is_cancelled(),
            "dry_run": manager.is_dry_run(),
            "clean": manager.is_clean_enabled(),
        }),
        @r"
    clean: false
    dry_run: false
    is_cancelled: false
    task_count: 0
    "
    );
}

#[test]
fn test_task_manager_builder() {
    let token = CancellationToken::new();
    let mut manager = TaskManager::new(Arc::new(ProjectConfig::default()))
        .with_dry_run(true)
        .with_do_clean(true)
        .with_cancel_token(token.clone());
    manager.extend(pipeline(None, false));

    assert!(manager.is_dry_run());
    assert!(manager.is_clean_enabled());
    assert_eq!(
        manager.task_names(),
        ["mods-toml", "jar-manifest", "sources-manifest", "javadoc-manifest"]
    );

    token.cancel();
    assert!(manager.is_cancelled());
}

#[tokio::test]
async fn test_run_all_empty() {
    let manager = TaskManager::new(Arc::new(ProjectConfig::default()));
    manager.run_all().await.unwrap();
}

#[tokio::test]
async fn test_run_all_cancelled() {
    let temp = TempDir::new().unwrap();
    let mut manager = TaskManager::new(project(temp.path()));
    manager.extend(pipeline(None, false));

    manager.interrupt_all();

    let err = manager.run_all().await.unwrap_err();
    assert!(err.to_string().contains("interrupted"));
    assert!(matches!(
        err.downcast_ref::<TaskError>(),
        Some(TaskError::Interrupted(name)) if name == "mods-toml"
    ));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_run_all_generates_and_cleans() {
    let temp = TempDir::new().unwrap();
    let config = project(temp.path());

    let mut manager = TaskManager::new(Arc::clone(&config));
    manager.extend(pipeline(None, false));
    manager.run_all().await.unwrap();

    let descriptor = temp
        .path()
        .join("build/generated/resources/META-INF/neoforge.mods.toml");
    let stale = temp.path().join("build/generated/archive/main/META-INF/MANIFEST.MF");
    assert!(descriptor.exists());
    assert!(stale.exists());

    std::fs::write(&stale, "stale").unwrap();

    let mut manager = TaskManager::new(config).with_do_clean(true);
    manager.extend(pipeline(None, false));
    manager.run_all().await.unwrap();

    let regenerated = std::fs::read_to_string(&stale).unwrap();
    assert!(regenerated.starts_with("Manifest-Version: 1.0"));
}

#[tokio::test]
async fn test_failure_names_task() {
    let temp = TempDir::new().unwrap();
    let mut config = (*project(temp.path())).clone();
    config.project.url.clear();

    let mut manager = TaskManager::new(Arc::new(config));
    manager.extend(pipeline(None, false));

    let err = manager.run_all().await.unwrap_err();
    assert_eq!(err.to_string(), "Task 'mods-toml' failed");
    assert!(format!("{err:#}").contains("missing required config key 'url'"));
}
