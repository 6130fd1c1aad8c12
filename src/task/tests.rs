// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::tasks::ci_output::CiOutputTask;
use super::tasks::mods_toml::ModsTomlTask;
use super::{Phase, Task, TaskContext, Taskable};
use crate::config::ProjectConfig;
use crate::error::TaskError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn test_config() -> Arc<ProjectConfig> {
    Arc::new(ProjectConfig::default())
}

#[test]
fn test_phase_all() {
    let names: Vec<_> = Phase::all().iter().map(Phase::name).collect();
    insta::assert_debug_snapshot!(names, @r#"
    [
        "clean",
        "generate",
    ]
    "#);
}

#[test]
fn test_task_context_creation() {
    let ctx = TaskContext::new(test_config(), CancellationToken::new());

    assert!(!ctx.is_dry_run());
    assert!(!ctx.do_clean());
    assert!(!ctx.is_cancelled());

    let ctx = ctx.with_dry_run(true).with_do_clean(true);
    assert!(ctx.is_dry_run());
    assert!(ctx.do_clean());
}

#[test]
fn test_task_context_cancellation() {
    let token = CancellationToken::new();
    let ctx = TaskContext::new(test_config(), token.clone());

    token.cancel();
    assert!(ctx.is_cancelled());
    assert!(ctx.cancel_token().is_cancelled());
}

#[test]
fn test_task_enum_dispatches_name() {
    let tasks = [
        Task::ModsToml(ModsTomlTask::new()),
        Task::CiOutput(CiOutputTask::new("out")),
    ];
    let names: Vec<_> = tasks.iter().map(Taskable::name).collect();
    assert_eq!(names, ["mods-toml", "ci-output"]);
}

#[tokio::test]
async fn test_run_checks_cancellation_first() {
    let token = CancellationToken::new();
    token.cancel();
    let ctx = TaskContext::new(test_config(), token);

    let err = Task::ModsToml(ModsTomlTask::new())
        .run(&ctx)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TaskError>(),
        Some(TaskError::Interrupted(name)) if name == "mods-toml"
    ));
}
