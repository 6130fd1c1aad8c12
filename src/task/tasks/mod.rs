// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Concrete task implementations.
//!
//! ```text
//! ModsTomlTask          META-INF/<manifest_name> in generated resources
//! ArchiveManifestTask   <variant>/META-INF/MANIFEST.MF  (x3 variants)
//! CiOutputTask          key=value lines, only with a configured path
//! PublishTask           local Maven layout or remote staging
//! ```

pub mod archive_manifest;
pub mod ci_output;
pub mod mods_toml;
pub mod publish;

#[cfg(test)]
mod test_utils;

use std::path::Path;

use crate::archive::ArchiveClassifier;
use crate::task::Task;

use archive_manifest::ArchiveManifestTask;
use ci_output::CiOutputTask;
use mods_toml::ModsTomlTask;
use publish::PublishTask;

/// Names of all built-in tasks in pipeline order.
pub const TASK_NAMES: [&str; 6] = [
    mods_toml::NAME,
    ArchiveManifestTask::task_name(ArchiveClassifier::Main),
    ArchiveManifestTask::task_name(ArchiveClassifier::Sources),
    ArchiveManifestTask::task_name(ArchiveClassifier::Javadoc),
    ci_output::NAME,
    publish::NAME,
];

/// Builds the task pipeline in its fixed order.
///
/// The CI output task exists only when `ci_output` is set; the publish task
/// only when `include_publish` is true.
#[must_use]
pub fn pipeline(ci_output: Option<&Path>, include_publish: bool) -> Vec<Task> {
    let mut tasks = vec![Task::ModsToml(ModsTomlTask::new())];
    tasks.extend(
        ArchiveClassifier::ALL
            .into_iter()
            .map(|classifier| Task::ArchiveManifest(ArchiveManifestTask::new(classifier))),
    );
    if let Some(path) = ci_output {
        tasks.push(Task::CiOutput(CiOutputTask::new(path)));
    }
    if include_publish {
        tasks.push(Task::Publish(PublishTask::new()));
    }
    tasks
}
