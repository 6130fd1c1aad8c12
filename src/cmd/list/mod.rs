// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use crate::cli::build::ListArgs;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::task::registry::TaskRegistry;
use crate::task::tasks::TASK_NAMES;

/// Lines printed by `list`: aliases as `name = a, b`, otherwise task names,
/// restricted to `args.tasks` when given.
///
/// # Errors
///
/// Returns an error if task resolution fails.
pub fn list_lines(args: &ListArgs, config: &ProjectConfig) -> Result<Vec<String>> {
    if args.aliases {
        return Ok(config
            .aliases
            .iter()
            .map(|(name, targets)| format!("{name} = {}", targets.join(", ")))
            .collect());
    }

    let mut registry = TaskRegistry::new(config.aliases.clone());
    registry.register_all(TASK_NAMES);

    if args.tasks.is_empty() {
        Ok(TASK_NAMES.iter().map(ToString::to_string).collect())
    } else {
        registry.resolve(&args.tasks)
    }
}

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if task resolution fails.
pub fn run_list_command(args: &ListArgs, config: &ProjectConfig) -> Result<()> {
    let lines = list_lines(args, config)?;

    if lines.is_empty() {
        if args.aliases {
            println!("No aliases defined");
        } else {
            println!("No tasks found");
        }
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
    Ok(())
}
