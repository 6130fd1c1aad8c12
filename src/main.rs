// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Build | Render | Publish | List | Options | Configs | Version
//! ```

use std::process::ExitCode;

use modbuild::cli::global::{DEFAULT_CONFIG_FILE, ENV_PREFIX, GlobalOptions};
use modbuild::cli::{self, Command};
use modbuild::cmd::build::run_build_command;
use modbuild::cmd::config::{run_configs_command, run_options_command};
use modbuild::cmd::list::run_list_command;
use modbuild::cmd::publish::run_publish_command;
use modbuild::cmd::render::run_render_command;
use modbuild::config::ProjectConfig;
use modbuild::config::loader::ConfigLoader;
use modbuild::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_json(global.log_json)
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Configs) => {
            let loader = ConfigLoader::new();
            let loader = add_config_files(loader, &cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Build(args)) => match load_config(&cli.global) {
            Ok(config) => run_build_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Render(args)) => {
            load_config(&cli.global).and_then(|config| run_render_command(args, &config))
        }
        Some(Command::Publish(args)) => match load_config(&cli.global) {
            Ok(config) => run_publish_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::List(args)) => {
            load_config(&cli.global).and_then(|config| run_list_command(args, &config))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn add_config_files(mut loader: ConfigLoader, global: &GlobalOptions) -> ConfigLoader {
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader
}

fn build_config_loader(global: &GlobalOptions) -> modbuild::error::Result<ConfigLoader> {
    let mut loader = add_config_files(ConfigLoader::new(), global).with_env_prefix(ENV_PREFIX);
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> modbuild::error::Result<ProjectConfig> {
    build_config_loader(global)
        .and_then(ConfigLoader::build)
        .map_err(|e| {
            tracing::error!("Failed to load config: {e:#}");
            e
        })
}
