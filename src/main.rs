// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Run | List | Options | Inis | Version
//! ```

use std::io::IsTerminal;
use std::process::ExitCode;

use libprep::cli::global::GlobalOptions;
use libprep::cli::{self, Command};
use libprep::cmd::config::{run_inis_command, run_options_command};
use libprep::cmd::list::run_list_command;
use libprep::cmd::run::run_prepare_command;
use libprep::config::loader::ConfigLoader;
use libprep::config::{CONFIG_FILE, Config, ENV_PREFIX};
use libprep::logging::{LogConfig, LogGuard, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match &cli.command {
        Some(Command::Run(_) | Command::List(_) | Command::Options) => {
            match load_config(&cli.global) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!("Failed to load config: {e:#}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => None,
    };

    let log_config = build_log_config(&cli.global, config.as_ref());
    let _log_guard: LogGuard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config.as_ref()).await
}

/// CLI levels win; otherwise the loaded configuration decides.
fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .or_else(|| config.map(|c| c.global.output_log_level))
        .unwrap_or(LogLevel::Info);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .or_else(|| config.map(|c| c.global.file_log_level))
        .unwrap_or(console_level);

    let log_file = global
        .log_file
        .clone()
        .or_else(|| config.and_then(|c| c.global.log_file.clone()));

    LogConfig::builder()
        .with_ansi(std::io::stderr().is_terminal())
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: Option<&Config>) -> ExitCode {
    let result = match (&cli.command, config) {
        (Some(Command::Version), _) => {
            handle_version_command();
            Ok(())
        }
        (Some(Command::Inis), _) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader);
            Ok(())
        }
        (Some(Command::Options), Some(config)) => {
            run_options_command(config);
            Ok(())
        }
        (Some(Command::List(args)), Some(config)) => run_list_command(args, config),
        (Some(Command::Run(args)), Some(config)) => run_prepare_command(args, config).await,
        (Some(_), None) => Err(anyhow::anyhow!("Configuration was not loaded")),
        (None, _) => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> libprep::error::Result<Config> {
    let loader = build_config_loader(global);
    global.apply_overrides(loader)?.build()
}
