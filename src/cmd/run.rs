// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command implementation for libprep.
//!
//! ```text
//! SdkRoot::resolve() --> work dir --> library_descriptors()
//!        |                                   |
//!   MissingEnvironment                       v
//!   (nothing touched)              PipelineManager::run()
//!                                            |
//!                                  Ok(report) --> summary, exit 0
//!                                  Err(first) --> exit 1
//! ```

use anyhow::Context;

use crate::cli::run::RunArgs;
use crate::config::Config;
use crate::core::env::SdkRoot;
use crate::error::Result;
use crate::logging::LogContext;
use crate::task::LibraryDescriptor;
use crate::task::manager::PipelineManager;
use crate::task::tools::ShellRunner;
use crate::task::tools::android::AndroidTool;
use crate::task::tools::ant::AntTool;

/// Main handler for the run command.
///
/// # Errors
///
/// Returns an error if the SDK root is not set or any pipeline stage fails.
pub async fn run_prepare_command(args: &RunArgs, config: &Config) -> Result<()> {
    let log = LogContext::with_task(env!("CARGO_PKG_NAME"));

    let sdk = SdkRoot::resolve(config.sdk.root.as_deref(), &config.sdk.env_var)?;
    let work_dir = config
        .paths
        .resolve_work_dir()
        .context("Failed to determine working directory")?;
    let libraries = resolve_libraries(args, config, &sdk, &work_dir);

    let runner = ShellRunner::new(log.for_tool("shell"), config.global.dry);
    let manager = PipelineManager::new(
        runner,
        AndroidTool::new(config.android_tool_path(sdk.path())),
        AntTool::new(&config.toolchain.ant),
        log,
    )
    .with_properties_file(&config.toolchain.properties_file);

    let report = manager
        .run(&libraries)
        .await
        .context("Library preparation failed")?;

    println!(
        "Prepared {} librar{}: {}",
        report.prepared().len(),
        if report.prepared().len() == 1 { "y" } else { "ies" },
        report.prepared().join(", ")
    );
    if !report.copy_failures().is_empty() {
        println!(
            "{} entries could not be copied, see the log for details",
            report.copy_failures().len()
        );
    }
    Ok(())
}

/// Builds the descriptors, applying `--api-version` to every library.
fn resolve_libraries(
    args: &RunArgs,
    config: &Config,
    sdk: &SdkRoot,
    work_dir: &std::path::Path,
) -> Vec<LibraryDescriptor> {
    match args.api_version {
        Some(api_version) => {
            let mut config = config.clone();
            for library in &mut config.libraries {
                library.api_version = Some(api_version);
            }
            config.library_descriptors(sdk.path(), work_dir)
        }
        None => config.library_descriptors(sdk.path(), work_dir),
    }
}
