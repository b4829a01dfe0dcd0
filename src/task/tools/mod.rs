// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External tools and the runner that executes them.
//!
//! ```text
//! AndroidTool / AntTool --build--> ExternalCommand { command_line, working_dir }
//!                                        |
//!                                        v
//!                              dyn CommandRunner::run()
//!                              ShellRunner: sh -c / pwsh -Command
//!                              (tests: a recording fake)
//! properties: set_api_version(), add_references()
//! ```
//!
//! Commands are plain shell lines so they read in the log exactly as a user
//! would type them. Each run blocks its caller until the command exits.

use std::fmt;
use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::{Instrument, info};

use crate::core::process::builder::ProcessBuilder;
use crate::error::PrepResult;
use crate::logging::{LogContext, LogReason};

pub mod android;
pub mod ant;
pub mod properties;

/// A shell command line plus the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    command_line: String,
    working_dir: PathBuf,
}

impl ExternalCommand {
    #[must_use]
    pub fn new(command_line: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            command_line: command_line.into(),
            working_dir: working_dir.into(),
        }
    }

    #[must_use]
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line)
    }
}

/// Quotes a path for a shell line if it contains whitespace.
#[must_use]
pub fn shell_path(path: &Path) -> String {
    let text = path.display().to_string();
    if text.contains(char::is_whitespace) {
        format!("\"{text}\"")
    } else {
        text
    }
}

/// Executes external commands.
///
/// Implementations run one command to completion. Output belongs in the log;
/// a non-zero exit or a failure to start is an error.
pub trait CommandRunner: Send + Sync {
    fn run<'a>(&'a self, command: &'a ExternalCommand) -> BoxFuture<'a, PrepResult<()>>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run<'a>(&'a self, command: &'a ExternalCommand) -> BoxFuture<'a, PrepResult<()>> {
        (**self).run(command)
    }
}

/// Runs commands through the platform shell.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    log: LogContext,
    dry_run: bool,
}

impl ShellRunner {
    #[must_use]
    pub const fn new(log: LogContext, dry_run: bool) -> Self {
        Self { log, dry_run }
    }
}

impl CommandRunner for ShellRunner {
    fn run<'a>(&'a self, command: &'a ExternalCommand) -> BoxFuture<'a, PrepResult<()>> {
        Box::pin(
            async move {
                if self.dry_run {
                    info!(
                        reason = %LogReason::Command,
                        cwd = %command.working_dir().display(),
                        cmd = %command,
                        "[dry-run] Would run"
                    );
                    return Ok(());
                }

                info!(reason = %LogReason::Command, cmd = %command, "Running");
                ProcessBuilder::raw(command.command_line())
                    .cwd(command.working_dir())
                    .name(self.log.tool().unwrap_or("shell"))
                    .run()
                    .await?;
                Ok(())
            }
            .instrument(self.log.span()),
        )
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
