// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder.
//!
//! ```text
//! ProcessBuilder::raw(line)   sh -c <line> / pwsh -Command <line>
//!   .cwd()  .name()
//!   .run()
//! ```
//!
//! Every non-zero exit is an error; toolchain steps have no tolerated
//! failure codes.

use std::path::{Path, PathBuf};

/// Builder for one shell command line.
#[derive(Debug)]
pub struct ProcessBuilder {
    command_line: String,
    cwd: Option<PathBuf>,
    name: Option<String>,
}

impl ProcessBuilder {
    /// Runs `command_line` through `/bin/sh -c`, or `pwsh -Command` on
    /// Windows. Logs and errors show the line exactly as given.
    pub fn raw(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            cwd: None,
            name: None,
        }
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Name used for the `process` field of log events.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    pub(super) fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub(super) fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("shell")
    }
}
