// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library-project preparation.
//!
//! ```text
//! prepare(library)
//!   UpdateLibProject  android update lib-project -p <library>
//!        | ok
//!   Clean             ant clean -f <library>/build.xml
//!        | ok
//!   Release           ant release -f <library>/build.xml
//! first Err --> returned unchanged, later steps never run
//! ```

use std::fmt;
use std::path::Path;

use tracing::{Instrument, debug, info};

use super::tools::android::AndroidTool;
use super::tools::ant::AntTool;
use super::tools::{CommandRunner, ExternalCommand};
use crate::error::PrepResult;
use crate::logging::LogContext;

/// One toolchain step of library preparation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrepareStep {
    /// Generate the build files for a library project.
    UpdateLibProject,
    Clean,
    Release,
}

impl PrepareStep {
    /// Returns all steps in execution order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::UpdateLibProject, Self::Clean, Self::Release]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateLibProject => "update_lib_project",
            Self::Clean => "clean",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for PrepareStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turns a copied library tree into a built library project.
pub struct LibraryProjectPreparer<R> {
    runner: R,
    android: AndroidTool,
    ant: AntTool,
    log: LogContext,
}

impl<R: CommandRunner> LibraryProjectPreparer<R> {
    #[must_use]
    pub const fn new(runner: R, android: AndroidTool, ant: AntTool, log: LogContext) -> Self {
        Self {
            runner,
            android,
            ant,
            log,
        }
    }

    #[must_use]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Builds the command for `step` on the library at `library`.
    #[must_use]
    pub fn command(&self, step: PrepareStep, library: &Path) -> ExternalCommand {
        match step {
            PrepareStep::UpdateLibProject => self.android.update_lib_project(library),
            PrepareStep::Clean => self.ant.clean(library),
            PrepareStep::Release => self.ant.release(library),
        }
    }

    /// Runs every step on `library`, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the failing step's error unchanged.
    pub async fn prepare(&self, library: &Path) -> PrepResult<()> {
        async {
            for step in PrepareStep::all() {
                let command = self.command(*step, library);
                debug!(step = %step, library = %library.display(), "Starting step");
                self.runner.run(&command).await?;
            }
            info!(library = %library.display(), "Library project prepared");
            Ok(())
        }
        .instrument(self.log.span())
        .await
    }
}
