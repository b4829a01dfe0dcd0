// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pipeline manager for orchestrating library preparation.
//!
//! ```text
//! PipelineManager::new(runner, android, ant, log)
//!   .with_properties_file()
//!   .run(&libraries).await
//!       per library: copy --> api version --> references --> prepare
//!       first Err stops the run
//! ```

use std::path::Path;

use tracing::{Instrument, error, info};

use super::LibraryDescriptor;
use super::preparer::LibraryProjectPreparer;
use super::tools::android::AndroidTool;
use super::tools::ant::AntTool;
use super::tools::properties::{self, PROPERTIES_FILE};
use super::tools::CommandRunner;
use crate::error::{CopyEntryError, PrepResult};
use crate::logging::LogContext;
use crate::utility::fs::copy::copy_tree;

/// Outcome of a successful pipeline run.
#[derive(Debug, Default)]
pub struct PipelineReport {
    prepared: Vec<String>,
    copy_failures: Vec<CopyEntryError>,
}

impl PipelineReport {
    /// Names of the prepared libraries, in execution order.
    #[must_use]
    pub fn prepared(&self) -> &[String] {
        &self.prepared
    }

    /// Entries the copier skipped across all libraries.
    #[must_use]
    pub fn copy_failures(&self) -> &[CopyEntryError] {
        &self.copy_failures
    }
}

/// Runs the preparation stages for a list of libraries.
///
/// Libraries are processed one at a time in list order, so a library's
/// dependencies must come before it.
pub struct PipelineManager<R> {
    preparer: LibraryProjectPreparer<R>,
    properties_file: String,
    log: LogContext,
}

impl<R: CommandRunner> PipelineManager<R> {
    #[must_use]
    pub fn new(runner: R, android: AndroidTool, ant: AntTool, log: LogContext) -> Self {
        Self {
            preparer: LibraryProjectPreparer::new(runner, android, ant, log.for_tool("toolchain")),
            properties_file: PROPERTIES_FILE.to_string(),
            log,
        }
    }

    /// Overrides the name of the properties file inside each library.
    #[must_use]
    pub fn with_properties_file(mut self, name: impl Into<String>) -> Self {
        self.properties_file = name.into();
        self
    }

    #[must_use]
    pub const fn preparer(&self) -> &LibraryProjectPreparer<R> {
        &self.preparer
    }

    /// Runs every stage for every library.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error unchanged. Libraries after the failing
    /// one are not touched.
    pub async fn run(&self, libraries: &[LibraryDescriptor]) -> PrepResult<PipelineReport> {
        if libraries.is_empty() {
            tracing::debug!("No libraries to prepare");
            return Ok(PipelineReport::default());
        }

        info!(library_count = libraries.len(), "Starting library preparation");

        let mut report = PipelineReport::default();
        for (i, library) in libraries.iter().enumerate() {
            let log = self.log.for_library(library.name());
            info!(
                library = %library.name(),
                index = i + 1,
                total = libraries.len(),
                "Preparing library"
            );

            let result = self
                .run_library(library, &log, &mut report)
                .instrument(log.span())
                .await;
            if let Err(err) = result {
                error!(library = %library.name(), error = %err, "Library preparation failed");
                return Err(err);
            }
            report.prepared.push(library.name().to_string());
        }

        info!(
            copy_failures = report.copy_failures.len(),
            "All libraries prepared"
        );
        Ok(report)
    }

    async fn run_library(
        &self,
        library: &LibraryDescriptor,
        log: &LogContext,
        report: &mut PipelineReport,
    ) -> PrepResult<()> {
        let target = library.target_path();
        let copied = copy_tree(library.source_path(), target, log).await;
        report.copy_failures.extend(copied.into_failures());

        let properties_path = self.properties_path(target);
        if let Some(api_version) = library.api_version() {
            properties::set_api_version(&properties_path, api_version, log).await?;
        }
        if !library.depends_on().is_empty() {
            properties::add_references(&properties_path, library.depends_on(), log).await?;
        }

        self.preparer.prepare(target).await
    }

    fn properties_path(&self, target: &Path) -> std::path::PathBuf {
        target.join(&self.properties_file)
    }
}

#[cfg(test)]
mod tests;
