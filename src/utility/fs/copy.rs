// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Best-effort recursive tree copy.
//!
//! Unlike every other pipeline stage, the copy never fails as a whole: an
//! entry that cannot be copied is logged, recorded in the [`CopyReport`] and
//! skipped, and the walk carries on with its siblings.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{Instrument, info, warn};

use crate::error::CopyEntryError;
use crate::logging::{LogContext, LogReason};

/// What a [`copy_tree`] call did.
#[derive(Debug, Default)]
pub struct CopyReport {
    files_copied: usize,
    dirs_created: usize,
    failures: Vec<CopyEntryError>,
}

impl CopyReport {
    #[must_use]
    pub const fn files_copied(&self) -> usize {
        self.files_copied
    }

    #[must_use]
    pub const fn dirs_created(&self) -> usize {
        self.dirs_created
    }

    /// Entries that could not be copied, in walk order.
    #[must_use]
    pub fn failures(&self) -> &[CopyEntryError] {
        &self.failures
    }

    /// Returns true if every entry was copied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Moves the failures out of the report.
    #[must_use]
    pub fn into_failures(self) -> Vec<CopyEntryError> {
        self.failures
    }

    fn record(&mut self, source: &Path, dest: &Path, cause: std::io::Error) {
        let failure = CopyEntryError::new(source.to_path_buf(), dest.to_path_buf(), cause);
        warn!(reason = %LogReason::Filesystem, error = %failure, "Error copying entry");
        self.failures.push(failure);
    }
}

/// Recursively mirrors `source` into `dest`.
///
/// - `source` missing: nothing to copy, empty report.
/// - `source` a directory: `dest` is created (it must not exist yet), then
///   each child is copied under the same name.
/// - anything else: its contents are streamed into a newly created `dest`.
///
/// # Example
/// ```no_run
/// use libprep::logging::LogContext;
/// use libprep::utility::fs::copy::copy_tree;
/// use std::path::Path;
///
/// # async fn example() {
/// let log = LogContext::with_task("libprep");
/// let report = copy_tree(Path::new("/sdk/extras/lib"), Path::new("/work/lib"), &log).await;
/// assert!(report.is_complete());
/// # }
/// ```
pub async fn copy_tree(source: &Path, dest: &Path, log: &LogContext) -> CopyReport {
    let mut report = CopyReport::default();
    copy_entry(source.to_path_buf(), dest.to_path_buf(), &mut report)
        .instrument(log.span())
        .await;
    report
}

async fn copy_entry(source: PathBuf, dest: PathBuf, report: &mut CopyReport) {
    let metadata = match fs::metadata(&source).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return,
        Err(e) => return report.record(&source, &dest, e),
    };

    if !metadata.is_dir() {
        match copy_file(&source, &dest).await {
            Ok(()) => report.files_copied += 1,
            Err(e) => report.record(&source, &dest, e),
        }
        return;
    }

    info!(
        reason = %LogReason::Filesystem,
        from = %source.display(),
        to = %dest.display(),
        "Copying directory"
    );

    if let Err(e) = fs::create_dir(&dest).await {
        return report.record(&source, &dest, e);
    }
    report.dirs_created += 1;

    let mut children = Vec::new();
    match fs::read_dir(&source).await {
        Ok(mut entries) => loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => children.push(entry.file_name()),
                Ok(None) => break,
                Err(e) => {
                    report.record(&source, &dest, e);
                    break;
                }
            }
        },
        Err(e) => return report.record(&source, &dest, e),
    }
    children.sort();

    for name in children {
        Box::pin(copy_entry(source.join(&name), dest.join(&name), report)).await;
    }
}

async fn copy_file(source: &Path, dest: &Path) -> std::io::Result<()> {
    let mut reader = fs::File::open(source).await?;
    let mut writer = fs::File::create(dest).await?;
    tokio::io::copy(&mut reader, &mut writer).await?;
    writer.flush().await
}
