// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::{Instrument, info, warn};

use super::{PropertiesFile, REFERENCE_KEY_PREFIX, TARGET_KEY};
use crate::error::{ConfigError, PrepResult};
use crate::logging::{LogContext, LogReason};

/// Sets the target platform in a properties file to `android-<api_version>`.
///
/// The `target` entry is edited in place (see
/// [`PropertiesFile::set_target_platform`]) and the whole file is rewritten.
/// A file without any `target` entry gets one appended. The version itself is
/// not validated.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] or [`ConfigError::WriteError`].
pub async fn set_api_version(path: &Path, api_version: u32, log: &LogContext) -> PrepResult<()> {
    async {
        let mut properties = PropertiesFile::load(path).await?;
        if !properties.set_target_platform(api_version) {
            warn!(
                reason = %LogReason::Config,
                path = %path.display(),
                "No target declaration found, appending one"
            );
            properties.push(TARGET_KEY, format!("android-{api_version}"));
        }
        properties.save().await?;

        info!(
            reason = %LogReason::Config,
            path = %path.display(),
            api_version,
            "Updated android api version"
        );
        Ok(())
    }
    .instrument(log.span())
    .await
}

/// Appends one `android.library.reference.<N>=<path>` entry per path.
///
/// Indices start one past the highest existing reference and increase by one
/// per path. Nothing is written if the indices would pass `u32::MAX`. Existing bytes are never touched: all new lines go out in a
/// single append. Paths must be relative to the library's own directory;
/// absolute paths are written as given and produce a broken reference.
///
/// Returns the indices that were assigned.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] or [`ConfigError::WriteError`], and
/// [`ConfigError::InvalidValue`] when the reference indices are exhausted.
pub async fn add_references<S: AsRef<str>>(
    path: &Path,
    relative_paths: &[S],
    log: &LogContext,
) -> PrepResult<Vec<u32>> {
    async {
        let properties = PropertiesFile::load(path).await?;
        if relative_paths.is_empty() {
            return Ok(Vec::new());
        }

        let exhausted = || ConfigError::InvalidValue {
            section: path.display().to_string(),
            key: format!("{REFERENCE_KEY_PREFIX}<N>"),
            message: format!("no reference index left above {}", u32::MAX),
        };
        let first = properties.next_reference_index().ok_or_else(exhausted)?;
        let eol = properties.line_ending();
        let mut appended = String::new();
        if !properties.ends_with_newline() {
            appended.push_str(eol);
        }

        let mut indices = Vec::with_capacity(relative_paths.len());
        for (offset, reference) in relative_paths.iter().enumerate() {
            let index = u32::try_from(offset)
                .ok()
                .and_then(|offset| first.checked_add(offset))
                .ok_or_else(exhausted)?;
            appended.push_str(&format!(
                "{REFERENCE_KEY_PREFIX}{index}={}{eol}",
                reference.as_ref()
            ));
            indices.push(index);
        }

        let write = async {
            let mut file = tokio::fs::OpenOptions::new().append(true).open(path).await?;
            file.write_all(appended.as_bytes()).await?;
            file.flush().await
        };
        write.await.map_err(|e| ConfigError::write(path, e))?;

        info!(
            reason = %LogReason::Config,
            path = %path.display(),
            references = ?relative_paths.iter().map(AsRef::as_ref).collect::<Vec<&str>>(),
            indices = ?indices,
            "Added library references"
        );
        Ok(indices)
    }
    .instrument(log.span())
    .await
}
