// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! SDK root discovery.
//!
//! ```text
//! [sdk] root (config / --sdk)  --set-->  SdkRoot
//!          | unset
//!          v
//! $ANDROID_HOME ([sdk] env_var) --set-->  SdkRoot
//!          | unset or empty
//!          v
//! PrepError::MissingEnvironment   (before any pipeline stage)
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PrepError, PrepResult};
use crate::logging::LogReason;

/// Environment variable consulted when no root is configured.
pub const DEFAULT_SDK_ENV_VAR: &str = "ANDROID_HOME";

/// Root directory of the Android SDK installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkRoot(PathBuf);

impl SdkRoot {
    /// Resolves the SDK root from configuration, falling back to the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`PrepError::MissingEnvironment`] when neither is set.
    pub fn resolve(configured: Option<&Path>, env_var: &str) -> PrepResult<Self> {
        Self::resolve_with(configured, env_var, |var| std::env::var_os(var))
    }

    /// Like [`SdkRoot::resolve`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`PrepError::MissingEnvironment`] when neither is set.
    pub fn resolve_with<F>(configured: Option<&Path>, env_var: &str, lookup: F) -> PrepResult<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let root = match configured {
            Some(path) => path.to_path_buf(),
            None => lookup(env_var)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .ok_or_else(|| PrepError::missing_environment(env_var))?,
        };

        info!(reason = %LogReason::Config, sdk = %root.display(), "Found Android SDK");
        Ok(Self(root))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests;
