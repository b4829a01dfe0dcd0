// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Apache Ant build driver.
//!
//! ```text
//! ant clean   -f <library>/build.xml
//! ant release -f <library>/build.xml
//! ```
//!
//! `build.xml` is generated by `android update lib-project`, so ant targets
//! only make sense after that step.

use std::fmt;
use std::path::{Path, PathBuf};

use super::android::working_dir_for;
use super::{ExternalCommand, shell_path};

/// Default ant executable, looked up on `PATH` by the shell.
pub const DEFAULT_ANT: &str = "ant";

/// Build file name generated inside each library.
pub const BUILD_FILE: &str = "build.xml";

/// Ant targets used on library projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntTarget {
    Clean,
    Release,
}

impl AntTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for AntTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntTool {
    binary: PathBuf,
}

impl Default for AntTool {
    fn default() -> Self {
        Self::new(DEFAULT_ANT)
    }
}

impl AntTool {
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Runs `target` against the library's generated build file.
    #[must_use]
    pub fn target(&self, target: AntTarget, library: &Path) -> ExternalCommand {
        ExternalCommand::new(
            format!(
                "{} {target} -f {}",
                shell_path(&self.binary),
                shell_path(&library.join(BUILD_FILE))
            ),
            working_dir_for(library),
        )
    }

    #[must_use]
    pub fn clean(&self, library: &Path) -> ExternalCommand {
        self.target(AntTarget::Clean, library)
    }

    #[must_use]
    pub fn release(&self, library: &Path) -> ExternalCommand {
        self.target(AntTarget::Release, library)
    }
}

#[cfg(test)]
mod tests;
