// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! SDK `android` tool.
//!
//! ```text
//! <sdk>/tools/android update lib-project -p <library>
//!   regenerates build.xml, local.properties, proguard files
//! ```

use std::path::{Path, PathBuf};

use super::{ExternalCommand, shell_path};

/// SDK-relative location of the `android` tool.
pub const DEFAULT_ANDROID_TOOL: &str = "tools/android";

/// The SDK's project management tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidTool {
    binary: PathBuf,
}

impl AndroidTool {
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

    /// `update lib-project` for the library at `library`, run from its parent.
    #[must_use]
    pub fn update_lib_project(&self, library: &Path) -> ExternalCommand {
        ExternalCommand::new(
            format!(
                "{} update lib-project -p {}",
                shell_path(&self.binary),
                shell_path(library)
            ),
            working_dir_for(library),
        )
    }
}

pub(super) fn working_dir_for(library: &Path) -> PathBuf {
    library
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

#[cfg(test)]
mod tests;
