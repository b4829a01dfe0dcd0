// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration and resolution.
//!
//! ```text
//! <work_dir>/                  ([paths] work_dir, --destination, or cwd)
//!   appcompat_lib/             library targets, relative entries land here
//!   mediarouter_lib/
//!     project.properties       android.library.reference.1=../appcompat_lib
//! <sdk>/                       relative library sources resolve here
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::error::PrepResult;

/// Working directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory the library targets are created in (default: cwd).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolves the working directory, relative paths against the cwd.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the current directory cannot be determined.
    pub fn resolve_work_dir(&self) -> PrepResult<PathBuf> {
        match &self.work_dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(std::env::current_dir()?.join(dir)),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Joins `path` onto `base` unless it is already absolute.
#[must_use]
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Reference path from directory `from` to directory `to`, with `/`
/// separators.
///
/// Both paths are compared lexically, so they should be built from the same
/// base.
#[must_use]
pub fn relative_reference(from: &Path, to: &Path) -> String {
    let from: Vec<Component<'_>> = normalized(from);
    let to: Vec<Component<'_>> = normalized(to);
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = std::iter::repeat_n("..".to_string(), from.len() - common).collect();
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn normalized(path: &Path) -> Vec<Component<'_>> {
    let mut out = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir if matches!(out.last(), Some(Component::Normal(_))) => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
