// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for libprep.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, SdkConfig, PathsConfig, ToolchainConfig
//! libraries: [LibraryConfig]   executed in list order
//! ```
//!
//! # Default Library Chain
//!
//! ```text
//! appcompat            extras/android/support/v7/appcompat
//! mediarouter  -> appcompat
//!                      extras/android/support/v7/mediarouter
//! google-play-services extras/google/google_play_services/libproject/google-play-services_lib
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::DEFAULT_SDK_ENV_VAR;
use crate::logging::LogLevel;
use crate::task::tools::android::DEFAULT_ANDROID_TOOL;
use crate::task::tools::ant::DEFAULT_ANT;
use crate::task::tools::properties::PROPERTIES_FILE;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log commands instead of running them.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}

/// Where the Android SDK is found.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdkConfig {
    /// Environment variable holding the SDK root.
    pub env_var: String,
    /// Explicit SDK root; takes precedence over `env_var`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_SDK_ENV_VAR.to_string(),
            root: None,
        }
    }
}

/// Toolchain locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    /// `android` tool, relative to the SDK root unless absolute.
    pub android: PathBuf,
    /// `ant` executable, looked up by the shell if not a path.
    pub ant: PathBuf,
    /// Name of the properties file inside each library.
    pub properties_file: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            android: PathBuf::from(DEFAULT_ANDROID_TOOL),
            ant: PathBuf::from(DEFAULT_ANT),
            properties_file: PROPERTIES_FILE.to_string(),
        }
    }
}

/// One library in the preparation chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Unique name, used in logs and by `depends_on`.
    pub name: String,
    /// Source tree, relative to the SDK root unless absolute.
    pub source: PathBuf,
    /// Destination, relative to the working directory unless absolute.
    pub target: PathBuf,
    /// Names of libraries (listed earlier) this one references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// Platform version patched into the copied properties file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u32>,
}

impl LibraryConfig {
    #[must_use]
    pub fn new(name: &str, source: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            source: PathBuf::from(source),
            target: PathBuf::from(target),
            depends_on: Vec::new(),
            api_version: None,
        }
    }

    #[must_use]
    pub fn with_dependency(mut self, name: &str) -> Self {
        self.depends_on.push(name.to_string());
        self
    }
}

/// The support-library chain prepared when no `[[libraries]]` are configured.
#[must_use]
pub fn default_libraries() -> Vec<LibraryConfig> {
    vec![
        LibraryConfig::new(
            "appcompat",
            "extras/android/support/v7/appcompat",
            "appcompat_lib",
        ),
        LibraryConfig::new(
            "mediarouter",
            "extras/android/support/v7/mediarouter",
            "mediarouter_lib",
        )
        .with_dependency("appcompat"),
        LibraryConfig::new(
            "google-play-services",
            "extras/google/google_play_services/libproject/google-play-services_lib",
            "google-play-services_lib",
        ),
    ]
}
