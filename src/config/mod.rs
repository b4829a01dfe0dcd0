// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for libprep.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. libprep.toml (cwd, optional)
//! 3. --ini (repeatable)
//! 4. LIBPREP_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! LIBPREP_GLOBAL__DRY=true           → global.dry = true
//! LIBPREP_SDK__ROOT=/opt/android-sdk → sdk.root = "/opt/android-sdk"
//! LIBPREP_PATHS__WORK_DIR=platforms  → paths.work_dir = "platforms"
//! ```
//!
//! # Library Chain
//!
//! ```toml
//! [[libraries]]
//! name = "appcompat"
//! source = "extras/android/support/v7/appcompat"
//! target = "appcompat_lib"
//!
//! [[libraries]]
//! name = "mediarouter"
//! source = "extras/android/support/v7/mediarouter"
//! target = "mediarouter_lib"
//! depends_on = ["appcompat"]
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::task::LibraryDescriptor;

use loader::ConfigLoader;
use paths::{PathsConfig, relative_reference, resolve_against};
use types::{GlobalConfig, LibraryConfig, SdkConfig, ToolchainConfig, default_libraries};

/// Name of the configuration file picked up from the current directory.
pub const CONFIG_FILE: &str = "libprep.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "LIBPREP";

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// SDK discovery.
    pub sdk: SdkConfig,
    /// Working directory.
    pub paths: PathsConfig,
    /// Tool locations.
    pub toolchain: ToolchainConfig,
    /// Libraries to prepare, in execution order.
    pub libraries: Vec<LibraryConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            sdk: SdkConfig::default(),
            paths: PathsConfig::default(),
            toolchain: ToolchainConfig::default(),
            libraries: default_libraries(),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use libprep::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("libprep.toml")
    ///     .with_env_prefix("LIBPREP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks the library list.
    ///
    /// Names and targets must be unique and every dependency must name a
    /// library listed before it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `ConfigError::MissingKey`
    /// describing the first problem found.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            section: "libraries".to_string(),
            key: key.to_string(),
            message,
        };

        if self.toolchain.properties_file.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "toolchain".to_string(),
                key: "properties_file".to_string(),
            });
        }

        let mut seen_names = HashSet::new();
        let mut seen_targets = HashSet::new();
        for library in &self.libraries {
            if library.name.is_empty() {
                return Err(ConfigError::MissingKey {
                    section: "libraries".to_string(),
                    key: "name".to_string(),
                });
            }
            for dependency in &library.depends_on {
                if !seen_names.contains(dependency.as_str()) {
                    return Err(invalid(
                        "depends_on",
                        format!(
                            "library '{}' depends on '{dependency}', which is not listed before it",
                            library.name
                        ),
                    ));
                }
            }
            if library.api_version == Some(0) {
                return Err(invalid(
                    "api_version",
                    format!("library '{}' has api_version 0", library.name),
                ));
            }
            if !seen_names.insert(library.name.as_str()) {
                return Err(invalid(
                    "name",
                    format!("duplicate library name '{}'", library.name),
                ));
            }
            if !seen_targets.insert(library.target.as_path()) {
                return Err(invalid(
                    "target",
                    format!("duplicate library target '{}'", library.target.display()),
                ));
            }
        }
        Ok(())
    }

    /// Resolves the library list into pipeline descriptors.
    ///
    /// Sources resolve against `sdk_root`, targets against `work_dir`, and
    /// dependency names become reference paths relative to the dependent's
    /// target.
    #[must_use]
    pub fn library_descriptors(&self, sdk_root: &Path, work_dir: &Path) -> Vec<LibraryDescriptor> {
        let mut targets: HashMap<&str, PathBuf> = HashMap::new();
        let mut descriptors = Vec::with_capacity(self.libraries.len());

        for library in &self.libraries {
            let target = resolve_against(work_dir, &library.target);
            let depends_on = library
                .depends_on
                .iter()
                .filter_map(|name| targets.get(name.as_str()))
                .map(|dependency| relative_reference(&target, dependency))
                .collect();

            descriptors.push(
                LibraryDescriptor::builder()
                    .name(library.name.clone())
                    .source_path(resolve_against(sdk_root, &library.source))
                    .target_path(target.clone())
                    .depends_on(depends_on)
                    .maybe_api_version(library.api_version)
                    .build(),
            );
            targets.insert(library.name.as_str(), target);
        }
        descriptors
    }

    /// Location of the `android` tool for an SDK root.
    #[must_use]
    pub fn android_tool_path(&self, sdk_root: &Path) -> PathBuf {
        resolve_against(sdk_root, &self.toolchain.android)
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_sdk_options(&mut options);
        self.format_toolchain_options(&mut options);
        self.format_library_options(&mut options);
        options.insert(
            "paths.work_dir".into(),
            fmt_path(self.paths.work_dir.as_deref()),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            fmt_path(self.global.log_file.as_deref()),
        );
    }

    fn format_sdk_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("sdk.env_var".into(), self.sdk.env_var.clone());
        options.insert("sdk.root".into(), fmt_path(self.sdk.root.as_deref()));
    }

    fn format_toolchain_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "toolchain.android".into(),
            self.toolchain.android.display().to_string(),
        );
        options.insert(
            "toolchain.ant".into(),
            self.toolchain.ant.display().to_string(),
        );
        options.insert(
            "toolchain.properties_file".into(),
            self.toolchain.properties_file.clone(),
        );
    }

    fn format_library_options(&self, options: &mut BTreeMap<String, String>) {
        for (i, library) in self.libraries.iter().enumerate() {
            let mut value = format!(
                "{} -> {}",
                library.source.display(),
                library.target.display()
            );
            if !library.depends_on.is_empty() {
                value.push_str(&format!(" (depends on {})", library.depends_on.join(", ")));
            }
            if let Some(api) = library.api_version {
                value.push_str(&format!(" [android-{api}]"));
            }
            options.insert(format!("libraries.{i}.{}", library.name), value);
        }
    }
}

fn fmt_path(path: Option<&Path>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
