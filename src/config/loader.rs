// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! defaults (Config::default)
//!   < libprep.toml          add_toml_file_optional
//!   < --ini FILE...         add_toml_file
//!   < inline TOML           add_toml_str
//!   < LIBPREP_SECTION__KEY  with_env_prefix
//!   < CLI overrides         set / set_path
//!        |
//!        v
//!    build() --> Config::validate() --> Config
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// A configuration source that contributed to the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file that must exist.
    Required(PathBuf),
    /// A file that is used only if present.
    Optional(PathBuf),
    /// TOML text passed directly.
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(path) => write!(f, "[ini] {}", path.display()),
            Self::Optional(path) => write!(f, "[default] {}", path.display()),
            Self::Inline => f.write_str("[inline]"),
        }
    }
}

/// Collects configuration sources, then merges and validates them.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.add_file(path, true);
        loader.sources.push(ConfigSource::Required(path.to_path_buf()));
        loader
    }

    /// Adds a TOML file that is skipped silently if absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.add_file(path, false);
        if path.is_file() {
            loader.sources.push(ConfigSource::Optional(path.to_path_buf()));
        }
        loader
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `PREFIX_SECTION__KEY` environment variables, e.g.
    /// `LIBPREP_SDK__ROOT` for `sdk.root`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a value that wins over every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid configuration path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Like [`set`](Self::set) for paths; `None` leaves the key alone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the path is not valid UTF-8.
    pub fn set_path(self, key: &str, path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(self);
        };
        let value = path.to_str().ok_or_else(|| ConfigError::InvalidValue {
            section: key.split('.').next().unwrap_or(key).to_string(),
            key: key.to_string(),
            message: format!("path is not valid UTF-8: {}", path.display()),
        })?;
        self.set(key, value)
    }

    /// Merges all sources into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a source is not valid
    /// TOML, the merged values do not fit [`Config`], or the library list is
    /// rejected by [`Config::validate`].
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// One numbered line per source, in load order.
    #[must_use]
    pub fn format_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
