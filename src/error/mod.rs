// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              PrepError (~24 bytes)
//!                     |
//!     +---------+-----+------+--------+
//!     |         |            |        |
//!     v         v            v        v
//! MissingEnv  Process     Config     Io
//!   Box<str>    Box         Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Process  SpawnFailed, NonZeroExit, OutputError
//!   Config   ReadError, WriteError, MissingKey, InvalidValue
//!
//! Non-fatal (never converted into PrepError):
//!   CopyEntryError  one entry of a best-effort tree copy
//! ```
//!
//! Every pipeline stage returns [`PrepResult`]; the first `Err` is the
//! terminal outcome of the whole run. The CLI edge uses the `anyhow` alias.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PrepError`].
pub type PrepResult<T> = std::result::Result<T, PrepError>;

/// Fatal pipeline error.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum PrepError {
    /// The environment variable naming the SDK root is not set.
    #[error("environment variable {var} is not set to the SDK directory")]
    MissingEnvironment { var: Box<str> },

    /// External command failed.
    #[error("command failed: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration or property file error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl PrepError {
    /// Creates a [`PrepError::MissingEnvironment`] for the given variable.
    pub fn missing_environment(var: impl Into<String>) -> Self {
        Self::MissingEnvironment {
            var: var.into().into_boxed_str(),
        }
    }

    /// Returns the process error, if this is one.
    #[must_use]
    pub fn as_process(&self) -> Option<&ProcessError> {
        match self {
            Self::Process(e) => Some(&**e),
            _ => None,
        }
    }

    /// Returns the configuration error, if this is one.
    #[must_use]
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(e) => Some(&**e),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PrepError {
                fn from(err: $error) -> Self {
                    PrepError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration or property file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration or property file.
    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into().display().to_string(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into().display().to_string(),
            source,
        }
    }
}

// --- Process Errors ---

/// External command errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Failed to read process output or wait for it.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

impl ProcessError {
    /// Returns the command line this error refers to.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::SpawnFailed { command, .. }
            | Self::NonZeroExit { command, .. }
            | Self::OutputError { command, .. } => command,
        }
    }
}

// --- Copy Errors ---

/// One entry of a best-effort tree copy that could not be copied.
///
/// Collected by the copier and logged; the walk continues with siblings.
#[derive(Debug, Error)]
#[error("failed to copy '{}' to '{}': {cause}", .source_path.display(), .dest_path.display())]
pub struct CopyEntryError {
    source_path: PathBuf,
    dest_path: PathBuf,
    #[source]
    cause: std::io::Error,
}

impl CopyEntryError {
    pub(crate) const fn new(source_path: PathBuf, dest_path: PathBuf, cause: std::io::Error) -> Self {
        Self {
            source_path,
            dest_path,
            cause,
        }
    }

    /// Entry that was being copied.
    #[must_use]
    pub fn source_path(&self) -> &std::path::Path {
        &self.source_path
    }

    /// Destination that could not be written.
    #[must_use]
    pub fn dest_path(&self) -> &std::path::Path {
        &self.dest_path
    }

    /// Underlying I/O error.
    #[must_use]
    pub const fn cause(&self) -> &std::io::Error {
        &self.cause
    }
}
