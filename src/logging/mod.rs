// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging infrastructure using the `tracing` ecosystem.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! stderr    File (optional)
//! EnvFilter EnvFilter
//! ANSI      non_blocking
//!           FmtSpan::CLOSE
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO
//!            4=DEBUG  5=TRACE  6=DUMP(+deps)
//!
//! LogContext("libprep") --for_library--> [libprep/appcompat]
//!                       --for_tool-----> [libprep/appcompat/ant]
//!   .span() -> tracing span, futures are .instrument()ed with it
//! ```

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;
use tracing::{Span, info_span};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{ConfigError, Result};

/// Log verbosity, configured as an integer 0-6.
///
/// Levels below [`LogLevel::Dump`] only show events from this crate;
/// `Dump` also lets dependency crates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    /// Includes every command line and toolchain stdout.
    Debug = 4,
    Trace = 5,
    Dump = 6,
}

impl LogLevel {
    /// Convert from u8 value, returning None if out of range.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Silent),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            6 => Some(Self::Dump),
            _ => None,
        }
    }

    /// Get the raw u8 value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub fn filter_directive(self) -> String {
        let level = match self {
            Self::Silent => return "off".to_string(),
            Self::Dump => return "trace".to_string(),
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        format!("{}={level}", env!("CARGO_CRATE_NAME"))
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(value).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-6, got {value}"),
        })
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::Info)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::Trace)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
    #[builder(setters(name = with_ansi), default = true)]
    ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub const fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    #[must_use]
    pub const fn ansi(&self) -> bool {
        self.ansi
    }
}

/// RAII guard that keeps the logging system alive.
/// When dropped, flushes all pending log writes.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system with the given configuration.
///
/// Console output goes to stderr so that command output on stdout stays
/// machine-readable. Returns a guard that must be kept alive for the duration
/// of the program.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
///
/// # Example
///
/// ```no_run
/// use libprep::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::Info)
///     .with_file_level(LogLevel::Debug)
///     .with_log_file("libprep.log".into())
///     .build();
///
/// let _guard = init_logging(&config).expect("Failed to initialize logging");
/// tracing::info!("Logging initialized");
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(config.ansi())
        .with_filter(EnvFilter::new(config.console_level().filter_directive()));

    let (file_layer, file_guard) = match config.log_file() {
        Some(log_path) => {
            if let Some(parent) = log_path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }

            let file = std::fs::File::create(log_path)
                .with_context(|| format!("failed to create log file {}", log_path.display()))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);

            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(EnvFilter::new(config.file_level().filter_directive()));

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("logging was already initialized")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

/// Scoped logging context passed explicitly to every pipeline component.
///
/// Carries the static prefix (`libprep`) and the library/tool currently in
/// scope. Components instrument their futures with [`LogContext::span`], so
/// every event they emit is tagged without a process-wide prefix.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    /// Static prefix, usually the program name.
    task: Option<String>,
    /// Library currently being prepared.
    library: Option<String>,
    /// Current tool name.
    tool: Option<String>,
}

impl LogContext {
    /// Create a new context with a static prefix.
    pub fn with_task(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
            library: None,
            tool: None,
        }
    }

    /// Returns a child context scoped to a library.
    #[must_use]
    pub fn for_library(&self, library: impl Into<String>) -> Self {
        Self {
            task: self.task.clone(),
            library: Some(library.into()),
            tool: self.tool.clone(),
        }
    }

    /// Returns a child context scoped to a tool.
    #[must_use]
    pub fn for_tool(&self, tool: impl Into<String>) -> Self {
        Self {
            task: self.task.clone(),
            library: self.library.clone(),
            tool: Some(tool.into()),
        }
    }

    /// Get the static prefix.
    #[must_use]
    pub fn task(&self) -> Option<&str> {
        self.task.as_deref()
    }

    /// Get the current library name.
    #[must_use]
    pub fn library(&self) -> Option<&str> {
        self.library.as_deref()
    }

    /// Get the current tool name.
    #[must_use]
    pub fn tool(&self) -> Option<&str> {
        self.tool.as_deref()
    }

    /// Get the context prefix for log messages.
    #[must_use]
    pub fn prefix(&self) -> String {
        let parts: Vec<&str> = [self.task(), self.library(), self.tool()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            String::new()
        } else {
            format!("[{}] ", parts.join("/"))
        }
    }

    /// Creates a span carrying this context's prefix.
    #[must_use]
    pub fn span(&self) -> Span {
        let scope = self.prefix();
        info_span!("scope", scope = %scope.trim_end())
    }
}

/// Reason for a log entry, recorded as the `reason` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogReason {
    /// Configuration-related.
    Config,
    /// Command line of a process.
    Command,
    /// Process stdout.
    StdOut,
    /// Process stderr.
    StdErr,
    /// Filesystem operation.
    Filesystem,
}

impl LogReason {
    /// Get a short string representation for log output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Command => "cmd",
            Self::StdOut => "stdout",
            Self::StdErr => "stderr",
            Self::Filesystem => "fs",
        }
    }
}

impl std::fmt::Display for LogReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
