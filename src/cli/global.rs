// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        ← Additional config files (can repeat)
//! --dry             ← Log commands instead of running them
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --destination DIR ← paths.work_dir override
//! --sdk DIR         ← sdk.root override
//! --set KEY=VAL     ← Direct config override, e.g. toolchain.ant=/opt/ant/bin/ant
//!
//! Precedence: CLI flags > --set > LIBPREP_* env > --ini > libprep.toml > defaults
//! ```

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Logs the toolchain commands instead of running them.
    /// Library trees are still copied and patched.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, falls back to --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Directory the library projects are created in.
    #[arg(short = 'd', long = "destination", value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Android SDK root, instead of the environment variable.
    #[arg(long = "sdk", value_name = "DIR")]
    pub sdk: Option<PathBuf>,

    /// Sets an option, such as 'toolchain.ant=/opt/ant/bin/ant'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of libprep.toml, only uses --ini.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Applies command-line options to the loader as overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a `--set` option has no `=` or an override cannot
    /// be converted to a config value.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        for option in &self.options {
            let (key, value) = option
                .split_once('=')
                .with_context(|| format!("--set expects KEY=VALUE, got '{option}'"))?;
            loader = loader.set(key.trim(), value.trim())?;
        }

        if let Some(level) = self.log_level {
            loader = loader.set("global.output_log_level", i64::from(level))?;
        }

        if let Some(level) = self.file_log_level.or(self.log_level) {
            loader = loader.set("global.file_log_level", i64::from(level))?;
        }

        if self.dry {
            loader = loader.set("global.dry", true)?;
        }

        loader = loader.set_path("global.log_file", self.log_file.as_deref())?;
        loader = loader.set_path("paths.work_dir", self.destination.as_deref())?;
        loader.set_path("sdk.root", self.sdk.as_deref())
    }
}
