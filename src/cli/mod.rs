// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for libprep using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! libprep [global options] <command>
//! run [--api-version N]
//! list [--json]
//! options
//! inis
//! version
//! ```

pub mod global;
pub mod run;


use crate::cli::global::GlobalOptions;
use crate::cli::run::{ListArgs, RunArgs};
use clap::{Parser, Subcommand};

/// Android library-project preparation
///
/// Copies SDK library sources next to a host project, links them and builds
/// them as library projects.
#[derive(Debug, Parser)]
#[command(
    name = "libprep",
    author,
    version,
    about = "Android library-project preparation",
    long_about = "libprep Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Copies Android SDK library sources into the working directory,\n\
                  wires their library references and builds each one with the\n\
                  SDK toolchain, strictly in order.\n\n\
                  Invoking `libprep run` prepares the configured chain. See\n\
                  `libprep <command> --help` for more information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  libprep reads `libprep.toml` from the current directory if it\n\
                  exists, then every --ini file in order, then LIBPREP_* variables\n\
                  such as LIBPREP_SDK__ROOT. Command-line flags win over all of\n\
                  them. The SDK root defaults to $ANDROID_HOME."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used by libprep.
    Inis,

    /// Copies, links and builds the library chain.
    Run(RunArgs),

    /// Lists the library chain in execution order.
    List(ListArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
