// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `run` and `list` command arguments.

use clap::Args;

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Patches every library's target platform to android-<N>, overriding
    /// per-library `api_version`.
    #[arg(long = "api-version", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub api_version: Option<u32>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Prints the library chain as JSON.
    #[arg(long)]
    pub json: bool,
}
