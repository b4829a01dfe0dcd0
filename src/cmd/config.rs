// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` and `inis`: show what the configuration resolved to.

use crate::config::Config;
use crate::config::loader::ConfigLoader;

/// Prints every effective option as `key = value`.
pub fn run_options_command(config: &Config) {
    config.format_options().iter().for_each(|line| println!("{line}"));
}

/// Prints the configuration sources the loader would read, in priority order.
pub fn run_inis_command(loader: &ConfigLoader) {
    let lines = loader.format_sources();
    if lines.is_empty() {
        println!("No configuration files found");
        return;
    }
    for line in lines {
        println!("{line}");
    }
}
