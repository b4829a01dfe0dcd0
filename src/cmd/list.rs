// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for libprep.

use crate::cli::run::ListArgs;
use crate::config::Config;
use crate::config::types::LibraryConfig;
use crate::error::Result;

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the JSON output cannot be serialized.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&config.libraries)?);
        return Ok(());
    }

    if config.libraries.is_empty() {
        println!("No libraries configured");
    } else {
        for line in format_chain(&config.libraries) {
            println!("{line}");
        }
    }
    Ok(())
}

/// One line per library, numbered in execution order.
#[must_use]
pub fn format_chain(libraries: &[LibraryConfig]) -> Vec<String> {
    libraries
        .iter()
        .enumerate()
        .map(|(i, library)| {
            let mut line = format!(
                "{}. {} ({})",
                i + 1,
                library.name,
                library.target.display()
            );
            if !library.depends_on.is_empty() {
                line.push_str(&format!(" -> {}", library.depends_on.join(", ")));
            }
            line
        })
        .collect()
}
