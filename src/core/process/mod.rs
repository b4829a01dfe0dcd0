// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::raw("ant clean -f lib/build.xml")
//!   .cwd() .name()
//!   .run()
//!       --> tokio::process::Command (sh -c / pwsh -Command)
//!           stream stdout/stderr into tracing
//!       --> Ok(()) or ProcessError { SpawnFailed | NonZeroExit | OutputError }
//! ```

pub mod builder;
mod io;
mod runner;
