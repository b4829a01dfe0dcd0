// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   spawn() ---- io::Error ----> ProcessError::SpawnFailed
//!   run_child()  stream stdout/stderr into the log, wait
//!   exit_code != 0 ------------> ProcessError::NonZeroExit (-1: signal)
//!   Ok(())
//! ```
//!
//! There is no timeout: a hung process blocks the caller until it exits.

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::ProcessBuilder;
use crate::error::ProcessError;
use crate::logging::LogReason;

impl ProcessBuilder {
    /// Spawns the command line and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::SpawnFailed`] if the shell cannot be started,
    /// [`ProcessError::OutputError`] if waiting on it fails, and
    /// [`ProcessError::NonZeroExit`] for any exit code other than 0.
    pub async fn run(self) -> Result<(), ProcessError> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(reason = %LogReason::Command, cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.to_string(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let exit_code = self
            .run_child(&mut child)
            .await
            .map_err(|e| ProcessError::OutputError {
                command: cmd_line.to_string(),
                message: e.to_string(),
            })?;

        if exit_code != 0 {
            error!(process = %name, exit_code, "process failed");
            return Err(ProcessError::NonZeroExit {
                command: cmd_line.to_string(),
                code: exit_code,
            });
        }

        trace!(process = %name, "completed");
        Ok(())
    }

    fn build_command(&self) -> Command {
        #[cfg(windows)]
        let mut command = {
            let mut command = Command::new("pwsh");
            command.args(["-NoProfile", "-NonInteractive", "-Command", self.command_line()]);
            command
        };
        #[cfg(not(windows))]
        let mut command = {
            let mut command = Command::new("/bin/sh");
            command.args(["-c", self.command_line()]);
            command
        };

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}
