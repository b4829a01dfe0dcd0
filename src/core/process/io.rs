// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for processes.
//!
//! ```text
//! run_child()
//!   stdout reader task --> debug!  (reason=stdout)
//!   stderr reader task --> warn!   (reason=stderr), logged as it arrives
//!   wait --> readers drained --> exit code
//! ```
//!
//! Output on stderr never fails a process by itself; only the exit code does.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::builder::ProcessBuilder;
use crate::logging::LogReason;

#[derive(Debug, Clone, Copy)]
enum StreamKind {
    Stdout,
    Stderr,
}

impl StreamKind {
    const fn reason(self) -> LogReason {
        match self {
            Self::Stdout => LogReason::StdOut,
            Self::Stderr => LogReason::StdErr,
        }
    }
}

fn spawn_reader<R>(stream: Option<R>, kind: StreamKind, process_name: &str) -> Option<JoinHandle<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let name = process_name.to_string();
    stream.map(|stream| {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stream).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => forward_line(&name, kind, &line),
                    Ok(None) => break,
                    Err(e) => {
                        warn!(process = %name, reason = %kind.reason(), error = %e, "error reading stream");
                        break;
                    }
                }
            }
        })
    })
}

fn forward_line(process: &str, kind: StreamKind, line: &str) {
    match kind {
        StreamKind::Stdout => debug!(process = %process, reason = %kind.reason(), "{line}"),
        StreamKind::Stderr => warn!(process = %process, reason = %kind.reason(), "{line}"),
    }
}

impl ProcessBuilder {
    /// Streams the child's output into the log and waits for it to exit.
    ///
    /// Returns the exit code, or -1 if the process was killed by a signal.
    pub(super) async fn run_child(&self, child: &mut Child) -> std::io::Result<i32> {
        let name = self.display_name();
        let stdout = spawn_reader(child.stdout.take(), StreamKind::Stdout, name);
        let stderr = spawn_reader(child.stderr.take(), StreamKind::Stderr, name);

        let status = child.wait().await?;

        for handle in [stdout, stderr].into_iter().flatten() {
            let _ = handle.await;
        }

        Ok(status.code().unwrap_or(-1))
    }
}
