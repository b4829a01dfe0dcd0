// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for tools and the pipeline.
//!
//! Provides a command runner that records instead of executing, and
//! log-capturing infrastructure for testing dry-run output.

use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use futures_util::future::BoxFuture;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use super::{CommandRunner, ExternalCommand};
use crate::error::{PrepResult, ProcessError};

/// Records every command it is asked to run.
///
/// Commands whose line contains the configured pattern fail with a
/// non-zero exit, after being recorded.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    commands: Mutex<Vec<ExternalCommand>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_on(pattern: impl Into<String>) -> Self {
        Self {
            commands: Mutex::default(),
            fail_on: Some(pattern.into()),
        }
    }

    pub(crate) fn commands(&self) -> Vec<ExternalCommand> {
        self.commands.lock().expect("runner lock poisoned").clone()
    }

    pub(crate) fn command_lines(&self) -> Vec<String> {
        self.commands()
            .iter()
            .map(|c| c.command_line().to_string())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run<'a>(&'a self, command: &'a ExternalCommand) -> BoxFuture<'a, PrepResult<()>> {
        Box::pin(async move {
            self.commands
                .lock()
                .expect("runner lock poisoned")
                .push(command.clone());
            match &self.fail_on {
                Some(pattern) if command.command_line().contains(pattern.as_str()) => {
                    Err(ProcessError::NonZeroExit {
                        command: command.command_line().to_string(),
                        code: 1,
                    }
                    .into())
                }
                _ => Ok(()),
            }
        })
    }
}

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Runs an async closure while capturing tracing output.
///
/// Returns the captured log output as a string.
pub(crate) async fn run_with_logs<F, Fut>(f: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .finish();

    let _guard = tracing::subscriber::set_default(subscriber);
    f().await?;

    let guard = buffer
        .lock()
        .map_err(|_| anyhow::anyhow!("log buffer poisoned"))?;
    Ok(String::from_utf8_lossy(&guard).to_string())
}
