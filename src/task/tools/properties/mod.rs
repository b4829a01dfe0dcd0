// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `project.properties` handling.
//!
//! ```text
//! text --parse--> PropertiesFile { lines: [Entry{key,value,raw} | Other(raw)] }
//!                      |                         |
//!          set_api_version()              add_references()
//!          edit the target entry          next index = max(reference.N) + 1
//!          render + full rewrite          append new lines in one write
//! ```
//!
//! Entries may use `=`, `:` or blanks as separator. Untouched lines keep
//! their raw text, so a file that is parsed and rendered without edits comes
//! back byte-for-byte.

mod patch;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConfigError, PrepResult};

pub use patch::{add_references, set_api_version};

/// File name of the toolchain's project configuration.
pub const PROPERTIES_FILE: &str = "project.properties";

/// Key prefix of library reference entries; the index follows it.
pub const REFERENCE_KEY_PREFIX: &str = "android.library.reference.";

/// Key of the target platform declaration.
pub const TARGET_KEY: &str = "target";

/// `key=value`, `key: value` or `key value`; the key ends at the first
/// `=`, `:` or blank.
static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*([^#! \t=:][^ \t=:]*)(?:[ \t]*[=:][ \t]*|[ \t]+)(.*)$")
        .expect("entry pattern is valid")
});

static TARGET_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^android-[0-9]+$").expect("target pattern is valid"));

/// Add-on targets such as `Google Inc.:Google APIs:19`.
static ADDON_TARGET_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+:)[0-9]+$").expect("add-on target pattern is valid"));

/// True if the line ends in an unescaped backslash.
fn continues(raw: &str) -> bool {
    raw.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// One line of a properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `key=value`; `raw` is the original text, or `None` once edited.
    Entry {
        key: String,
        value: String,
        raw: Option<String>,
    },
    /// Comment, blank or continuation line, kept verbatim.
    Other(String),
}

impl Line {
    fn entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Entry {
            key: key.into(),
            value: value.into(),
            raw: None,
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Entry {
                raw: Some(raw), ..
            }
            | Self::Other(raw) => raw.clone(),
            Self::Entry { key, value, raw: None } => format!("{key}={value}"),
        }
    }
}

/// In-memory view of a `key=value` properties file.
#[derive(Debug, Clone)]
pub struct PropertiesFile {
    path: PathBuf,
    lines: Vec<Line>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl PropertiesFile {
    /// Parses `text` as the contents of `path`.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Self {
        let line_ending = if text.contains("\r\n") { "\r\n" } else { "\n" };
        let trailing_newline = text.ends_with('\n');
        let body = text.strip_suffix('\n').unwrap_or(text);

        let mut lines = Vec::new();
        let mut continued = false;
        if !text.is_empty() {
            for raw in body.split('\n') {
                let raw = raw.strip_suffix('\r').unwrap_or(raw);
                let line = if continued {
                    Line::Other(raw.to_string())
                } else if let Some(caps) = ENTRY.captures(raw) {
                    Line::Entry {
                        key: caps[1].to_string(),
                        value: caps[2].to_string(),
                        raw: Some(raw.to_string()),
                    }
                } else {
                    Line::Other(raw.to_string())
                };
                continued = !raw.trim_start().starts_with(['#', '!']) && continues(raw);
                lines.push(line);
            }
        }

        Self {
            path: path.into(),
            lines,
            line_ending,
            trailing_newline,
        }
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read.
    pub async fn load(path: impl AsRef<Path>) -> PrepResult<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::read(path, e))?;
        Ok(Self::parse(path, &text))
    }

    /// Writes the rendered file back to its path, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteError`] if the file cannot be written.
    pub async fn save(&self) -> PrepResult<()> {
        tokio::fs::write(&self.path, self.render())
            .await
            .map_err(|e| ConfigError::write(&self.path, e))?;
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn line_ending(&self) -> &'static str {
        self.line_ending
    }

    /// Returns true if the text ended with a line break (or was empty).
    #[must_use]
    pub const fn ends_with_newline(&self) -> bool {
        self.trailing_newline || self.lines.is_empty()
    }

    /// Iterates over `(key, value)` pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry { key, value, .. } => Some((key.as_str(), value.as_str())),
            Line::Other(_) => None,
        })
    }

    /// Indices of all `android.library.reference.<N>` entries.
    #[must_use]
    pub fn reference_indices(&self) -> BTreeSet<u32> {
        self.entries()
            .filter_map(|(key, _)| key.strip_prefix(REFERENCE_KEY_PREFIX))
            .filter_map(|index| index.parse().ok())
            .collect()
    }

    /// First reference index past every existing one (1 for none).
    ///
    /// Gaps are never filled, so an index is never reused. `None` once the
    /// highest index is `u32::MAX`.
    #[must_use]
    pub fn next_reference_index(&self) -> Option<u32> {
        self.reference_indices()
            .last()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    /// Sets the platform version of the file's `target` entry.
    ///
    /// The first `target=android-<N>` entry wins; failing that, the first
    /// `target` entry of any kind is used. Add-on targets keep their vendor
    /// prefix and only get the API level replaced. Returns false if the file
    /// has no `target` entry at all.
    pub fn set_target_platform(&mut self, api_version: u32) -> bool {
        let is_target = |line: &Line| matches!(line, Line::Entry { key, .. } if key == TARGET_KEY);
        let position = self
            .lines
            .iter()
            .position(|line| {
                matches!(line, Line::Entry { value, .. } if TARGET_VALUE.is_match(value))
                    && is_target(line)
            })
            .or_else(|| self.lines.iter().position(is_target));

        let Some(Line::Entry { value, raw, .. }) = position.map(|i| &mut self.lines[i]) else {
            return false;
        };
        let updated = match ADDON_TARGET_VALUE.captures(value.as_str()) {
            Some(caps) => format!("{}{api_version}", &caps[1]),
            None => format!("android-{api_version}"),
        };
        *value = updated;
        *raw = None;
        true
    }

    /// Appends a new entry at the end of the file.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.lines.push(Line::entry(key, value));
        self.trailing_newline = true;
    }

    /// Renders the file back to text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = self
            .lines
            .iter()
            .map(Line::render)
            .collect::<Vec<_>>()
            .join(self.line_ending);
        if self.trailing_newline {
            text.push_str(self.line_ending);
        }
        text
    }
}
