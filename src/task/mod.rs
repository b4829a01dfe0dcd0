// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library preparation pipeline.
//!
//! # Architecture
//!
//! ```text
//! PipelineManager::run(&[LibraryDescriptor])
//!      |
//!      v  for each library, in order
//!   copy_tree(source, target)          best-effort, failures collected
//!      |
//!   set_api_version(properties)        if api_version is set
//!      |
//!   add_references(properties)         if depends_on is non-empty
//!      |
//!   LibraryProjectPreparer::prepare    update lib-project -> clean -> release
//!               |
//!               v
//!             Tools --> dyn CommandRunner
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`LibraryDescriptor`] | One library: where it comes from, where it goes, what it references |
//! | [`PipelineManager`] | Runs the per-library stages strictly in sequence |
//! | [`LibraryProjectPreparer`] | The three toolchain steps for one library |
//! | [`CommandRunner`] | Seam between the pipeline and process execution |
//!
//! Every fatal error stops the whole run: libraries after the failing one
//! are never touched and nothing already done is rolled back.
//!
//! [`PipelineManager`]: manager::PipelineManager
//! [`LibraryProjectPreparer`]: preparer::LibraryProjectPreparer
//! [`CommandRunner`]: tools::CommandRunner

pub mod manager;
pub mod preparer;
pub mod tools;

use std::path::{Path, PathBuf};

use bon::Builder;
use serde::Serialize;

/// A library to materialize and prepare.
///
/// `depends_on` entries are written verbatim as reference paths, so they
/// must be relative to `target_path` (e.g. `../appcompat_lib`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct LibraryDescriptor {
    #[builder(into)]
    name: String,
    #[builder(into)]
    source_path: PathBuf,
    #[builder(into)]
    target_path: PathBuf,
    #[builder(default)]
    depends_on: Vec<String>,
    api_version: Option<u32>,
}

impl LibraryDescriptor {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    #[must_use]
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    #[must_use]
    pub fn depends_on(&self) -> &[String] {
        &self.depends_on
    }

    /// Platform version to patch into the target, if any.
    #[must_use]
    pub const fn api_version(&self) -> Option<u32> {
        self.api_version
    }
}
