// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! copy:  copy_tree()   best-effort recursive copy (tokio::fs)
//!        CopyReport    files/dirs copied + per-entry failures
//! ```

pub mod copy;
