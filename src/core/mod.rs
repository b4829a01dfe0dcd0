// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!          core
//!           |
//!     +-----+------+
//!     |            |
//!     v            v
//!    env        process
//!     |            |
//!  SdkRoot     Builder
//!  ANDROID_HOME Output
//! ```

pub mod env;
pub mod process;
