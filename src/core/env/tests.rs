// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::OsString;
use std::path::Path;

use super::{DEFAULT_SDK_ENV_VAR, SdkRoot};
use crate::error::PrepError;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| {
        vars.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| OsString::from(v))
    }
}

#[test]
fn test_sdk_root_from_env() {
    let root = SdkRoot::resolve_with(
        None,
        DEFAULT_SDK_ENV_VAR,
        lookup_from(&[("ANDROID_HOME", "/opt/android-sdk")]),
    )
    .expect("ANDROID_HOME is set");

    assert_eq!(root.path(), Path::new("/opt/android-sdk"));
}

#[test]
fn test_configured_root_wins_over_env() {
    let root = SdkRoot::resolve_with(
        Some(Path::new("/custom/sdk")),
        DEFAULT_SDK_ENV_VAR,
        lookup_from(&[("ANDROID_HOME", "/opt/android-sdk")]),
    )
    .unwrap();

    assert_eq!(root.path(), Path::new("/custom/sdk"));
}

#[test]
fn test_missing_env_var() {
    let err = SdkRoot::resolve_with(None, DEFAULT_SDK_ENV_VAR, lookup_from(&[])).unwrap_err();
    assert!(
        matches!(&err, PrepError::MissingEnvironment { var } if &**var == "ANDROID_HOME"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_empty_env_var_is_missing() {
    let err = SdkRoot::resolve_with(
        None,
        "ANDROID_SDK_ROOT",
        lookup_from(&[("ANDROID_SDK_ROOT", "")]),
    )
    .unwrap_err();
    assert!(matches!(err, PrepError::MissingEnvironment { .. }));
}
