// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::AndroidTool;

#[test]
fn test_update_lib_project_command() {
    let tool = AndroidTool::new("/opt/android-sdk/tools/android");
    let cmd = tool.update_lib_project(Path::new("/work/platforms/android/appcompat_lib"));

    insta::assert_snapshot!(
        cmd.command_line(),
        @"/opt/android-sdk/tools/android update lib-project -p /work/platforms/android/appcompat_lib"
    );
    assert_eq!(cmd.working_dir(), Path::new("/work/platforms/android"));
}

#[test]
fn test_update_lib_project_quotes_spaces() {
    let tool = AndroidTool::new("/home/me/Android Sdk/tools/android");
    let cmd = tool.update_lib_project(Path::new("/work/my app/mediarouter_lib"));

    insta::assert_snapshot!(
        cmd.command_line(),
        @r#""/home/me/Android Sdk/tools/android" update lib-project -p "/work/my app/mediarouter_lib""#
    );
}

#[test]
fn test_update_lib_project_bare_name_runs_in_current_dir() {
    let tool = AndroidTool::new("android");
    let cmd = tool.update_lib_project(Path::new("appcompat_lib"));
    assert_eq!(cmd.working_dir(), PathBuf::from(".").as_path());
}
