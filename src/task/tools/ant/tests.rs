// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{AntTarget, AntTool};

#[test]
fn test_ant_clean_and_release() {
    let ant = AntTool::default();
    let library = Path::new("/work/platforms/android/google-play-services_lib");

    insta::assert_snapshot!(
        ant.clean(library).command_line(),
        @"ant clean -f /work/platforms/android/google-play-services_lib/build.xml"
    );
    insta::assert_snapshot!(
        ant.release(library).command_line(),
        @"ant release -f /work/platforms/android/google-play-services_lib/build.xml"
    );
    assert_eq!(ant.release(library).working_dir(), Path::new("/work/platforms/android"));
}

#[test]
fn test_ant_custom_binary_with_spaces() {
    let ant = AntTool::new("/opt/apache ant/bin/ant");
    let cmd = ant.target(AntTarget::Release, Path::new("/work/lib"));

    insta::assert_snapshot!(cmd.command_line(), @r#""/opt/apache ant/bin/ant" release -f /work/lib/build.xml"#);
}

#[test]
fn test_ant_target_display() {
    assert_eq!(AntTarget::Clean.to_string(), "clean");
    assert_eq!(AntTarget::Release.as_str(), "release");
}
