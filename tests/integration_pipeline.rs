// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the preparation pipeline.
//!
//! Builds a fake SDK layout on disk and runs the default library chain
//! through the public API.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use futures_util::future::BoxFuture;
use libprep::config::Config;
use libprep::core::env::SdkRoot;
use libprep::error::{PrepResult, ProcessError};
use libprep::logging::LogContext;
use libprep::task::manager::PipelineManager;
use libprep::task::tools::android::AndroidTool;
use libprep::task::tools::ant::AntTool;
use libprep::task::tools::{CommandRunner, ExternalCommand, ShellRunner};
use tempfile::TempDir;

// =============================================================================
// Fixtures
// =============================================================================

/// Records commands and fails the first one containing `fail_on`.
#[derive(Default)]
struct FakeRunner {
    lines: Mutex<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl FakeRunner {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(&'a self, command: &'a ExternalCommand) -> BoxFuture<'a, PrepResult<()>> {
        Box::pin(async move {
            self.lines
                .lock()
                .unwrap()
                .push(command.command_line().to_string());
            match self.fail_on {
                Some(pattern) if command.command_line().contains(pattern) => {
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

struct Sdk {
    temp: TempDir,
}

impl Sdk {
    /// Lays out the three default library sources.
    fn new() -> Self {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let sdk = Self { temp };
        for source in Config::default().libraries.iter().map(|l| &l.source) {
            let dir = sdk.root().join(source);
            std::fs::create_dir_all(dir.join("res/values")).unwrap();
            std::fs::write(
                dir.join("project.properties"),
                "# Project target.\ntarget=android-19\nandroid.library=true\n",
            )
            .unwrap();
            std::fs::write(dir.join("AndroidManifest.xml"), "<manifest/>").unwrap();
            std::fs::write(dir.join("res/values/strings.xml"), "<resources/>").unwrap();
        }
        std::fs::create_dir_all(sdk.work()).unwrap();
        sdk
    }

    fn root(&self) -> PathBuf {
        self.temp.path().join("android-sdk")
    }

    fn work(&self) -> PathBuf {
        self.temp.path().join("platforms/android")
    }

    fn properties(&self, target: &str) -> String {
        std::fs::read_to_string(self.work().join(target).join("project.properties")).unwrap()
    }
}

fn manager<R: CommandRunner>(runner: R, sdk: &Sdk) -> PipelineManager<R> {
    PipelineManager::new(
        runner,
        AndroidTool::new(sdk.root().join("tools/android")),
        AntTool::default(),
        LogContext::with_task("libprep"),
    )
}

// =============================================================================
// Default chain
// =============================================================================

#[tokio::test]
async fn pipeline_default_chain_succeeds() {
    let sdk = Sdk::new();
    let libraries = Config::default().library_descriptors(&sdk.root(), &sdk.work());
    let manager = manager(FakeRunner::default(), &sdk);

    let report = manager.run(&libraries).await.unwrap();

    assert_eq!(
        report.prepared(),
        ["appcompat", "mediarouter", "google-play-services"]
    );
    assert!(report.copy_failures().is_empty());

    let lines = manager.preparer().runner().lines();
    assert_eq!(lines.len(), 9);
    let targets = ["appcompat_lib", "mediarouter_lib", "google-play-services_lib"];
    for (chunk, target) in lines.chunks(3).zip(targets) {
        assert!(chunk[0].contains("update lib-project -p"), "{chunk:?}");
        assert!(chunk[1].starts_with("ant clean -f"), "{chunk:?}");
        assert!(chunk[2].starts_with("ant release -f"), "{chunk:?}");
        assert!(chunk.iter().all(|line| line.contains(target)), "{chunk:?}");
    }

    assert_eq!(
        sdk.properties("mediarouter_lib"),
        "# Project target.\ntarget=android-19\nandroid.library=true\n\
         android.library.reference.1=../appcompat_lib\n"
    );
    assert_eq!(
        sdk.properties("appcompat_lib"),
        "# Project target.\ntarget=android-19\nandroid.library=true\n"
    );
    assert!(
        sdk.work()
            .join("google-play-services_lib/res/values/strings.xml")
            .exists()
    );
}

#[tokio::test]
async fn pipeline_failure_stops_chain() {
    let sdk = Sdk::new();
    let libraries = Config::default().library_descriptors(&sdk.root(), &sdk.work());
    let runner = FakeRunner {
        fail_on: Some("ant clean -f"),
        ..FakeRunner::default()
    };
    let manager = manager(runner, &sdk);

    let err = manager.run(&libraries).await.unwrap_err();

    assert_eq!(manager.preparer().runner().lines().len(), 2);
    assert!(err.as_process().is_some());
    assert!(sdk.work().join("appcompat_lib").exists());
    assert!(!sdk.work().join("mediarouter_lib").exists());
    assert!(!sdk.work().join("google-play-services_lib").exists());
}

#[tokio::test]
async fn pipeline_api_version_variant() {
    let sdk = Sdk::new();
    let mut config = Config::default();
    config.libraries.retain(|l| l.name == "google-play-services");
    config.libraries[0].api_version = Some(23);
    let libraries = config.library_descriptors(&sdk.root(), &sdk.work());
    let manager = manager(FakeRunner::default(), &sdk);

    manager.run(&libraries).await.unwrap();

    assert_eq!(
        sdk.properties("google-play-services_lib"),
        "# Project target.\ntarget=android-23\nandroid.library=true\n"
    );
    assert_eq!(manager.preparer().runner().lines().len(), 3);
}

#[test]
fn pipeline_missing_sdk_root_reported() {
    let err = SdkRoot::resolve_with(None, "ANDROID_HOME", |_| None).unwrap_err();
    assert_eq!(err.to_string(), "environment variable ANDROID_HOME is not set to the SDK directory");
}

// =============================================================================
// Shell runner
// =============================================================================

#[tokio::test]
async fn pipeline_dry_run_copies_without_running() {
    let sdk = Sdk::new();
    let libraries = Config::default().library_descriptors(&sdk.root(), &sdk.work());
    let runner = ShellRunner::new(LogContext::with_task("libprep").for_tool("shell"), true);
    // The tool does not exist, so anything but a dry run would fail to spawn.
    let manager = manager(runner, &sdk);

    let report = manager.run(&libraries).await.unwrap();

    assert_eq!(report.prepared().len(), 3);
    assert!(sdk.properties("mediarouter_lib").contains("reference.1=../appcompat_lib"));
}

#[cfg(unix)]
#[tokio::test]
async fn pipeline_runs_real_toolchain_scripts() {
    use std::os::unix::fs::PermissionsExt;

    let sdk = Sdk::new();
    let calls = sdk.temp.path().join("calls.log");
    let write_script = |path: &Path, body: &str| {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    };
    let android = sdk.root().join("tools/android");
    let ant = sdk.temp.path().join("bin/ant");
    write_script(
        &android,
        &format!("echo \"android $*\" >> '{}'", calls.display()),
    );
    write_script(
        &ant,
        &format!(
            "echo \"ant $1\" >> '{}'\ncase \"$*\" in *mediarouter_lib*release*|*release*mediarouter_lib*) echo boom >&2; exit 2;; esac",
            calls.display()
        ),
    );

    let libraries = Config::default().library_descriptors(&sdk.root(), &sdk.work());
    let manager = PipelineManager::new(
        ShellRunner::new(LogContext::with_task("libprep"), false),
        AndroidTool::new(&android),
        AntTool::new(&ant),
        LogContext::with_task("libprep"),
    );

    let err = manager.run(&libraries).await.unwrap_err();

    assert!(matches!(
        err.as_process(),
        Some(ProcessError::NonZeroExit { code: 2, .. })
    ));
    let log = std::fs::read_to_string(&calls).unwrap();
    let steps: Vec<&str> = log
        .lines()
        .map(|line| line.split_whitespace().take(2).last().unwrap_or(""))
        .collect();
    assert_eq!(
        steps,
        ["update", "clean", "release", "update", "clean", "release"]
    );
    assert!(!sdk.work().join("google-play-services_lib").exists());
}
