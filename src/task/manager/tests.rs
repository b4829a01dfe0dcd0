// libprep: Android library-project preparation pipeline
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use futures_util::future::BoxFuture;
use tempfile::TempDir;

use super::PipelineManager;
use crate::error::{PrepResult, ProcessError};
use crate::logging::LogContext;
use crate::task::LibraryDescriptor;
use crate::task::tools::android::AndroidTool;
use crate::task::tools::ant::AntTool;
use crate::task::tools::test_utils::RecordingRunner;
use crate::task::tools::{CommandRunner, ExternalCommand};

struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    fn sdk(&self) -> PathBuf {
        self.temp.path().join("sdk")
    }

    fn work(&self) -> PathBuf {
        self.temp.path().join("work")
    }

    /// Creates a library source with the given `project.properties`.
    fn source(&self, name: &str, properties: &str) -> PathBuf {
        let dir = self.sdk().join(name);
        std::fs::create_dir_all(dir.join("res")).unwrap();
        std::fs::write(dir.join("project.properties"), properties).unwrap();
        std::fs::write(dir.join("res/strings.xml"), "<resources/>").unwrap();
        dir
    }

    fn library(&self, name: &str) -> LibraryDescriptor {
        let source = self.source(name, "target=android-19\n");
        LibraryDescriptor::builder()
            .name(name)
            .source_path(source)
            .target_path(self.work().join(format!("{name}_lib")))
            .build()
    }
}

fn manager<R: CommandRunner>(runner: R) -> PipelineManager<R> {
    PipelineManager::new(
        runner,
        AndroidTool::new("android"),
        AntTool::default(),
        LogContext::with_task("libprep"),
    )
}

#[tokio::test]
async fn test_run_prepares_libraries_in_order() {
    let fx = Fixture::new();
    std::fs::create_dir_all(fx.work()).unwrap();
    let libraries = vec![fx.library("a"), fx.library("b"), fx.library("c")];
    let manager = manager(RecordingRunner::new());

    let report = manager.run(&libraries).await.unwrap();

    assert_eq!(report.prepared(), ["a", "b", "c"]);
    assert!(report.copy_failures().is_empty());
    let lines = manager.preparer().runner().command_lines();
    assert_eq!(lines.len(), 9);
    for (chunk, name) in lines.chunks(3).zip(["a_lib", "b_lib", "c_lib"]) {
        assert!(chunk.iter().all(|line| line.contains(name)), "{chunk:?}");
    }
    assert!(fx.work().join("b_lib/res/strings.xml").exists());
}

#[tokio::test]
async fn test_run_stops_at_first_failing_library() {
    let fx = Fixture::new();
    std::fs::create_dir_all(fx.work()).unwrap();
    let libraries = vec![fx.library("a"), fx.library("b"), fx.library("c")];
    let manager = manager(RecordingRunner::failing_on("b_lib"));

    let err = manager.run(&libraries).await.unwrap_err();

    let lines = manager.preparer().runner().command_lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[..3].iter().all(|line| line.contains("a_lib")));
    assert_eq!(
        err.as_process().map(ProcessError::command),
        Some(lines[3].as_str())
    );
    assert!(fx.work().join("a_lib").exists());
    assert!(!fx.work().join("c_lib").exists());
}

#[tokio::test]
async fn test_run_links_references_before_prepare() {
    /// Records, per command, whether the reference line was already present.
    struct ProbeRunner {
        properties: PathBuf,
        seen: Mutex<Vec<bool>>,
    }

    impl CommandRunner for ProbeRunner {
        fn run<'a>(&'a self, _command: &'a ExternalCommand) -> BoxFuture<'a, PrepResult<()>> {
            Box::pin(async move {
                let text = std::fs::read_to_string(&self.properties).unwrap_or_default();
                self.seen
                    .lock()
                    .unwrap()
                    .push(text.contains("android.library.reference.1=../appcompat_lib"));
                Ok(())
            })
        }
    }

    let fx = Fixture::new();
    std::fs::create_dir_all(fx.work()).unwrap();
    let source = fx.source("mediarouter", "target=android-19\n");
    let target = fx.work().join("mediarouter_lib");
    let library = LibraryDescriptor::builder()
        .name("mediarouter")
        .source_path(source)
        .target_path(&target)
        .depends_on(vec!["../appcompat_lib".to_string()])
        .build();
    let runner = ProbeRunner {
        properties: target.join("project.properties"),
        seen: Mutex::default(),
    };
    let manager = manager(runner);

    manager.run(std::slice::from_ref(&library)).await.unwrap();

    assert_eq!(*manager.preparer().runner().seen.lock().unwrap(), vec![true; 3]);
    assert_eq!(
        std::fs::read_to_string(target.join("project.properties")).unwrap(),
        "target=android-19\nandroid.library.reference.1=../appcompat_lib\n"
    );
}

#[tokio::test]
async fn test_run_patches_api_version() {
    let fx = Fixture::new();
    std::fs::create_dir_all(fx.work()).unwrap();
    let source = fx.source("google-play-services_lib", "# generated\ntarget=android-9\n");
    let target = fx.work().join("google-play-services_lib");
    let library = LibraryDescriptor::builder()
        .name("google-play-services")
        .source_path(source)
        .target_path(&target)
        .api_version(21)
        .build();
    let manager = manager(RecordingRunner::new());

    manager.run(&[library]).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(target.join("project.properties")).unwrap(),
        "# generated\ntarget=android-21\n"
    );
}

#[tokio::test]
async fn test_run_missing_properties_fails_before_prepare() {
    let fx = Fixture::new();
    std::fs::create_dir_all(fx.work()).unwrap();
    let library = LibraryDescriptor::builder()
        .name("ghost")
        .source_path(fx.sdk().join("does-not-exist"))
        .target_path(fx.work().join("ghost_lib"))
        .depends_on(vec!["../appcompat_lib".to_string()])
        .build();
    let manager = manager(RecordingRunner::new());

    let err = manager.run(&[library]).await.unwrap_err();

    assert!(err.as_config().is_some(), "{err}");
    assert!(manager.preparer().runner().commands().is_empty());
}

#[tokio::test]
async fn test_run_collects_copy_failures() {
    let fx = Fixture::new();
    let library = fx.library("a");
    // The target already exists, so the copy reports it and moves on.
    std::fs::create_dir_all(library.target_path()).unwrap();
    let manager = manager(RecordingRunner::new());

    let report = manager.run(&[library]).await.unwrap();

    assert_eq!(report.copy_failures().len(), 1);
    assert_eq!(report.prepared(), ["a"]);
}

#[tokio::test]
async fn test_run_empty_list() {
    let manager = manager(RecordingRunner::new());
    let report = manager.run(&[]).await.unwrap();
    assert!(report.prepared().is_empty());
}

#[test]
fn test_custom_properties_file_name() {
    let manager = manager(RecordingRunner::new()).with_properties_file("local.properties");
    assert_eq!(
        manager.properties_path(Path::new("/work/lib")),
        PathBuf::from("/work/lib/local.properties")
    );
}
