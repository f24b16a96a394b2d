// tests/watch_integration.rs

mod common;
use crate::common::builders::ProcessTableBuilder;
use crate::common::fakes::RecordingSignalSender;
use crate::common::{init_tracing, with_timeout};

use std::error::Error;
use std::fs;
use std::time::Duration;

use nix::sys::signal::Signal;

use config_reloader::config::{ReloadTarget, WatchTarget};
use config_reloader::engine::Runtime;
use config_reloader::reload::Reloader;
use config_reloader::watch::{spawn_watcher, ChangeKind};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn writing_a_file_emits_a_content_change() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let root = dir.path().canonicalize()?;
    let target = WatchTarget::new([root.clone()]);
    let (_handle, mut streams) = spawn_watcher(&target)?;

    let file = root.join("config.yaml");
    fs::write(&file, "key: value\n")?;

    let event = with_timeout(async {
        loop {
            let ev = streams.events.recv().await.expect("watcher stream closed");
            if ev.kind == ChangeKind::ContentChange {
                break ev;
            }
        }
    })
    .await;

    assert_eq!(event.path, file);
    Ok(())
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn chmod_only_emits_metadata_events() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    init_tracing();

    let dir = tempfile::tempdir()?;
    let root = dir.path().canonicalize()?;
    let file = root.join("config.yaml");
    fs::write(&file, "key: value\n")?;

    let target = WatchTarget::new([root.clone()]);
    let (_handle, mut streams) = spawn_watcher(&target)?;

    fs::set_permissions(&file, fs::Permissions::from_mode(0o600))?;

    let first = with_timeout(streams.events.recv())
        .await
        .expect("watcher stream closed");
    assert_eq!(first.kind, ChangeKind::MetadataOnly);

    // Anything else that shows up for the chmod must be metadata-only too.
    while let Ok(Some(ev)) =
        tokio::time::timeout(Duration::from_millis(200), streams.events.recv()).await
    {
        assert_eq!(ev.kind, ChangeKind::MetadataOnly, "unexpected {ev:?}");
    }
    Ok(())
}

#[tokio::test]
async fn subdirectories_are_not_watched() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let root = dir.path().canonicalize()?;
    let nested = root.join("nested");
    fs::create_dir(&nested)?;

    let target = WatchTarget::new([root.clone()]);
    let (_handle, mut streams) = spawn_watcher(&target)?;

    fs::write(nested.join("deep.yaml"), "x: 1\n")?;

    while let Ok(Some(ev)) =
        tokio::time::timeout(Duration::from_millis(300), streams.events.recv()).await
    {
        assert_ne!(ev.path, nested.join("deep.yaml"), "nested file reported");
    }
    Ok(())
}

#[tokio::test]
async fn file_change_in_second_directory_signals_target() -> TestResult {
    init_tracing();

    let first = tempfile::tempdir()?;
    let second = tempfile::tempdir()?;
    let target = WatchTarget::new([first.path().to_path_buf(), second.path().to_path_buf()]);

    let table = ProcessTableBuilder::new().root_child(4242, "appd").build();
    let sender = RecordingSignalSender::new();
    let reloader = Reloader::new(
        ReloadTarget::new("appd", false, Signal::SIGUSR1),
        table,
        sender.clone(),
    );

    let (handle, streams) = spawn_watcher(&target)?;
    let runtime = tokio::spawn(Runtime::new(streams, reloader, true).run());

    fs::write(second.path().join("app.conf"), "reload me\n")?;

    with_timeout(async {
        while sender.delivered().is_empty() {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await;
    assert!(
        sender
            .delivered()
            .iter()
            .all(|&(pid, sig)| pid == 4242 && sig == Signal::SIGUSR1)
    );

    // Closing the watch is terminal: both streams end and the loop returns.
    drop(handle);
    let stats = with_timeout(runtime).await?;
    assert!(stats.reloads >= 1);
    assert_eq!(stats.failures, 0);
    Ok(())
}
