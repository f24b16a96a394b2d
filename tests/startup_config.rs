// tests/startup_config.rs

mod common;
use crate::common::builders::{ProcessTableBuilder, RawConfigBuilder};
use crate::common::fakes::RecordingSignalSender;
use crate::common::init_tracing;

use std::error::Error;
use std::path::Path;
use std::process::Command;

use clap::Parser;
use nix::sys::signal::Signal;

use config_reloader::cli::CliArgs;
use config_reloader::config::{load_from_args, ReloaderConfig};
use config_reloader::errors::ReloaderError;
use config_reloader::reload::Reloader;

type TestResult = Result<(), Box<dyn Error>>;

const BIN: &str = env!("CARGO_BIN_EXE_config-reloader");

/// Binary invocation with a clean reloader environment.
fn reloader_cmd() -> Command {
    let mut cmd = Command::new(BIN);
    for var in [
        "CONFIG_DIR",
        "PROCESS_NAME",
        "VERBOSE",
        "ROOTPROCESSPARENT",
        "RELOAD_SIGNAL",
        "RELOADER_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn two_directories_and_sigusr1_reach_every_appd() -> TestResult {
    init_tracing();

    let raw = RawConfigBuilder::new("/etc/app,/etc/app2", "appd")
        .reload_signal("SIGUSR1")
        .build();
    let cfg = ReloaderConfig::try_from(raw)?;

    let dirs: Vec<&Path> = cfg.watch.dirs().collect();
    assert_eq!(dirs, vec![Path::new("/etc/app"), Path::new("/etc/app2")]);
    assert_eq!(cfg.target.executable_name, "appd");
    assert_eq!(cfg.target.signal, Signal::SIGUSR1);
    assert!(!cfg.target.require_root_parent);
    assert!(!cfg.verbose);

    let table = ProcessTableBuilder::new()
        .root_child(100, "appd")
        .user_child(101, "appd", 100)
        .root_child(102, "postgres")
        .build();
    let sender = RecordingSignalSender::new();
    let reloader = Reloader::new(cfg.target.clone(), table, sender.clone());

    assert_eq!(reloader.reload()?, 2);
    assert_eq!(
        sender.delivered(),
        vec![(100, Signal::SIGUSR1), (101, Signal::SIGUSR1)]
    );
    Ok(())
}

#[test]
fn cli_flags_build_the_same_config() -> TestResult {
    init_tracing();

    let args = CliArgs::try_parse_from([
        "config-reloader",
        "--config-dir",
        " /etc/app , /etc/app ",
        "--process-name",
        "appd",
        "--verbose",
        "true",
        "--root-process-parent",
        "TRUE",
        "--reload-signal",
        "usr2",
    ])?;
    let cfg = load_from_args(&args)?;

    assert_eq!(cfg.watch.len(), 1);
    assert!(cfg.verbose);
    assert!(cfg.target.require_root_parent);
    assert_eq!(cfg.target.signal, Signal::SIGUSR2);
    Ok(())
}

#[tokio::test]
async fn bad_signal_fails_before_any_watch_is_registered() {
    init_tracing();

    // The directory does not exist either; a config error (not a watch
    // setup error) proves validation ran first.
    let args = CliArgs::try_parse_from([
        "config-reloader",
        "--config-dir",
        "/definitely/not/here",
        "--process-name",
        "appd",
        "--reload-signal",
        "not-a-signal",
    ])
    .unwrap();

    let err = config_reloader::run(args).await.unwrap_err();
    match err.downcast_ref::<ReloaderError>() {
        Some(ReloaderError::Config(msg)) => assert!(msg.contains("not-a-signal")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[tokio::test]
async fn unwatchable_directory_is_fatal() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone");
    let args = CliArgs::try_parse_from([
        "config-reloader".to_string(),
        "--config-dir".to_string(),
        format!("{},{}", dir.path().display(), missing.display()),
        "--process-name".to_string(),
        "appd".to_string(),
    ])
    .unwrap();

    let err = config_reloader::run(args).await.unwrap_err();
    let err = err
        .downcast_ref::<ReloaderError>()
        .expect("reloader error expected");
    assert!(err.is_fatal());
    assert!(matches!(err, ReloaderError::WatchSetup { path, .. } if *path == missing));
}

#[test]
fn binary_exits_non_zero_on_unknown_signal() {
    let output = reloader_cmd()
        .env("CONFIG_DIR", "/etc")
        .env("PROCESS_NAME", "appd")
        .env("RELOAD_SIGNAL", "not-a-signal")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot find signal for RELOAD_SIGNAL: not-a-signal"));
}

#[test]
fn binary_exits_non_zero_without_required_env() {
    let output = reloader_cmd().env("PROCESS_NAME", "appd").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("CONFIG_DIR"));

    let output = reloader_cmd().env("CONFIG_DIR", "/etc").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("PROCESS_NAME"));
}

#[cfg(target_os = "linux")]
#[test]
fn dry_run_reports_no_match_without_signaling() {
    let dir = tempfile::tempdir().unwrap();
    let output = reloader_cmd()
        .arg("--dry-run")
        .env("CONFIG_DIR", dir.path())
        .env("PROCESS_NAME", "no-such-process-xyz")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("process_name = no-such-process-xyz"));
    assert!(stdout.contains("reload_signal = SIGHUP"));
    assert!(stdout.contains("would signal nothing"));
}

#[cfg(target_os = "linux")]
#[test]
fn once_without_match_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = reloader_cmd()
        .arg("--once")
        .env("CONFIG_DIR", dir.path())
        .env("PROCESS_NAME", "no-such-process-xyz")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no process matching"));
}
