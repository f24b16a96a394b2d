// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod process;
pub mod reload;
pub mod watch;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_from_args, ReloaderConfig};
use crate::engine::Runtime;
use crate::process::{KillSender, ProcFsDirectory, ProcessDirectory, SignalSender};
use crate::reload::Reloader;
use crate::watch::spawn_watcher;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config validation (fatal on any error, before anything is watched)
/// - the reload orchestrator over `/proc` and `kill(2)`
/// - the file watcher
/// - the dispatch loop, which runs until the process is terminated
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_from_args(&args)?;
    let reloader = Reloader::new(cfg.target.clone(), ProcFsDirectory::default(), KillSender);

    if args.dry_run {
        print_dry_run(&cfg, &reloader);
        return Ok(());
    }

    if args.once {
        let count = reloader.reload()?;
        info!(count, "reloaded once; exiting");
        return Ok(());
    }

    let (_watcher_handle, streams) = spawn_watcher(&cfg.watch)?;

    let runtime = Runtime::new(streams, reloader, cfg.verbose);
    let stats = runtime.run().await;

    debug!(?stats, "runtime finished");
    Ok(())
}

/// Simple dry-run output: resolved config and the PIDs a reload would hit.
fn print_dry_run<D, S>(cfg: &ReloaderConfig, reloader: &Reloader<D, S>)
where
    D: ProcessDirectory,
    S: SignalSender,
{
    println!("config-reloader dry-run");
    println!("  watch ({}):", cfg.watch.len());
    for dir in cfg.watch.dirs() {
        println!("    - {}", dir.display());
    }
    println!("  process_name = {}", cfg.target.executable_name);
    println!("  root_process_parent = {}", cfg.target.require_root_parent);
    println!("  reload_signal = {}", cfg.target.signal);
    println!("  verbose = {}", cfg.verbose);
    println!();

    match reloader.find_pids() {
        Ok(pids) => println!("would signal {} process(es): {:?}", pids.len(), pids),
        Err(err) => println!("would signal nothing: {err}"),
    }

    debug!("dry-run complete (no signals sent)");
}
