// src/engine/runtime.rs

use std::fmt;

use tracing::{debug, error, info, warn};

use crate::reload::ReloadBackend;
use crate::watch::{ChangeEvent, WatchStreams};

use super::core::{dispatch_decision, Dispatch};

/// Counters collected while the loop runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    /// Change events received.
    pub events: usize,
    /// Change events dropped as metadata-only.
    pub skipped: usize,
    /// Reload attempts that signaled at least one process.
    pub reloads: usize,
    /// Reload attempts that failed (including "no matching process").
    pub failures: usize,
    /// Errors received from the watcher.
    pub watch_errors: usize,
}

impl RuntimeStats {
    pub fn reload_attempts(&self) -> usize {
        self.reloads + self.failures
    }
}

/// The dispatch loop.
///
/// Waits on both watcher streams at once and handles exactly one item per
/// iteration, so reloads never overlap and run in arrival order. Nothing that
/// happens inside the loop stops it.
pub struct Runtime<B: ReloadBackend> {
    streams: WatchStreams,
    backend: B,
    verbose: bool,
    stats: RuntimeStats,
}

impl<B: ReloadBackend> fmt::Debug for Runtime<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("verbose", &self.verbose)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<B: ReloadBackend> Runtime<B> {
    pub fn new(streams: WatchStreams, backend: B, verbose: bool) -> Self {
        Self {
            streams,
            backend,
            verbose,
            stats: RuntimeStats::default(),
        }
    }

    /// Main event loop.
    ///
    /// Only returns once both streams are closed, which happens when the
    /// `WatcherHandle` feeding them is dropped.
    pub async fn run(mut self) -> RuntimeStats {
        info!("reloader runtime started");

        let mut events_open = true;
        let mut errors_open = true;

        while events_open || errors_open {
            tokio::select! {
                maybe_event = self.streams.events.recv(), if events_open => match maybe_event {
                    Some(event) => self.handle_change(event),
                    None => {
                        debug!("change event stream closed");
                        events_open = false;
                    }
                },
                maybe_err = self.streams.errors.recv(), if errors_open => match maybe_err {
                    Some(err) => self.handle_watch_error(err),
                    None => {
                        debug!("watch error stream closed");
                        errors_open = false;
                    }
                },
            }
        }

        info!(stats = ?self.stats, "watch streams closed; runtime exiting");
        self.stats
    }

    fn handle_change(&mut self, event: ChangeEvent) {
        self.stats.events += 1;

        if self.verbose {
            info!(?event, "event");
        } else {
            debug!(?event, "event");
        }

        match dispatch_decision(&event) {
            Dispatch::Skip => {
                self.stats.skipped += 1;
            }
            Dispatch::Reload => {
                info!("modified file: {}", event.path.display());
                self.reload();
            }
        }
    }

    fn reload(&mut self) {
        match self.backend.reload() {
            Ok(count) => {
                self.stats.reloads += 1;
                debug!(count, "reload complete");
            }
            Err(err) if err.is_no_matching_process() => {
                self.stats.failures += 1;
                warn!("error: {err}");
            }
            Err(err) => {
                self.stats.failures += 1;
                error!("error: {err}");
            }
        }
    }

    fn handle_watch_error(&mut self, err: notify::Error) {
        self.stats.watch_errors += 1;
        error!("error: {err}");
    }
}
