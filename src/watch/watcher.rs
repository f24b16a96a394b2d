// src/watch/watcher.rs

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::info;

use crate::config::WatchTarget;
use crate::errors::{ReloaderError, Result};
use crate::watch::event::ChangeEvent;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle stops file watching and closes both
/// streams in [`WatchStreams`]; it cannot be restarted.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// The two sequences produced by the watcher.
#[derive(Debug)]
pub struct WatchStreams {
    pub events: mpsc::UnboundedReceiver<ChangeEvent>,
    pub errors: mpsc::UnboundedReceiver<notify::Error>,
}

impl WatchStreams {
    /// Create a pair of senders and the matching streams.
    ///
    /// Used by [`spawn_watcher`] and by tests that feed events by hand.
    pub fn channel() -> (
        mpsc::UnboundedSender<ChangeEvent>,
        mpsc::UnboundedSender<notify::Error>,
        WatchStreams,
    ) {
        let (event_tx, events) = mpsc::unbounded_channel();
        let (error_tx, errors) = mpsc::unbounded_channel();
        (event_tx, error_tx, WatchStreams { events, errors })
    }
}

/// Spawn a filesystem watcher that observes every directory of `target`
/// non-recursively.
///
/// Registration happens in order; the first directory that cannot be watched
/// aborts with [`ReloaderError::WatchSetup`]. Events arriving after startup
/// are queued without bound so a slow reload never loses one.
pub fn spawn_watcher(target: &WatchTarget) -> Result<(WatcherHandle, WatchStreams)> {
    let (event_tx, error_tx, streams) = WatchStreams::channel();

    // Called synchronously on notify's own thread.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(ChangeEvent::from(event)) {
                    // The dispatch loop is gone; nobody is left to tell.
                    eprintln!("config-reloader: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                if let Err(err) = error_tx.send(err) {
                    eprintln!("config-reloader: failed to forward watch error: {err}");
                }
            }
        },
        Config::default(),
    )?;

    for dir in target.dirs() {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|source| ReloaderError::WatchSetup {
                path: dir.to_path_buf(),
                source,
            })?;
        info!("file watcher started on {:?}", dir);
    }

    Ok((WatcherHandle { _inner: watcher }, streams))
}
