// src/reload/orchestrator.rs

use tracing::{debug, info};

use crate::config::ReloadTarget;
use crate::errors::{ReloaderError, Result};
use crate::process::{ProcessDirectory, ProcessRecord, SignalSender};

/// Finds the processes named by a [`ReloadTarget`] and signals them.
///
/// The process table is read again on every call; PIDs are never cached
/// because the target may have restarted between two reloads.
#[derive(Debug)]
pub struct Reloader<D, S> {
    target: ReloadTarget,
    directory: D,
    sender: S,
}

impl<D: ProcessDirectory, S: SignalSender> Reloader<D, S> {
    pub fn new(target: ReloadTarget, directory: D, sender: S) -> Self {
        Self {
            target,
            directory,
            sender,
        }
    }

    pub fn target(&self) -> &ReloadTarget {
        &self.target
    }

    /// PIDs that a reload would signal right now.
    ///
    /// Fails with [`ReloaderError::NoMatchingProcess`] instead of returning an
    /// empty list.
    pub fn find_pids(&self) -> Result<Vec<i32>> {
        let processes = self.directory.processes()?;
        let pids = select_pids(&processes, &self.target);

        if pids.is_empty() {
            return Err(ReloaderError::NoMatchingProcess {
                name: self.target.executable_name.clone(),
            });
        }

        Ok(pids)
    }

    /// Signal every matching process and return how many were signaled.
    ///
    /// The first delivery failure stops the loop. Signals already delivered
    /// to earlier PIDs stay delivered.
    pub fn reload(&self) -> Result<usize> {
        let pids = self.find_pids()?;
        info!(?pids, "PIDs found");

        let signal = self.target.signal;
        for &pid in &pids {
            self.sender
                .send(pid, signal)
                .map_err(|source| ReloaderError::SignalDeliveryFailed {
                    pid,
                    signal,
                    source,
                })?;

            info!(
                "signal {} sent to {} (pid: {})",
                signal, self.target.executable_name, pid
            );
        }

        Ok(pids.len())
    }
}

/// Pick the PIDs from `processes` that match `target`.
///
/// Matching is an exact, case-sensitive comparison of the executable name.
/// With `require_root_parent` set, only direct children of the root process
/// are kept. Order follows the input.
pub fn select_pids(processes: &[ProcessRecord], target: &ReloadTarget) -> Vec<i32> {
    let mut pids = Vec::new();

    for process in processes {
        if process.executable != target.executable_name {
            continue;
        }
        info!("found executable {} (pid: {})", process.executable, process.pid);

        if target.require_root_parent && !process.has_root_parent() {
            debug!(
                pid = process.pid,
                parent_pid = process.parent_pid,
                "parent is not the root process; skipping"
            );
            continue;
        }

        pids.push(process.pid);
    }

    pids
}
