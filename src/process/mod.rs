// src/process/mod.rs

//! OS process services used by the reload orchestrator.
//!
//! - [`ProcessDirectory`] enumerates live processes. Production code uses
//!   [`ProcFsDirectory`]; tests use [`mock::MockProcessDirectory`].
//! - [`SignalSender`] delivers a signal to a PID. Production code uses
//!   [`KillSender`].
//!
//! Both are queried fresh on every reload; nothing is cached here.

use std::fmt::Debug;

use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use crate::errors::Result;

pub mod mock;
pub mod procfs;

pub use procfs::ProcFsDirectory;

/// Parent PID recorded for processes started directly by the kernel, i.e. the
/// root of the process tree in the current PID namespace.
pub const ROOT_PARENT_PID: i32 = 0;

/// One entry of the process table, as seen at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: i32,
    pub executable: String,
    pub parent_pid: i32,
}

impl ProcessRecord {
    pub fn new(pid: i32, executable: impl Into<String>, parent_pid: i32) -> Self {
        Self {
            pid,
            executable: executable.into(),
            parent_pid,
        }
    }

    pub fn has_root_parent(&self) -> bool {
        self.parent_pid == ROOT_PARENT_PID
    }
}

/// Abstract process table.
pub trait ProcessDirectory: Send + Sync + Debug {
    /// Snapshot of all live processes.
    fn processes(&self) -> Result<Vec<ProcessRecord>>;
}

/// Abstract signal delivery.
pub trait SignalSender: Send + Sync + Debug {
    fn send(&self, pid: i32, signal: Signal) -> nix::Result<()>;
}

/// Delivers signals with `kill(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KillSender;

impl SignalSender for KillSender {
    fn send(&self, pid: i32, signal: Signal) -> nix::Result<()> {
        // kill(2) treats 0 and negative PIDs as process groups.
        if pid <= 0 {
            return Err(Errno::EINVAL);
        }
        kill(Pid::from_raw(pid), signal)
    }
}
