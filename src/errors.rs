// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! Only [`ReloaderError::Config`] and [`ReloaderError::WatchSetup`] are fatal;
//! everything else is logged by the dispatch loop and the loop carries on.

use std::path::PathBuf;

use nix::errno::Errno;
use nix::sys::signal::Signal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReloaderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("cannot watch {path:?}: {source}")]
    WatchSetup {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("file watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("failed to list processes: {0}")]
    ProcessListing(String),

    #[error("no process matching {name} found, it may still be starting")]
    NoMatchingProcess { name: String },

    #[error("could not send signal {signal} to pid {pid}: {source}")]
    SignalDeliveryFailed {
        pid: i32,
        signal: Signal,
        #[source]
        source: Errno,
    },
}

impl ReloaderError {
    /// True for the transient "nothing to signal yet" condition.
    pub fn is_no_matching_process(&self) -> bool {
        matches!(self, ReloaderError::NoMatchingProcess { .. })
    }

    /// True for errors that must stop the process at startup.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ReloaderError::Config(_) | ReloaderError::WatchSetup { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReloaderError>;
