// src/reload/backend.rs

//! Pluggable reload backend abstraction.
//!
//! The dispatch loop talks to a `ReloadBackend` instead of a concrete
//! [`Reloader`]. Production wires in a `Reloader` over `/proc` and `kill(2)`;
//! tests can provide a backend that just counts invocations.

use crate::errors::Result;
use crate::process::{ProcessDirectory, SignalSender};

use super::orchestrator::Reloader;

/// Something that performs one full reload attempt.
pub trait ReloadBackend: Send {
    /// Discover targets and signal them; returns how many were signaled.
    fn reload(&mut self) -> Result<usize>;
}

impl<D: ProcessDirectory, S: SignalSender> ReloadBackend for Reloader<D, S> {
    fn reload(&mut self) -> Result<usize> {
        Reloader::reload(self)
    }
}
