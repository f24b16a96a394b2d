use std::sync::{Arc, Mutex};

use nix::errno::Errno;
use nix::sys::signal::Signal;

use config_reloader::errors::Result;
use config_reloader::process::SignalSender;
use config_reloader::reload::ReloadBackend;

/// A signal sender that records deliveries instead of calling `kill(2)`.
///
/// Optionally fails the k-th delivery (1-based, counted across all reloads)
/// with a chosen errno.
#[derive(Debug, Clone, Default)]
pub struct RecordingSignalSender {
    delivered: Arc<Mutex<Vec<(i32, Signal)>>>,
    attempts: Arc<Mutex<usize>>,
    fail_on: Option<(usize, Errno)>,
}

impl RecordingSignalSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(attempt: usize, errno: Errno) -> Self {
        Self {
            fail_on: Some((attempt, errno)),
            ..Self::default()
        }
    }

    /// Successfully delivered signals, in order.
    pub fn delivered(&self) -> Vec<(i32, Signal)> {
        self.delivered.lock().unwrap().clone()
    }

    pub fn delivered_pids(&self) -> Vec<i32> {
        self.delivered().into_iter().map(|(pid, _)| pid).collect()
    }
}

impl SignalSender for RecordingSignalSender {
    fn send(&self, pid: i32, signal: Signal) -> nix::Result<()> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };

        if let Some((fail_at, errno)) = self.fail_on {
            if attempt == fail_at {
                return Err(errno);
            }
        }

        self.delivered.lock().unwrap().push((pid, signal));
        Ok(())
    }
}

/// A reload backend that counts invocations and always reports one process.
#[derive(Debug, Clone, Default)]
pub struct CountingBackend {
    calls: Arc<Mutex<usize>>,
}

impl CountingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl ReloadBackend for CountingBackend {
    fn reload(&mut self) -> Result<usize> {
        *self.calls.lock().unwrap() += 1;
        Ok(1)
    }
}
