// src/process/mock.rs

use std::sync::{Arc, Mutex, PoisonError};

use super::{ProcessDirectory, ProcessRecord};
use crate::errors::{ReloaderError, Result};

/// In-memory process table.
///
/// Clones share the same table, so a test can keep one handle and mutate the
/// table while the orchestrator owns another.
#[derive(Debug, Clone, Default)]
pub struct MockProcessDirectory {
    table: Arc<Mutex<Vec<ProcessRecord>>>,
    fail_listing: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockProcessDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processes(records: impl IntoIterator<Item = ProcessRecord>) -> Self {
        let dir = Self::new();
        for record in records {
            dir.add_process(record.pid, &record.executable, record.parent_pid);
        }
        dir
    }

    pub fn add_process(&self, pid: i32, executable: &str, parent_pid: i32) {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.push(ProcessRecord::new(pid, executable, parent_pid));
    }

    pub fn remove_process(&self, pid: i32) {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.retain(|r| r.pid != pid);
    }

    /// Make subsequent `processes()` calls fail with the given message.
    pub fn fail_listing(&self, message: impl Into<String>) {
        let mut fail = self.fail_listing.lock().unwrap_or_else(PoisonError::into_inner);
        *fail = Some(message.into());
    }

    /// Number of times the table has been enumerated.
    pub fn listing_calls(&self) -> usize {
        *self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProcessDirectory for MockProcessDirectory {
    fn processes(&self) -> Result<Vec<ProcessRecord>> {
        *self.calls.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        if let Some(msg) = self
            .fail_listing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(ReloaderError::ProcessListing(msg));
        }

        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(table.clone())
    }
}
