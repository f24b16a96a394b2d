// src/process/procfs.rs

//! Process enumeration backed by the `/proc` filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::{ProcessDirectory, ProcessRecord};
use crate::errors::{ReloaderError, Result};

/// Default mount point of procfs.
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Reads `<root>/<pid>/stat` for every numeric entry under `root`.
#[derive(Debug, Clone)]
pub struct ProcFsDirectory {
    root: PathBuf,
}

impl Default for ProcFsDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl ProcFsDirectory {
    /// Use a procfs tree mounted (or faked) at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_record(&self, pid: i32) -> Option<ProcessRecord> {
        let stat_path = self.root.join(pid.to_string()).join("stat");
        let contents = match fs::read_to_string(&stat_path) {
            Ok(c) => c,
            Err(err) => {
                // Processes routinely exit between listing and reading.
                if err.kind() != ErrorKind::NotFound {
                    debug!(pid, error = %err, "skipping unreadable process stat");
                }
                return None;
            }
        };

        let record = parse_stat(&contents);
        if record.is_none() {
            debug!(pid, "skipping malformed process stat");
        }
        record
    }
}

impl ProcessDirectory for ProcFsDirectory {
    fn processes(&self) -> Result<Vec<ProcessRecord>> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            ReloaderError::ProcessListing(format!("reading {:?}: {e}", self.root))
        })?;

        let mut records = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable proc entry");
                    continue;
                }
            };

            let Some(pid) = entry
                .file_name()
                .to_str()
                .and_then(|name| name.parse::<i32>().ok())
                .filter(|&pid| pid > 0)
            else {
                continue;
            };

            if let Some(record) = self.read_record(pid) {
                trace!(?record, "process table entry");
                records.push(record);
            }
        }

        Ok(records)
    }
}

/// Parse the contents of a `/proc/<pid>/stat` file.
///
/// Layout: `pid (comm) state ppid ...`. `comm` may itself contain spaces and
/// parentheses, so it is taken between the first `(` and the last `)`.
pub fn parse_stat(contents: &str) -> Option<ProcessRecord> {
    let open = contents.find('(')?;
    let close = contents.rfind(')')?;
    if close < open {
        return None;
    }

    let pid = contents[..open].trim().parse::<i32>().ok()?;
    let executable = &contents[open + 1..close];

    let mut rest = contents[close + 1..].split_whitespace();
    let _state = rest.next()?;
    let parent_pid = rest.next()?.parse::<i32>().ok()?;

    Some(ProcessRecord::new(pid, executable, parent_pid))
}
