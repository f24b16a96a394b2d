#![allow(dead_code)]

use config_reloader::config::RawConfig;
use config_reloader::process::mock::MockProcessDirectory;
use config_reloader::process::ProcessRecord;

/// Builder for an in-memory process table.
pub struct ProcessTableBuilder {
    records: Vec<ProcessRecord>,
}

impl ProcessTableBuilder {
    pub fn new() -> Self {
        Self {
            records: vec![ProcessRecord::new(1, "init", 0)],
        }
    }

    /// Start from an empty table (no init process).
    pub fn empty() -> Self {
        Self { records: vec![] }
    }

    pub fn process(mut self, pid: i32, executable: &str, parent_pid: i32) -> Self {
        self.records.push(ProcessRecord::new(pid, executable, parent_pid));
        self
    }

    /// Process whose parent is the root process.
    pub fn root_child(self, pid: i32, executable: &str) -> Self {
        self.process(pid, executable, 0)
    }

    /// Process spawned by some ordinary parent.
    pub fn user_child(self, pid: i32, executable: &str, parent_pid: i32) -> Self {
        self.process(pid, executable, parent_pid)
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn build(self) -> MockProcessDirectory {
        MockProcessDirectory::with_processes(self.records)
    }
}

impl Default for ProcessTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RawConfig`, mirroring the environment variables.
pub struct RawConfigBuilder {
    raw: RawConfig,
}

impl RawConfigBuilder {
    pub fn new(config_dir: &str, process_name: &str) -> Self {
        Self {
            raw: RawConfig {
                config_dir: Some(config_dir.to_string()),
                process_name: Some(process_name.to_string()),
                ..RawConfig::default()
            },
        }
    }

    pub fn verbose(mut self, val: &str) -> Self {
        self.raw.verbose = Some(val.to_string());
        self
    }

    pub fn root_process_parent(mut self, val: &str) -> Self {
        self.raw.root_process_parent = Some(val.to_string());
        self
    }

    pub fn reload_signal(mut self, val: &str) -> Self {
        self.raw.reload_signal = Some(val.to_string());
        self
    }

    pub fn build(self) -> RawConfig {
        self.raw
    }
}
