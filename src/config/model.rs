// src/config/model.rs

use std::path::{Path, PathBuf};

use nix::sys::signal::Signal;

/// Startup configuration exactly as it was supplied (flags or environment).
///
/// Nothing here is interpreted yet. Convert it with
/// `ReloaderConfig::try_from(raw)` to get a validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    /// `CONFIG_DIR`: comma-separated directories.
    pub config_dir: Option<String>,
    /// `PROCESS_NAME`: executable name to signal.
    pub process_name: Option<String>,
    /// `VERBOSE`: `"true"` enables per-event logging.
    pub verbose: Option<String>,
    /// `ROOTPROCESSPARENT`: `"true"` enables the parent filter.
    pub root_process_parent: Option<String>,
    /// `RELOAD_SIGNAL`: signal name or number.
    pub reload_signal: Option<String>,
}

/// Validated, immutable reloader configuration.
///
/// Built once at startup and handed to the watcher and the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloaderConfig {
    pub watch: WatchTarget,
    pub target: ReloadTarget,
    pub verbose: bool,
}

impl ReloaderConfig {
    /// Build without validation. Used by `TryFrom<RawConfig>` after checks pass.
    pub(crate) fn new_unchecked(watch: WatchTarget, target: ReloadTarget, verbose: bool) -> Self {
        Self {
            watch,
            target,
            verbose,
        }
    }
}

/// Ordered, de-duplicated set of directories to watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    dirs: Vec<PathBuf>,
}

impl WatchTarget {
    /// Build from a list of directories, dropping repeats but keeping the
    /// order of first appearance.
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut out: Vec<PathBuf> = Vec::new();
        for dir in dirs {
            let dir = dir.into();
            if !out.contains(&dir) {
                out.push(dir);
            }
        }
        Self { dirs: out }
    }

    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Which processes to signal and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadTarget {
    /// Exact, case-sensitive executable name.
    pub executable_name: String,
    /// Only consider processes whose parent is [`crate::process::ROOT_PARENT_PID`].
    pub require_root_parent: bool,
    pub signal: Signal,
}

impl ReloadTarget {
    pub fn new(executable_name: impl Into<String>, require_root_parent: bool, signal: Signal) -> Self {
        Self {
            executable_name: executable_name.into(),
            require_root_parent,
            signal,
        }
    }
}
