// src/config/validate.rs

use std::str::FromStr;

use nix::sys::signal::Signal;
use tracing::info;

use crate::config::model::{RawConfig, ReloadTarget, ReloaderConfig, WatchTarget};
use crate::errors::{ReloaderError, Result};

/// Signal delivered when `RELOAD_SIGNAL` is not set.
pub const DEFAULT_RELOAD_SIGNAL: Signal = Signal::SIGHUP;

impl TryFrom<RawConfig> for ReloaderConfig {
    type Error = ReloaderError;

    fn try_from(raw: RawConfig) -> std::result::Result<Self, Self::Error> {
        let watch = parse_watch_target(raw.config_dir.as_deref())?;
        let executable_name = parse_process_name(raw.process_name.as_deref())?;
        let signal = parse_reload_signal(raw.reload_signal.as_deref())?;
        let require_root_parent = parse_flag(raw.root_process_parent.as_deref());
        let verbose = parse_flag(raw.verbose.as_deref());

        Ok(ReloaderConfig::new_unchecked(
            watch,
            ReloadTarget::new(executable_name, require_root_parent, signal),
            verbose,
        ))
    }
}

fn parse_watch_target(value: Option<&str>) -> Result<WatchTarget> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ReloaderError::Config(
            "mandatory env var CONFIG_DIR is empty".to_string(),
        ));
    }

    let mut dirs = Vec::new();
    for (idx, entry) in value.split(',').enumerate() {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(ReloaderError::Config(format!(
                "CONFIG_DIR entry #{} is empty (got {value:?})",
                idx + 1
            )));
        }
        dirs.push(entry.to_string());
    }

    Ok(WatchTarget::new(dirs))
}

fn parse_process_name(value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ReloaderError::Config(
            "mandatory env var PROCESS_NAME is empty".to_string(),
        )),
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

fn parse_reload_signal(value: Option<&str>) -> Result<Signal> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        info!("RELOAD_SIGNAL is empty, defaulting to {DEFAULT_RELOAD_SIGNAL}");
        return Ok(DEFAULT_RELOAD_SIGNAL);
    }

    parse_signal(value).ok_or_else(|| {
        ReloaderError::Config(format!("cannot find signal for RELOAD_SIGNAL: {value}"))
    })
}

/// Resolve a signal from `SIGUSR1`, `usr1` or `10`.
pub fn parse_signal(value: &str) -> Option<Signal> {
    let value = value.trim();

    if let Ok(num) = value.parse::<i32>() {
        return Signal::try_from(num).ok();
    }

    let upper = value.to_ascii_uppercase();
    let name = if upper.starts_with("SIG") {
        upper
    } else {
        format!("SIG{upper}")
    };
    Signal::from_str(&name).ok()
}
