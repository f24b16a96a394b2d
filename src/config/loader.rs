// src/config/loader.rs

use tracing::info;

use crate::cli::CliArgs;
use crate::config::model::{RawConfig, ReloaderConfig};
use crate::errors::Result;

impl From<&CliArgs> for RawConfig {
    fn from(args: &CliArgs) -> Self {
        RawConfig {
            config_dir: args.config_dir.clone(),
            process_name: args.process_name.clone(),
            verbose: args.verbose.clone(),
            root_process_parent: args.root_process_parent.clone(),
            reload_signal: args.reload_signal.clone(),
        }
    }
}

/// Validate the parsed arguments and log the resolved configuration.
///
/// This is the single entry point used by [`crate::run`]. Any error returned
/// here is fatal and happens before a watcher is registered.
pub fn load_from_args(args: &CliArgs) -> Result<ReloaderConfig> {
    let config = ReloaderConfig::try_from(RawConfig::from(args))?;

    let dirs: Vec<_> = config.watch.dirs().collect();
    info!(
        config_dir = ?dirs,
        process_name = %config.target.executable_name,
        root_process_parent = config.target.require_root_parent,
        reload_signal = %config.target.signal,
        verbose = config.verbose,
        "starting reloader"
    );

    Ok(config)
}
