// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every option can also be supplied through its environment variable, which
//! is how the reloader is normally configured when it runs as a sidecar.
//! Values are kept as raw strings here; interpretation and validation live in
//! [`crate::config`].

use clap::{Parser, ValueEnum};

/// Command-line arguments for `config-reloader`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "config-reloader",
    version,
    about = "Signal a process to reload its configuration whenever watched directories change.",
    long_about = None
)]
pub struct CliArgs {
    /// Comma-separated list of directories to watch.
    #[arg(long, env = "CONFIG_DIR", value_name = "DIRS")]
    pub config_dir: Option<String>,

    /// Exact executable name of the process to signal.
    #[arg(long, env = "PROCESS_NAME", value_name = "NAME")]
    pub process_name: Option<String>,

    /// Log every filesystem event ("true" to enable).
    #[arg(long, env = "VERBOSE", value_name = "BOOL")]
    pub verbose: Option<String>,

    /// Only signal processes whose parent is the root process ("true" to enable).
    #[arg(long, env = "ROOTPROCESSPARENT", value_name = "BOOL")]
    pub root_process_parent: Option<String>,

    /// Signal to deliver, by name (SIGHUP, HUP) or number. Defaults to SIGHUP.
    #[arg(long, env = "RELOAD_SIGNAL", value_name = "SIGNAL")]
    pub reload_signal: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RELOADER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate config and show which processes would be signaled, then exit.
    #[arg(long)]
    pub dry_run: bool,

    /// Reload once right now and exit, without watching.
    #[arg(long, conflicts_with = "dry_run")]
    pub once: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
