// src/config/mod.rs

//! Startup configuration for the reloader.
//!
//! Responsibilities:
//! - Define the raw and validated data model (`model.rs`).
//! - Turn parsed CLI/env arguments into a configuration (`loader.rs`).
//! - Validate directories, process name and signal (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::load_from_args;
pub use model::{RawConfig, ReloadTarget, ReloaderConfig, WatchTarget};
pub use validate::{parse_signal, DEFAULT_RELOAD_SIGNAL};
