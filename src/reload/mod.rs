// src/reload/mod.rs

//! Reload orchestration.
//!
//! - [`orchestrator`] finds the processes to signal and delivers the signal.
//! - [`backend`] provides the `ReloadBackend` trait the dispatch loop talks
//!   to, so tests can swap in a fake that never touches real processes.

pub mod backend;
pub mod orchestrator;

pub use backend::ReloadBackend;
pub use orchestrator::{select_pids, Reloader};
