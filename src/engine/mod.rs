// src/engine/mod.rs

//! Dispatch engine for the reloader.
//!
//! This module ties together:
//! - the change events coming from the watcher
//! - the watch errors coming from the watcher
//! - the reload backend that signals the target processes
//!
//! The pure decision about what to do with a change event lives in [`core`];
//! the async loop that multiplexes both streams is in [`runtime`].

pub mod core;
pub mod runtime;

pub use self::core::{dispatch_decision, Dispatch};
pub use runtime::{Runtime, RuntimeStats};
