// src/watch/mod.rs

//! File watching and change classification.
//!
//! This module is responsible for:
//! - Registering a non-recursive `notify` watch on each configured directory.
//! - Turning raw notify events into [`ChangeEvent`]s tagged as metadata-only
//!   or content changes.
//! - Handing events and watch errors to the dispatch loop over two channels.
//!
//! It does **not** know about processes or signals.

pub mod event;
pub mod watcher;

pub use event::{ChangeEvent, ChangeKind};
pub use watcher::{spawn_watcher, WatchStreams, WatcherHandle};
