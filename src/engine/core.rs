// src/engine/core.rs

//! Pure dispatch decision.
//!
//! Kept free of Tokio, channels and processes so it can be unit tested on its
//! own. The async shell (`engine::runtime::Runtime`) applies the decision.

use crate::watch::ChangeEvent;

/// What the dispatch loop does with one change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Drop the event.
    Skip,
    /// Run one reload attempt.
    Reload,
}

/// Only content or structural changes reload; metadata-only events never do.
pub fn dispatch_decision(event: &ChangeEvent) -> Dispatch {
    if event.is_metadata_only() {
        Dispatch::Skip
    } else {
        Dispatch::Reload
    }
}
