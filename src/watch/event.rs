// src/watch/event.rs

//! Change events surfaced by the watch source.

use std::path::PathBuf;

use notify::event::ModifyKind;
use notify::{Event, EventKind};

/// What kind of change a filesystem event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Permission, attribute or access-only change. Never triggers a reload.
    MetadataOnly,
    /// Content or structural change (write, create, remove, rename).
    ContentChange,
}

impl ChangeKind {
    pub fn from_event_kind(kind: &EventKind) -> Self {
        match kind {
            EventKind::Modify(ModifyKind::Metadata(_)) | EventKind::Access(_) => {
                ChangeKind::MetadataOnly
            }
            _ => ChangeKind::ContentChange,
        }
    }
}

/// One filesystem change, consumed once by the dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn content(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::ContentChange)
    }

    pub fn metadata(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::MetadataOnly)
    }

    pub fn is_metadata_only(&self) -> bool {
        self.kind == ChangeKind::MetadataOnly
    }
}

impl From<Event> for ChangeEvent {
    /// One notify event maps to exactly one change event. Rename events that
    /// carry both paths are reported under the first one.
    fn from(event: Event) -> Self {
        let kind = ChangeKind::from_event_kind(&event.kind);
        let path = event.paths.into_iter().next().unwrap_or_default();
        ChangeEvent { path, kind }
    }
}
