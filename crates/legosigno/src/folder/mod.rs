//! Folder records and the unified list built over them

pub mod selector;
pub mod types;

pub use selector::{ListedEntry, Section, Selection, Slot, UnifiedList};
pub use types::{BookmarkOutcome, Entry, Store};
