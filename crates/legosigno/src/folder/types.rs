//! Folder types for the Legosigno system
//!
//! Defines the persisted record: manual bookmarks and ranked visited
//! folders, each a sequence of path/score entries.

use serde::{Deserialize, Serialize};

/// A single remembered folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Absolute directory path, unique within its sequence
    #[serde(rename = "folder")]
    pub path: String,
    /// Bookmark counter for bookmarks, latest visit in Unix nanoseconds for visits
    pub score: i64,
}

impl Entry {
    pub fn new(path: impl Into<String>, score: i64) -> Self {
        Self {
            path: path.into(),
            score,
        }
    }
}

/// Both folder sequences, persisted together as one JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Manual bookmarks in insertion order
    #[serde(default)]
    pub bookmarks: Vec<Entry>,
    /// Visited folders, most recent first once ranked
    #[serde(default)]
    pub visits: Vec<Entry>,
}

/// Outcome of bookmarking a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkOutcome {
    /// First time this folder was bookmarked
    Added,
    /// Already bookmarked; its counter now holds the given value
    Bumped(i64),
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookmark a folder, bumping the counter if it is already present.
    pub fn bookmark(&mut self, path: &str) -> BookmarkOutcome {
        if let Some(entry) = self.bookmarks.iter_mut().find(|e| e.path == path) {
            entry.score += 1;
            return BookmarkOutcome::Bumped(entry.score);
        }

        self.bookmarks.push(Entry::new(path, 1));
        BookmarkOutcome::Added
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty() && self.visits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_twice_bumps_counter() {
        let mut store = Store::new();

        assert_eq!(store.bookmark("/a"), BookmarkOutcome::Added);
        assert_eq!(store.bookmark("/a"), BookmarkOutcome::Bumped(2));

        assert_eq!(store.bookmarks, vec![Entry::new("/a", 2)]);
    }

    #[test]
    fn bookmarks_keep_insertion_order() {
        let mut store = Store::new();
        store.bookmark("/z");
        store.bookmark("/a");
        store.bookmark("/z");

        let paths: Vec<_> = store.bookmarks.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/z", "/a"]);
    }

    #[test]
    fn entry_serializes_with_folder_key() {
        let json = serde_json::to_value(Entry::new("/tmp", 3)).unwrap();
        assert_eq!(json, serde_json::json!({"folder": "/tmp", "score": 3}));
    }

    #[test]
    fn store_tolerates_missing_and_unknown_fields() {
        let store: Store =
            serde_json::from_str(r#"{"bookmarks":[{"folder":"/x","score":1}],"extra":true}"#)
                .unwrap();

        assert_eq!(store.bookmarks, vec![Entry::new("/x", 1)]);
        assert!(store.visits.is_empty());
    }
}
