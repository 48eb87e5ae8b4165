//! JSON persistence of bookmarks and visited folders

use std::path::{Path, PathBuf};

use crate::error::{LegosignoError, Result};
use crate::folder::Store;

/// File name of the store inside the storage directory
pub const BOOKMARKS_FILENAME: &str = "bookmarks.json";

/// The store file on disk
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(BOOKMARKS_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the store. A missing or empty file is an empty store; content
    /// that does not parse is reported as a warning and also yields an
    /// empty store.
    pub fn load(&self) -> Result<Store> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No store at {}, starting empty", self.path.display());
                return Ok(Store::default());
            }
            Err(e) => {
                return Err(LegosignoError::Storage(format!(
                    "Unable to read bookmarks file {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(Store::default());
        }

        match serde_json::from_str::<Store>(&content) {
            Ok(store) => {
                tracing::debug!(
                    bookmarks = store.bookmarks.len(),
                    visits = store.visits.len(),
                    "Loaded store from {}",
                    self.path.display()
                );
                Ok(store)
            }
            Err(e) => {
                tracing::warn!(
                    "Unable to read json in bookmarks file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Store::default())
            }
        }
    }

    /// Write the store next to its final location, then move it in place.
    pub fn save(&self, store: &Store) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LegosignoError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut json = serde_json::to_vec_pretty(store)?;
        json.push(b'\n');

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &json).map_err(|e| {
            LegosignoError::Storage(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            LegosignoError::Storage(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::trace!("Saved store to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::Entry;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path()).load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn empty_file_loads_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(BOOKMARKS_FILENAME), "").unwrap();

        let store = JsonStore::new(dir.path()).load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn save_creates_directory_and_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("fresh");
        let json_store = JsonStore::new(&data_dir);

        let store = Store {
            bookmarks: vec![Entry::new("/a", 2)],
            visits: vec![Entry::new("/b", 100)],
        };
        json_store.save(&store).unwrap();

        assert!(json_store.path().exists());
        assert!(!data_dir.join("bookmarks.json.tmp").exists());
        assert_eq!(json_store.load().unwrap(), store);
    }

    #[test]
    fn saved_file_uses_folder_field_names() {
        let dir = tempdir().unwrap();
        let json_store = JsonStore::new(dir.path());
        json_store
            .save(&Store {
                bookmarks: vec![Entry::new("/a", 1)],
                visits: vec![],
            })
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(json_store.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({"bookmarks": [{"folder": "/a", "score": 1}], "visits": []})
        );
    }
}
