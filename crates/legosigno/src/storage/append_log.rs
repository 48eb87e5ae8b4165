//! Append-only log of visited folders
//!
//! One line per shell prompt event, `"<path> <unix-nanoseconds>"`. Nothing
//! here parses or deduplicates; that is left to the compactor.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{LegosignoError, Result};

/// File name of the log inside the storage directory
pub const VISITED_FILENAME: &str = "visited_folders";

/// Result of appending one visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Log size in bytes after the write
    pub size: u64,
    /// The size reached the configured threshold
    pub needs_compaction: bool,
}

/// Handle on the visited folders log file
#[derive(Debug, Clone)]
pub struct AppendLog {
    path: PathBuf,
}

impl AppendLog {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(VISITED_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a visit, creating the directory tree and the file if needed.
    pub fn record(
        &self,
        folder: &str,
        timestamp_ns: i64,
        threshold: u64,
    ) -> Result<AppendOutcome> {
        let mut file = open_or_create(&self.path, OpenOptions::new().append(true))?;

        let line = format_line(folder, timestamp_ns);
        file.write_all(line.as_bytes())?;

        let size = file.metadata()?.len();
        tracing::trace!(size, "Appended visit for {}", folder);

        Ok(AppendOutcome {
            size,
            needs_compaction: size >= threshold,
        })
    }

    /// Whole log content; an absent log reads as empty.
    pub fn read_all(&self) -> Result<String> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(String::new()),
            Err(e) => return Err(e.into()),
        };

        let mut content = String::new();
        file.read_to_string(&mut content).map_err(|e| {
            LegosignoError::Storage(format!(
                "Failed to read visited folders log {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(content)
    }

    /// Empty the log after its content has been merged.
    pub fn truncate(&self) -> Result<()> {
        match OpenOptions::new().write(true).open(&self.path) {
            Ok(file) => {
                file.set_len(0)?;
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Current size in bytes, 0 when the log does not exist
    pub fn size(&self) -> Result<u64> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

pub fn format_line(folder: &str, timestamp_ns: i64) -> String {
    format!("{folder} {timestamp_ns}\n")
}

/// Open a file with the given options, creating it and its parent
/// directories when it is missing.
pub(crate) fn open_or_create(path: &Path, options: &OpenOptions) -> Result<File> {
    match options.open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LegosignoError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            tracing::trace!("Unable to open {}, creating it", path.display());
            options.clone().create(true).open(path).map_err(|e| {
                LegosignoError::Storage(format!(
                    "Unable to create file {}: {}",
                    path.display(),
                    e
                ))
            })
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn record_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let log = AppendLog::new(&dir.path().join("nested").join("store"));

        let outcome = log.record("/home/me", 42, u64::MAX).unwrap();

        assert_eq!(log.read_all().unwrap(), "/home/me 42\n");
        assert_eq!(outcome.size, "/home/me 42\n".len() as u64);
        assert!(!outcome.needs_compaction);
    }

    #[test]
    fn record_appends_lines_in_order() {
        let dir = tempdir().unwrap();
        let log = AppendLog::new(dir.path());

        log.record("/a", 1, u64::MAX).unwrap();
        log.record("/b c", 2, u64::MAX).unwrap();

        assert_eq!(log.read_all().unwrap(), "/a 1\n/b c 2\n");
    }

    #[test]
    fn threshold_reached_requests_compaction() {
        let dir = tempdir().unwrap();
        let log = AppendLog::new(dir.path());

        let line_len = format_line("/a", 1).len() as u64;
        assert!(!log.record("/a", 1, line_len * 2).unwrap().needs_compaction);
        assert!(log.record("/a", 1, line_len * 2).unwrap().needs_compaction);
    }

    #[test]
    fn missing_log_reads_empty_and_truncates_quietly() {
        let dir = tempdir().unwrap();
        let log = AppendLog::new(dir.path());

        assert_eq!(log.read_all().unwrap(), "");
        assert_eq!(log.size().unwrap(), 0);
        log.truncate().unwrap();
        assert!(!log.path().exists());
    }

    #[test]
    fn truncate_empties_existing_log() {
        let dir = tempdir().unwrap();
        let log = AppendLog::new(dir.path());
        log.record("/a", 1, u64::MAX).unwrap();

        log.truncate().unwrap();

        assert_eq!(log.size().unwrap(), 0);
        log.record("/b", 2, u64::MAX).unwrap();
        assert_eq!(log.read_all().unwrap(), "/b 2\n");
    }
}
