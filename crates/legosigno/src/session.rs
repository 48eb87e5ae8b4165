//! I/O boundary between the command line and the folder engine
//!
//! A [`Session`] loads the store, folds the visited folders log into it,
//! ranks the visits, applies one command and writes everything back if
//! something changed. [`record_visit`] is the shell prompt fast path and
//! never loads the store unless the log has grown past its threshold.

use std::io::{BufRead, Write};

use chrono::Utc;

use crate::config::Config;
use crate::error::{LegosignoError, Result};
use crate::folder::{BookmarkOutcome, Entry, Section, Selection, Store, UnifiedList};
use crate::prompt;
use crate::storage::{AppendLog, AppendOutcome, CompactionResult, JsonStore, compact, rank};

/// Loaded state for one foreground invocation
#[derive(Debug)]
pub struct Session {
    config: Config,
    json_store: JsonStore,
    log: AppendLog,
    store: Store,
    dirty: bool,
}

impl Session {
    /// Load the store, merge pending visits, rank them and empty the log.
    pub fn open(config: Config) -> Result<Self> {
        let json_store = JsonStore::new(config.data_dir());
        let log = AppendLog::new(config.data_dir());
        let store = json_store.load()?;

        let mut session = Self {
            config,
            json_store,
            log,
            store,
            dirty: false,
        };
        session.absorb_log()?;
        Ok(session)
    }

    /// Open a session over an in-memory store; nothing is read from disk.
    pub fn with_store(config: Config, store: Store) -> Self {
        Self {
            json_store: JsonStore::new(config.data_dir()),
            log: AppendLog::new(config.data_dir()),
            config,
            store,
            dirty: false,
        }
    }

    /// Merge the log and rank. A non-empty log is committed right away:
    /// the store is saved and the log emptied before any command runs.
    fn absorb_log(&mut self) -> Result<CompactionResult> {
        let content = self.log.read_all()?;
        let result = compact(&content, &mut self.store.visits)?;
        self.dirty |= result.dirty;

        let evicted = rank(
            &mut self.store.visits,
            self.config.storage.max_visited_folders,
        );
        if evicted > 0 {
            tracing::debug!(evicted, "Dropped visited folders past the retention cap");
            self.dirty = true;
        }

        if !content.is_empty() {
            // The store is written before the log is emptied.
            self.save()?;
            self.log.truncate()?;
        }

        Ok(result)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Bookmarks followed by the listed top visits
    pub fn list(&self) -> UnifiedList<'_> {
        UnifiedList::new(&self.store, self.config.storage.listed_visits)
    }

    /// Bookmark a folder or bump its counter.
    pub fn bookmark(&mut self, folder: &str) -> BookmarkOutcome {
        let outcome = self.store.bookmark(folder);
        match outcome {
            BookmarkOutcome::Added => tracing::info!("Bookmarked {}", folder),
            BookmarkOutcome::Bumped(score) => {
                tracing::info!(score, "Bookmark {} already present", folder)
            }
        }
        self.dirty = true;
        outcome
    }

    /// Remove the folder named by `token` (index, `-k`, `?` or path) after
    /// the user confirms. Returns `None` when the user declined.
    pub fn remove<R: BufRead, W: Write>(
        &mut self,
        token: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<Entry>> {
        let list = self.list();
        let selection = match Selection::parse(token) {
            Selection::Interactive => prompt::read_selection(input, output, list, "remove")?,
            selection => selection,
        };

        let slot = list.locate(&selection)?;
        let folder = list.resolve_selection(&selection)?.to_string();

        let from = match slot.section {
            Section::Bookmark => "bookmarks",
            Section::Visited => "visited folders",
        };
        let question = format!("Are you sure you want to remove \"{folder}\" from {from}?");
        if !prompt::confirm(input, output, &question)? {
            tracing::info!("Kept {}", folder);
            return Ok(None);
        }

        let removed = self.store.remove(slot);
        if removed.is_some() {
            tracing::info!("Removed {}", folder);
            self.dirty = true;
        }
        Ok(removed)
    }

    /// Path for a jump target: an index, `-k` for the k-th visited folder,
    /// or `?` to pick from the list.
    pub fn resolve_target<R: BufRead, W: Write>(
        &self,
        token: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<String> {
        let list = self.list();
        let selection = match Selection::parse(token) {
            Selection::Interactive => prompt::read_selection(input, output, list, "change to")?,
            Selection::Path(_) => {
                return Err(LegosignoError::InvalidSelection(format!(
                    "Parameter should be number or ?, got {token:?}"
                )));
            }
            selection => selection,
        };

        Ok(list.resolve_selection(&selection)?.to_string())
    }

    /// Write the store if it changed. Returns whether the file was written.
    pub fn save(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.json_store.save(&self.store)?;
        self.dirty = false;
        Ok(true)
    }
}

/// Shell prompt hook: append the folder with the current time.
pub fn record_visit(config: &Config, folder: &str) -> Result<AppendOutcome> {
    record_visit_at(config, folder, now_ns()?)
}

/// Append a visit at a given time; once the log reaches the configured
/// size it is compacted into the store right away.
pub fn record_visit_at(
    config: &Config,
    folder: &str,
    timestamp_ns: i64,
) -> Result<AppendOutcome> {
    let log = AppendLog::new(config.data_dir());
    let outcome = log.record(folder, timestamp_ns, config.storage.log_threshold_bytes)?;

    if outcome.needs_compaction {
        tracing::info!(
            size = outcome.size,
            "Visited folders log reached its threshold, compacting"
        );
        Session::open(config.clone())?;
    }

    Ok(outcome)
}

/// Current time in Unix nanoseconds
pub fn now_ns() -> Result<i64> {
    Utc::now().timestamp_nanos_opt().ok_or_else(|| {
        LegosignoError::Storage("current time does not fit in nanoseconds".to_string())
    })
}

/// The working directory as a string
pub fn current_dir() -> Result<String> {
    let dir =
        std::env::current_dir().map_err(|e| LegosignoError::WorkingDirectory(e.to_string()))?;
    dir.into_os_string().into_string().map_err(|dir| {
        LegosignoError::WorkingDirectory(format!("{} is not valid UTF-8", dir.to_string_lossy()))
    })
}
