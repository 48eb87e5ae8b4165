//! Unified, index-addressable view over bookmarks and visited folders
//!
//! Bookmarks come first in stored order, followed by the top visited
//! folders. Only the first `listed_visits` visits are numbered; the rest
//! stay retained on disk but can only be reached through a visited rank
//! (`-k`).

use crate::error::{LegosignoError, Result};
use crate::folder::types::{Entry, Store};

/// What a user token asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Position in the unified list, starting at 0
    Index(usize),
    /// k-th visited folder, 1-based, regardless of bookmarks
    Visited(usize),
    /// Show the list and read an index from standard input
    Interactive,
    /// Exact folder path
    Path(String),
}

impl Selection {
    /// Interpret a command-line token: `?`, a non-negative index, a negative
    /// visited rank, or anything else as a folder path.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token == "?" {
            return Selection::Interactive;
        }

        match token.parse::<i64>() {
            Ok(n) if n >= 0 => Selection::Index(n as usize),
            Ok(n) => Selection::Visited(n.unsigned_abs() as usize),
            Err(_) => Selection::Path(token.to_string()),
        }
    }
}

/// Which underlying sequence an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Bookmark,
    Visited,
}

/// Position of an entry inside its own sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub section: Section,
    pub position: usize,
}

/// A numbered row of the unified list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedEntry<'a> {
    pub index: usize,
    pub section: Section,
    pub entry: &'a Entry,
}

/// Borrowed concatenation of bookmarks and the top visited folders.
#[derive(Debug, Clone, Copy)]
pub struct UnifiedList<'a> {
    bookmarks: &'a [Entry],
    listed: &'a [Entry],
    visits: &'a [Entry],
}

impl<'a> UnifiedList<'a> {
    pub fn new(store: &'a Store, listed_visits: usize) -> Self {
        let listed_len = store.visits.len().min(listed_visits);
        Self {
            bookmarks: &store.bookmarks,
            listed: &store.visits[..listed_len],
            visits: &store.visits,
        }
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len() + self.listed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<ListedEntry<'a>> {
        if let Some(entry) = self.bookmarks.get(index) {
            return Some(ListedEntry {
                index,
                section: Section::Bookmark,
                entry,
            });
        }

        self.listed
            .get(index - self.bookmarks.len())
            .map(|entry| ListedEntry {
                index,
                section: Section::Visited,
                entry,
            })
    }

    pub fn iter(self) -> impl Iterator<Item = ListedEntry<'a>> {
        let bookmarks = self.bookmarks.iter().map(|e| (Section::Bookmark, e));
        let visits = self.listed.iter().map(|e| (Section::Visited, e));
        bookmarks
            .chain(visits)
            .enumerate()
            .map(|(index, (section, entry))| ListedEntry {
                index,
                section,
                entry,
            })
    }

    /// Path at a unified index
    pub fn resolve(&self, index: usize) -> Result<&'a str> {
        self.get(index)
            .map(|listed| listed.entry.path.as_str())
            .ok_or_else(|| LegosignoError::NotFound(format!("No folder at index {index}")))
    }

    /// Path of the k-th (1-based) retained visited folder
    pub fn resolve_visited(&self, rank: usize) -> Result<&'a str> {
        rank.checked_sub(1)
            .and_then(|i| self.visits.get(i))
            .map(|entry| entry.path.as_str())
            .ok_or_else(|| LegosignoError::NotFound(format!("No visited folder #{rank}")))
    }

    /// Unified index of a path; bookmarks are searched before visits.
    pub fn position_of(&self, path: &str) -> Result<usize> {
        self.iter()
            .find(|listed| listed.entry.path == path)
            .map(|listed| listed.index)
            .ok_or_else(|| LegosignoError::NotFound(format!("Folder \"{path}\" not found")))
    }

    /// Slot of a folder by exact path: bookmarks first, then every retained
    /// visit, including those past the listed ones.
    pub fn find(&self, path: &str) -> Result<Slot> {
        let in_bookmarks = self
            .bookmarks
            .iter()
            .position(|e| e.path == path)
            .map(|position| Slot {
                section: Section::Bookmark,
                position,
            });

        in_bookmarks
            .or_else(|| {
                self.visits
                    .iter()
                    .position(|e| e.path == path)
                    .map(|position| Slot {
                        section: Section::Visited,
                        position,
                    })
            })
            .ok_or_else(|| LegosignoError::NotFound(format!("Folder \"{path}\" not found")))
    }

    /// Map a resolved selection to the entry's slot in its own sequence.
    pub fn locate(&self, selection: &Selection) -> Result<Slot> {
        match selection {
            Selection::Index(index) => {
                let listed = self.get(*index).ok_or_else(|| {
                    LegosignoError::NotFound(format!("No folder at index {index}"))
                })?;
                let position = match listed.section {
                    Section::Bookmark => listed.index,
                    Section::Visited => listed.index - self.bookmarks.len(),
                };
                Ok(Slot {
                    section: listed.section,
                    position,
                })
            }
            Selection::Visited(rank) => {
                self.resolve_visited(*rank)?;
                Ok(Slot {
                    section: Section::Visited,
                    position: rank - 1,
                })
            }
            Selection::Path(path) => self.find(path),
            Selection::Interactive => Err(LegosignoError::InvalidSelection(
                "interactive selection has not been read yet".to_string(),
            )),
        }
    }

    /// Path behind a resolved selection
    pub fn resolve_selection(&self, selection: &Selection) -> Result<&'a str> {
        let slot = self.locate(selection)?;
        let entries = match slot.section {
            Section::Bookmark => self.bookmarks,
            Section::Visited => self.visits,
        };
        Ok(entries[slot.position].path.as_str())
    }
}

impl Store {
    /// Remove the entry at a slot, returning it if the slot was valid.
    pub fn remove(&mut self, slot: Slot) -> Option<Entry> {
        let entries = match slot.section {
            Section::Bookmark => &mut self.bookmarks,
            Section::Visited => &mut self.visits,
        };
        (slot.position < entries.len()).then(|| entries.remove(slot.position))
    }
}
