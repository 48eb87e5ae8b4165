//! Legosigno - folder bookmarks and visited-folder ranking for shell users
//!
//! The crate keeps two lists of folders: bookmarks the user creates by hand
//! and folders recorded from the shell prompt. Visits are appended to a plain
//! log on the hot path and folded into a bounded, recency-ranked table the
//! next time a foreground command runs.

pub mod config;
pub mod error;
pub mod folder;
pub mod prompt;
pub mod session;
pub mod storage;
pub mod testing;

pub use config::Config;
pub use error::{LegosignoError, Result};
pub use folder::{Entry, Selection, Store, UnifiedList};
pub use session::Session;
