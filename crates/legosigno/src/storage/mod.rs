pub mod append_log;
pub mod compaction;
pub mod json_store;
pub mod ranking;

pub use append_log::{AppendLog, AppendOutcome, VISITED_FILENAME};
pub use compaction::{CompactionResult, Visit, compact};
pub use json_store::{BOOKMARKS_FILENAME, JsonStore};
pub use ranking::{rank, sort_by_score_desc};
