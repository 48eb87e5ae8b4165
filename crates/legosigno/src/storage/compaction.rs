//! Folding the visited folders log into the visits table
//!
//! Each log line is a `(path, timestamp)` visit. Visits are deduplicated by
//! path and a stored score is only replaced by a strictly later timestamp.

use std::collections::HashMap;

use crate::error::{LegosignoError, Result};
use crate::folder::Entry;

/// One parsed log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub path: String,
    pub timestamp: i64,
}

/// Result of a compaction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactionResult {
    /// Log lines merged
    pub processed: usize,
    /// Paths seen for the first time
    pub inserted: usize,
    /// Existing entries moved to a later timestamp
    pub refreshed: usize,
    /// Visits older than (or equal to) what was already stored
    pub ignored: usize,
    /// The visits sequence changed
    pub dirty: bool,
}

/// Parse a single log line. The timestamp follows the last space so that
/// folder names containing spaces survive.
pub fn parse_line(line: &str, line_number: usize) -> Result<Visit> {
    let (path, timestamp) = line
        .rsplit_once(' ')
        .ok_or_else(|| LegosignoError::LogParse {
            line: line_number,
            reason: format!("missing timestamp in {line:?}"),
        })?;

    if path.is_empty() {
        return Err(LegosignoError::LogParse {
            line: line_number,
            reason: "empty folder".to_string(),
        });
    }

    let timestamp = timestamp
        .parse::<i64>()
        .map_err(|e| LegosignoError::LogParse {
            line: line_number,
            reason: format!("invalid timestamp {timestamp:?}: {e}"),
        })?;

    Ok(Visit {
        path: path.to_string(),
        timestamp,
    })
}

/// Parse every non-blank line of the log; the first bad line aborts.
pub fn parse_log(log: &str) -> Result<Vec<Visit>> {
    log.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect()
}

/// Merge visits into the visits table.
pub fn merge(
    visits: &mut Vec<Entry>,
    incoming: impl IntoIterator<Item = Visit>,
) -> CompactionResult {
    let mut positions: HashMap<String, usize> = visits
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.path.clone(), i))
        .collect();

    let mut result = CompactionResult::default();

    for visit in incoming {
        result.processed += 1;

        match positions.get(&visit.path).copied() {
            Some(i) if visits[i].score < visit.timestamp => {
                visits[i].score = visit.timestamp;
                result.refreshed += 1;
                result.dirty = true;
            }
            Some(_) => result.ignored += 1,
            None => {
                positions.insert(visit.path.clone(), visits.len());
                visits.push(Entry::new(visit.path, visit.timestamp));
                result.inserted += 1;
                result.dirty = true;
            }
        }
    }

    result
}

/// Parse the whole log, then merge it. A parse failure leaves `visits`
/// untouched.
pub fn compact(log: &str, visits: &mut Vec<Entry>) -> Result<CompactionResult> {
    let incoming = parse_log(log)?;
    let result = merge(visits, incoming);

    tracing::debug!(
        processed = result.processed,
        inserted = result.inserted,
        refreshed = result.refreshed,
        ignored = result.ignored,
        "Compacted visited folders log"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_splits_at_last_space() {
        let visit = parse_line("/home/me/My Documents 123", 1).unwrap();
        assert_eq!(visit.path, "/home/me/My Documents");
        assert_eq!(visit.timestamp, 123);
    }

    #[test]
    fn parse_line_rejects_bad_timestamp() {
        let err = parse_line("/home/me abc", 7).unwrap_err();
        assert!(matches!(err, LegosignoError::LogParse { line: 7, .. }));
    }

    #[test]
    fn parse_line_rejects_missing_timestamp() {
        assert!(parse_line("/home/me", 1).is_err());
        assert!(parse_line(" 12", 1).is_err());
    }

    #[test]
    fn parse_log_skips_blank_lines() {
        let visits = parse_log("/a 1\n\n/b 2\n").unwrap();
        assert_eq!(visits.len(), 2);
    }

    #[test]
    fn later_timestamp_wins() {
        let mut visits = Vec::new();
        let result = compact("/a 1\n/a 5\n", &mut visits).unwrap();

        assert_eq!(visits, vec![Entry::new("/a", 5)]);
        assert_eq!(result.inserted, 1);
        assert_eq!(result.refreshed, 1);
        assert!(result.dirty);
    }

    #[test]
    fn older_timestamp_is_ignored() {
        let mut visits = vec![Entry::new("/a", 5)];
        let result = compact("/a 3\n/a 5\n", &mut visits).unwrap();

        assert_eq!(visits, vec![Entry::new("/a", 5)]);
        assert_eq!(result.ignored, 2);
        assert!(!result.dirty);
    }

    #[test]
    fn failed_parse_leaves_visits_untouched() {
        let mut visits = vec![Entry::new("/a", 5)];
        let err = compact("/b 10\n/c nope\n", &mut visits).unwrap_err();

        assert!(matches!(err, LegosignoError::LogParse { line: 2, .. }));
        assert_eq!(visits, vec![Entry::new("/a", 5)]);
    }

    #[test]
    fn empty_log_changes_nothing() {
        let mut visits = vec![Entry::new("/a", 5)];
        let result = compact("", &mut visits).unwrap();

        assert_eq!(result, CompactionResult::default());
        assert_eq!(visits, vec![Entry::new("/a", 5)]);
    }
}
