//! Ranking of visited folders by recency with a retention cap

use crate::folder::Entry;

/// Sort entries by score, highest first, with an in-place partition-exchange
/// sort. Entries with equal scores end up in no particular order.
pub fn sort_by_score_desc(entries: &mut [Entry]) {
    if entries.len() < 2 {
        return;
    }

    let right = entries.len() - 1;
    let pivot = entries.len() / 2;
    entries.swap(pivot, right);

    let mut left = 0;
    for i in 0..right {
        if entries[i].score > entries[right].score {
            entries.swap(left, i);
            left += 1;
        }
    }
    entries.swap(left, right);

    let (greater, rest) = entries.split_at_mut(left);
    sort_by_score_desc(greater);
    sort_by_score_desc(&mut rest[1..]);
}

/// Sort visits most recent first and keep at most `cap` of them.
/// Returns how many entries were evicted.
pub fn rank(visits: &mut Vec<Entry>, cap: usize) -> usize {
    sort_by_score_desc(visits);

    let evicted = visits.len().saturating_sub(cap);
    if evicted > 0 {
        for entry in &visits[cap..] {
            tracing::trace!("Evicting visited folder {}", entry.path);
        }
        visits.truncate(cap);
    }
    evicted
}
