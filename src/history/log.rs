use std::collections::VecDeque;

use super::{HistoryEntry, HistorySummary, KeyChange};
use crate::domain::now_millis;

pub const DEFAULT_CAPACITY: usize = 8;

/// Bounded log of recent mutations, most recent first.
///
/// Recording past capacity silently drops the oldest entry — an evicted
/// mutation is no longer undoable. Undo consumes its entry via [`take`];
/// nothing is ever pushed back.
///
/// [`take`]: HistoryLog::take
#[derive(Debug)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_id: u64,
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        HistoryLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Record a committed mutation and return the new entry's id.
    pub fn record(&mut self, description: String, changes: Vec<KeyChange>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.push_front(HistoryEntry {
            id,
            description,
            timestamp_ms: now_millis(),
            changes,
        });
        self.entries.truncate(self.capacity);

        id
    }

    /// Remove and return the entry with the given id. `None` when the id is
    /// unknown or the entry was already evicted or consumed.
    pub fn take(&mut self, id: u64) -> Option<HistoryEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        self.entries.remove(index)
    }

    pub fn summaries(&self) -> Vec<HistorySummary> {
        self.entries.iter().map(HistoryEntry::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        HistoryLog::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn change(key: &str, before: u32, after: u32) -> Vec<KeyChange> {
        vec![KeyChange {
            key: key.to_string(),
            before: json!([before]),
            after: json!([after]),
        }]
    }

    #[test]
    fn record_prepends() {
        let mut log = HistoryLog::default();
        log.record("first".to_string(), change("sales", 0, 1));
        log.record("second".to_string(), change("sales", 1, 2));

        let summaries = log.summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].description, "second");
        assert_eq!(summaries[1].description, "first");
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut log = HistoryLog::default();
        let first_id = log.record("entry 1".to_string(), change("sales", 0, 1));
        for n in 2..=9 {
            log.record(format!("entry {}", n), change("sales", n - 1, n as u32));
        }

        assert_eq!(log.len(), 8);
        let summaries = log.summaries();
        assert_eq!(summaries[0].description, "entry 9");
        assert_eq!(summaries[7].description, "entry 2");
        assert!(log.take(first_id).is_none());
    }

    #[test]
    fn take_consumes() {
        let mut log = HistoryLog::default();
        let id = log.record("only".to_string(), change("sales", 0, 1));

        let entry = log.take(id).unwrap();
        assert_eq!(entry.description, "only");
        assert_eq!(entry.changes[0].before, json!([0]));

        assert!(log.is_empty());
        assert!(log.take(id).is_none());
    }

    #[test]
    fn take_unknown_is_none() {
        let mut log = HistoryLog::default();
        assert!(log.take(42).is_none());
    }

    #[test]
    fn custom_capacity() {
        let mut log = HistoryLog::new(2);
        for n in 0..5 {
            log.record(format!("entry {}", n), change("sales", n, n + 1));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.capacity(), 2);
    }
}
