use serde_json::Value;

/// Before/after snapshot of one stored collection.
///
/// The entry owns both values exclusively; nothing else may mutate them in
/// place. Undo writes `before` back, redo writes `after`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyChange {
    pub key: String,
    pub before: Value,
    pub after: Value,
}

/// One committed mutation: a human-readable label plus the snapshots needed
/// to reverse or reapply it. Immutable once recorded; it only ever leaves
/// the log whole (evicted or consumed by an undo).
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    pub description: String,
    pub timestamp_ms: u64,
    pub changes: Vec<KeyChange>,
}

/// What a history panel renders: id, label, creation time. Snapshots stay
/// inside the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySummary {
    pub id: u64,
    pub description: String,
    pub timestamp_ms: u64,
}

impl HistoryEntry {
    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            id: self.id,
            description: self.description.clone(),
            timestamp_ms: self.timestamp_ms,
        }
    }
}
