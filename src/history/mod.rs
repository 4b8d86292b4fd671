mod entry;
mod log;

pub use entry::{HistoryEntry, HistorySummary, KeyChange};
pub use log::HistoryLog;
