use serde::{Deserialize, Serialize};

/// One row of qutebrowser's `History` table, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
    /// Access time, UNIX seconds.
    pub atime: i64,
    /// 0 or 1 in the database.
    pub redirect: i64,
}

/// Presentation form of a history entry: calendar timestamp and boolean flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryView {
    pub url: String,
    pub title: String,
    /// ISO-8601 UTC timestamp derived from `atime`.
    pub visited: String,
    pub redirect: bool,
}
