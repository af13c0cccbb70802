//! History reader for qutebridge.
//!
//! Read-only queries against qutebrowser's `history.sqlite` via `rusqlite`.
//! The database is opened fresh for every query and never written.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::types::errors::HistoryError;
use crate::types::history::{HistoryEntry, HistoryView};

/// Default row cap when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 100;

/// Queries the history database, most recent first.
///
/// With `search`, rows whose URL or title contain the substring are
/// returned (SQLite's default `LIKE`, ASCII case-insensitive); otherwise
/// all rows. Results are ordered by `atime` descending and capped at
/// `limit`. An unopenable database (including an absent file) is
/// `HistoryError::Unavailable`.
pub fn query_history(
    db_path: &Path,
    limit: u32,
    search: Option<&str>,
) -> Result<Vec<HistoryEntry>, HistoryError> {
    let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(|e| HistoryError::Unavailable(e.to_string()))?;

    match search {
        Some(term) => {
            let pattern = format!("%{}%", term);
            let mut stmt = conn
                .prepare(
                    "SELECT url, title, atime, redirect FROM History \
                     WHERE url LIKE ?1 OR title LIKE ?2 \
                     ORDER BY atime DESC LIMIT ?3",
                )
                .map_err(|e| HistoryError::Query(e.to_string()))?;

            let rows = stmt
                .query_map(rusqlite::params![pattern, pattern, limit], row_to_entry)
                .map_err(|e| HistoryError::Query(e.to_string()))?;

            let mut results = Vec::new();
            for row in rows {
                results.push(row.map_err(|e| HistoryError::Query(e.to_string()))?);
            }
            Ok(results)
        }
        None => {
            let mut stmt = conn
                .prepare(
                    "SELECT url, title, atime, redirect FROM History \
                     ORDER BY atime DESC LIMIT ?1",
                )
                .map_err(|e| HistoryError::Query(e.to_string()))?;

            let rows = stmt
                .query_map(rusqlite::params![limit], row_to_entry)
                .map_err(|e| HistoryError::Query(e.to_string()))?;

            let mut results = Vec::new();
            for row in rows {
                results.push(row.map_err(|e| HistoryError::Query(e.to_string()))?);
            }
            Ok(results)
        }
    }
}

fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        url: row.get(0)?,
        title: row.get(1)?,
        atime: row.get(2)?,
        redirect: row.get(3)?,
    })
}

/// Maps a raw row to its presentation form. Pure; no error cases.
pub fn format_entry(entry: &HistoryEntry) -> HistoryView {
    HistoryView {
        url: entry.url.clone(),
        title: entry.title.clone(),
        visited: epoch_to_iso8601(entry.atime),
        redirect: entry.redirect == 1,
    }
}

/// Converts UNIX seconds to an ISO-8601 UTC timestamp string.
///
/// Days-to-civil conversion (inverse of the usual days-from-civil
/// algorithm); negative timestamps clamp to the epoch.
fn epoch_to_iso8601(secs: i64) -> String {
    let secs = secs.max(0);
    let days = secs / 86_400;
    let rem = secs % 86_400;
    let (hour, minute, second) = (rem / 3600, (rem % 3600) / 60, rem % 60);

    let mut z = days + 719_468;
    let era = z / 146_097;
    z -= era * 146_097;
    let doe = z;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year, month, day, hour, minute, second
    )
}
