//! Session Manager for qutebridge.
//!
//! Lists open tabs by forcing qutebrowser to flush its live session to the
//! autosave snapshot, waiting for that flush to land on disk, then parsing
//! the YAML tree into a flat tab list.
//!
//! The flush is asynchronous and out-of-band: the browser writes the file
//! some time after the `:session-save` command is delivered, with no
//! completion signal. The wait therefore polls the file's modification time
//! until it is strictly newer than the pre-save timestamp, bounded by an
//! overall timeout. A timeout is not fatal — a stale-or-fresh best-effort
//! read is still returned.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::ipc::client::IpcClient;
use crate::platform;
use crate::types::errors::SessionError;
use crate::types::session::Session;
use crate::types::tab::TabInfo;

/// Interval between snapshot mtime checks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Upper bound on the whole save-wait.
pub const SAVE_WAIT_TIMEOUT: Duration = Duration::from_millis(500);

/// Returns the snapshot's modification time, or the epoch if the file does
/// not exist yet (so any write at all counts as newer).
fn snapshot_mtime(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(UNIX_EPOCH)
}

/// Polls `path` until its mtime is strictly greater than `before`, or until
/// `timeout` elapses. Returns whether a newer snapshot was observed.
pub async fn wait_for_newer_mtime(
    path: &Path,
    before: SystemTime,
    timeout: Duration,
    interval: Duration,
) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if snapshot_mtime(path) > before {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(interval).await;
    }
}

/// Reads and parses the session snapshot at `path`.
pub fn load_session(path: &Path) -> Result<Session, SessionError> {
    let content =
        fs::read_to_string(path).map_err(|e| SessionError::SnapshotRead(e.to_string()))?;
    serde_yaml::from_str(&content).map_err(|e| SessionError::SnapshotRead(e.to_string()))
}

/// Flattens a session tree into one `TabInfo` per tab with history.
///
/// Pure and deterministic. For each window and tab (in snapshot order) the
/// current history entry is the first one flagged `active`, or the last one
/// if none is flagged — the tab's live navigation position, not its
/// creation order. Tabs with empty history contribute nothing.
pub fn extract_tabs(session: &Session) -> Vec<TabInfo> {
    let mut tabs = Vec::new();

    for (window_index, window) in session.windows.iter().enumerate() {
        for (tab_index, tab) in window.tabs.iter().enumerate() {
            let current = tab
                .history
                .iter()
                .find(|entry| entry.active)
                .or_else(|| tab.history.last());

            if let Some(entry) = current {
                let title = if entry.title.is_empty() {
                    entry.url.clone()
                } else {
                    entry.title.clone()
                };
                tabs.push(TabInfo {
                    window_index,
                    tab_index,
                    url: entry.url.clone(),
                    title,
                    active: tab.active && window.active,
                    pinned: entry.pinned,
                });
            }
        }
    }

    tabs
}

/// Orchestrates "force a fresh snapshot, wait for it, parse it".
pub struct SessionManager {
    client: IpcClient,
    session_path: PathBuf,
}

impl SessionManager {
    /// Creates a manager using the default socket discovery and the
    /// standard autosave snapshot path.
    pub fn new() -> Self {
        Self {
            client: IpcClient::new(),
            session_path: platform::session_path(),
        }
    }

    /// Creates a manager with an explicit client and snapshot path.
    pub fn with_paths(client: IpcClient, session_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            session_path: session_path.into(),
        }
    }

    /// Lists all open tabs from a snapshot no older than the forced save.
    ///
    /// If the save command cannot be delivered (browser not running) the
    /// wait is skipped and whatever snapshot is on disk is read directly, so
    /// a stale listing still beats no listing. Only an unreadable or
    /// unparsable snapshot is an error.
    pub async fn list_tabs(&self) -> Result<Vec<TabInfo>, SessionError> {
        let before = snapshot_mtime(&self.session_path);

        if self.client.session_save().await.is_ok() {
            wait_for_newer_mtime(&self.session_path, before, SAVE_WAIT_TIMEOUT, POLL_INTERVAL)
                .await;
        }

        let session = load_session(&self.session_path)?;
        Ok(extract_tabs(&session))
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
