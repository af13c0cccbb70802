use std::fmt;

// === IpcError ===

/// Errors related to the qutebrowser IPC control channel.
#[derive(Debug)]
pub enum IpcError {
    /// No IPC socket was found in the runtime or data directory.
    SocketNotFound,
    /// Connecting to or writing the socket failed.
    Transport(String),
}

impl fmt::Display for IpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpcError::SocketNotFound => {
                write!(f, "No qutebrowser IPC socket found. Is qutebrowser running?")
            }
            IpcError::Transport(msg) => write!(f, "IPC transport error: {}", msg),
        }
    }
}

impl std::error::Error for IpcError {}

// === SessionError ===

/// Errors related to reading the session snapshot.
#[derive(Debug)]
pub enum SessionError {
    /// The session file could not be read or parsed.
    SnapshotRead(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::SnapshotRead(msg) => {
                write!(f, "Failed to read session file: {}", msg)
            }
        }
    }
}

impl std::error::Error for SessionError {}

// === HistoryError ===

/// Errors related to the browsing history database.
#[derive(Debug)]
pub enum HistoryError {
    /// The history database could not be opened (absent or inaccessible).
    Unavailable(String),
    /// A query against an open database failed.
    Query(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Unavailable(msg) => {
                write!(f, "Failed to open history database: {}", msg)
            }
            HistoryError::Query(msg) => write!(f, "History query error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

// === BookmarkError ===

/// Errors related to the bookmark and quickmark files.
///
/// A missing file is not an error (it yields an empty list); this covers
/// files that exist but cannot be read.
#[derive(Debug)]
pub enum BookmarkError {
    /// The file exists but reading it failed.
    ReadFailed(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::ReadFailed(msg) => write!(f, "Failed to read bookmarks: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}
