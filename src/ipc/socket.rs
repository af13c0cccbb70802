//! Discovery of qutebrowser's IPC control socket.
//!
//! qutebrowser creates a Unix-domain socket named `ipc-<hash>` in its
//! runtime directory (or, on setups without one, its data directory).
//! A missing socket means the browser is not running.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::errors::IpcError;

/// File-name prefix of the qutebrowser IPC socket.
const SOCKET_PREFIX: &str = "ipc-";

/// Finds the qutebrowser IPC socket path.
///
/// Searches `<runtime>/qutebrowser` first, then `<data>/qutebrowser`, and
/// returns the first directory entry whose name starts with `ipc-`. An
/// unreadable directory is treated the same as one with no match.
pub fn find_socket() -> Result<PathBuf, IpcError> {
    find_socket_in(&[platform::ipc_socket_dir(), platform::qutebrowser_data_dir()])
}

/// Finds the first `ipc-*` entry across the given candidate directories,
/// in order. Exposed separately so tests can supply their own directories.
pub fn find_socket_in(dirs: &[PathBuf]) -> Result<PathBuf, IpcError> {
    for dir in dirs {
        if let Some(path) = first_socket_entry(dir) {
            return Ok(path);
        }
    }
    Err(IpcError::SocketNotFound)
}

fn first_socket_entry(dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        if entry.file_name().to_string_lossy().starts_with(SOCKET_PREFIX) {
            return Some(entry.path());
        }
    }
    None
}
