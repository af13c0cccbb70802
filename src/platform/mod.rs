// qutebridge platform paths
// Base dirs follow the XDG base-directory convention:
//   Data:    $XDG_DATA_HOME    else ~/.local/share
//   Config:  $XDG_CONFIG_HOME  else ~/.config
//   Runtime: $XDG_RUNTIME_DIR  else /run/user/<uid>
//
// All functions are pure reads of the environment, resolved per call, so
// tests can redirect every path by setting environment variables.

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
}

/// Returns the XDG data base directory.
/// Uses `$XDG_DATA_HOME` if set, otherwise `~/.local/share`.
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg)
    } else {
        home_dir().join(".local").join("share")
    }
}

/// Returns the XDG config base directory.
/// Uses `$XDG_CONFIG_HOME` if set, otherwise `~/.config`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        home_dir().join(".config")
    }
}

/// Returns the XDG runtime base directory.
/// Uses `$XDG_RUNTIME_DIR` if set, otherwise `/run/user/<uid>`.
pub fn runtime_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_RUNTIME_DIR") {
        PathBuf::from(xdg)
    } else {
        let uid = unsafe { libc::getuid() };
        PathBuf::from(format!("/run/user/{}", uid))
    }
}

/// qutebrowser's data directory: `<data>/qutebrowser`.
pub fn qutebrowser_data_dir() -> PathBuf {
    data_dir().join("qutebrowser")
}

/// qutebrowser's config directory: `<config>/qutebrowser`.
pub fn qutebrowser_config_dir() -> PathBuf {
    config_dir().join("qutebrowser")
}

/// Directory searched for the `ipc-*` control socket: `<runtime>/qutebrowser`.
pub fn ipc_socket_dir() -> PathBuf {
    runtime_dir().join("qutebrowser")
}

/// The autosave session snapshot written by `:session-save`.
pub fn session_path() -> PathBuf {
    qutebrowser_data_dir().join("sessions").join("_autosave.yml")
}

/// The SQLite browsing-history database.
pub fn history_path() -> PathBuf {
    qutebrowser_data_dir().join("history.sqlite")
}

/// The newline-delimited bookmarks file.
pub fn bookmarks_path() -> PathBuf {
    qutebrowser_config_dir().join("bookmarks").join("urls")
}

/// The newline-delimited quickmarks file.
pub fn quickmarks_path() -> PathBuf {
    qutebrowser_config_dir().join("quickmarks")
}
