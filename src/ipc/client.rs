//! IPC client for sending commands to a running qutebrowser instance.
//!
//! Protocol: one JSON object plus a trailing newline per command, written
//! over the Unix-domain socket discovered by [`socket::find_socket`]. The
//! channel is write-only from this side — qutebrowser defines no
//! acknowledgement, so every send is fire-and-forget and returns before the
//! browser has acted on the command.

use std::path::PathBuf;

use tokio::io::AsyncWriteExt;
use tokio::net::UnixStream;

use super::socket;
use crate::types::errors::IpcError;
use crate::types::ipc::{IpcMessage, PROTOCOL_VERSION};

/// Builds the wire message for a command token sequence.
///
/// qutebrowser expects the whole command line as a single string in `args`,
/// so the tokens are space-joined into one element.
pub fn command_message(tokens: &[&str]) -> IpcMessage {
    IpcMessage {
        args: vec![tokens.join(" ")],
        target_arg: None,
        protocol_version: PROTOCOL_VERSION,
    }
}

/// Client for the qutebrowser IPC control channel.
///
/// Each send opens its own connection; no state is kept between calls
/// beyond an optional fixed socket path used by tests.
#[derive(Debug, Default)]
pub struct IpcClient {
    socket_override: Option<PathBuf>,
}

impl IpcClient {
    /// Creates a client that discovers the socket on every send.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client bound to a fixed socket path, bypassing discovery.
    pub fn with_socket(path: impl Into<PathBuf>) -> Self {
        Self {
            socket_override: Some(path.into()),
        }
    }

    fn socket_path(&self) -> Result<PathBuf, IpcError> {
        match &self.socket_override {
            Some(path) => Ok(path.clone()),
            None => socket::find_socket(),
        }
    }

    /// Sends one command to the browser and returns once the bytes are
    /// written and the write side is closed. Does not wait for execution.
    pub async fn send_command(&self, tokens: &[&str]) -> Result<(), IpcError> {
        let path = self.socket_path()?;
        let message = command_message(tokens);
        let mut payload = serde_json::to_string(&message)
            .map_err(|e| IpcError::Transport(e.to_string()))?;
        payload.push('\n');

        let mut stream = UnixStream::connect(&path)
            .await
            .map_err(|e| IpcError::Transport(e.to_string()))?;
        stream
            .write_all(payload.as_bytes())
            .await
            .map_err(|e| IpcError::Transport(e.to_string()))?;
        stream
            .shutdown()
            .await
            .map_err(|e| IpcError::Transport(e.to_string()))?;
        Ok(())
    }

    /// `:open [-t] [-b] <url>` — navigate, optionally in a new/background tab.
    pub async fn open(&self, url: &str, new_tab: bool, background: bool) -> Result<(), IpcError> {
        let mut tokens = vec![":open"];
        if new_tab {
            tokens.push("-t");
        }
        if background {
            tokens.push("-b");
        }
        tokens.push(url);
        self.send_command(&tokens).await
    }

    /// `:tab-close` — close the current tab.
    pub async fn tab_close(&self) -> Result<(), IpcError> {
        self.send_command(&[":tab-close"]).await
    }

    /// `:tab-focus <index|last>` — switch to a tab by 1-based index,
    /// negative index from the end, or `last` for the previous tab.
    pub async fn tab_focus(&self, target: &str) -> Result<(), IpcError> {
        self.send_command(&[":tab-focus", target]).await
    }

    /// `:tab-move <position>` — absolute (1-based), relative (`+1`/`-1`),
    /// or `+`/`-` for end/start.
    pub async fn tab_move(&self, position: &str) -> Result<(), IpcError> {
        self.send_command(&[":tab-move", position]).await
    }

    /// `:back [n]` — go back in the current tab's history.
    pub async fn back(&self, count: Option<u32>) -> Result<(), IpcError> {
        match count {
            Some(n) => self.send_command(&[":back", &n.to_string()]).await,
            None => self.send_command(&[":back"]).await,
        }
    }

    /// `:forward [n]` — go forward in the current tab's history.
    pub async fn forward(&self, count: Option<u32>) -> Result<(), IpcError> {
        match count {
            Some(n) => self.send_command(&[":forward", &n.to_string()]).await,
            None => self.send_command(&[":forward"]).await,
        }
    }

    /// `:reload [-f]` — reload the current page, optionally bypassing cache.
    pub async fn reload(&self, force: bool) -> Result<(), IpcError> {
        if force {
            self.send_command(&[":reload", "-f"]).await
        } else {
            self.send_command(&[":reload"]).await
        }
    }

    /// `:screenshot [--rect WxHxX+Y] <filename>` — capture the current page.
    pub async fn screenshot(&self, filename: &str, rect: Option<&str>) -> Result<(), IpcError> {
        match rect {
            Some(r) => self.send_command(&[":screenshot", "--rect", r, filename]).await,
            None => self.send_command(&[":screenshot", filename]).await,
        }
    }

    /// `:jseval [-q] <code>` — run JavaScript in the current page context.
    pub async fn jseval(&self, code: &str, quiet: bool) -> Result<(), IpcError> {
        if quiet {
            self.send_command(&[":jseval", "-q", code]).await
        } else {
            self.send_command(&[":jseval", code]).await
        }
    }

    /// `:session-save --force _autosave` — flush live session state to the
    /// autosave snapshot. `--force` is required because `_autosave` is an
    /// internal slot protected from direct overwrite.
    pub async fn session_save(&self) -> Result<(), IpcError> {
        self.send_command(&[":session-save", "--force", "_autosave"]).await
    }
}
