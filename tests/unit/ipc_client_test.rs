//! Unit tests for socket discovery and the IPC client wire behavior.
//!
//! A tokio `UnixListener` stands in for qutebrowser: it accepts one
//! connection and reads the newline-delimited JSON message the client
//! writes. No response is ever sent, which is exactly the real protocol.

use std::fs;

use qutebridge::ipc::client::IpcClient;
use qutebridge::ipc::socket::find_socket_in;
use qutebridge::types::errors::IpcError;

use serde_json::Value;
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

/// Helper: accept one connection and return the first line received.
async fn recv_one_line(listener: UnixListener) -> String {
    let (stream, _) = listener.accept().await.unwrap();
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).await.unwrap();
    line
}

#[test]
fn test_discovery_prefers_first_directory() {
    let runtime = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    fs::write(runtime.path().join("ipc-runtime"), b"").unwrap();
    fs::write(data.path().join("ipc-data"), b"").unwrap();

    let found = find_socket_in(&[
        runtime.path().to_path_buf(),
        data.path().to_path_buf(),
    ])
    .unwrap();
    assert_eq!(found, runtime.path().join("ipc-runtime"));
}

#[test]
fn test_discovery_falls_back_to_data_directory() {
    let runtime = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("ipc-4f2a"), b"").unwrap();

    let found = find_socket_in(&[
        runtime.path().to_path_buf(),
        data.path().to_path_buf(),
    ])
    .unwrap();
    assert_eq!(found, data.path().join("ipc-4f2a"));
}

#[test]
fn test_discovery_ignores_non_matching_entries() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("history.sqlite"), b"").unwrap();
    fs::write(dir.path().join("quickmarks"), b"").unwrap();

    let result = find_socket_in(&[dir.path().to_path_buf()]);
    assert!(matches!(result, Err(IpcError::SocketNotFound)));
}

#[test]
fn test_discovery_treats_missing_directory_as_no_match() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let result = find_socket_in(&[missing]);
    assert!(matches!(result, Err(IpcError::SocketNotFound)));
}

/// The wire message must carry the whole command as one string in `args`,
/// with a null target and protocol version 1, terminated by a newline.
#[tokio::test]
async fn test_send_command_writes_single_json_line() {
    let dir = TempDir::new().unwrap();
    let sock = dir.path().join("ipc-test");
    let listener = UnixListener::bind(&sock).unwrap();
    let server = tokio::spawn(recv_one_line(listener));

    let client = IpcClient::with_socket(&sock);
    client
        .open("https://example.com", true, true)
        .await
        .unwrap();

    let line = server.await.unwrap();
    assert!(line.ends_with('\n'));

    let msg: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(
        msg["args"],
        serde_json::json!([":open -t -b https://example.com"])
    );
    assert_eq!(msg["target_arg"], Value::Null);
    assert_eq!(msg["protocol_version"], 1);
}

#[tokio::test]
async fn test_session_save_sends_forced_autosave() {
    let dir = TempDir::new().unwrap();
    let sock = dir.path().join("ipc-test");
    let listener = UnixListener::bind(&sock).unwrap();
    let server = tokio::spawn(recv_one_line(listener));

    let client = IpcClient::with_socket(&sock);
    client.session_save().await.unwrap();

    let msg: Value = serde_json::from_str(&server.await.unwrap()).unwrap();
    assert_eq!(msg["args"][0], ":session-save --force _autosave");
}

/// Fire-and-forget: the send completes even though the server never replies.
#[tokio::test]
async fn test_send_does_not_wait_for_a_response() {
    let dir = TempDir::new().unwrap();
    let sock = dir.path().join("ipc-test");
    let listener = UnixListener::bind(&sock).unwrap();

    let client = IpcClient::with_socket(&sock);
    client.tab_close().await.unwrap();

    // Only now does the server even accept the connection.
    let line = recv_one_line(listener).await;
    let msg: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(msg["args"][0], ":tab-close");
}

#[tokio::test]
async fn test_connect_failure_is_a_transport_error() {
    let dir = TempDir::new().unwrap();
    let client = IpcClient::with_socket(dir.path().join("ipc-gone"));

    let result = client.reload(false).await;
    assert!(matches!(result, Err(IpcError::Transport(_))));
}
