//! qutebridge — control-plane bridge for a running qutebrowser instance.
//!
//! Sends commands over qutebrowser's Unix-domain IPC socket and reads the
//! browser's persisted state (session tabs, history, bookmarks, quickmarks)
//! back from disk. This library crate exposes all modules for use by the
//! binary and integration tests.

pub mod ipc;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod types;
