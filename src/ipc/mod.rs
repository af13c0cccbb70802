// qutebrowser IPC control channel
// socket: discovers the `ipc-*` Unix socket on disk.
// client: frames and sends single command messages over it.

pub mod client;
pub mod socket;
