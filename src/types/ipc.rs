use serde::{Deserialize, Serialize};

/// IPC protocol version expected by the qutebrowser receiver.
///
/// Fixed by agreement with the receiving process; changing it without
/// receiver agreement is a protocol break.
pub const PROTOCOL_VERSION: u32 = 1;

/// One command message on the qutebrowser IPC wire.
///
/// qutebrowser expects the full command line as a single string in `args`,
/// not a tokenized argv, so `args` always holds exactly one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub args: Vec<String>,
    pub target_arg: Option<String>,
    pub protocol_version: u32,
}
