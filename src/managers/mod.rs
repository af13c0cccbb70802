// qutebridge state readers
// Managers read qutebrowser's persisted state: session tabs, browsing
// history, and bookmark/quickmark files. None of them write browser state.

pub mod bookmark_manager;
pub mod history_manager;
pub mod session_manager;
