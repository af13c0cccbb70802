use serde::{Deserialize, Serialize};

/// The browser's serialized session state: `windows[] → tabs[] → history[]`.
///
/// Read-only input for this crate; only qutebrowser itself writes it.
/// Unknown YAML keys (scroll-pos, zoom, geometry, ...) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(default)]
    pub windows: Vec<SessionWindow>,
}

/// One browser window inside a session snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionWindow {
    #[serde(default)]
    pub tabs: Vec<SessionTab>,
    #[serde(default)]
    pub active: bool,
}

/// One tab inside a window: its navigation history plus an active flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionTab {
    #[serde(default)]
    pub history: Vec<TabHistoryEntry>,
    #[serde(default)]
    pub active: bool,
}

/// A single navigation entry within a tab's history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TabHistoryEntry {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub pinned: bool,
}
