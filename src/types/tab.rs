use serde::{Deserialize, Serialize};

/// A flattened view of one open tab, derived from the session snapshot.
///
/// `active` is true only when both the owning window and the tab are marked
/// active. `url`, `title`, and `pinned` come from the tab's current history
/// entry (the first one flagged active, or the last one).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabInfo {
    pub window_index: usize,
    pub tab_index: usize,
    pub url: String,
    pub title: String,
    pub active: bool,
    pub pinned: bool,
}
