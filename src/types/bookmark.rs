use serde::{Deserialize, Serialize};

/// One line of the `bookmarks/urls` file: a URL with an optional title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub url: String,
    pub title: Option<String>,
}

/// One line of the `quickmarks` file: a short name mapped to a URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quickmark {
    pub name: String,
    pub url: String,
}
