//! Bookmark and quickmark reader for qutebridge.
//!
//! Both files are newline-delimited text with one record per non-blank
//! line, split at the first space. Bookmarks put the URL first with the
//! title (which may contain spaces) after; quickmarks put the name first
//! with the URL after. A missing file means "no bookmarks yet" and yields
//! an empty list — only a file that exists but cannot be read is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::types::bookmark::{Bookmark, Quickmark};
use crate::types::errors::BookmarkError;

/// Parses one bookmark line: `<url> [title...]`.
pub fn parse_bookmark_line(line: &str) -> Bookmark {
    match line.split_once(' ') {
        Some((url, title)) => Bookmark {
            url: url.to_string(),
            title: Some(title.to_string()),
        },
        None => Bookmark {
            url: line.to_string(),
            title: None,
        },
    }
}

/// Parses one quickmark line: `<name> <url...>`.
pub fn parse_quickmark_line(line: &str) -> Quickmark {
    match line.split_once(' ') {
        Some((name, url)) => Quickmark {
            name: name.to_string(),
            url: url.to_string(),
        },
        None => Quickmark {
            name: line.to_string(),
            url: String::new(),
        },
    }
}

fn read_lines(path: &Path) -> Result<Option<Vec<String>>, BookmarkError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        )),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(BookmarkError::ReadFailed(e.to_string())),
    }
}

/// Lists all bookmarks from the given file, in file order.
pub fn list_bookmarks(path: &Path) -> Result<Vec<Bookmark>, BookmarkError> {
    let lines = match read_lines(path)? {
        Some(lines) => lines,
        None => return Ok(Vec::new()),
    };
    Ok(lines.iter().map(|l| parse_bookmark_line(l)).collect())
}

/// Lists all quickmarks from the given file, in file order.
pub fn list_quickmarks(path: &Path) -> Result<Vec<Quickmark>, BookmarkError> {
    let lines = match read_lines(path)? {
        Some(lines) => lines,
        None => return Ok(Vec::new()),
    };
    Ok(lines.iter().map(|l| parse_quickmark_line(l)).collect())
}
