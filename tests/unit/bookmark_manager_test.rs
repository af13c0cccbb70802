//! Unit tests for the bookmark and quickmark file parsers.
//!
//! Line format: split at the first space, first token is the key field,
//! the rest (embedded spaces included) is the value.

use std::fs;

use qutebridge::managers::bookmark_manager::{
    list_bookmarks, list_quickmarks, parse_bookmark_line, parse_quickmark_line,
};
use qutebridge::types::bookmark::{Bookmark, Quickmark};

use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[case("https://a.com Title With Spaces", "https://a.com", Some("Title With Spaces"))]
#[case("https://a.com", "https://a.com", None)]
#[case("https://a.com  double", "https://a.com", Some(" double"))]
fn test_bookmark_line_parsing(
    #[case] line: &str,
    #[case] url: &str,
    #[case] title: Option<&str>,
) {
    let bookmark = parse_bookmark_line(line);
    assert_eq!(
        bookmark,
        Bookmark {
            url: url.to_string(),
            title: title.map(str::to_string),
        }
    );
}

#[rstest]
#[case("work https://work.example/inbox", "work", "https://work.example/inbox")]
#[case("orphan", "orphan", "")]
#[case("docs https://example.com/a b c", "docs", "https://example.com/a b c")]
fn test_quickmark_line_parsing(#[case] line: &str, #[case] name: &str, #[case] url: &str) {
    let quickmark = parse_quickmark_line(line);
    assert_eq!(
        quickmark,
        Quickmark {
            name: name.to_string(),
            url: url.to_string(),
        }
    );
}

#[test]
fn test_blank_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls");
    fs::write(
        &path,
        "https://a.com First\n\n   \nhttps://b.com Second\n",
    )
    .unwrap();

    let bookmarks = list_bookmarks(&path).unwrap();
    assert_eq!(bookmarks.len(), 2);
    assert_eq!(bookmarks[0].url, "https://a.com");
    assert_eq!(bookmarks[1].title.as_deref(), Some("Second"));
}

#[test]
fn test_missing_bookmarks_file_yields_empty_list() {
    let dir = TempDir::new().unwrap();
    let bookmarks = list_bookmarks(&dir.path().join("urls")).unwrap();
    assert!(bookmarks.is_empty());
}

#[test]
fn test_missing_quickmarks_file_yields_empty_list() {
    let dir = TempDir::new().unwrap();
    let quickmarks = list_quickmarks(&dir.path().join("quickmarks")).unwrap();
    assert!(quickmarks.is_empty());
}

#[test]
fn test_file_order_is_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quickmarks");
    fs::write(&path, "b https://b.com\na https://a.com\n").unwrap();

    let quickmarks = list_quickmarks(&path).unwrap();
    let names: Vec<&str> = quickmarks.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}
