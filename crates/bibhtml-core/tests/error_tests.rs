//! Tests for conversion error types.
//!
//! These tests verify the messages users see when a run aborts.

use bibhtml_core::Error;
use std::io;
use std::path::PathBuf;

#[test]
fn test_bibtex_load_display() {
    let err = Error::BibtexLoad {
        path: PathBuf::from("library.bib"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };
    let display = err.to_string();
    assert!(
        display.starts_with("Cannot load BibTeX file: library.bib"),
        "Got: {}",
        display
    );
    assert!(display.contains("No such file or directory"), "Got: {}", display);
    assert!(err.is_load_error());
}

#[test]
fn test_json_read_display() {
    let err = Error::JsonRead {
        path: PathBuf::from("library.json"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
    };
    let display = err.to_string();
    assert!(
        display.starts_with("Cannot load JSON file: library.json"),
        "Got: {}",
        display
    );
    assert!(err.is_load_error());
}

#[test]
fn test_json_load_display_includes_position() {
    let json_err = serde_json::from_str::<serde_json::Value>("[1, 2").unwrap_err();
    let err = Error::from(json_err);
    let display = err.to_string();
    assert!(display.starts_with("Cannot load JSON file: "), "Got: {}", display);
    assert!(display.contains("line 1"), "Got: {}", display);
}

#[test]
fn test_missing_required_field_display() {
    let err = Error::MissingRequiredField {
        id: "ITEM-9".to_string(),
        field: "container-title".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Reference 'ITEM-9' missing required field 'container-title'"
    );
    assert!(!err.is_load_error());
}

#[test]
fn test_io_error_is_not_a_load_error() {
    let err = Error::from(io::Error::other("disk full"));
    assert_eq!(err.to_string(), "IO error: disk full");
    assert!(!err.is_load_error());
}
