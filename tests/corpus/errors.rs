// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rejected corpora: the first bad record aborts the load.

use docsift::{CorpusError, SearchEngine};

#[test]
fn test_missing_text_points_at_record() {
    let input = r#"[
        {"location": "a#1", "title": "pager", "category": "method", "text": "pager(obj) shows output"},
        {"location": "b#2", "title": "usage", "category": "section"}
    ]"#;
    let err = docsift::parse_str(input).unwrap_err();
    assert_eq!(err.record_index(), Some(1));
    assert!(matches!(err, CorpusError::MissingField { field: "text", .. }));
    assert_eq!(err.to_string(), "record 1 is missing required field `text`");
}

#[test]
fn test_missing_location_points_at_record() {
    let input = r#"{"docs": [{"location": "a", "text": ""}, {"location": "b", "text": ""}, {"text": "orphan"}]}"#;
    let err = docsift::parse_str(input).unwrap_err();
    assert!(matches!(err, CorpusError::MissingField { index: 2, field: "location" }));
}

#[test]
fn test_first_error_wins() {
    let input = r#"[{"location": "a", "text": "x", "category": "widget"}, {"title": "no location"}]"#;
    let err = docsift::parse_str(input).unwrap_err();
    assert_eq!(err.record_index(), Some(0));
    assert!(matches!(err, CorpusError::UnknownCategory { ref value, .. } if value == "widget"));
}

#[test]
fn test_record_not_an_object() {
    let err = docsift::parse_str(r#"[{"location": "a", "text": "x"}, "stray"]"#).unwrap_err();
    assert!(matches!(err, CorpusError::MalformedRecord { index: 1, .. }));
}

#[test]
fn test_truncated_payload() {
    let err = docsift::parse_str(r#"var documenterSearchIndex = {"docs": [{"location": "a""#).unwrap_err();
    assert!(matches!(err, CorpusError::Json(_)));
    assert_eq!(err.record_index(), None);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.js");
    let err = docsift::load_file(&path).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
    assert!(err.to_string().contains("absent.js"));
}

#[test]
fn test_failed_load_leaves_no_index() {
    let engine = SearchEngine::default();
    let err = engine
        .load_str(r#"[{"location": "a#1", "title": "pager", "category": "method"}]"#)
        .unwrap_err();
    assert_eq!(err.record_index(), Some(0));
    assert!(engine.snapshot().is_none());
    assert!(engine.search("pager", false).is_empty());
}
