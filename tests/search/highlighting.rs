// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight spans and snippets.

use super::common::{make_record, release_index, search};
use docsift::{fold, Category, Index, Span};

#[test]
fn test_span_per_term_in_text_order() {
    let index = Index::build(vec![make_record(
        "a",
        "t",
        Category::Page,
        "Reset key bindings to the original pager defaults",
    )])
    .unwrap();
    let results = search(&index, "pager bindings", false);
    let text = &results[0].record.text;
    let words: Vec<&str> = results[0]
        .matched_spans
        .iter()
        .filter_map(|s| s.slice(text))
        .collect();
    assert_eq!(words, vec!["bindings", "pager"]);
}

#[test]
fn test_case_and_accents_fold_back_to_query() {
    let index = Index::build(vec![make_record(
        "a",
        "t",
        Category::Page,
        "Written by the TerminalPager authors",
    )])
    .unwrap();
    let results = search(&index, "terminalpager", false);
    let span = results[0].matched_spans[0];
    let slice = span.slice(&results[0].record.text).unwrap();
    assert_eq!(slice, "TerminalPager");
    assert_eq!(fold(slice), "terminalpager");
}

#[test]
fn test_identifier_part_highlighted_inside_word() {
    let index = Index::build(vec![make_record(
        "lib/#set_keybinding",
        "set_keybinding",
        Category::Method,
        "set_keybinding(key, action) binds a key",
    )])
    .unwrap();
    let results = search(&index, "keybinding", false);
    let text = &results[0].record.text;
    assert_eq!(results[0].matched_spans[0].slice(text), Some("keybinding"));
}

#[test]
fn test_fixture_spans_are_valid() {
    let index = release_index();
    for query in ["pager", "keybinding", "preference", "stdout", "julia"] {
        for result in search(&index, query, false) {
            let text = &result.record.text;
            for pair in result.matched_spans.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{query}: overlapping spans");
            }
            for span in &result.matched_spans {
                let slice = span.slice(text).expect("span on char boundaries");
                assert!(fold(slice).contains(query), "{query}: span {slice:?}");
            }
        }
    }
}

#[test]
fn test_snippet_centers_first_match() {
    let filler = "lorem ipsum dolor sit amet ".repeat(20);
    let text = format!("{filler}the pager appears here {filler}");
    let index = Index::build(vec![make_record("a", "t", Category::Page, &text)]).unwrap();
    let results = search(&index, "pager", false);
    let snippet = results[0].snippet(60);
    assert!(snippet.leading);
    assert!(snippet.trailing);
    assert!(snippet.text.chars().count() <= 60);
    assert_eq!(snippet.spans.len(), 1);
    assert_eq!(snippet.spans[0].slice(&snippet.text), Some("pager"));
}

#[test]
fn test_snippet_without_spans_starts_at_beginning() {
    let index = super::common::scenario_index();
    let results = search(&index, "usage", false);
    let snippet = results[0].snippet(8);
    assert_eq!(snippet.text, "see page");
    assert!(snippet.spans.is_empty());
    assert!(!snippet.leading);
    assert!(snippet.trailing);
}

#[test]
fn test_spans_serialize_as_pairs() {
    let json = serde_json::to_value(Span::new(4, 9)).unwrap();
    assert_eq!(json, serde_json::json!({"start": 4, "end": 9}));
}
