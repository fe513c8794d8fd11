// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two-record pager corpus, end to end.
//!
//! ```text
//! a#1  method   title "pager"  text "pager(obj) shows output"
//! b#2  section  title "usage"  text "see pager for details"
//! ```

use super::common::{locations, scenario_index, search};
use docsift::{Field, Span};

#[test]
fn test_complete_query_returns_both_title_match_first() {
    let index = scenario_index();
    let results = search(&index, "pager", false);
    assert_eq!(locations(&results), vec!["a#1", "b#2"]);
    assert!(results[0].score > results[1].score);
    assert_eq!(results[0].best_field, Field::Title);
    assert_eq!(results[1].best_field, Field::Text);
}

#[test]
fn test_empty_query_returns_nothing() {
    let index = scenario_index();
    assert!(search(&index, "", false).is_empty());
    assert!(search(&index, "", true).is_empty());
    assert!(search(&index, "   \t ", true).is_empty());
}

#[test]
fn test_incomplete_prefix_matches_like_complete_word() {
    let index = scenario_index();
    let complete = search(&index, "pager", false);
    let typing = search(&index, "pag", true);
    assert_eq!(locations(&typing), locations(&complete));
}

#[test]
fn test_prefix_needs_incomplete_flag() {
    let index = scenario_index();
    assert!(search(&index, "pag", false).is_empty());
}

#[test]
fn test_spans_point_at_pager() {
    let index = scenario_index();
    let results = search(&index, "pager", false);
    assert_eq!(results[0].matched_spans, vec![Span::new(0, 5)]);
    assert_eq!(results[1].matched_spans, vec![Span::new(4, 9)]);
    for result in &results {
        for span in &result.matched_spans {
            assert_eq!(span.slice(&result.record.text), Some("pager"));
        }
    }
}

#[test]
fn test_prefix_spans_cover_typed_part() {
    let index = scenario_index();
    let results = search(&index, "pag", true);
    assert_eq!(results[0].matched_spans, vec![Span::new(0, 3)]);
    assert_eq!(results[1].matched_spans, vec![Span::new(4, 7)]);
}

#[test]
fn test_title_only_term_has_no_spans() {
    let index = scenario_index();
    let results = search(&index, "usage", false);
    assert_eq!(locations(&results), vec!["b#2"]);
    assert!(results[0].matched_spans.is_empty());
}
