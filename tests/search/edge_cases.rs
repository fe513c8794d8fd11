// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inputs at the edges: punctuation, symbols, unicode, limits.

use super::common::{locations, make_record, scenario_index, search, search_limit};
use docsift::{Category, Index, QueryError, SearchConfig};

#[test]
fn test_punctuation_only_query() {
    let index = scenario_index();
    for raw in ["?", "...", "()", "|> ,;", "-"] {
        assert!(search(&index, raw, true).is_empty(), "{raw:?}");
    }
}

#[test]
fn test_limit_zero_and_one() {
    let index = scenario_index();
    assert!(search_limit(&index, "pager", false, 0).is_empty());
    assert_eq!(locations(&search_limit(&index, "pager", false, 1)), vec!["a#1"]);
}

#[test]
fn test_too_many_terms_is_an_error() {
    let index = scenario_index();
    let raw = (0..40).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let err = docsift::search(&index, &raw, false, 10, &SearchConfig::default()).unwrap_err();
    assert_eq!(err, QueryError::TooManyTerms { max: 32, found: 40 });
}

#[test]
fn test_macro_names() {
    let index = Index::build(vec![
        make_record("#@help", "@help", Category::Macro, "Open the documentation in pager."),
        make_record("#help", "help", Category::Section, "Getting help."),
    ])
    .unwrap();
    // the sigil makes it a distinct term
    assert_eq!(locations(&search(&index, "@help", false)), vec!["#@help"]);
    // the bare word finds both
    assert_eq!(search(&index, "help", false).len(), 2);
}

#[test]
fn test_bang_functions() {
    let index = Index::build(vec![make_record(
        "#drop",
        "TerminalPager.drop_preference!",
        Category::Method,
        "drop_preference!(pref::String) -> Nothing",
    )])
    .unwrap();
    for raw in ["drop_preference!", "drop_preference", "preference", "terminalpager"] {
        assert_eq!(locations(&search(&index, raw, false)), vec!["#drop"], "{raw}");
    }
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_accents_fold_both_ways() {
    let index = Index::build(vec![make_record("a", "Café", Category::Page, "naïve résumé")]).unwrap();
    assert_eq!(search(&index, "cafe", false).len(), 1);
    assert_eq!(search(&index, "RESUME", false).len(), 1);
    assert_eq!(search(&index, "naïve", false).len(), 1);
}

#[test]
fn test_empty_index() {
    let index = Index::build(Vec::new()).unwrap();
    assert!(index.is_empty());
    assert!(search(&index, "pager", true).is_empty());
}

#[test]
fn test_record_with_empty_text_and_title() {
    let index = Index::build(vec![make_record("x", "", Category::Page, "")]).unwrap();
    assert_eq!(index.num_terms(), 0);
    assert!(search(&index, "x", false).is_empty());
}
