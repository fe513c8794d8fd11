// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fallbacks for words that aren't in the vocabulary.

use super::common::{locations, make_record, release_index, search};
use docsift::{Category, Index, SearchConfig};

#[test]
fn test_one_typo_still_finds_keybindings() {
    let index = release_index();
    let results = search(&index, "keybindng", false);
    assert!(!results.is_empty());
    assert!(results
        .iter()
        .any(|r| r.location().contains("set_keybinding")));
}

#[test]
fn test_closer_spelling_ranks_first() {
    let index = Index::build(vec![
        make_record("exact", "t", Category::Page, "keystroke handling"),
        make_record("typo", "t", Category::Page, "keystrokes handling"),
    ])
    .unwrap();
    // an exact match exists, so near spellings are not dragged in
    assert_eq!(locations(&search(&index, "keystroke", false)), vec!["exact"]);
    // a misspelled query falls back to both, closest first
    let results = search(&index, "keystrokx", false);
    assert_eq!(locations(&results), vec!["exact", "typo"]);
}

#[test]
fn test_short_words_need_exact_spelling() {
    let index = release_index();
    assert!(search(&index, "pkq", false).is_empty());
}

#[test]
fn test_fuzzy_can_be_disabled() {
    let index = release_index();
    let mut config = SearchConfig::default();
    config.query.fuzzy = false;
    let results = docsift::search(&index, "keybindng", false, 20, &config).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_identifier_parts_fallback() {
    let index = Index::build(vec![
        make_record("a", "TerminalPager.set_keybinding", Category::Method, "Set a keybinding."),
        make_record("b", "Keybindings", Category::Section, "The pager keybindings."),
    ])
    .unwrap();
    // never written as one word, but both halves appear in record b
    let results = search(&index, "pager_keybindings", false);
    assert_eq!(locations(&results), vec!["b"]);
    let text = &results[0].record.text;
    let words: Vec<&str> = results[0]
        .matched_spans
        .iter()
        .filter_map(|s| s.slice(text))
        .collect();
    assert_eq!(words, vec!["pager", "keybindings"]);
}
