// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typing a query one keystroke at a time.

use super::common::{locations, release_index, search};
use std::collections::HashSet;

fn location_set(raw: &str, incomplete: bool) -> HashSet<String> {
    let index = release_index();
    search(&index, raw, incomplete)
        .iter()
        .map(|r| r.location().to_string())
        .collect()
}

#[test]
fn test_adding_exact_terms_narrows() {
    let one = location_set("pager", false);
    let two = location_set("pager julia", false);
    let three = location_set("pager julia stdout", false);
    assert!(!one.is_empty());
    assert!(two.is_subset(&one));
    assert!(three.is_subset(&two));
}

#[test]
fn test_every_keystroke_has_results() {
    let index = release_index();
    let query = "keybinding";
    for end in 1..=query.len() {
        let results = search(&index, &query[..end], true);
        assert!(!results.is_empty(), "no results for {:?}", &query[..end]);
    }
}

#[test]
fn test_prefix_narrows_as_typed() {
    let mut previous: Option<HashSet<String>> = None;
    for typed in ["p", "pr", "pre", "pref", "prefe", "prefer"] {
        let current = location_set(typed, true);
        if let Some(prev) = &previous {
            assert!(current.is_subset(prev), "{typed} widened the result set");
        }
        previous = Some(current);
    }
}

#[test]
fn test_trailing_space_finishes_word() {
    let index = release_index();
    // "pag " is a finished (misspelled) word, not a prefix
    let finished = search(&index, "pag ", true);
    let typing = search(&index, "pag", true);
    assert!(!typing.is_empty());
    assert!(finished.is_empty());
}

#[test]
fn test_repeated_words_collapse() {
    let index = release_index();
    let once = search(&index, "pager julia", false);
    let twice = search(&index, "pager julia pager", false);
    assert_eq!(locations(&once).len(), locations(&twice).len());
    let a: HashSet<&str> = locations(&once).into_iter().collect();
    let b: HashSet<&str> = locations(&twice).into_iter().collect();
    assert_eq!(a, b);
}
