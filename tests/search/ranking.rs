// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: field weights, term frequency and the tie-break chain.

use super::common::{locations, make_record, search};
use docsift::{Category, Index, SearchConfig};

#[test]
fn test_title_outranks_text() {
    let index = Index::build(vec![
        make_record("y", "other", Category::Section, "pager here"),
        make_record("x", "pager", Category::Section, "nothing here"),
    ])
    .unwrap();
    assert_eq!(locations(&search(&index, "pager", false)), vec!["x", "y"]);
}

#[test]
fn test_long_titled_record_beats_short_mentions() {
    let mut records = vec![make_record(
        "man/pager/",
        "pager",
        Category::Page,
        &vec!["lorem"; 200].join(" "),
    )];
    for i in 0..30 {
        records.push(make_record(&format!("note/{i}"), "note", Category::Section, "see pager now"));
    }
    let index = Index::build(records).unwrap();
    let config = SearchConfig::default();

    let results = docsift::search(&index, "pager", false, config.default_limit, &config).unwrap();
    assert_eq!(results.len(), config.default_limit);
    assert_eq!(results[0].location(), "man/pager/");
    assert!(results[0].score > results[1].score);
    // no text to highlight, the title carried it
    assert!(results[0].matched_spans.is_empty());

    let typing = docsift::search(&index, "pag", true, config.default_limit, &config).unwrap();
    assert_eq!(typing[0].location(), "man/pager/");
}

#[test]
fn test_weights_are_configurable() {
    let index = Index::build(vec![
        make_record("x", "pager", Category::Section, "nothing here"),
        make_record("y", "other", Category::Section, "pager here"),
    ])
    .unwrap();
    let mut config = SearchConfig::default();
    config.scoring.title_weight = 0.1;
    config.scoring.text_weight = 3.0;
    let results = docsift::search(&index, "pager", false, 10, &config).unwrap();
    assert_eq!(locations(&results), vec!["y", "x"]);
}

#[test]
fn test_repeated_term_ranks_higher() {
    let index = Index::build(vec![
        make_record("once", "a", Category::Page, "pager y z"),
        make_record("twice", "b", Category::Page, "pager pager x"),
    ])
    .unwrap();
    assert_eq!(locations(&search(&index, "pager", false)), vec!["twice", "once"]);
}

#[test]
fn test_tie_broken_by_shorter_text() {
    let index = Index::build(vec![
        make_record("a", "t", Category::Page, "pager extraordinarily"),
        make_record("z", "t", Category::Page, "pager b"),
    ])
    .unwrap();
    let results = search(&index, "pager", false);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(locations(&results), vec!["z", "a"]);
}

#[test]
fn test_tie_broken_by_location() {
    let index = Index::build(vec![
        make_record("lib/b", "t", Category::Page, "pager b"),
        make_record("lib/a", "t", Category::Page, "pager b"),
    ])
    .unwrap();
    assert_eq!(locations(&search(&index, "pager", false)), vec!["lib/a", "lib/b"]);
}

#[test]
fn test_exact_terms_must_all_match() {
    let index = super::common::scenario_index();
    assert_eq!(locations(&search(&index, "pager output", false)), vec!["a#1"]);
    assert!(search(&index, "output details", false).is_empty());
}

#[test]
fn test_matching_every_term_beats_matching_some() {
    let index = Index::build(vec![
        make_record("both", "t", Category::Page, "pager keybinding"),
        make_record("one", "t", Category::Page, "pager pager"),
    ])
    .unwrap();
    // "key" is still being typed: optional, but rewarded when present
    let results = search(&index, "pager key", true);
    assert_eq!(locations(&results), vec!["both", "one"]);
}

#[test]
fn test_page_field_keeps_empty_records_reachable() {
    let index = Index::build(vec![
        make_record("man/usage/#Usage", "Usage", Category::Section, "").with_page("Usage"),
        make_record("man/usage/", "Usage", Category::Page, "The pager is called").with_page("Usage"),
    ])
    .unwrap();
    let results = search(&index, "called", false);
    assert_eq!(locations(&results), vec!["man/usage/"]);
    let results = search(&index, "usage", false);
    assert_eq!(results.len(), 2);
}
