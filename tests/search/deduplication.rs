// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One result per location.

use super::common::{locations, make_record, search};
use docsift::{Category, CorpusError, Index};
use std::collections::HashSet;

fn shared_location_index() -> Index {
    Index::build(vec![
        make_record("lib/#pager", "pager", Category::Method, "pager(obj) shows output"),
        make_record("lib/#pager", "pager", Category::Section, ""),
        make_record("man/usage/", "Usage", Category::Page, "call the pager"),
    ])
    .unwrap()
}

#[test]
fn test_shared_location_returned_once() {
    let index = shared_location_index();
    let results = search(&index, "pager", false);
    assert_eq!(results.len(), 2);
    let unique: HashSet<&str> = locations(&results).into_iter().collect();
    assert_eq!(unique.len(), results.len());
}

#[test]
fn test_dedup_keeps_best_record() {
    let index = shared_location_index();
    let results = search(&index, "output", false);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.category, Category::Method);
}

#[test]
fn test_limit_counts_locations_not_records() {
    let index = shared_location_index();
    let results = super::common::search_limit(&index, "pager", false, 2);
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].location(), "man/usage/");
}

#[test]
fn test_same_location_and_category_rejected() {
    let err = Index::build(vec![
        make_record("lib/#pager", "pager", Category::Method, "a"),
        make_record("lib/#pager", "pager", Category::Method, "b"),
    ])
    .unwrap_err();
    assert!(matches!(err, CorpusError::DuplicateRecord { index: 1, .. }));
}

#[test]
fn test_loader_merges_fragments_before_indexing() {
    let corpus = docsift::parse_str(
        r#"[
            {"location": "man/usage/", "page": "Usage", "title": "Usage", "category": "page", "text": "The pager is called."},
            {"location": "man/usage/", "page": "Usage", "title": "Usage", "category": "page", "text": "julia> rand(100,100) |> pager"}
        ]"#,
    )
    .unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.merged, 1);
    let index = Index::build(corpus.records).unwrap();
    let results = search(&index, "rand", false);
    assert_eq!(locations(&results), vec!["man/usage/"]);
}
