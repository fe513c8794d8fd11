// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bundled corpora load, merge and index cleanly.

use super::common::{assert_index_well_formed, DEV, V0_5_1};
use docsift::testing::fixture_path;
use docsift::{Category, Index};
use std::collections::HashSet;

#[test]
fn test_dev_corpus() {
    let corpus = docsift::load_file(fixture_path(DEV)).unwrap();
    assert_eq!(corpus.len(), 7);
    assert_eq!(corpus.merged, 6);

    let usage = corpus
        .records
        .iter()
        .find(|r| r.location == "man/usage/" && r.category == Category::Page)
        .unwrap();
    assert!(usage.text.starts_with("The pager is called"));
    assert!(usage.text.ends_with("julia> rand(100,100) |> pager"));
    assert_eq!(usage.text.lines().count(), 3);
}

#[test]
fn test_release_corpus() {
    let corpus = docsift::load_file(fixture_path(V0_5_1)).unwrap();
    assert_eq!(corpus.len(), 30);
    assert_eq!(corpus.merged, 37);

    let categories: HashSet<Category> = corpus.records.iter().map(|r| r.category).collect();
    let expected: HashSet<Category> = [
        Category::Page,
        Category::Section,
        Category::Method,
        Category::Macro,
        Category::Type,
    ]
    .into_iter()
    .collect();
    assert_eq!(categories, expected);
}

#[test]
fn test_identities_unique_after_merge() {
    for name in [DEV, V0_5_1] {
        let corpus = docsift::load_file(fixture_path(name)).unwrap();
        let ids: HashSet<(&str, Category)> = corpus
            .records
            .iter()
            .map(|r| (r.location.as_str(), r.category))
            .collect();
        assert_eq!(ids.len(), corpus.len(), "{name}");
    }
}

#[test]
fn test_fixtures_index_well_formed() {
    for name in [DEV, V0_5_1] {
        let corpus = docsift::load_file(fixture_path(name)).unwrap();
        let index = Index::build(corpus.records).unwrap();
        assert_index_well_formed(&index);
        assert!(index.num_terms() > 0);
    }
}

#[test]
fn test_build_is_deterministic() {
    let corpus = docsift::load_file(fixture_path(V0_5_1)).unwrap();
    let a = Index::build(corpus.records.clone()).unwrap();
    let b = Index::build_parallel(corpus.records).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn test_wrappings_are_equivalent() {
    let records = r#"[{"location":"a#1","title":"pager","category":"method","text":"pager(obj)"}]"#;
    let bare = docsift::parse_str(records).unwrap();
    let object = docsift::parse_str(&format!(r#"{{"docs": {records}}}"#)).unwrap();
    let script = docsift::parse_str(&format!("var documenterSearchIndex = {{\"docs\":\n{records}\n}};\n")).unwrap();
    assert_eq!(bare, object);
    assert_eq!(bare, script);
}

#[test]
fn test_load_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_index.js");
    std::fs::write(
        &path,
        r#"var documenterSearchIndex = {"docs": [{"location": "", "page": "Home", "title": "Home", "category": "page", "text": "hello"}]}"#,
    )
    .unwrap();
    let corpus = docsift::load_file(&path).unwrap();
    assert_eq!(corpus.records[0].page, "Home");
}
