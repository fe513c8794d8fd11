// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries at the bundled release documentation and checks
//! the result list is always well-shaped.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{Index, SearchConfig};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    query: &'a str,
    incomplete: bool,
    limit: u8,
}

fuzz_target!(|input: Input<'_>| {
    static INDEX: OnceLock<Index> = OnceLock::new();
    let index = INDEX.get_or_init(|| {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/fixtures/v0_5_1.js");
        let corpus = docsift::load_file(path).expect("fixture loads");
        Index::build(corpus.records).expect("fixture indexes")
    });
    let config = SearchConfig::default();
    let limit = usize::from(input.limit);

    // Too many terms is the only error a loaded index can give
    let Ok(results) = docsift::search(index, input.query, input.incomplete, limit, &config) else {
        return;
    };

    assert!(results.len() <= limit);

    let mut seen = HashSet::new();
    for (i, result) in results.iter().enumerate() {
        assert!(result.score.is_finite() && result.score > 0.0);
        assert!(seen.insert(result.location()), "duplicate location {:?}", result.location());
        if i > 0 {
            assert!(results[i - 1].score >= result.score);
        }
        for span in &result.matched_spans {
            assert!(span.slice(&result.record.text).is_some());
        }
    }

    if input.query.trim().is_empty() {
        assert!(results.is_empty());
    }
});
