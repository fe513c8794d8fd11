// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsift::testing::fixture_path;
use docsift::{check_index, Index, RankedResult, SearchConfig};
use std::sync::{Arc, LazyLock};

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_record, scenario_records, synthetic_records};

// ============================================================================
// FIXTURE CORPORA
// ============================================================================

/// Development docs: 13 fragments, 7 records after merging.
pub const DEV: &str = "dev.js";

/// Release docs: 67 fragments, 30 records after merging.
pub const V0_5_1: &str = "v0_5_1.js";

static DEV_INDEX: LazyLock<Arc<Index>> = LazyLock::new(|| load_fixture(DEV));
static V0_5_1_INDEX: LazyLock<Arc<Index>> = LazyLock::new(|| load_fixture(V0_5_1));

fn load_fixture(name: &str) -> Arc<Index> {
    let corpus = docsift::load_file(fixture_path(name)).expect("fixture should parse");
    let index = Index::build(corpus.records).expect("fixture should index");
    assert_index_well_formed(&index);
    Arc::new(index)
}

/// Cached index over `data/fixtures/dev.js`.
pub fn dev_index() -> Arc<Index> {
    Arc::clone(&DEV_INDEX)
}

/// Cached index over `data/fixtures/v0_5_1.js`.
pub fn release_index() -> Arc<Index> {
    Arc::clone(&V0_5_1_INDEX)
}

// ============================================================================
// HELPERS
// ============================================================================

pub fn scenario_index() -> Index {
    Index::build(scenario_records()).expect("scenario records are unique")
}

/// Search with the default config and a generous limit.
pub fn search(index: &Index, raw: &str, incomplete: bool) -> Vec<RankedResult> {
    search_limit(index, raw, incomplete, 100)
}

pub fn search_limit(index: &Index, raw: &str, incomplete: bool, limit: usize) -> Vec<RankedResult> {
    docsift::search(index, raw, incomplete, limit, &SearchConfig::default())
        .expect("query within the term cap")
}

pub fn locations(results: &[RankedResult]) -> Vec<&str> {
    results.iter().map(|r| r.location()).collect()
}

pub fn assert_index_well_formed(index: &Index) {
    if let Err(e) = check_index(index) {
        panic!("index invariant violated: {}", e);
    }
}
