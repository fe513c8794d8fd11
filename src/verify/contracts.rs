// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts: `debug_assert!` checks on the hot paths.
//!
//! Free in release builds. In debug builds (and therefore in every test run)
//! they panic at the first violated invariant, close to the code that broke it.

use crate::index::Index;
use crate::types::{RankedResult, Span};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check a freshly built index against every structural invariant.
///
/// # Panics (debug builds only)
/// Panics with the first [`InvariantError`](super::InvariantError) found.
#[inline]
pub fn check_index_well_formed(index: &Index) {
    if cfg!(debug_assertions) {
        if let Err(err) = super::check_index(index) {
            panic!("Contract violation: index not well-formed - {}", err);
        }
    }
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that spans are sorted, non-overlapping, non-empty and on char
/// boundaries of `text`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_spans(text: &str, spans: &[Span]) {
    for (i, span) in spans.iter().enumerate() {
        debug_assert!(
            !span.is_empty() && span.slice(text).is_some(),
            "Contract violation: span {} ({}..{}) invalid for text of {} bytes",
            i,
            span.start,
            span.end,
            text.len()
        );
        // INVARIANT: SPANS_DISJOINT_ASCENDING
        if i > 0 {
            debug_assert!(
                spans[i - 1].end <= span.start,
                "Contract violation: spans[{}] overlaps spans[{}]",
                i - 1,
                i
            );
        }
    }
}

/// Check the shape of a final result list.
///
/// # Panics (debug builds only)
/// Panics if more than `limit` results are returned, a location repeats, or
/// scores are not descending.
#[inline]
pub fn check_results(results: &[RankedResult], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "Contract violation: {} results > limit {}",
        results.len(),
        limit
    );
    // INVARIANT: SCORES_DESCENDING
    for i in 1..results.len() {
        debug_assert!(
            results[i - 1].score >= results[i].score,
            "Contract violation: results[{}].score {} < results[{}].score {}",
            i - 1,
            results[i - 1].score,
            i,
            results[i].score
        );
    }
    if cfg!(debug_assertions) {
        // INVARIANT: LOCATIONS_UNIQUE
        let mut locations: Vec<&str> = results.iter().map(|r| r.location()).collect();
        locations.sort_unstable();
        let before = locations.len();
        locations.dedup();
        assert_eq!(
            before,
            locations.len(),
            "Contract violation: duplicate location in results"
        );
    }
}
