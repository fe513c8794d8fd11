// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline.
//!
//! ```text
//! raw query ──► parse ──► score ──► assemble ──► Vec<RankedResult>
//! ```
//!
//! Everything here is a pure function of `(index, query, config)`: the same
//! inputs always give the same results in the same order.

pub mod assemble;
pub mod dedup;
pub mod highlight;

use crate::config::SearchConfig;
use crate::error::QueryError;
use crate::index::Index;
use crate::query::parse;
use crate::scoring::score;
use crate::types::RankedResult;
use std::time::Instant;

pub use assemble::assemble;
pub use highlight::{matched_spans, snippet, Snippet};

/// Run one query against `index`.
///
/// `incomplete` marks the last word as still being typed (prefix match).
/// Queries with no searchable words return no results rather than an error.
pub fn search(
    index: &Index,
    raw: &str,
    incomplete: bool,
    limit: usize,
    config: &SearchConfig,
) -> Result<Vec<RankedResult>, QueryError> {
    let start = Instant::now();
    let query = parse(raw, incomplete);
    if query.len() > config.query.max_terms {
        return Err(QueryError::TooManyTerms {
            max: config.query.max_terms,
            found: query.len(),
        });
    }
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let scored = score(&query, index, config);
    let results = assemble(scored, index, limit, config);
    tracing::debug!(
        query = raw,
        terms = query.len(),
        results = results.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "search"
    );
    Ok(results)
}
