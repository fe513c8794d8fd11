// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning scored documents into the final result list.
//!
//! ```text
//! Scored ──► LocationMerger (best per location) ──► sort + limit ──► spans
//! ```
//!
//! Spans are only computed for the survivors of the limit.

use super::dedup::LocationMerger;
use super::highlight::matched_spans;
use crate::config::SearchConfig;
use crate::index::Index;
use crate::scoring::Scored;
use crate::types::RankedResult;
use crate::verify::contracts::check_results;
use std::sync::Arc;

/// Deduplicate, rank and cut `scored` down to at most `limit` results.
pub fn assemble(scored: Scored, index: &Index, limit: usize, config: &SearchConfig) -> Vec<RankedResult> {
    if limit == 0 || scored.is_empty() {
        return Vec::new();
    }
    let Scored { docs, resolutions } = scored;

    let mut merger = LocationMerger::new(index, &config.scoring);
    merger.merge_all(docs);
    let candidates = merger.len();

    let results: Vec<RankedResult> = merger
        .into_sorted(limit)
        .into_iter()
        .filter_map(|doc| {
            let record = Arc::clone(index.record(doc.doc_id)?);
            let matched_spans = matched_spans(&record.text, &resolutions);
            Some(RankedResult {
                record,
                score: doc.score,
                matched_spans,
                doc_id: doc.doc_id,
                best_field: doc.best_field,
            })
        })
        .collect();

    tracing::debug!(candidates, returned = results.len(), limit, "assembled results");
    check_results(&results, limit);
    results
}
