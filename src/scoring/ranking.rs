// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering.
//!
//! Score decides. On equal scores:
//!
//! 1. the heavier matched field wins (title over text over page),
//! 2. then the shorter `text` (a specific docstring before a whole page),
//! 3. then `location` ascending,
//! 4. then `doc_id`, so the order is total and never depends on hash order.

use crate::config::ScoringConfig;
use crate::index::Index;
use crate::types::ScoredDoc;
use std::cmp::Ordering;

/// Compare two scored documents for ranking (`Less` ranks first).
pub fn compare_scored(
    a: &ScoredDoc,
    b: &ScoredDoc,
    index: &Index,
    scoring: &ScoringConfig,
) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| {
            scoring
                .field_weight(b.best_field)
                .total_cmp(&scoring.field_weight(a.best_field))
        })
        .then_with(|| {
            let a_record = index.record(a.doc_id);
            let b_record = index.record(b.doc_id);
            let a_len = a_record.map_or(0, |r| r.text.len());
            let b_len = b_record.map_or(0, |r| r.text.len());
            a_len.cmp(&b_len).then_with(|| {
                let a_loc = a_record.map_or("", |r| r.location.as_str());
                let b_loc = b_record.map_or("", |r| r.location.as_str());
                a_loc.cmp(b_loc)
            })
        })
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}
