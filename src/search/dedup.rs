// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Location deduplication.
//!
//! A location should appear at most once in search results. Records are
//! unique by `(location, category)`, so a docstring and the section heading
//! above it can share a location; showing both would be the same link twice.
//!
//! `LocationMerger` keys on the location string alone and keeps the best
//! candidate per location, where "best" is [`compare_scored`] order.

use crate::config::ScoringConfig;
use crate::index::Index;
use crate::scoring::ranking::compare_scored;
use crate::types::ScoredDoc;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Keeps the best-ranked candidate per location.
///
/// # Example
///
/// ```ignore
/// let mut merger = LocationMerger::new(&index, &config.scoring);
/// merger.merge_all(scored.docs);
/// let top = merger.into_sorted(limit);
/// ```
pub struct LocationMerger<'a> {
    map: HashMap<&'a str, ScoredDoc>,
    index: &'a Index,
    scoring: &'a ScoringConfig,
}

impl<'a> LocationMerger<'a> {
    pub fn new(index: &'a Index, scoring: &'a ScoringConfig) -> Self {
        Self {
            map: HashMap::new(),
            index,
            scoring,
        }
    }

    /// Merge one candidate, replacing the current one for its location if it
    /// ranks higher. Candidates for unknown documents are dropped.
    pub fn merge(&mut self, doc: ScoredDoc) {
        let index = self.index;
        let scoring = self.scoring;
        let Some(record) = index.record(doc.doc_id) else {
            return;
        };
        self.map
            .entry(record.location.as_str())
            .and_modify(|existing| {
                if compare_scored(&doc, existing, index, scoring) == Ordering::Less {
                    *existing = doc.clone();
                }
            })
            .or_insert(doc);
    }

    pub fn merge_all(&mut self, docs: impl IntoIterator<Item = ScoredDoc>) {
        for doc in docs {
            self.merge(doc);
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Sorted by rank and cut to `limit`.
    pub fn into_sorted(self, limit: usize) -> Vec<ScoredDoc> {
        let mut docs: Vec<ScoredDoc> = self.map.into_values().collect();
        docs.sort_by(|a, b| compare_scored(a, b, self.index, self.scoring));
        docs.truncate(limit);
        docs
    }
}
