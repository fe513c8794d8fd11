// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Combining per-term hits into document scores.
//!
//! Exact terms are conjunctive: a document must match every one of them, so
//! adding a finished word can only narrow the result set. The trailing prefix
//! term (the word still being typed) is AND-preferred, OR-fallback: documents
//! matching it are boosted by `allTermsBonus`, documents that don't are kept.
//! A query consisting only of a prefix term requires it.

use super::expand::{intersect, resolve, Resolution, TermHits};
use super::core::heavier_field;
use crate::config::SearchConfig;
use crate::index::Index;
use crate::query::Query;
use crate::types::ScoredDoc;

/// Scores for one query, plus how each query term was matched.
#[derive(Debug, Clone, Default)]
pub struct Scored {
    /// Unordered; the assembler sorts
    pub docs: Vec<ScoredDoc>,
    /// One per query term, in query order
    pub resolutions: Vec<Resolution>,
}

impl Scored {
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Score every document matching `query`.
///
/// An empty query, or one where nothing matches, scores nothing.
pub fn score(query: &Query, index: &Index, config: &SearchConfig) -> Scored {
    if query.is_empty() || index.is_empty() {
        return Scored::default();
    }
    let scoring = &config.scoring;

    let mut resolutions = Vec::with_capacity(query.len());
    let mut exact_hits: Vec<TermHits> = Vec::new();
    let mut prefix_hits: Option<TermHits> = None;
    for term in &query.terms {
        let (resolution, hits) = resolve(term, index, config);
        resolutions.push(resolution);
        if term.is_prefix() {
            prefix_hits = Some(hits);
        } else {
            exact_hits.push(hits);
        }
    }

    let required = if exact_hits.is_empty() {
        prefix_hits.take().unwrap_or_default()
    } else {
        intersect(&exact_hits, scoring)
    };
    let required_terms = if prefix_hits.is_some() {
        query.len() - 1
    } else {
        query.len()
    };

    let mut docs: Vec<ScoredDoc> = required
        .into_iter()
        .map(|(doc_id, hit)| {
            let mut doc = ScoredDoc {
                doc_id,
                score: hit.score,
                best_field: hit.best_field,
                matched_terms: required_terms,
            };
            if let Some(extra) = prefix_hits.as_ref().and_then(|p| p.get(&doc_id)) {
                doc.score += extra.score;
                doc.best_field = heavier_field(doc.best_field, extra.best_field, scoring);
                doc.matched_terms += 1;
            }
            if query.len() > 1 && doc.matched_terms == query.len() {
                doc.score *= scoring.all_terms_bonus;
            }
            doc
        })
        .collect();
    docs.sort_unstable_by_key(|d| d.doc_id);

    tracing::debug!(terms = query.len(), candidates = docs.len(), "scored query");
    Scored { docs, resolutions }
}
