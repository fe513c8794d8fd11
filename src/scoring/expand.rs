// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From one query term to the vocabulary terms it matches.
//!
//! Resolution tries cheaper, more literal interpretations first and stops at
//! the first one that finds anything:
//!
//! ```text
//! exact term:   whole word ──► all identifier parts ──► edit distance
//! prefix term:  prefix expansion ──► parts (last one as prefix) ──► edit distance
//! ```
//!
//! The result keeps both the per-document hits (for scoring) and the
//! vocabulary terms that produced them (for highlighting), so the highlighter
//! never has to guess which interpretation won.

use super::core::{heavier_field, idf, relative_length, weighted_tf};
use crate::config::{ScoringConfig, SearchConfig};
use crate::fuzzy::{fuzzy_terms, max_edits};
use crate::index::Index;
use crate::query::{QueryTerm, TermMode};
use crate::types::{DocId, Field};
use std::collections::HashMap;

/// How a vocabulary term was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
    Fuzzy,
}

/// One vocabulary term a query term expanded to.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub term: String,
    pub factor: f64,
    pub kind: MatchKind,
}

/// Expansions of one typed word (the whole query term, or one of its parts).
#[derive(Debug, Clone, PartialEq)]
pub struct TermGroup {
    /// What the user typed, folded
    pub typed: String,
    pub expansions: Vec<Expansion>,
}

impl TermGroup {
    pub fn expansion(&self, term: &str) -> Option<&Expansion> {
        self.expansions.iter().find(|e| e.term == term)
    }
}

/// How a query term was matched. Several groups means every group had to
/// match (identifier-part fallback). No groups means nothing matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub groups: Vec<TermGroup>,
}

/// One query term's contribution to one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermHit {
    pub score: f64,
    pub best_field: Field,
}

pub type TermHits = HashMap<DocId, TermHit>;

/// Resolve a query term and score every document it matches.
pub fn resolve(term: &QueryTerm, index: &Index, config: &SearchConfig) -> (Resolution, TermHits) {
    let whole = match term.mode {
        TermMode::Exact => exact_group(&term.text, index),
        TermMode::Prefix => prefix_group(&term.text, index, config),
    };
    if let Some(group) = whole {
        let hits = group_hits(&group, index, config);
        return (Resolution { groups: vec![group] }, hits);
    }

    if let Some(resolved) = resolve_parts(term, index, config) {
        return resolved;
    }

    if let Some(group) = fuzzy_group(&term.text, index, config) {
        let hits = group_hits(&group, index, config);
        return (Resolution { groups: vec![group] }, hits);
    }

    (Resolution::default(), TermHits::new())
}

fn exact_group(typed: &str, index: &Index) -> Option<TermGroup> {
    index.contains_term(typed).then(|| TermGroup {
        typed: typed.to_string(),
        expansions: vec![Expansion {
            term: typed.to_string(),
            factor: 1.0,
            kind: MatchKind::Exact,
        }],
    })
}

fn prefix_group(typed: &str, index: &Index, config: &SearchConfig) -> Option<TermGroup> {
    let expansions: Vec<Expansion> = index
        .prefix_terms(typed, config.query.max_prefix_fanout)
        .into_iter()
        .map(|term| {
            let (factor, kind) = if term == typed {
                (1.0, MatchKind::Exact)
            } else {
                (config.scoring.prefix_factor, MatchKind::Prefix)
            };
            Expansion {
                term: term.to_string(),
                factor,
                kind,
            }
        })
        .collect();
    if expansions.is_empty() {
        return None;
    }
    Some(TermGroup {
        typed: typed.to_string(),
        expansions,
    })
}

fn fuzzy_group(typed: &str, index: &Index, config: &SearchConfig) -> Option<TermGroup> {
    if !config.query.fuzzy {
        return None;
    }
    let max = max_edits(typed.chars().count(), config.query.fuzzy_min_len);
    let expansions: Vec<Expansion> = fuzzy_terms(
        index.vocabulary(),
        typed,
        max,
        config.query.max_prefix_fanout,
    )
    .into_iter()
    .map(|(term, distance)| Expansion {
        term: term.to_string(),
        factor: config.scoring.fuzzy_factor.powi(distance as i32),
        kind: MatchKind::Fuzzy,
    })
    .collect();
    if expansions.is_empty() {
        return None;
    }
    Some(TermGroup {
        typed: typed.to_string(),
        expansions,
    })
}

/// All parts must match; for a prefix term the last part is itself a prefix.
fn resolve_parts(
    term: &QueryTerm,
    index: &Index,
    config: &SearchConfig,
) -> Option<(Resolution, TermHits)> {
    if term.parts.len() < 2 {
        return None;
    }
    let last = term.parts.len() - 1;
    let mut groups = Vec::with_capacity(term.parts.len());
    for (i, part) in term.parts.iter().enumerate() {
        let group = if i == last && term.mode == TermMode::Prefix {
            prefix_group(part, index, config)
        } else {
            exact_group(part, index)
        }?;
        groups.push(group);
    }

    let per_part: Vec<TermHits> = groups.iter().map(|g| group_hits(g, index, config)).collect();
    let hits = intersect(&per_part, &config.scoring);
    if hits.is_empty() {
        return None;
    }
    tracing::debug!(term = %term.text, parts = groups.len(), docs = hits.len(), "matched by parts");
    Some((Resolution { groups }, hits))
}

/// Best expansion per document.
fn group_hits(group: &TermGroup, index: &Index, config: &SearchConfig) -> TermHits {
    let scoring = &config.scoring;
    let num_docs = index.num_docs();
    let avg = index.avg_doc_length();
    let mut hits = TermHits::new();

    for expansion in &group.expansions {
        let Some(list) = index.postings(&expansion.term) else {
            continue;
        };
        let term_idf = idf(num_docs, list.doc_freq());
        for posting in &list.postings {
            let rel_len = relative_length(index.doc_length(posting.doc_id), avg, scoring.length_norm);
            let (weighted, field) = weighted_tf(posting, rel_len, scoring);
            let score = term_idf * weighted * expansion.factor;
            hits.entry(posting.doc_id)
                .and_modify(|hit| {
                    hit.score = hit.score.max(score);
                    hit.best_field = heavier_field(hit.best_field, field, scoring);
                })
                .or_insert(TermHit {
                    score,
                    best_field: field,
                });
        }
    }
    hits
}

/// Documents present in every set, scores summed in set order.
///
/// Empty input gives an empty result.
pub fn intersect(sets: &[TermHits], scoring: &ScoringConfig) -> TermHits {
    let Some((first, rest)) = sets.split_first() else {
        return TermHits::new();
    };
    let mut out = TermHits::with_capacity(first.len());
    'docs: for (&doc_id, hit) in first {
        let mut total = *hit;
        for set in rest {
            match set.get(&doc_id) {
                Some(other) => {
                    total.score += other.score;
                    total.best_field = heavier_field(total.best_field, other.best_field, scoring);
                }
                None => continue 'docs,
            }
        }
        out.insert(doc_id, total);
    }
    out
}
