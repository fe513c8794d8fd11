// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: map per record, merge in record order.
//!
//! 1. **Map**: tokenize each record's title, text and page into a private
//!    `term → Posting` table. Records share nothing, so with the `parallel`
//!    feature this runs on rayon's pool.
//! 2. **Merge**: fold the per-record tables into the global map, sequentially
//!    and in `doc_id` order. Posting lists come out sorted by `doc_id` without
//!    a sort, and both build paths produce identical indexes.

use super::Index;
use crate::error::{CorpusError, Result};
use crate::tokenize::{tokenize, word_count};
use crate::types::{Category, DocId, DocRecord, Field, Posting, PostingList};
use crate::verify::contracts::check_index_well_formed;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

/// One record's contribution to the index.
struct RecordTerms {
    terms: HashMap<String, Posting>,
    length: u32,
}

/// Tokenize title → text → page as one position stream.
fn index_record(doc_id: DocId, record: &DocRecord) -> RecordTerms {
    let mut terms: HashMap<String, Posting> = HashMap::new();
    let mut offset = 0u32;
    for field in Field::ALL {
        let content = field.of(record);
        for token in tokenize(content).starting_at(offset) {
            terms
                .entry(token.term)
                .or_insert_with(|| Posting::new(doc_id))
                .record(field, token.position);
        }
        offset += word_count(content);
    }
    RecordTerms {
        terms,
        length: offset,
    }
}

/// Identity is `(location, category)`; the first repeat fails the build.
fn check_unique(records: &[DocRecord]) -> Result<()> {
    let mut seen: HashSet<(&str, Category)> = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if !seen.insert((record.location.as_str(), record.category)) {
            return Err(CorpusError::DuplicateRecord {
                index,
                location: record.location.clone(),
                category: record.category.to_string(),
            });
        }
    }
    Ok(())
}

fn merge(records: Vec<DocRecord>, per_record: Vec<RecordTerms>, start: Instant) -> Index {
    let mut terms: HashMap<String, PostingList> = HashMap::new();
    let mut doc_lengths = Vec::with_capacity(per_record.len());

    for record_terms in per_record {
        doc_lengths.push(record_terms.length);
        // INVARIANT: POSTINGS_BY_DOC_ID (records are merged in doc_id order)
        for (term, posting) in record_terms.terms {
            terms.entry(term).or_default().postings.push(posting);
        }
    }

    let mut vocabulary: Vec<String> = terms.keys().cloned().collect();
    // INVARIANT: VOCABULARY_SORTED
    vocabulary.sort_unstable();

    let total: u64 = doc_lengths.iter().map(|&l| u64::from(l)).sum();
    let avg_doc_length = if doc_lengths.is_empty() {
        0.0
    } else {
        total as f64 / doc_lengths.len() as f64
    };

    let index = Index {
        records: records.into_iter().map(Arc::new).collect(),
        terms,
        vocabulary,
        doc_lengths,
        avg_doc_length,
    };
    check_index_well_formed(&index);

    tracing::info!(
        records = index.num_docs(),
        terms = index.num_terms(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "built index"
    );
    index
}

impl Index {
    /// Build an index single-threaded.
    ///
    /// Fails only if two records share a `(location, category)` identity.
    /// Records with empty text are fine: they get postings for their title and
    /// page only, or none at all.
    pub fn build(records: Vec<DocRecord>) -> Result<Index> {
        let start = Instant::now();
        check_unique(&records)?;
        let per_record: Vec<RecordTerms> = records
            .iter()
            .enumerate()
            .map(|(i, record)| index_record(DocId(i as u32), record))
            .collect();
        Ok(merge(records, per_record, start))
    }

    /// Build an index, tokenizing records on the rayon pool.
    ///
    /// Produces exactly what [`Index::build`] produces.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(records: Vec<DocRecord>) -> Result<Index> {
        let start = Instant::now();
        check_unique(&records)?;
        let per_record: Vec<RecordTerms> = records
            .par_iter()
            .enumerate()
            .map(|(i, record)| index_record(DocId(i as u32), record))
            .collect();
        Ok(merge(records, per_record, start))
    }

    /// Sequential fallback when the `parallel` feature is off.
    #[cfg(not(feature = "parallel"))]
    pub fn build_parallel(records: Vec<DocRecord>) -> Result<Index> {
        Self::build(records)
    }
}
