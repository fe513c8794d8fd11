// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The in-memory inverted index.
//!
//! Built once per corpus load and never mutated afterwards, so any number of
//! threads can query the same `Index` through an `Arc` without locking. A
//! reload builds a fresh `Index` and swaps the pointer (see
//! [`SearchEngine`](crate::SearchEngine)).
//!
//! # Layout
//!
//! ```text
//! records:     [DocRecord; N]             doc_id = position
//! terms:       term → PostingList         one posting per (term, doc)
//! vocabulary:  [term] sorted              prefix lookup by binary search
//! doc_lengths: [u32; N]                   word count of title + text + page
//! ```
//!
//! # Invariants
//!
//! - Every term in `terms` has at least one posting, and `vocabulary` holds
//!   exactly the keys of `terms`, sorted.
//! - Every record contributes a posting to every term its fields tokenize to.
//! - Same records in, same index out: `fingerprint()` is stable across builds.
//!
//! `verify::check_index` checks these; debug builds assert them after every build.

mod build;
mod vocabulary;

use crate::types::{DocId, DocRecord, PostingList};
use std::collections::HashMap;
use std::sync::Arc;

/// Counts shown by `docsift inspect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexStats {
    pub records: usize,
    pub terms: usize,
    pub postings: usize,
    pub avg_doc_length: f64,
}

/// Immutable term → postings mapping over one corpus.
#[derive(Debug, Clone)]
pub struct Index {
    records: Vec<Arc<DocRecord>>,
    terms: HashMap<String, PostingList>,
    vocabulary: Vec<String>,
    doc_lengths: Vec<u32>,
    avg_doc_length: f64,
}

impl Index {
    /// Number of indexed records (`N` in idf).
    #[inline]
    pub fn num_docs(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn num_terms(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn records(&self) -> &[Arc<DocRecord>] {
        &self.records
    }

    #[inline]
    pub fn record(&self, doc_id: DocId) -> Option<&Arc<DocRecord>> {
        self.records.get(doc_id.as_usize())
    }

    /// Postings for an exact (already folded) term.
    #[inline]
    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of documents containing `term`, 0 if unknown.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.terms.get(term).map_or(0, PostingList::doc_freq)
    }

    /// Word count of a document across all fields.
    #[inline]
    pub fn doc_length(&self, doc_id: DocId) -> u32 {
        self.doc_lengths.get(doc_id.as_usize()).copied().unwrap_or(0)
    }

    pub fn doc_lengths(&self) -> &[u32] {
        &self.doc_lengths
    }

    #[inline]
    pub fn avg_doc_length(&self) -> f64 {
        self.avg_doc_length
    }

    /// All distinct terms, sorted.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.num_docs(),
            terms: self.num_terms(),
            postings: self.terms.values().map(PostingList::doc_freq).sum(),
            avg_doc_length: self.avg_doc_length,
        }
    }

    /// CRC32 over the vocabulary, postings and document lengths.
    ///
    /// Two indexes built from the same records have the same fingerprint
    /// regardless of build path or hash map iteration order.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.records.len() as u64).to_le_bytes());
        for term in &self.vocabulary {
            hasher.update(term.as_bytes());
            hasher.update(&[0]);
            let Some(list) = self.terms.get(term) else {
                continue;
            };
            for posting in &list.postings {
                hasher.update(&posting.doc_id.get().to_le_bytes());
                hasher.update(&posting.title_freq.to_le_bytes());
                hasher.update(&posting.text_freq.to_le_bytes());
                hasher.update(&posting.page_freq.to_le_bytes());
                for position in &posting.positions {
                    hasher.update(&position.to_le_bytes());
                }
            }
        }
        for length in &self.doc_lengths {
            hasher.update(&length.to_le_bytes());
        }
        hasher.finalize()
    }

    pub(crate) fn terms(&self) -> &HashMap<String, PostingList> {
        &self.terms
    }
}
