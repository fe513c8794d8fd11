// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural invariants of a built [`Index`], checked in one pass.
//!
//! | Invariant             | What's checked                                   |
//! |-----------------------|--------------------------------------------------|
//! | Vocabulary            | sorted, strictly increasing, same keys as terms  |
//! | Posting lists         | non-empty, sorted by doc_id, no repeated doc     |
//! | Postings              | doc_id in bounds, positions sorted, freq = count |
//! | Positions             | every position < the document's length           |
//! | Document lengths      | one per record                                   |
//!
//! # Example
//!
//! ```ignore
//! let index = Index::build(records)?;
//! check_index(&index)?; // Err(InvariantError) names the first violation
//! ```

use crate::index::Index;
use crate::types::DocId;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A posting refers to a record that doesn't exist.
    InvalidDocId {
        term: String,
        doc_id: u32,
        num_docs: usize,
    },
    /// Posting list has no postings.
    EmptyPostingList { term: String },
    /// Posting list is not strictly increasing by doc_id.
    UnsortedPostingList { term: String, position: usize },
    /// Positions of one posting are not strictly increasing.
    UnsortedPositions { term: String, doc_id: u32 },
    /// Per-field frequencies don't add up to the number of positions.
    IncorrectTermFreq {
        term: String,
        doc_id: u32,
        claimed: u32,
        actual: usize,
    },
    /// A position lies past the end of the document.
    PositionOutOfRange {
        term: String,
        doc_id: u32,
        position: u32,
        doc_length: u32,
    },
    /// Vocabulary is not strictly sorted.
    UnsortedVocabulary { position: usize },
    /// Vocabulary and term map disagree.
    VocabularyMismatch { term: String },
    /// Document length table doesn't cover every record.
    DocLengthMismatch { lengths: usize, records: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::InvalidDocId {
                term,
                doc_id,
                num_docs,
            } => {
                write!(
                    f,
                    "posting list for '{}' has doc_id {} >= num_docs {}",
                    term, doc_id, num_docs
                )
            }
            InvariantError::EmptyPostingList { term } => {
                write!(f, "posting list for '{}' is empty", term)
            }
            InvariantError::UnsortedPostingList { term, position } => {
                write!(
                    f,
                    "posting list for '{}' not sorted at position {}",
                    term, position
                )
            }
            InvariantError::UnsortedPositions { term, doc_id } => {
                write!(f, "positions of '{}' in doc {} not sorted", term, doc_id)
            }
            InvariantError::IncorrectTermFreq {
                term,
                doc_id,
                claimed,
                actual,
            } => {
                write!(
                    f,
                    "'{}' in doc {} has term_freq {} but {} positions",
                    term, doc_id, claimed, actual
                )
            }
            InvariantError::PositionOutOfRange {
                term,
                doc_id,
                position,
                doc_length,
            } => {
                write!(
                    f,
                    "'{}' in doc {} at position {} >= doc length {}",
                    term, doc_id, position, doc_length
                )
            }
            InvariantError::UnsortedVocabulary { position } => {
                write!(f, "vocabulary not sorted at position {}", position)
            }
            InvariantError::VocabularyMismatch { term } => {
                write!(f, "vocabulary and term map disagree on '{}'", term)
            }
            InvariantError::DocLengthMismatch { lengths, records } => {
                write!(f, "doc_lengths.len() {} != records.len() {}", lengths, records)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check every structural invariant of `index`, returning the first violation.
pub fn check_index(index: &Index) -> Result<(), InvariantError> {
    let num_docs = index.num_docs();
    if index.doc_lengths().len() != num_docs {
        return Err(InvariantError::DocLengthMismatch {
            lengths: index.doc_lengths().len(),
            records: num_docs,
        });
    }

    let vocabulary = index.vocabulary();
    for i in 1..vocabulary.len() {
        if vocabulary[i - 1] >= vocabulary[i] {
            return Err(InvariantError::UnsortedVocabulary { position: i });
        }
    }
    if vocabulary.len() != index.terms().len() {
        let missing = index
            .terms()
            .keys()
            .find(|t| vocabulary.binary_search(t).is_err())
            .cloned()
            .unwrap_or_default();
        return Err(InvariantError::VocabularyMismatch { term: missing });
    }

    for term in vocabulary {
        let Some(list) = index.postings(term) else {
            return Err(InvariantError::VocabularyMismatch { term: term.clone() });
        };
        if list.postings.is_empty() {
            return Err(InvariantError::EmptyPostingList { term: term.clone() });
        }
        for (i, posting) in list.postings.iter().enumerate() {
            let doc_id = posting.doc_id.get();
            if DocId::new(doc_id, num_docs).is_none() {
                return Err(InvariantError::InvalidDocId {
                    term: term.clone(),
                    doc_id,
                    num_docs,
                });
            }
            if i > 0 && list.postings[i - 1].doc_id >= posting.doc_id {
                return Err(InvariantError::UnsortedPostingList {
                    term: term.clone(),
                    position: i,
                });
            }
            if posting.term_freq() as usize != posting.positions.len() {
                return Err(InvariantError::IncorrectTermFreq {
                    term: term.clone(),
                    doc_id,
                    claimed: posting.term_freq(),
                    actual: posting.positions.len(),
                });
            }
            if posting.positions.windows(2).any(|w| w[0] >= w[1]) {
                return Err(InvariantError::UnsortedPositions {
                    term: term.clone(),
                    doc_id,
                });
            }
            let doc_length = index.doc_length(posting.doc_id);
            if let Some(&last) = posting.positions.last() {
                if last >= doc_length {
                    return Err(InvariantError::PositionOutOfRange {
                        term: term.clone(),
                        doc_id,
                        position: last,
                        doc_length,
                    });
                }
            }
        }
    }
    Ok(())
}
