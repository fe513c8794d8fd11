// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading corpora, configuring the engine and querying it.
//!
//! Loading is all-or-nothing: any [`CorpusError`] aborts the load and no
//! partial index is produced. Queries almost never fail; an empty or
//! punctuation-only query is a valid zero-result search, not a [`QueryError`].

use std::path::PathBuf;
use thiserror::Error;

/// Why a corpus could not be loaded.
///
/// Record-level variants carry the zero-based index of the offending record
/// in the input sequence.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("cannot read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corpus has no record list (expected an array or an object with a \"docs\" array)")]
    MissingRecordList,

    #[error("record {index} is malformed: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index} has unknown category {value:?}")]
    UnknownCategory { index: usize, value: String },

    #[error("record {index} duplicates ({location}, {category})")]
    DuplicateRecord {
        index: usize,
        location: String,
        category: String,
    },
}

impl CorpusError {
    /// Index of the record that caused the failure, if the failure is record-level.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            CorpusError::MalformedRecord { index, .. }
            | CorpusError::MissingField { index, .. }
            | CorpusError::UnknownCategory { index, .. }
            | CorpusError::DuplicateRecord { index, .. } => Some(*index),
            CorpusError::Io { .. } | CorpusError::Json(_) | CorpusError::MissingRecordList => None,
        }
    }
}

/// Why a query could not run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("no corpus has been loaded")]
    NoIndex,

    #[error("query has {found} terms, more than the maximum of {max}")]
    TooManyTerms { max: usize, found: usize },
}

/// Why a [`SearchConfig`](crate::SearchConfig) was rejected.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config field `{field}` {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result alias for corpus loading.
pub type Result<T> = std::result::Result<T, CorpusError>;
