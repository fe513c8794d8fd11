// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked, typo-tolerant search over documentation search-index records.
//!
//! A documentation generator emits a flat list of records (location, page,
//! title, category, text). This crate turns that list into an immutable
//! inverted index and answers as-you-type queries against it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  corpus.rs  │────▶│  index/      │────▶│  scoring/   │────▶│  search/    │
//! │ (DocRecord, │     │ (postings,   │     │ (tf-idf,    │     │ (dedup,     │
//! │  loading)   │     │  vocabulary) │     │  expansion) │     │  spans)     │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                    ▲                    │
//!        ▼                   ▼                    │                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ tokenize.rs │     │  verify/     │     │  query.rs   │     │  engine.rs  │
//! │ (terms and  │     │ (invariants, │     │ (exact and  │     │ (atomic     │
//! │  positions) │     │  contracts)  │     │  prefix)    │     │  swap)      │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use docsift::{SearchEngine, SearchConfig};
//!
//! let engine = SearchEngine::new(SearchConfig::default())?;
//! engine.load_file("search_index.js")?;
//!
//! for result in engine.search("pag", true) {
//!     println!("{} {}", result.location(), result.title());
//! }
//! ```

// Module declarations
pub mod config;
pub mod corpus;
mod engine;
pub mod error;
pub mod fuzzy;
mod index;
pub mod query;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod tokenize;
mod types;
pub mod util;
pub mod verify;

// Re-exports for public API
pub use config::{QueryConfig, ScoringConfig, SearchConfig};
pub use corpus::{load_file, parse_str, Corpus};
pub use engine::SearchEngine;
pub use error::{ConfigError, CorpusError, QueryError};
pub use index::{Index, IndexStats};
pub use query::{parse, Query, QueryTerm, TermMode};
pub use search::{search, Snippet};
pub use tokenize::{tokenize, Token, TokenKind};
pub use types::{
    Category, DocId, DocRecord, Field, Posting, PostingList, RankedResult, ScoredDoc, Span,
};
pub use util::normalize::{fold, normalize};
pub use verify::{check_index, InvariantError};
