// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The long-lived search handle.
//!
//! `SearchEngine` holds the current [`Index`] behind an atomic pointer.
//! Queries take a snapshot (`Arc<Index>`) and run against it to completion,
//! so a reload never disturbs a query in flight: the old index stays alive
//! until its last reader drops it.
//!
//! ```text
//! load_*  ──► parse + build (no lock held by readers) ──► store(Arc<Index>)
//! search  ──► load() ──► Arc<Index> ──► search::search
//! ```
//!
//! A failed load leaves the previous index serving queries.

use crate::config::SearchConfig;
use crate::corpus;
use crate::error::{ConfigError, QueryError, Result};
use crate::index::Index;
use crate::search;
use crate::types::{DocRecord, RankedResult};
use arc_swap::ArcSwapOption;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

/// Search over one corpus at a time, reloadable while serving queries.
pub struct SearchEngine {
    current: ArcSwapOption<Index>,
    /// Serializes reloads; readers never take it
    reload: Mutex<()>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine with no corpus loaded.
    ///
    /// Rejects a config that [`SearchConfig::validate`] rejects, since
    /// out-of-range weights give non-finite scores.
    pub fn new(config: SearchConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: SearchConfig) -> Self {
        Self {
            current: ArcSwapOption::empty(),
            reload: Mutex::new(()),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The index queries currently run against, if any corpus has loaded.
    pub fn snapshot(&self) -> Option<Arc<Index>> {
        self.current.load_full()
    }

    pub fn has_index(&self) -> bool {
        self.current.load().is_some()
    }

    /// Build an index from `records` and make it current.
    ///
    /// On error the previous index (if any) keeps serving.
    pub fn load_records(&self, records: Vec<DocRecord>) -> Result<Arc<Index>> {
        let _guard = self.reload.lock();
        let built = Index::build_parallel(records);
        self.install(built)
    }

    /// Parse a corpus payload, build and swap.
    pub fn load_str(&self, input: &str) -> Result<Arc<Index>> {
        let _guard = self.reload.lock();
        let built = corpus::parse_str(input).and_then(|c| Index::build_parallel(c.records));
        self.install(built)
    }

    /// Read a corpus file, build and swap.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Arc<Index>> {
        let _guard = self.reload.lock();
        let built = corpus::load_file(path).and_then(|c| Index::build_parallel(c.records));
        self.install(built)
    }

    fn install(&self, built: Result<Index>) -> Result<Arc<Index>> {
        match built {
            Ok(index) => {
                let index = Arc::new(index);
                let previous = self.current.swap(Some(Arc::clone(&index)));
                tracing::info!(
                    records = index.num_docs(),
                    terms = index.num_terms(),
                    fingerprint = index.fingerprint(),
                    replaced = previous.is_some(),
                    "index swapped in"
                );
                Ok(index)
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    keeping_previous = self.has_index(),
                    "corpus load failed"
                );
                Err(err)
            }
        }
    }

    /// Search with the configured default limit.
    ///
    /// With no index loaded this returns no results; use
    /// [`try_search`](Self::try_search) to tell the two apart.
    pub fn search(&self, raw: &str, incomplete: bool) -> Vec<RankedResult> {
        self.search_with_limit(raw, incomplete, self.config.default_limit)
    }

    pub fn search_with_limit(&self, raw: &str, incomplete: bool, limit: usize) -> Vec<RankedResult> {
        match self.try_search(raw, incomplete, limit) {
            Ok(results) => results,
            Err(QueryError::NoIndex) => Vec::new(),
            Err(err) => {
                tracing::debug!(error = %err, "query rejected");
                Vec::new()
            }
        }
    }

    pub fn try_search(
        &self,
        raw: &str,
        incomplete: bool,
        limit: usize,
    ) -> std::result::Result<Vec<RankedResult>, QueryError> {
        let index = self.snapshot().ok_or(QueryError::NoIndex)?;
        search::search(&index, raw, incomplete, limit, &self.config)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::from_valid(SearchConfig::default())
    }
}
