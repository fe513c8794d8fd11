// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix lookup over the sorted vocabulary.
//!
//! All terms sharing a prefix form one contiguous run of the sorted vocabulary,
//! so expansion is a binary search for the run's start followed by a scan that
//! stops at the first non-match or at the fan-out cap. Cost is
//! `O(log V + fanout)` no matter how large the corpus gets.

use super::Index;

impl Index {
    /// Up to `fanout` vocabulary terms starting with `prefix`, in sorted order.
    ///
    /// The prefix itself (if indexed) is always first, since it sorts before
    /// every longer term it prefixes. An empty prefix matches nothing.
    pub fn prefix_terms(&self, prefix: &str, fanout: usize) -> Vec<&str> {
        prefix_range(&self.vocabulary, prefix)
            .iter()
            .take(fanout)
            .map(String::as_str)
            .collect()
    }
}

/// The contiguous slice of `vocabulary` whose terms start with `prefix`.
fn prefix_range<'a>(vocabulary: &'a [String], prefix: &str) -> &'a [String] {
    if prefix.is_empty() {
        return &[];
    }
    // INVARIANT: PREFIX_RUN_CONTIGUOUS (requires VOCABULARY_SORTED)
    let start = vocabulary.partition_point(|term| term.as_str() < prefix);
    let len = vocabulary[start..]
        .iter()
        .take_while(|term| term.starts_with(prefix))
        .count();
    &vocabulary[start..start + len]
}
