// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo tolerance: vocabulary terms within a small edit distance.
//!
//! Only used as a last resort, when an exact term has no postings and its
//! identifier parts don't all match either. Short terms get no tolerance at
//! all: at three letters a single edit turns "set" into "get" or "let".

mod levenshtein;

pub use levenshtein::*;

/// Edits allowed for a term of `len` chars.
///
/// 0 below `min_len`, 1 from `min_len`, 2 from 8 chars.
pub fn max_edits(len: usize, min_len: usize) -> usize {
    if len >= 8 && len >= min_len {
        2
    } else if len >= min_len {
        1
    } else {
        0
    }
}

/// Vocabulary terms within `max` edits of `term`, excluding `term` itself.
///
/// Ordered by distance, then alphabetically, and cut at `limit`, so the same
/// vocabulary always yields the same expansion.
pub fn fuzzy_terms<'a>(
    vocabulary: &'a [String],
    term: &str,
    max: usize,
    limit: usize,
) -> Vec<(&'a str, usize)> {
    if max == 0 || limit == 0 {
        return Vec::new();
    }
    let mut matches: Vec<(&str, usize)> = vocabulary
        .iter()
        .filter(|candidate| candidate.as_str() != term)
        .filter_map(|candidate| {
            levenshtein_bounded(term, candidate, max).map(|d| (candidate.as_str(), d))
        })
        .collect();
    // Vocabulary is sorted, so a stable sort by distance keeps ties alphabetical
    matches.sort_by_key(|&(_, d)| d);
    matches.truncate(limit);
    matches
}
