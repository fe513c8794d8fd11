// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! One query term against one document scores
//!
//! ```text
//! idf(term) × (titleWeight × tf(title) + body(text, page)) × factor
//! ```
//!
//! where `factor` is 1 for the typed term itself, `prefixFactor` for prefix
//! expansions and `fuzzyFactor^distance` for typo matches.
//!
//! | Piece  | Formula                                   | Notes |
//! |--------|-------------------------------------------|-------|
//! | idf    | `ln(1 + N / df)`                          | Stays positive when a term is in every record |
//! | tf     | `1 + ln(freq)`, 0 when absent             | Title only |
//! | body   | `x (k + 1) / (x + k · rel_len)`           | `x` = weighted text + page freq |
//! | rel_len| `1 - b + b · len / avg`                   | 1.0 for a record of average length |
//!
//! Length normalization only touches the body, and the body saturates below
//! `k + 1` however often the term repeats or however short the record is. With
//! the defaults (`titleWeight` 3.0, `k` 1.2) one title hit therefore always
//! outscores any body-only match of the same term, whatever the record lengths.

use crate::config::ScoringConfig;
use crate::types::{Field, Posting};

/// Inverse document frequency, smoothed so it never reaches zero.
#[inline]
pub fn idf(num_docs: usize, doc_freq: usize) -> f64 {
    if doc_freq == 0 {
        return 0.0;
    }
    (1.0 + num_docs as f64 / doc_freq as f64).ln()
}

/// Sublinear term frequency.
#[inline]
pub fn tf(freq: u32) -> f64 {
    if freq == 0 {
        0.0
    } else {
        1.0 + f64::from(freq).ln()
    }
}

/// Record length relative to the corpus average, softened by strength `b`.
///
/// A record of average length gets exactly 1.0. `b` is clamped to `[0, 1]`,
/// so the result is never negative.
#[inline]
pub fn relative_length(doc_len: u32, avg_doc_len: f64, b: f64) -> f64 {
    let b = if b.is_finite() { b.clamp(0.0, 1.0) } else { 0.0 };
    if avg_doc_len <= 0.0 || b == 0.0 {
        return 1.0;
    }
    1.0 - b + b * f64::from(doc_len) / avg_doc_len
}

/// Saturating body score for weighted frequency `x`, bounded by `k + 1`.
#[inline]
pub fn saturate(x: f64, k: f64, rel_len: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    x * (k + 1.0) / (x + k * rel_len)
}

/// The most any body-only match can contribute per unit of idf.
#[inline]
pub fn body_ceiling(scoring: &ScoringConfig) -> f64 {
    scoring.body_saturation + 1.0
}

/// Field-weighted score of one posting, and the heaviest field it occurs in.
///
/// `rel_len` is the record's [`relative_length`]; it only scales the body.
pub fn weighted_tf(posting: &Posting, rel_len: f64, scoring: &ScoringConfig) -> (f64, Field) {
    let mut best: Option<Field> = None;
    for field in Field::ALL {
        if posting.freq(field) == 0 {
            continue;
        }
        best = Some(match best {
            Some(b) => heavier_field(b, field, scoring),
            None => field,
        });
    }

    let title = scoring.title_weight * tf(posting.freq(Field::Title));
    let body_freq = scoring.text_weight * f64::from(posting.freq(Field::Text))
        + scoring.page_weight * f64::from(posting.freq(Field::Page));
    let body = saturate(body_freq, scoring.body_saturation, rel_len);
    (title + body, best.unwrap_or(Field::Text))
}

/// The higher-weighted of two fields; `a` on a tie.
#[inline]
pub fn heavier_field(a: Field, b: Field, scoring: &ScoringConfig) -> Field {
    if scoring.field_weight(b) > scoring.field_weight(a) {
        b
    } else {
        a
    }
}
