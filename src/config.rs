// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunable search parameters.
//!
//! None of these are contracts. The defaults were picked against the
//! documentation corpora in `data/fixtures/` and can be overridden per engine
//! from a JSON file:
//!
//! ```json
//! {
//!   "scoring": { "titleWeight": 4.0, "prefixFactor": 0.8 },
//!   "query": { "fuzzy": false },
//!   "defaultLimit": 10
//! }
//! ```
//!
//! Missing keys keep their defaults; unknown keys are rejected so a typo in a
//! config file doesn't silently do nothing.

use crate::error::ConfigError;
use crate::types::Field;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Weights and factors used by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoringConfig {
    pub title_weight: f64,
    pub text_weight: f64,
    /// Page names are shared by many records, so they count for little
    pub page_weight: f64,
    /// Multiplier for documents matching every query term
    pub all_terms_bonus: f64,
    /// Multiplier for vocabulary terms reached by prefix expansion
    pub prefix_factor: f64,
    /// Multiplier for vocabulary terms reached by edit distance
    pub fuzzy_factor: f64,
    /// Length normalization strength in `[0, 1]`. 0 disables it.
    pub length_norm: f64,
    /// How fast repeated text/page mentions saturate; the body part of a
    /// term's score never exceeds `bodySaturation + 1`
    pub body_saturation: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            title_weight: 3.0,
            text_weight: 1.0,
            page_weight: 0.5,
            all_terms_bonus: 1.5,
            prefix_factor: 0.9,
            fuzzy_factor: 0.5,
            length_norm: 0.25,
            body_saturation: 1.2,
        }
    }
}

impl ScoringConfig {
    #[inline]
    pub fn field_weight(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title_weight,
            Field::Text => self.text_weight,
            Field::Page => self.page_weight,
        }
    }
}

/// Limits on query expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct QueryConfig {
    /// Maximum distinct vocabulary terms a prefix (or typo) expands to
    pub max_prefix_fanout: usize,
    /// Queries with more terms are rejected by `try_search`
    pub max_terms: usize,
    pub fuzzy: bool,
    /// Shortest term eligible for edit-distance matching
    pub fuzzy_min_len: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_prefix_fanout: 50,
            max_terms: 32,
            fuzzy: true,
            fuzzy_min_len: 4,
        }
    }
}

/// Everything an engine can be configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchConfig {
    pub scoring: ScoringConfig,
    pub query: QueryConfig,
    pub default_limit: usize,
    /// Snippet window size used by the CLI
    pub snippet_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            query: QueryConfig::default(),
            default_limit: 20,
            snippet_chars: 160,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject values that would make ranking meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        let positive = [
            ("scoring.titleWeight", s.title_weight),
            ("scoring.textWeight", s.text_weight),
            ("scoring.pageWeight", s.page_weight),
            ("scoring.prefixFactor", s.prefix_factor),
            ("scoring.fuzzyFactor", s.fuzzy_factor),
            ("scoring.bodySaturation", s.body_saturation),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        if !(s.all_terms_bonus.is_finite() && s.all_terms_bonus >= 1.0) {
            return Err(ConfigError::Invalid {
                field: "scoring.allTermsBonus",
                reason: format!("must be at least 1.0, got {}", s.all_terms_bonus),
            });
        }
        if !(0.0..=1.0).contains(&s.length_norm) {
            return Err(ConfigError::Invalid {
                field: "scoring.lengthNorm",
                reason: format!("must be within [0, 1], got {}", s.length_norm),
            });
        }
        if self.query.max_prefix_fanout == 0 {
            return Err(ConfigError::Invalid {
                field: "query.maxPrefixFanout",
                reason: "must be at least 1".into(),
            });
        }
        if self.query.max_terms == 0 {
            return Err(ConfigError::Invalid {
                field: "query.maxTerms",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
