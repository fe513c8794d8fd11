// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A TF-IDF variant with per-field weights and a saturating, length-normalized
//! body. A title match outweighs any number of body mentions, so the record
//! *about* a symbol outranks the records that merely mention it.

mod accumulate;
mod core;
pub mod expand;
pub mod ranking;

pub use self::accumulate::*;
pub use self::core::*;
