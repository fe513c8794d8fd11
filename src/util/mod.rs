// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the tokenizer, the query parser and highlighting.
//!
//! Both sides of a search must fold text the same way, so the folding lives
//! here and nowhere else.

pub mod normalize;
