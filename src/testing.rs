// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Category, DocRecord};
use std::path::PathBuf;

/// Create a record with an empty page.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(location: &str, title: &str, category: Category, text: &str) -> DocRecord {
    DocRecord::new(location, title, category, text)
}

/// The two-record corpus every ranking example starts from.
pub fn scenario_records() -> Vec<DocRecord> {
    vec![
        make_record("a#1", "pager", Category::Method, "pager(obj) shows output"),
        make_record("b#2", "usage", Category::Section, "see pager for details"),
    ]
}

/// `n` synthetic records drawn from a small documentation vocabulary.
///
/// Deterministic: the same `n` always gives the same records.
pub fn synthetic_records(n: usize) -> Vec<DocRecord> {
    const WORDS: &[&str] = &[
        "pager", "terminal", "keybinding", "search", "output", "buffer", "print", "view",
        "scroll", "line", "column", "mode", "option", "setting", "color", "theme", "text",
        "input", "display", "window", "page", "screen", "cursor", "highlight", "visual",
    ];
    const CATEGORIES: &[Category] = &[
        Category::Section,
        Category::Method,
        Category::Page,
        Category::Type,
        Category::Macro,
    ];
    (0..n)
        .map(|i| {
            let word = |k: usize| WORDS[(i * 7 + k * 13) % WORDS.len()];
            let title = format!("{}_{}", word(0), word(1));
            let text = (0..12).map(word).collect::<Vec<_>>().join(" ");
            make_record(
                &format!("lib/page{}/#{}-{}", i / 8, title, i),
                &title,
                CATEGORIES[i % CATEGORIES.len()],
                &text,
            )
            .with_page(format!("Page {}", i / 8))
        })
        .collect()
}

/// Path of a bundled corpus fixture, e.g. `fixture_path("dev.js")`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("fixtures")
        .join(name)
}
