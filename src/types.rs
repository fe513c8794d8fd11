// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! These types define how documentation records, postings and results fit
//! together. Records are immutable once loaded; postings are owned by the
//! [`Index`](crate::Index) and rebuilt wholesale on reload; results are
//! produced per query and thrown away.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Posting**: `doc_id < records.len()` and `positions` is sorted ascending
//!   with `positions.len() == term_freq()`.
//!
//! - **PostingList**: non-empty, sorted by `doc_id` ascending, one posting per
//!   document. `doc_freq()` is therefore just the length.
//!
//! - **Span**: `start < end <= text.len()`, both on UTF-8 char boundaries.
//!
//! `verify::check_index` checks all of these against a built index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier: the record's position in the index.
///
/// Prevents accidentally passing a token position where a document is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_docs: usize) -> Option<Self> {
        if (id as usize) < num_docs {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

// =============================================================================
// RECORD TYPES
// =============================================================================

/// Structural kind of a documentation record.
///
/// A closed set: the loader rejects anything else instead of carrying an
/// arbitrary string around. `Section` and `Page` come from prose pages, the
/// rest from docstrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Section,
    Page,
    Method,
    Function,
    Type,
    Macro,
    Module,
    Constant,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Section,
        Category::Page,
        Category::Method,
        Category::Function,
        Category::Type,
        Category::Macro,
        Category::Module,
        Category::Constant,
    ];

    /// Parse the lowercase wire name. Returns `None` for unknown categories.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Section => "section",
            Category::Page => "page",
            Category::Method => "method",
            Category::Function => "function",
            Category::Type => "type",
            Category::Macro => "macro",
            Category::Module => "module",
            Category::Constant => "constant",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a documentation search corpus.
///
/// Identity is `(location, category)`. `title` and `page` may be empty; `text`
/// may be empty too (section headers usually are), in which case the record is
/// found through its title or page only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    /// URI fragment, e.g. `lib/library/#TerminalPager.pager`
    pub location: String,
    /// Human-readable page name
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub title: String,
    pub category: Category,
    pub text: String,
}

impl DocRecord {
    pub fn new(
        location: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        text: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            page: String::new(),
            title: title.into(),
            category,
            text: text.into(),
        }
    }

    /// Builder-style setter for the page name.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = page.into();
        self
    }
}

/// Which part of a record a term came from.
///
/// **Gotcha**: the derived `Ord` is declaration order (Title < Text < Page),
/// which is the reverse of weight order. Use the configured weights for
/// ranking, not `Ord`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Text,
    Page,
}

impl Field {
    /// Tokenization order: positions run through title, then text, then page.
    pub const ALL: [Field; 3] = [Field::Title, Field::Text, Field::Page];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Text => "text",
            Field::Page => "page",
        }
    }

    /// The record's content for this field.
    pub fn of(self, record: &DocRecord) -> &str {
        match self {
            Field::Title => &record.title,
            Field::Text => &record.text,
            Field::Page => &record.page,
        }
    }
}

// =============================================================================
// INVERTED INDEX TYPES
// =============================================================================

/// All occurrences of one term in one document.
///
/// Frequencies are split per field so the scorer can weight title hits above
/// text hits. `positions` are word positions in the title → text → page token
/// stream, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub doc_id: DocId,
    pub title_freq: u32,
    pub text_freq: u32,
    pub page_freq: u32,
    pub positions: Vec<u32>,
}

impl Posting {
    pub(crate) fn new(doc_id: DocId) -> Self {
        Self {
            doc_id,
            title_freq: 0,
            text_freq: 0,
            page_freq: 0,
            positions: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, field: Field, position: u32) {
        match field {
            Field::Title => self.title_freq += 1,
            Field::Text => self.text_freq += 1,
            Field::Page => self.page_freq += 1,
        }
        self.positions.push(position);
    }

    /// Occurrences in one field.
    #[inline]
    pub fn freq(&self, field: Field) -> u32 {
        match field {
            Field::Title => self.title_freq,
            Field::Text => self.text_freq,
            Field::Page => self.page_freq,
        }
    }

    /// Total occurrences across all fields.
    #[inline]
    pub fn term_freq(&self) -> u32 {
        self.title_freq + self.text_freq + self.page_freq
    }
}

/// Every document containing one term, sorted by `doc_id` ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    pub postings: Vec<Posting>,
}

impl PostingList {
    /// Number of documents containing the term.
    #[inline]
    pub fn doc_freq(&self) -> usize {
        self.postings.len()
    }

    /// Binary search for one document's posting.
    pub fn get(&self, doc_id: DocId) -> Option<&Posting> {
        self.postings
            .binary_search_by_key(&doc_id, |p| p.doc_id)
            .ok()
            .map(|i| &self.postings[i])
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Byte range into a record's `text`, for highlighting.
///
/// Byte offsets, not chars: `&text[span.start..span.end]` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The highlighted text, or `None` if the span doesn't fit `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A candidate document with its relevance score, before assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64,
    /// Highest-weighted field any query term hit (first tie-breaker)
    pub best_field: Field,
    /// Number of query terms this document matched
    pub matched_terms: usize,
}

/// What the rendering layer gets back for one hit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub record: Arc<DocRecord>,
    pub score: f64,
    /// Sorted, non-overlapping byte ranges into `record.text`
    pub matched_spans: Vec<Span>,
    #[serde(skip)]
    pub doc_id: DocId,
    pub best_field: Field,
}

impl RankedResult {
    #[inline]
    pub fn location(&self) -> &str {
        &self.record.location
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.record.title
    }
}
