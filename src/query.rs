// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing.
//!
//! The raw string goes through the same tokenizer as the corpus, so
//! `"TerminalPager.Pager"` and `"terminalpager.pager"` are the same query. Each
//! word becomes one [`QueryTerm`]; the identifier pieces the tokenizer cuts
//! from it are kept as `parts` for the fallback when the whole word isn't
//! indexed.
//!
//! In incomplete mode (the user is still typing) the last term is a prefix,
//! but only if the cursor is still inside it: `"pager"` expands, `"pager "`
//! doesn't.

use crate::tokenize::{tokenize, TokenKind};

/// How a query term matches vocabulary terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermMode {
    Exact,
    /// Any vocabulary term starting with the text
    Prefix,
}

/// One word of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    /// Folded whole word, e.g. `terminalpager.set_keybinding`
    pub text: String,
    pub mode: TermMode,
    /// Atomic pieces (`terminal`, `pager`, `set`, `keybinding`), in order.
    /// Empty for words that don't split.
    pub parts: Vec<String>,
}

impl QueryTerm {
    pub fn exact(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: TermMode::Exact,
            parts: Vec::new(),
        }
    }

    pub fn prefix(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: TermMode::Prefix,
            parts: Vec::new(),
        }
    }

    #[inline]
    pub fn is_prefix(&self) -> bool {
        self.mode == TermMode::Prefix
    }
}

/// An ordered list of query terms. Empty means "no results", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub terms: Vec<QueryTerm>,
}

impl Query {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Terms that must all match.
    pub fn exact_terms(&self) -> impl Iterator<Item = &QueryTerm> {
        self.terms.iter().filter(|t| !t.is_prefix())
    }

    /// The trailing prefix term, if the query is incomplete.
    pub fn prefix_term(&self) -> Option<&QueryTerm> {
        self.terms.last().filter(|t| t.is_prefix())
    }
}

/// Parse a raw user query.
///
/// `incomplete` is true while the user is typing; the last term then matches
/// as a prefix. Repeated terms collapse onto their last occurrence
/// (`"pager usage pager"` is `"usage pager"`).
pub fn parse(raw: &str, incomplete: bool) -> Query {
    let mut terms: Vec<QueryTerm> = Vec::new();
    // Does the last term end where the input ends?
    let mut last_at_end = false;

    for piece in raw.split_whitespace() {
        let piece_offset = piece.as_ptr() as usize - raw.as_ptr() as usize;
        let piece_at_end = piece_offset + piece.len() == raw.len();

        let mut current: Option<(u32, QueryTerm)> = None;
        for token in tokenize(piece) {
            match &mut current {
                Some((position, term)) if *position == token.position => {
                    if token.kind == TokenKind::Atom {
                        term.parts.push(token.term);
                    }
                }
                _ => {
                    if let Some((_, term)) = current.take() {
                        push_term(&mut terms, term);
                    }
                    last_at_end = piece_at_end && token.end == piece.len();
                    current = Some((token.position, QueryTerm::exact(token.term)));
                }
            }
        }
        if let Some((_, term)) = current {
            push_term(&mut terms, term);
        }
    }

    if incomplete && last_at_end {
        if let Some(last) = terms.last_mut() {
            last.mode = TermMode::Prefix;
        }
    }
    Query { terms }
}

fn push_term(terms: &mut Vec<QueryTerm>, term: QueryTerm) {
    terms.retain(|t| t.text != term.text);
    terms.push(term);
}
