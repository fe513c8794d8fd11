// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight spans and snippets.
//!
//! For every query term, the first token of `text` that the term actually
//! matched (per its [`Resolution`]) becomes a span. Prefix matches highlight
//! only the typed portion: typing "pag" marks "Pag" in "Pager", not the whole
//! word. A term that matched only through the title leaves no span, and a
//! result with no spans is shown by title alone.
//!
//! Spans are byte offsets into the record's text, sorted and non-overlapping.

use crate::scoring::expand::{MatchKind, Resolution, TermGroup};
use crate::tokenize::{tokenize, Token};
use crate::types::{RankedResult, Span};
use crate::util::normalize::fold_char_into;
use crate::verify::contracts::check_spans;
use serde::Serialize;

/// Spans in `text` for each resolved query term.
pub fn matched_spans(text: &str, resolutions: &[Resolution]) -> Vec<Span> {
    if text.is_empty() || resolutions.iter().all(|r| r.groups.is_empty()) {
        return Vec::new();
    }
    let tokens: Vec<Token> = tokenize(text).collect();
    let mut spans: Vec<Span> = resolutions
        .iter()
        .flat_map(|r| r.groups.iter())
        .filter_map(|group| group_span(text, &tokens, group))
        .collect();

    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    let mut out: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if out.last().map_or(true, |last| last.end <= span.start) {
            out.push(span);
        }
    }
    check_spans(text, &out);
    out
}

/// First token matching any of the group's expansions.
fn group_span(text: &str, tokens: &[Token], group: &TermGroup) -> Option<Span> {
    tokens.iter().find_map(|token| {
        let expansion = group.expansion(&token.term)?;
        if expansion.kind == MatchKind::Prefix {
            Some(prefix_span(text, token, &group.typed))
        } else {
            Some(Span::new(token.start, token.end))
        }
    })
}

/// The part of `token`'s source text that folds to `typed`, or the whole
/// token when folding doesn't line up char for char.
fn prefix_span(text: &str, token: &Token, typed: &str) -> Span {
    let whole = Span::new(token.start, token.end);
    let Some(source) = whole.slice(text) else {
        return whole;
    };
    let mut folded = String::with_capacity(typed.len());
    for (i, c) in source.char_indices() {
        fold_char_into(c, &mut folded);
        if folded.len() >= typed.len() {
            if folded == typed {
                return Span::new(token.start, token.start + i + c.len_utf8());
            }
            break;
        }
    }
    whole
}

/// A window of a record's text around its first highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub text: String,
    /// Spans rebased onto `text`; spans crossing the window edge are dropped
    pub spans: Vec<Span>,
    /// Text was cut before the window
    pub leading: bool,
    /// Text was cut after the window
    pub trailing: bool,
}

/// Cut a window of at most `max_chars` chars from `text`.
///
/// The first span sits a quarter of the way into the window, so a little
/// context before the match is kept. Without spans the window starts at 0.
pub fn snippet(text: &str, spans: &[Span], max_chars: usize) -> Snippet {
    // Char boundaries, including the end of the text
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = bounds.len() - 1;

    let (start_idx, end_idx) = if char_len <= max_chars {
        (0, char_len)
    } else {
        let anchor = spans.first().map_or(0, |s| s.start);
        let anchor_idx = bounds.partition_point(|&b| b < anchor);
        let mut start_idx = anchor_idx.saturating_sub(max_chars / 4);
        let end_idx = (start_idx + max_chars).min(char_len);
        start_idx = end_idx.saturating_sub(max_chars).min(start_idx);
        (start_idx, end_idx)
    };
    let start = bounds[start_idx];
    let end = bounds[end_idx];

    Snippet {
        text: text[start..end].to_string(),
        spans: spans
            .iter()
            .filter(|s| s.start >= start && s.end <= end)
            .map(|s| Span::new(s.start - start, s.end - start))
            .collect(),
        leading: start > 0,
        trailing: end < text.len(),
    }
}

impl RankedResult {
    /// A window of `text` around the first highlight, for result lists.
    pub fn snippet(&self, max_chars: usize) -> Snippet {
        snippet(&self.record.text, &self.matched_spans, max_chars)
    }
}
