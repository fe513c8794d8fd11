// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization for prose mixed with code identifiers.
//!
//! Documentation text is half English, half symbols: `TerminalPager.set_keybinding`,
//! `@stdout_to_pager`, `drop_preference!`. Splitting on every punctuation mark
//! would lose the identifiers; keeping them whole would make "keybinding"
//! unsearchable. So each word is emitted several times at the same position:
//!
//! ```text
//! "TerminalPager.set_keybinding"
//!   → terminalpager.set_keybinding     (whole)
//!   → terminal, pager, set, keybinding (atoms: separators + case boundaries)
//!   → terminalpager, set_keybinding    (dotted segments)
//! ```
//!
//! # Word rules
//!
//! - A word starts at an alphanumeric char, `_`, or an `@` directly followed by one.
//! - `.` joins two identifier pieces only when another piece follows it, so
//!   sentence-ending periods are dropped.
//! - A `!` directly after an identifier is kept and closes it (`set_preference!`);
//!   the bang-less form is emitted as well.
//! - No stop words. "on", "in", "io" are real documentation queries.
//!
//! Token spans are byte ranges into the input, so the highlighter can map a
//! folded term back onto the original text.

use crate::util::normalize::fold;
use std::collections::VecDeque;

/// Which cut of the word a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whole,
    /// Finest piece: split on every separator and case boundary
    Atom,
    /// Bang-less form or a dotted segment that isn't already an atom
    Segment,
}

/// A folded term and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub term: String,
    /// Word position. Every token cut from the same word shares one position.
    pub position: u32,
    /// Byte range of the source text this term was folded from
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

/// Tokenize `text` lazily.
///
/// The iterator is finite and `Clone`, so it can be restarted from any point;
/// calling `tokenize` again restarts from the beginning.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        cursor: 0,
        position: 0,
        pending: VecDeque::new(),
    }
}

/// Number of word positions in `text` (what the index stores as document length).
pub fn word_count(text: &str) -> u32 {
    let mut cursor = 0;
    let mut count = 0;
    while let Some((_, end)) = next_word(text, cursor) {
        cursor = end;
        count += 1;
    }
    count
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    cursor: usize,
    position: u32,
    pending: VecDeque<Token>,
}

impl<'a> Tokens<'a> {
    /// Continue position numbering from `offset` (used when several fields
    /// share one position stream).
    pub fn starting_at(mut self, offset: u32) -> Self {
        self.position = offset;
        self
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        let (start, end) = next_word(self.text, self.cursor)?;
        self.cursor = end;
        let mut emitter = WordEmitter {
            position: self.position,
            out: &mut self.pending,
            seen: Vec::new(),
        };
        emitter.emit_word(self.text, start, end);
        self.position += 1;
        self.pending.pop_front()
    }
}

/// Collects the distinct terms of one word.
struct WordEmitter<'q> {
    position: u32,
    out: &'q mut VecDeque<Token>,
    seen: Vec<String>,
}

impl WordEmitter<'_> {
    fn push(&mut self, term: String, start: usize, end: usize, kind: TokenKind) {
        if term.is_empty() || self.seen.contains(&term) {
            return;
        }
        self.seen.push(term.clone());
        self.out.push_back(Token {
            term,
            position: self.position,
            start,
            end,
            kind,
        });
    }

    fn emit_word(&mut self, text: &str, start: usize, end: usize) {
        let word = &text[start..end];
        self.push(fold(word), start, end, TokenKind::Whole);

        // A word that doesn't split has one atom equal to itself, which the
        // dedup drops: atoms exist only for compound words.
        for (chunk_start, chunk_end) in separated_chunks(word) {
            let chunk = &word[chunk_start..chunk_end];
            for (atom_start, atom_end) in case_boundaries(chunk) {
                let s = start + chunk_start + atom_start;
                let e = start + chunk_start + atom_end;
                self.push(fold(&text[s..e]), s, e, TokenKind::Atom);
            }
        }

        let unbanged = word.trim_end_matches('!');
        if unbanged.len() < word.len() {
            self.push(fold(unbanged), start, start + unbanged.len(), TokenKind::Segment);
        }

        if word.contains('.') {
            let mut offset = start;
            for segment in unbanged.split('.') {
                self.push(fold(segment), offset, offset + segment.len(), TokenKind::Segment);
                offset += segment.len() + 1;
            }
        }
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, '_' | '.' | '!' | '@')
}

#[inline]
fn char_at(text: &str, pos: usize) -> Option<char> {
    text.get(pos..)?.chars().next()
}

/// Does a word (or macro name) start at `pos`?
fn starts_word(text: &str, pos: usize) -> bool {
    match char_at(text, pos) {
        Some('@') => char_at(text, pos + 1).is_some_and(is_word_char),
        Some(c) => is_word_char(c),
        None => false,
    }
}

/// Byte range of the next word at or after `from`.
fn next_word(text: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    loop {
        let c = char_at(text, pos)?;
        if starts_word(text, pos) {
            break;
        }
        pos += c.len_utf8();
    }

    let start = pos;
    // Covers the leading '@' of a macro name too
    let mut end = pos + char_at(text, pos)?.len_utf8();
    while let Some(c) = char_at(text, end) {
        if is_word_char(c) {
            end += c.len_utf8();
        } else if c == '.' && starts_word(text, end + 1) {
            end += 1;
            if char_at(text, end) == Some('@') {
                end += 1;
            }
        } else if c == '!' {
            end += 1;
            break;
        } else {
            break;
        }
    }
    Some((start, end))
}

/// Runs of a word between `_ . ! @` separators, as relative byte ranges.
fn separated_chunks(word: &str) -> Vec<(usize, usize)> {
    let mut chunks = Vec::new();
    let mut chunk_start = None;
    for (i, c) in word.char_indices() {
        if is_separator(c) {
            if let Some(s) = chunk_start.take() {
                chunks.push((s, i));
            }
        } else if chunk_start.is_none() {
            chunk_start = Some(i);
        }
    }
    if let Some(s) = chunk_start {
        chunks.push((s, word.len()));
    }
    chunks
}

/// Split a separator-free chunk on case boundaries.
///
/// - `keyBinding` → `key`, `Binding`
/// - `HTTPServer` → `HTTP`, `Server`
/// - `utf8Decode` → `utf8`, `Decode`
fn case_boundaries(chunk: &str) -> Vec<(usize, usize)> {
    let chars: Vec<(usize, char)> = chunk.char_indices().collect();
    let mut cuts = vec![0];
    for i in 1..chars.len() {
        let prev = chars[i - 1].1;
        let cur = chars[i].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);
        let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && cur.is_uppercase();
        let acronym_end =
            prev.is_uppercase() && cur.is_uppercase() && next.is_some_and(char::is_lowercase);
        if lower_to_upper || acronym_end {
            cuts.push(chars[i].0);
        }
    }
    cuts.push(chunk.len());
    cuts.windows(2).map(|w| (w[0], w[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(text: &str) -> Vec<String> {
        tokenize(text).map(|t| t.term).collect()
    }

    #[test]
    fn test_plain_prose() {
        assert_eq!(terms("The pager is called"), vec!["the", "pager", "is", "called"]);
    }

    #[test]
    fn test_snake_case_keeps_whole_and_parts() {
        assert_eq!(terms("set_keybinding"), vec!["set_keybinding", "set", "keybinding"]);
        let kinds: Vec<TokenKind> = tokenize("set_keybinding").map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Whole, TokenKind::Atom, TokenKind::Atom]);
    }

    #[test]
    fn test_dotted_name() {
        assert_eq!(
            terms("TerminalPager.set_keybinding"),
            vec![
                "terminalpager.set_keybinding",
                "terminal",
                "pager",
                "set",
                "keybinding",
                "terminalpager",
                "set_keybinding",
            ]
        );
    }

    #[test]
    fn test_macro_name() {
        assert_eq!(
            terms("@stdout_to_pager"),
            vec!["@stdout_to_pager", "stdout", "to", "pager"]
        );
        assert_eq!(terms("TerminalPager.@help")[0], "terminalpager.@help");
    }

    #[test]
    fn test_trailing_bang() {
        assert_eq!(
            terms("drop_preference!(key)"),
            vec!["drop_preference!", "drop", "preference", "drop_preference", "key"]
        );
    }

    #[test]
    fn test_plain_word_is_whole_only() {
        let tokens: Vec<Token> = tokenize("pager").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Whole);
    }

    #[test]
    fn test_sentence_period_is_dropped() {
        assert_eq!(terms("Shows output."), vec!["shows", "output"]);
    }

    #[test]
    fn test_camel_case_split() {
        assert_eq!(terms("HTTPServer"), vec!["httpserver", "http", "server"]);
        assert_eq!(terms("keyBinding"), vec!["keybinding", "key", "binding"]);
    }

    #[test]
    fn test_positions_shared_within_word() {
        let tokens: Vec<Token> = tokenize("see set_keybinding now").collect();
        let positions: Vec<u32> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 1, 1, 2]);
        assert_eq!(word_count("see set_keybinding now"), 3);
    }

    #[test]
    fn test_spans_point_into_source() {
        let text = "Call set_keybinding(k)";
        for token in tokenize(text) {
            let source = &text[token.start..token.end];
            assert_eq!(fold(source).trim_end_matches('!'), token.term.trim_end_matches('!'));
        }
    }

    #[test]
    fn test_restartable() {
        let tokens = tokenize("alpha beta gamma");
        let first: Vec<_> = tokens.clone().collect();
        let second: Vec<_> = tokens.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(terms("").is_empty());
        assert!(terms("  -> () ;; ").is_empty());
        assert_eq!(word_count("..."), 0);
    }

    #[test]
    fn test_starting_at_offsets_positions() {
        let positions: Vec<u32> = tokenize("a b").starting_at(10).map(|t| t.position).collect();
        assert_eq!(positions, vec![10, 11]);
    }
}
