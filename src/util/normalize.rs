// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case and accent folding.
//!
//! "Café", "cafe" and "CAFÉ" all fold to "cafe". The index and the query parser
//! run every term through [`fold`], so a match never depends on how the user
//! typed accents or capitals.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a single token: strip diacritics and lowercase.
///
/// Whitespace is kept as-is; callers pass text that is already split into words.
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase-only folding when `unicode-normalization` is disabled.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Fold one character, appending the result to `out`.
///
/// Used when a folded length has to be mapped back onto the original text
/// (prefix highlighting). One source char may fold to zero or several chars.
pub fn fold_char_into(c: char, out: &mut String) {
    let mut buf = [0u8; 4];
    out.push_str(&fold(c.encode_utf8(&mut buf)));
}

/// Normalize a free-form string: fold every word and collapse whitespace.
///
/// - "  Set  KeyBinding " → "set keybinding"
/// - "Tummalachērla" → "tummalacherla"
pub fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .map(fold)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks (Unicode category Mn) in the ranges that matter for
/// Latin-script documentation.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
