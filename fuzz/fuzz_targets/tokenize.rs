// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tokenizer.
//!
//! Every token must point at a valid slice of the input that folds back to
//! its term.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let mut last_position = 0;
    for token in docsift::tokenize(text) {
        let slice = text
            .get(token.start..token.end)
            .expect("token span on char boundaries");
        assert!(!token.term.is_empty());
        assert_eq!(docsift::fold(slice), token.term);
        assert!(token.position >= last_position);
        last_position = token.position;
    }
});
