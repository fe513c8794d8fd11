// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus loading.
//!
//! Arbitrary payloads either fail with an error or produce a corpus that
//! builds into a well-formed index. Never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(corpus) = docsift::parse_str(input) else {
        return;
    };

    let index = docsift::Index::build(corpus.records).expect("merged corpus has unique identities");
    if let Err(err) = docsift::check_index(&index) {
        panic!("index not well-formed: {err}");
    }
});
