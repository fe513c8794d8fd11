// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Queries against the bundled documentation corpora.

use super::common::{dev_index, locations, release_index, search, search_limit};
use docsift::Category;

#[test]
fn test_method_found_by_its_name() {
    let index = release_index();
    let results = search_limit(&index, "set_keybinding", false, 3);
    assert!(
        results
            .iter()
            .any(|r| r.title() == "TerminalPager.set_keybinding"),
        "got {:?}",
        locations(&results)
    );
}

#[test]
fn test_qualified_name_found() {
    let index = release_index();
    let results = search_limit(&index, "TerminalPager.pager", false, 3);
    assert!(results.iter().any(|r| r.record.category == Category::Method
        && r.title() == "TerminalPager.pager"));
}

#[test]
fn test_macro_found_with_sigil() {
    let index = release_index();
    let results = search_limit(&index, "@stdout_to_pager", false, 5);
    assert!(results.iter().any(|r| r.record.category == Category::Macro));
    assert!(results.iter().any(|r| r.location() == "man/usage/#@stdout_to_pager"));
}

#[test]
fn test_home_page_has_empty_location() {
    let index = dev_index();
    let results = search(&index, "installation", false);
    assert!(locations(&results).contains(&"#Installation"));
    let results = search(&index, "crayons", false);
    assert_eq!(locations(&results), vec![""]);
}

#[test]
fn test_interactive_prefix_on_release_docs() {
    let index = release_index();
    let results = search_limit(&index, "custom", true, 10);
    assert!(!results.is_empty());
    assert!(results.iter().any(|r| r.location().starts_with("man/customization/")));
}

#[test]
fn test_results_never_exceed_limit() {
    let index = release_index();
    for limit in [1, 2, 5, 20] {
        for raw in ["pager", "terminalpager", "the", "julia", "p"] {
            assert!(search_limit(&index, raw, true, limit).len() <= limit);
        }
    }
}
