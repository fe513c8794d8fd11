// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: invariant checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **`check_index`** walks a built index and returns the first violated
//!    invariant as an [`InvariantError`]. Tests and the CLI call it directly.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are
//!    violated. Zero-cost in release, but catch bugs during development.

mod types;
pub mod contracts;

pub use types::*;
