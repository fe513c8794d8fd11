// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Two subcommands: `inspect` to load corpora and print index statistics, and
//! `search` to run a query against one corpus. The search command includes a
//! benchmarking mode that repeats the query until the timing settles.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Ranked search over documentation search indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load one or more corpora and print index statistics
    Inspect {
        /// Corpus files (JSON array, {"docs": [...]} or documenterSearchIndex.js)
        #[arg(required = true)]
        corpora: Vec<PathBuf>,
    },

    /// Search a corpus and display ranked results
    Search {
        /// Corpus file
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Treat the last word as still being typed (prefix match)
        #[arg(short, long)]
        incomplete: bool,

        /// JSON file overriding scoring and query settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Run benchmark until target confidence interval is achieved
        #[arg(long)]
        bench: bool,

        /// Target confidence level for benchmark (default: 95%)
        #[arg(long, default_value = "95")]
        confidence: u8,
    },
}
