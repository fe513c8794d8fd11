// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use docsift::{check_index, Category, Corpus, Index, SearchConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Inspect { corpora } => run_inspect(&corpora),
        Commands::Search {
            corpus,
            query,
            limit,
            incomplete,
            config,
            bench,
            confidence,
        } => run_search(&SearchArgs {
            corpus,
            query,
            limit,
            incomplete,
            config,
            bench,
            confidence,
        }),
    };

    if let Err(e) = outcome {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

struct Loaded {
    path: PathBuf,
    bytes: u64,
    corpus_records: usize,
    merged: usize,
    index: Index,
    build_ms: f64,
}

fn load(path: &Path) -> Result<Loaded> {
    let bytes = std::fs::metadata(path)
        .with_context(|| format!("cannot stat {}", path.display()))?
        .len();
    let start = Instant::now();
    let Corpus { records, merged } = docsift::load_file(path)?;
    let corpus_records = records.len();
    let index = Index::build_parallel(records)
        .with_context(|| format!("cannot index {}", path.display()))?;
    Ok(Loaded {
        path: path.to_path_buf(),
        bytes,
        corpus_records,
        merged,
        index,
        build_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

#[cfg(feature = "parallel")]
fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("━━╸"));
    }
    pb.set_prefix("Loading");
    pb
}

fn run_inspect(paths: &[PathBuf]) -> Result<()> {
    #[cfg(feature = "parallel")]
    let pb = progress_bar(paths.len());

    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        #[cfg(feature = "parallel")]
        pb.set_message(truncate_path(&path.display().to_string(), 40));
        loaded.push(load(path)?);
        #[cfg(feature = "parallel")]
        pb.inc(1);
    }
    #[cfg(feature = "parallel")]
    pb.finish_with_message(format!("loaded {} corpora", loaded.len()));

    for corpus in &loaded {
        print_inspection(corpus);
    }
    Ok(())
}

fn print_inspection(loaded: &Loaded) {
    let index = &loaded.index;
    let stats = index.stats();

    section_top(&truncate_path(&loaded.path.display().to_string(), 60));
    stat_row("file size", &format_size(loaded.bytes));
    stat_row(
        "records",
        &format!("{} ({} fragments merged)", loaded.corpus_records, loaded.merged),
    );
    stat_row("terms", &stats.terms.to_string());
    stat_row("postings", &stats.postings.to_string());
    stat_row("avg record length", &format!("{:.1} terms", stats.avg_doc_length));
    stat_row("build time", &format!("{:.2} ms", loaded.build_ms));
    stat_row("fingerprint", &format!("{:08x}", index.fingerprint()));
    let invariants = match check_index(index) {
        Ok(()) => themed(GREEN, &[BOLD], "ok"),
        Err(e) => themed(RED, &[BOLD], &e.to_string()),
    };
    stat_row("invariants", &invariants);

    section_mid("CATEGORIES");
    for category in Category::ALL {
        let count = index
            .records()
            .iter()
            .filter(|r| r.category == category)
            .count();
        if count > 0 {
            row(&format!("  {}{:>6}", category_label(category), count));
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

struct SearchArgs {
    corpus: PathBuf,
    query: String,
    limit: Option<usize>,
    incomplete: bool,
    config: Option<PathBuf>,
    bench: bool,
    confidence: u8,
}

fn run_search(args: &SearchArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };
    let limit = args.limit.unwrap_or(config.default_limit);
    let loaded = load(&args.corpus)?;
    let index = &loaded.index;

    let start = Instant::now();
    let results = docsift::search(index, &args.query, args.incomplete, limit, &config)?;
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;

    let mode = if args.incomplete { "prefix" } else { "exact" };
    section_top(&format!("\"{}\" ({})", args.query, mode));
    if results.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "no results")));
    }
    let best = results.first().map_or(0.0, |r| r.score);
    for (rank, result) in results.iter().enumerate() {
        row(&format!(
            "{} {} {} {}",
            pad_left(&(rank + 1).to_string(), 3),
            score_value(result.score, best),
            category_label(result.record.category),
            themed(CYAN, &[BOLD], result.title())
        ));
        row(&format!("             {}", themed(GRAY, &[], result.location())));
        if !result.matched_spans.is_empty() {
            let snip = result.snippet(config.snippet_chars.min(BOX_WIDTH - 16));
            let text = highlight(&snip.text, &snip.spans);
            let lead = if snip.leading { "…" } else { "" };
            let trail = if snip.trailing { "…" } else { "" };
            row(&format!("             {}{}{}", lead, one_line(&text), trail));
        }
    }
    section_mid("TIMING");
    stat_row("results", &format!("{} of limit {}", results.len(), limit));
    stat_row("query (µs)", &timing_us(elapsed_us));

    if args.bench {
        let stats = bench(index, args, limit, &config)?;
        section_mid("BENCHMARK");
        stat_row("iterations", &stats.iterations.to_string());
        stat_row("mean (µs)", &timing_us(stats.mean_us));
        stat_row(
            &format!("±{}% CI (µs)", args.confidence),
            &timing_us(stats.half_width_us),
        );
        stat_row("min (µs)", &timing_us(stats.min_us));
    }
    section_bot();
    Ok(())
}

struct BenchStats {
    iterations: usize,
    mean_us: f64,
    half_width_us: f64,
    min_us: f64,
}

const BENCH_MIN_ITERATIONS: usize = 100;
const BENCH_MAX_ITERATIONS: usize = 100_000;

/// Repeat the query until the confidence interval is within 2% of the mean.
fn bench(index: &Index, args: &SearchArgs, limit: usize, config: &SearchConfig) -> Result<BenchStats> {
    let z = match args.confidence {
        99..=u8::MAX => 2.576,
        95..=98 => 1.96,
        90..=94 => 1.645,
        _ => 1.282,
    };
    // Welford running mean and variance
    let mut n = 0usize;
    let mut mean = 0.0f64;
    let mut m2 = 0.0f64;
    let mut min = f64::INFINITY;
    loop {
        let start = Instant::now();
        let results = docsift::search(index, &args.query, args.incomplete, limit, config)?;
        let sample = start.elapsed().as_secs_f64() * 1e6;
        drop(results);

        n += 1;
        let delta = sample - mean;
        mean += delta / n as f64;
        m2 += delta * (sample - mean);
        min = min.min(sample);

        if n < BENCH_MIN_ITERATIONS {
            continue;
        }
        let variance = m2 / (n - 1) as f64;
        let half_width = z * (variance / n as f64).sqrt();
        if half_width <= mean * 0.02 || n >= BENCH_MAX_ITERATIONS {
            return Ok(BenchStats {
                iterations: n,
                mean_us: mean,
                half_width_us: half_width,
                min_us: min,
            });
        }
    }
}
