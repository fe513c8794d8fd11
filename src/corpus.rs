// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: from the generator's payload to validated [`DocRecord`]s.
//!
//! Documentation generators emit the record list in a few wrappings. All of
//! these are accepted:
//!
//! ```text
//! [ {...}, {...} ]                                   bare array
//! {"docs": [ {...}, {...} ]}                         object
//! var documenterSearchIndex = {"docs": [ ... ]}      JavaScript assignment
//! ```
//!
//! Validation is structural only. `location` and `text` are required strings,
//! `title` and `page` default to empty, and `category` must be one of the known
//! kinds (default `page`). The first bad record aborts the whole load.
//!
//! Generators split long pages into several fragments with the same
//! `(location, category)`. Those are merged here so the index sees one record
//! per identity: the first non-empty `title`/`page` wins and texts are joined
//! with a newline, in input order.

use crate::error::{CorpusError, Result};
use crate::types::{Category, DocRecord};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

/// A validated, deduplicated record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub records: Vec<DocRecord>,
    /// How many input fragments were folded into earlier records
    pub merged: usize,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a corpus payload in any of the accepted wrappings.
pub fn parse_str(input: &str) -> Result<Corpus> {
    let start = Instant::now();
    let value: Value = serde_json::from_str(strip_js_prefix(input))?;
    let records = parse_value(value)?;
    let total = records.len();
    let (records, merged) = merge_fragments(records);
    tracing::info!(
        input = total,
        records = records.len(),
        merged,
        elapsed_us = start.elapsed().as_micros() as u64,
        "parsed corpus"
    );
    Ok(Corpus { records, merged })
}

/// Read and parse a corpus file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Corpus> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&input)
}

/// Parse an already-decoded JSON value into records, without merging fragments.
pub fn parse_value(value: Value) -> Result<Vec<DocRecord>> {
    let list = match value {
        Value::Array(list) => list,
        Value::Object(mut obj) => match obj.remove("docs") {
            Some(Value::Array(list)) => list,
            _ => return Err(CorpusError::MissingRecordList),
        },
        _ => return Err(CorpusError::MissingRecordList),
    };
    list.into_iter()
        .enumerate()
        .map(|(index, value)| parse_record(index, value))
        .collect()
}

/// Skip a leading `var name =` so the rest parses as JSON.
fn strip_js_prefix(input: &str) -> &str {
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }
    match trimmed.find(['{', '[']) {
        Some(pos) if trimmed[..pos].contains('=') => trimmed[pos..].trim_end().trim_end_matches(';'),
        _ => trimmed,
    }
}

fn parse_record(index: usize, value: Value) -> Result<DocRecord> {
    let Value::Object(mut obj) = value else {
        return Err(CorpusError::MalformedRecord {
            index,
            reason: "expected an object".into(),
        });
    };

    let location = required_string(&mut obj, index, "location")?;
    let text = required_string(&mut obj, index, "text")?;
    let title = optional_string(&mut obj, index, "title")?.unwrap_or_default();
    let page = optional_string(&mut obj, index, "page")?.unwrap_or_default();
    let category = match optional_string(&mut obj, index, "category")? {
        None => Category::Page,
        Some(value) => {
            Category::parse(&value).ok_or(CorpusError::UnknownCategory { index, value })?
        }
    };

    Ok(DocRecord {
        location,
        page,
        title,
        category,
        text,
    })
}

fn required_string(
    obj: &mut Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String> {
    optional_string(obj, index, field)?.ok_or(CorpusError::MissingField { index, field })
}

/// `null` counts as absent.
fn optional_string(
    obj: &mut Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<Option<String>> {
    match obj.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(CorpusError::MalformedRecord {
            index,
            reason: format!("field `{}` must be a string, got {}", field, json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fold records sharing `(location, category)` into the first one.
pub fn merge_fragments(records: Vec<DocRecord>) -> (Vec<DocRecord>, usize) {
    let mut out: Vec<DocRecord> = Vec::with_capacity(records.len());
    let mut slots: HashMap<(String, Category), usize> = HashMap::with_capacity(records.len());
    let mut merged = 0;

    for record in records {
        let key = (record.location.clone(), record.category);
        match slots.get(&key) {
            Some(&slot) => {
                let target = &mut out[slot];
                if target.title.is_empty() {
                    target.title = record.title;
                }
                if target.page.is_empty() {
                    target.page = record.page;
                }
                if !record.text.is_empty() {
                    if !target.text.is_empty() {
                        target.text.push('\n');
                    }
                    target.text.push_str(&record.text);
                }
                merged += 1;
                tracing::debug!(location = %key.0, category = %key.1, "merged record fragment");
            }
            None => {
                slots.insert(key, out.len());
                out.push(record);
            }
        }
    }

    (out, merged)
}
