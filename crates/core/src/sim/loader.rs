//! Parameter and trace loading.
//!
//! This module reads the two inputs of a run. It performs:
//! 1. **Parameter parsing:** Whitespace-separated `Key: value` pairs, or a JSON object
//!    with the same keys.
//! 2. **Trace parsing:** `.benchmark <name>`, then one address per token, then `.end`.
//! 3. **File access:** Thin wrappers that read a path and attach it to I/O errors.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::common::{Error, Result};
use crate::config::{CacheParams, PARAM_KEYS};
use crate::trace::Trace;

/// Marker opening a trace.
pub const BENCHMARK_MARKER: &str = ".benchmark";
/// Marker closing a trace.
pub const END_MARKER: &str = ".end";

/// Parses a text parameter file.
///
/// Keys may carry a trailing colon (`Address_bits: 8`). Unknown keys are skipped with a
/// warning and a repeated key overrides the earlier value.
///
/// # Errors
///
/// * [`Error::InvalidParam`] - a key has no value or its value is not a non-negative integer.
/// * [`Error::MissingParam`] - one of the four required keys is absent.
pub fn parse_params(text: &str) -> Result<CacheParams> {
    let mut values: [Option<u64>; 4] = [None; 4];
    let mut tokens = text.split_whitespace();

    while let Some(raw_key) = tokens.next() {
        let key = raw_key.strip_suffix(':').unwrap_or(raw_key);
        let raw_value = tokens.next().ok_or_else(|| Error::InvalidParam {
            key: key.to_owned(),
            value: String::new(),
        })?;
        let value = raw_value.parse::<u64>().map_err(|_| Error::InvalidParam {
            key: key.to_owned(),
            value: raw_value.to_owned(),
        })?;

        match PARAM_KEYS.iter().position(|&k| k == key) {
            Some(slot) => values[slot] = Some(value),
            None => warn!(key, value, "ignoring unknown parameter"),
        }
    }

    let get = |slot: usize| values[slot].ok_or(Error::MissingParam(PARAM_KEYS[slot]));
    Ok(CacheParams {
        address_bits: get(0)?,
        block_size: get(1)?,
        cache_sets: get(2)?,
        associativity: get(3)?,
    })
}

/// Parses a JSON parameter object.
///
/// # Errors
///
/// [`Error::Json`] on malformed JSON, missing keys or unknown keys.
pub fn parse_params_json(text: &str) -> Result<CacheParams> {
    Ok(serde_json::from_str(text)?)
}

/// Parses a trace whose addresses are `address_bits` wide.
///
/// # Errors
///
/// * [`Error::MissingBenchmark`] - the text does not open with `.benchmark <name>`.
/// * [`Error::MissingEnd`] - no `.end` marker follows the references.
/// * [`Error::Reference`] - a reference has the wrong width or a non-binary digit.
/// * [`Error::EmptyTrace`] - there are no references.
pub fn parse_trace(text: &str, address_bits: usize) -> Result<Trace> {
    let mut tokens = text.split_whitespace();

    if tokens.next() != Some(BENCHMARK_MARKER) {
        return Err(Error::MissingBenchmark);
    }
    let benchmark = tokens.next().ok_or(Error::MissingBenchmark)?;

    let mut body = Vec::new();
    let mut terminated = false;
    for token in tokens.by_ref() {
        if token == END_MARKER {
            terminated = true;
            break;
        }
        body.push(token);
    }
    if !terminated {
        return Err(Error::MissingEnd);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after {END_MARKER}");
    }

    let trace = Trace::from_tokens(benchmark, body, address_bits)?;
    debug!(benchmark, references = trace.len(), "loaded trace");
    Ok(trace)
}

/// Reads and parses a parameter file.
///
/// Files ending in `.json` are parsed with [`parse_params_json`], anything else with
/// [`parse_params`].
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, otherwise any parse error.
pub fn load_params(path: impl AsRef<Path>) -> Result<CacheParams> {
    let path = path.as_ref();
    let text = read(path)?;
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        parse_params_json(&text)
    } else {
        parse_params(&text)
    }
}

/// Reads and parses a trace file.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, otherwise any error of [`parse_trace`].
pub fn load_trace(path: impl AsRef<Path>, address_bits: usize) -> Result<Trace> {
    let text = read(path.as_ref())?;
    parse_trace(&text, address_bits)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
