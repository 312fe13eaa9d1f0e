//! Memory reference traces.
//!
//! A [`Trace`] is the benchmark name plus the ordered, repetition-preserving list of
//! references. The simulator replays it as-is; the index-bit statistics only look at
//! its distinct addresses.

use std::collections::HashSet;

use crate::common::{Address, Error, Result};

/// An immutable, fully materialized memory reference trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    benchmark: String,
    references: Vec<Address>,
}

impl Trace {
    /// Builds a trace from already validated addresses.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTrace`] if `references` is empty.
    pub fn new(benchmark: impl Into<String>, references: Vec<Address>) -> Result<Self> {
        if references.is_empty() {
            return Err(Error::EmptyTrace);
        }
        Ok(Self {
            benchmark: benchmark.into(),
            references,
        })
    }

    /// Parses raw address tokens of width `address_bits` into a trace.
    ///
    /// # Errors
    ///
    /// [`Error::Reference`] wrapping the address error of the first bad token, or
    /// [`Error::EmptyTrace`] if there are no tokens.
    pub fn from_tokens<'a, I>(
        benchmark: impl Into<String>,
        tokens: I,
        address_bits: usize,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let references = tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| {
                Address::parse(token, address_bits).map_err(|e| e.at_reference(i + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(benchmark, references)
    }

    /// Name following the `.benchmark` marker.
    pub fn benchmark(&self) -> &str {
        &self.benchmark
    }

    /// References in trace order.
    pub fn references(&self) -> &[Address] {
        &self.references
    }

    /// Number of references, repetitions included.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Always `false`; an empty trace cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Unique addresses of the trace, in order of first appearance.
    pub fn distinct(&self) -> Vec<&Address> {
        let mut seen = HashSet::with_capacity(self.references.len());
        self.references
            .iter()
            .filter(|addr| seen.insert(*addr))
            .collect()
    }
}
