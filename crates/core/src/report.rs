//! Run reports.
//!
//! A [`Report`] gathers everything a run produces: the echoed parameters, the selected
//! index bits, the per-reference verdicts and the miss total. It renders as the plain
//! text layout through `Display`, or as JSON through [`Report::to_json`].

use std::fmt;

use serde::Serialize;

use crate::common::Result;
use crate::config::CacheParams;
use crate::sim::loader::{BENCHMARK_MARKER, END_MARKER};
use crate::sim::simulator::Outcome;
use crate::stats::SimStats;

/// Result of a complete run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Parameters as given.
    pub params: CacheParams,
    /// Number of index bits (`k`).
    pub index_bit_count: usize,
    /// Selected bits as offsets from the least significant address bit, in selection order.
    pub index_bits: Vec<usize>,
    /// Number of block offset bits.
    pub offset_bit_count: usize,
    /// Benchmark name.
    pub benchmark: String,
    /// One verdict per reference, in trace order.
    pub outcomes: Vec<Outcome>,
    /// Total misses.
    pub miss_count: u64,
    /// Run statistics.
    pub stats: SimStats,
}

impl Report {
    /// Pretty-printed JSON form of the report.
    ///
    /// # Errors
    ///
    /// [`Error::Json`](crate::common::Error::Json) if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Address bits: {}", self.params.address_bits)?;
        writeln!(f, "Cache sets: {}", self.params.cache_sets)?;
        writeln!(f, "Associativity: {}", self.params.associativity)?;
        writeln!(f, "Block size: {}", self.params.block_size)?;
        writeln!(f)?;

        writeln!(f, "Indexing bit count: {}", self.index_bit_count)?;
        write!(f, "Indexing bits:")?;
        for bit in &self.index_bits {
            write!(f, " {bit}")?;
        }
        writeln!(f)?;
        writeln!(f, "Offset bit count: {}", self.offset_bit_count)?;
        writeln!(f)?;

        writeln!(f, "{BENCHMARK_MARKER} {}", self.benchmark)?;
        for outcome in &self.outcomes {
            writeln!(f, "{} {}", outcome.address, outcome.access)?;
        }
        writeln!(f, "{END_MARKER}")?;
        writeln!(f)?;

        writeln!(f, "Total cache miss count: {}", self.miss_count)
    }
}
