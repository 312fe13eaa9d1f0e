//! Cache index-bit selection and LRU simulation library.
//!
//! This crate picks the address bits a set-associative cache should index with, given a
//! memory reference trace, and replays the trace against that cache:
//! 1. **Selection:** Per-bit quality and pairwise correlation over the distinct addresses
//!    feed a greedy ranking; the top `log2(Cache_sets)` bits become the set index.
//! 2. **Cache:** Independent LRU sets keyed by the indexable address prefix.
//! 3. **Simulation:** Loader, driver, statistics and the run report.

/// Cache model (sets, LRU queues, access outcomes).
pub mod cache;
/// Common types (addresses, tags, errors).
pub mod common;
/// Cache parameters and derived geometry.
pub mod config;
/// Run report and its text/JSON renderings.
pub mod report;
/// Index-bit selection (quality, correlation, greedy ranking).
pub mod select;
/// Loader, simulator and the end-to-end driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Memory reference traces.
pub mod trace;

/// Crate-wide error type.
pub use crate::common::{Error, Result};
/// Cache parameters; parse with [`sim::loader`] or deserialize from JSON.
pub use crate::config::CacheParams;
/// Output of a complete run.
pub use crate::report::Report;
/// End-to-end entry point.
pub use crate::sim::run;
/// Memory reference trace.
pub use crate::trace::Trace;
