//! Index-bit selection.
//!
//! Chooses which address bits form the cache set index, using the distinct addresses
//! of a trace. The selection runs in three stages:
//! 1. **Quality:** How evenly each bit splits the address population ([`quality`]).
//! 2. **Correlation:** How independent each pair of bits is ([`correlation`]).
//! 3. **Greedy ranking:** Repeatedly take the best bit and discount the bits that are
//!    redundant with it ([`greedy`]).
//!
//! The first `k = log2(Cache_sets)` ranked bits become the [`IndexBits`].

/// Pairwise bit independence scores.
pub mod correlation;

/// Greedy ranking of bit positions.
pub mod greedy;

/// Per-bit balance scores.
pub mod quality;

pub use correlation::CorrelationTable;
pub use greedy::rank_bits;
pub use quality::bit_quality;

use serde::Serialize;
use tracing::debug;

use crate::common::{Address, Error, Result};
use crate::config::CacheGeometry;

/// Ordered list of address bit positions that form the set index.
///
/// Entry `m` contributes weight `2^m` to the set index, so the first selected bit is the
/// least significant bit of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IndexBits(Vec<usize>);

impl IndexBits {
    /// Wraps an ordered list of positions (0 = most significant address bit).
    pub fn new(positions: Vec<usize>) -> Self {
        Self(positions)
    }

    /// Positions in selection order.
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    /// Number of index bits (`k`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for a single-set cache.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Computes the set index of `addr`.
    ///
    /// The result is always below `2^k`.
    ///
    /// # Panics
    ///
    /// Panics if a selected position is outside `addr`.
    pub fn set_index(&self, addr: &Address) -> usize {
        self.0
            .iter()
            .enumerate()
            .fold(0, |index, (weight, &pos)| index | (usize::from(addr.bit(pos)) << weight))
    }

    /// Positions re-expressed as offsets from the least significant address bit.
    pub fn lsb_offsets(&self, address_bits: usize) -> Vec<usize> {
        self.0.iter().map(|&pos| address_bits - pos - 1).collect()
    }
}

/// Runs the full selection pipeline over the distinct addresses of a trace.
///
/// # Errors
///
/// [`Error::EmptyTrace`] if `distinct` is empty, [`Error::IndexWidth`] if an address does
/// not cover the indexable prefix, plus any selector precondition failure.
pub fn select_index_bits(distinct: &[&Address], geometry: &CacheGeometry) -> Result<IndexBits> {
    let width = geometry.indexable_bits;
    let quality = bit_quality(distinct, width)?;
    let corr = CorrelationTable::build(distinct, width)?;

    let mut order = rank_bits(quality, &corr)?;
    order.truncate(geometry.index_bits);

    debug!(index_bits = ?order, distinct = distinct.len(), "selected index bits");
    Ok(IndexBits::new(order))
}

/// Balance ratio `min(c, n - c) / max(c, n - c)` of a binary split of `n` items.
///
/// `n` must be positive; callers reject empty populations first.
pub(crate) fn balance(count: usize, n: usize) -> f64 {
    let other = n - count;
    count.min(other) as f64 / count.max(other) as f64
}

/// Rejects empty populations and addresses shorter than `width`.
pub(crate) fn check_population(distinct: &[&Address], width: usize) -> Result<()> {
    if distinct.is_empty() {
        return Err(Error::EmptyTrace);
    }
    if let Some(addr) = distinct.iter().find(|addr| addr.width() < width) {
        return Err(Error::IndexWidth {
            address: addr.to_string(),
            required: width,
        });
    }
    Ok(())
}
