//! Trace-driven cache simulation.
//!
//! The [`Simulator`] owns the cache state and statistics for a single run. Every reference
//! is mapped to a set through the selected [`IndexBits`], tagged with its indexable prefix
//! and looked up in that set's LRU queue.

use serde::Serialize;
use tracing::trace;

use crate::cache::{Access, CacheSim};
use crate::common::{Address, Error, Result};
use crate::config::CacheGeometry;
use crate::select::IndexBits;
use crate::stats::SimStats;
use crate::trace::Trace;

/// Verdict for one trace reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The referenced address.
    pub address: Address,
    /// Set the address mapped to.
    pub set: usize,
    /// Hit or miss.
    pub access: Access,
}

/// Replays references against a freshly initialized cache.
#[derive(Debug, Clone)]
pub struct Simulator {
    geometry: CacheGeometry,
    index_bits: IndexBits,
    cache: CacheSim,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator with an empty cache.
    ///
    /// # Errors
    ///
    /// [`Error::IndexBitCount`] if `index_bits` does not have `geometry.index_bits` entries,
    /// [`Error::InvalidIndexBit`] if a position is repeated or outside the indexable prefix.
    pub fn new(geometry: CacheGeometry, index_bits: IndexBits) -> Result<Self> {
        if index_bits.len() != geometry.index_bits {
            return Err(Error::IndexBitCount {
                expected: geometry.index_bits,
                actual: index_bits.len(),
            });
        }
        let mut seen = vec![false; geometry.indexable_bits];
        for &position in index_bits.positions() {
            match seen.get_mut(position) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(Error::InvalidIndexBit {
                        position,
                        indexable_bits: geometry.indexable_bits,
                    });
                }
            }
        }

        Ok(Self {
            cache: CacheSim::from_geometry(&geometry),
            stats: SimStats::new(geometry.sets),
            geometry,
            index_bits,
        })
    }

    /// Simulates a single reference.
    ///
    /// # Errors
    ///
    /// [`Error::IndexWidth`] if `addr` does not cover the indexable prefix.
    pub fn access(&mut self, addr: &Address) -> Result<Outcome> {
        let tag = addr
            .tag(self.geometry.indexable_bits)
            .ok_or_else(|| Error::IndexWidth {
                address: addr.to_string(),
                required: self.geometry.indexable_bits,
            })?;
        let set = self.index_bits.set_index(addr);

        let (access, victim) = self.cache.access(set, tag);
        self.stats.record(set, access, victim.is_some());
        trace!(%addr, set, %access, victim = ?victim.as_ref().map(|t| t.as_str()), "reference");

        Ok(Outcome {
            address: addr.clone(),
            set,
            access,
        })
    }

    /// Replays every reference of `trace` in order.
    ///
    /// # Errors
    ///
    /// The first error returned by [`Simulator::access`].
    pub fn run(&mut self, trace: &Trace) -> Result<Vec<Outcome>> {
        trace
            .references()
            .iter()
            .map(|addr| self.access(addr))
            .collect()
    }

    /// Total misses so far.
    pub fn miss_count(&self) -> u64 {
        self.stats.misses
    }

    /// Statistics so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Current cache state.
    pub fn cache(&self) -> &CacheSim {
        &self.cache
    }

    /// The index bits in use.
    pub fn index_bits(&self) -> &IndexBits {
        &self.index_bits
    }

    /// Consumes the simulator, returning its statistics with the final per-set occupancy.
    pub fn into_stats(mut self) -> SimStats {
        self.stats.set_occupancy = self.cache.occupancy();
        self.stats
    }
}
