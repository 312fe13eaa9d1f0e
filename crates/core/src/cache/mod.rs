//! Set-Associative Cache Simulator.
//!
//! This module implements a set-associative cache of independent LRU sets. The caller
//! decides which set a reference maps to (see [`IndexBits`](crate::select::IndexBits))
//! and supplies the tag; the cache only tracks residency and recency.

/// LRU set state and access outcomes.
pub mod lru;

pub use lru::{Access, LruSet};

use crate::common::Tag;
use crate::config::CacheGeometry;

/// Cache simulator made of `sets` independent LRU sets of `ways` tags each.
#[derive(Debug, Clone)]
pub struct CacheSim {
    sets: Vec<LruSet>,
    ways: usize,
}

impl CacheSim {
    /// Creates an empty cache.
    ///
    /// # Arguments
    ///
    /// * `sets` - Number of sets.
    /// * `ways` - Associativity of each set.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            sets: vec![LruSet::new(ways); sets],
            ways,
        }
    }

    /// Creates an empty cache shaped by a validated geometry.
    pub fn from_geometry(geometry: &CacheGeometry) -> Self {
        Self::new(geometry.sets, geometry.associativity)
    }

    /// Accesses `tag` in set `set_index`.
    ///
    /// # Returns
    ///
    /// The access outcome and the evicted tag, if any.
    ///
    /// # Panics
    ///
    /// Panics if `set_index >= self.num_sets()`.
    pub fn access(&mut self, set_index: usize, tag: Tag) -> (Access, Option<Tag>) {
        self.sets[set_index].access(tag)
    }

    /// `true` if `tag` is resident in set `set_index`.
    pub fn contains(&self, set_index: usize, tag: &Tag) -> bool {
        self.sets
            .get(set_index)
            .is_some_and(|set| set.contains(tag))
    }

    /// Returns set `set_index`, if it exists.
    pub fn set(&self, set_index: usize) -> Option<&LruSet> {
        self.sets.get(set_index)
    }

    /// Number of sets.
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// Associativity.
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// Number of resident tags in each set.
    pub fn occupancy(&self) -> Vec<usize> {
        self.sets.iter().map(LruSet::len).collect()
    }
}
