//! Least Recently Used (LRU) cache set.
//!
//! Each set keeps its resident tags in a usage queue. The front of the queue is the
//! Least Recently Used tag and the back is the Most Recently Used one. A hit moves the
//! tag to the back; a miss evicts from the front until there is room, then appends.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `access()`: O(W) where W is the associativity (linear tag scan)
//! - **Space Complexity:** O(W) tags per set

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::common::Tag;

/// Outcome of a single cache access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Tag was resident.
    Hit,
    /// Tag was not resident and has been installed.
    Miss,
}

impl Access {
    /// `true` for [`Access::Hit`].
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// Report label (`hit` / `miss`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One set of an LRU cache.
#[derive(Debug, Clone)]
pub struct LruSet {
    ways: usize,
    /// Oldest first.
    usage: VecDeque<Tag>,
}

impl LruSet {
    /// Creates an empty set holding at most `ways` tags.
    ///
    /// Storage grows with the resident tags, so `ways` may exceed any realistic trace.
    pub fn new(ways: usize) -> Self {
        Self {
            ways,
            usage: VecDeque::new(),
        }
    }

    /// Looks up `tag`, updating recency on a hit and installing it on a miss.
    ///
    /// # Returns
    ///
    /// The access outcome and the tag evicted to make room, if any.
    pub fn access(&mut self, tag: Tag) -> (Access, Option<Tag>) {
        if let Some(pos) = self.usage.iter().position(|t| *t == tag) {
            if let Some(hit) = self.usage.remove(pos) {
                self.usage.push_back(hit);
            }
            return (Access::Hit, None);
        }

        let mut victim = None;
        while self.usage.len() >= self.ways {
            match self.usage.pop_front() {
                Some(evicted) => victim = Some(evicted),
                None => break,
            }
        }
        self.usage.push_back(tag);
        (Access::Miss, victim)
    }

    /// `true` if `tag` is resident.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.usage.contains(tag)
    }

    /// Resident tags, least recently used first.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.usage.iter()
    }

    /// Number of resident tags.
    pub fn len(&self) -> usize {
        self.usage.len()
    }

    /// `true` if no tag is resident.
    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }

    /// Maximum number of resident tags.
    pub fn ways(&self) -> usize {
        self.ways
    }
}
