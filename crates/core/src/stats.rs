//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome of a trace replay. It provides:
//! 1. **Totals:** References, hits, misses and the number of distinct addresses.
//! 2. **Per-set counters:** Accesses, misses and final occupancy for every set, to show
//!    how evenly the selected index bits spread the trace.
//! 3. **Rendering:** A fixed-width text block via `Display`.

use std::fmt;

use serde::Serialize;

use crate::cache::Access;

/// Statistics of a single simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// References replayed, repetitions included.
    pub references: u64,
    /// References that hit.
    pub hits: u64,
    /// References that missed.
    pub misses: u64,
    /// Misses that evicted a resident tag.
    pub evictions: u64,
    /// Unique addresses in the trace.
    pub distinct_addresses: u64,
    /// Accesses per set.
    pub set_accesses: Vec<u64>,
    /// Misses per set.
    pub set_misses: Vec<u64>,
    /// Resident tags per set at the end of the run.
    pub set_occupancy: Vec<usize>,
}

impl SimStats {
    /// Creates zeroed statistics for a cache with `sets` sets.
    pub fn new(sets: usize) -> Self {
        Self {
            set_accesses: vec![0; sets],
            set_misses: vec![0; sets],
            set_occupancy: vec![0; sets],
            ..Self::default()
        }
    }

    /// Records one access to `set`.
    ///
    /// # Panics
    ///
    /// Panics if `set` is out of range for the cache these stats were created for.
    pub fn record(&mut self, set: usize, access: Access, evicted: bool) {
        self.references += 1;
        self.set_accesses[set] += 1;
        match access {
            Access::Hit => self.hits += 1,
            Access::Miss => {
                self.misses += 1;
                self.set_misses[set] += 1;
                if evicted {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Fraction of references that hit, `0.0` before any reference.
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.references)
    }

    /// Fraction of references that missed, `0.0` before any reference.
    pub fn miss_rate(&self) -> f64 {
        ratio(self.misses, self.references)
    }

    /// Number of sets that received at least one reference.
    pub fn sets_touched(&self) -> usize {
        self.set_accesses.iter().filter(|&&n| n > 0).count()
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "CACHE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_refs                 {}", self.references)?;
        writeln!(f, "sim_distinct             {}", self.distinct_addresses)?;
        writeln!(f, "sim_hits                 {}", self.hits)?;
        writeln!(f, "sim_misses               {}", self.misses)?;
        writeln!(f, "sim_evictions            {}", self.evictions)?;
        writeln!(f, "sim_hit_rate             {:.2}%", self.hit_rate() * 100.0)?;
        writeln!(f, "sim_miss_rate            {:.2}%", self.miss_rate() * 100.0)?;
        writeln!(
            f,
            "sim_sets_touched         {} / {}",
            self.sets_touched(),
            self.set_accesses.len()
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "PER-SET BREAKDOWN")?;
        let per_set = self
            .set_accesses
            .iter()
            .zip(&self.set_misses)
            .zip(&self.set_occupancy);
        for (set, ((&accesses, &misses), &occupancy)) in per_set.enumerate() {
            writeln!(
                f,
                "  set {:<6} accesses: {:<10} | misses: {:<10} | miss_rate: {:.2}% | occupancy: {}",
                set,
                accesses,
                misses,
                ratio(misses, accesses) * 100.0,
                occupancy
            )?;
        }
        writeln!(f, "==========================================================")
    }
}
