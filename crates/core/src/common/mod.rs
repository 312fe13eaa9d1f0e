//! Common types shared by every stage of the pipeline.
//!
//! This module provides:
//! 1. **Address Types:** Validated fixed-width binary addresses and cache tags.
//! 2. **Error Handling:** The crate-wide error enum and `Result` alias.
//! 3. **Bit Math:** Power-of-two helpers used to derive the cache geometry.

/// Binary address and tag types.
pub mod addr;

/// Error types for loading, selection and simulation.
pub mod error;

pub use addr::{Address, Tag};
pub use error::{Error, Result};

/// Returns `log2(n)` when `n` is a power of two, `None` otherwise (including zero).
pub const fn exact_log2(n: u64) -> Option<usize> {
    if n.is_power_of_two() {
        Some(n.trailing_zeros() as usize)
    } else {
        None
    }
}
