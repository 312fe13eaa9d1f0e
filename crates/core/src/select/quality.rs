//! Per-bit quality.
//!
//! A bit is a good index bit when it splits the distinct addresses into two halves of
//! equal size. Quality is `min(ones, zeros) / max(ones, zeros)`: `1.0` for a perfect
//! split, `0.0` for a bit that never changes.

use tracing::trace;

use super::{balance, check_population};
use crate::common::{Address, Result};

/// Computes the quality of each bit position in `[0, width)`.
///
/// # Arguments
///
/// * `distinct` - Unique trace addresses.
/// * `width` - Length of the indexable prefix.
///
/// # Errors
///
/// [`Error::EmptyTrace`](crate::common::Error::EmptyTrace) for an empty population and
/// [`Error::IndexWidth`](crate::common::Error::IndexWidth) for an address narrower than `width`.
pub fn bit_quality(distinct: &[&Address], width: usize) -> Result<Vec<f64>> {
    check_population(distinct, width)?;

    let mut ones = vec![0usize; width];
    for addr in distinct {
        for (pos, count) in ones.iter_mut().enumerate() {
            if addr.bit(pos) {
                *count += 1;
            }
        }
    }

    let n = distinct.len();
    let quality: Vec<f64> = ones.iter().map(|&count| balance(count, n)).collect();
    trace!(?ones, ?quality, "bit quality");
    Ok(quality)
}
