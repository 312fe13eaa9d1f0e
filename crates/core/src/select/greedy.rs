//! Greedy bit ranking.
//!
//! Each step takes the unselected position with the highest remaining quality, then
//! multiplies every quality by that position's correlation row. Bits that are redundant
//! with an already selected bit drop to zero and are ranked last.
//!
//! Ties are broken toward the higher position: candidates are scanned from the last
//! position down and only a strictly greater quality displaces the running best.

use tracing::trace;

use super::CorrelationTable;
use crate::common::{Error, Result};

/// Ranks all positions covered by `quality` from most to least useful.
///
/// `quality` is consumed as the working copy that gets discounted after every pick.
///
/// # Returns
///
/// A permutation of `0..quality.len()` in selection order.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if `quality` and `corr` cover different positions.
pub fn rank_bits(mut quality: Vec<f64>, corr: &CorrelationTable) -> Result<Vec<usize>> {
    let len = quality.len();
    if corr.dim() != len {
        return Err(Error::DimensionMismatch {
            quality: len,
            correlation: corr.dim(),
        });
    }

    let mut selected = vec![false; len];
    let mut order = Vec::with_capacity(len);

    for step in 0..len {
        let best = (0..len)
            .rev()
            .filter(|&i| !selected[i])
            .reduce(|best, i| if quality[i] > quality[best] { i } else { best })
            .ok_or(Error::NoCandidate { step })?;

        selected[best] = true;
        order.push(best);

        for (q, c) in quality.iter_mut().zip(corr.row(best)) {
            *q *= c;
        }
        trace!(step, best, ?quality, "greedy selection step");
    }

    Ok(order)
}
