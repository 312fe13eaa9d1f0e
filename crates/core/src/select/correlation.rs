//! Pairwise bit correlation.
//!
//! For positions `i` and `j`, `diff[i][j]` counts the distinct addresses in which the two
//! bits disagree. The score `min(diff, n - diff) / max(diff, n - diff)` is `0.0` when the
//! bits always agree or always disagree (one of them is redundant) and `1.0` when they
//! disagree on exactly half of the addresses.

use tracing::trace;

use super::{balance, check_population};
use crate::common::{Address, Error, Result};

/// Symmetric matrix of pairwise correlation scores with a zero diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationTable {
    dim: usize,
    /// Row-major `dim * dim` scores.
    scores: Vec<f64>,
    /// Row-major `dim * dim` disagreement counts; empty for hand-built tables.
    diffs: Vec<usize>,
}

impl CorrelationTable {
    /// Builds the table for positions `[0, width)` over the distinct addresses.
    ///
    /// Only the upper triangle is counted; the lower triangle is mirrored from it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTrace`] for an empty population and [`Error::IndexWidth`] for an
    /// address narrower than `width`.
    pub fn build(distinct: &[&Address], width: usize) -> Result<Self> {
        check_population(distinct, width)?;

        let n = distinct.len();
        let mut diffs = vec![0usize; width * width];
        let mut scores = vec![0.0; width * width];

        for i in 0..width {
            for j in (i + 1)..width {
                let diff = distinct
                    .iter()
                    .filter(|addr| addr.bit(i) != addr.bit(j))
                    .count();
                let score = balance(diff, n);

                diffs[i * width + j] = diff;
                diffs[j * width + i] = diff;
                scores[i * width + j] = score;
                scores[j * width + i] = score;
            }
        }

        trace!(dim = width, ?diffs, "correlation table");
        Ok(Self {
            dim: width,
            scores,
            diffs,
        })
    }

    /// Builds a table from explicit rows.
    ///
    /// The rows are taken as given; no symmetry is enforced.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != dim) {
            return Err(Error::DimensionMismatch {
                quality: row.len(),
                correlation: dim,
            });
        }
        Ok(Self {
            dim,
            scores: rows.into_iter().flatten().collect(),
            diffs: Vec::new(),
        })
    }

    /// Number of bit positions covered.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Score for positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= self.dim()`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.row(i)[j]
    }

    /// All scores against position `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.scores[i * self.dim..(i + 1) * self.dim]
    }

    /// Number of distinct addresses in which bits `i` and `j` disagree.
    ///
    /// `None` for tables built with [`CorrelationTable::from_rows`] or out-of-range indices.
    pub fn diff(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.dim || j >= self.dim {
            return None;
        }
        self.diffs.get(i * self.dim + j).copied()
    }
}
