//! xi_correlation::ranking — sort permutation and rank statistics.
//!
//! Purpose
//! -------
//! Implement the rank transform behind the Xi statistic: reorder `y` by the
//! ascending order of `x`, then rank the reordered values.
//!
//! Key behaviors
//! -------------
//! - [`sort_permutation`] returns the indices that sort a series in ascending
//!   order. The sort is stable: equal values keep their original relative
//!   order, so duplicated `x` values always produce the same `y` ordering.
//! - [`RankVector::ordinal`] assigns unique ranks 1..=n by value, breaking
//!   ties by position (earlier position gets the lower rank).
//! - [`RankVector::max`] assigns every member of a tied group the highest
//!   rank of that group.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs come from a validated `PairedSample` and contain no `NaN`.
//!   Comparisons treat `-0.0` and `0.0` as equal.
//! - Every rank lies in `[1, n]`.
//!
//! Performance
//! -----------
//! - Each ranking is O(n log n), dominated by a single index sort.

use std::cmp::Ordering;

use crate::xi_correlation::validation::PairedSample;

#[inline]
fn ascending(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Indices that sort `values` in ascending order (stable).
pub fn sort_permutation(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| ascending(values[a], values[b]));
    indices
}

/// Reorder `y` by the ascending sort permutation of `x`.
pub fn y_sorted_by_x(sample: &PairedSample) -> Vec<f64> {
    let y = sample.y();
    sort_permutation(sample.x()).into_iter().map(|i| y[i]).collect()
}

/// RankVector — integer ranks of a series, in the series' own order.
///
/// Invariants
/// ----------
/// - `ranks.len()` equals the length of the ranked series.
/// - Every rank lies in `[1, n]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankVector {
    ranks: Vec<usize>,
}

impl RankVector {
    /// Ordinal ranking: unique ranks, ties broken by first occurrence.
    pub fn ordinal(values: &[f64]) -> Self {
        let order = sort_permutation(values);
        let mut ranks = vec![0; values.len()];
        for (position, &index) in order.iter().enumerate() {
            ranks[index] = position + 1;
        }
        RankVector { ranks }
    }

    /// Max ranking: tied values share the highest rank of their group.
    pub fn max(values: &[f64]) -> Self {
        let order = sort_permutation(values);
        let n = order.len();
        let mut ranks = vec![0; n];

        let mut start = 0;
        while start < n {
            let value = values[order[start]];
            let mut end = start + 1;
            while end < n && ascending(values[order[end]], value) == Ordering::Equal {
                end += 1;
            }
            for &index in &order[start..end] {
                ranks[index] = end;
            }
            start = end;
        }
        RankVector { ranks }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Σ |r[i+1] − r[i]| over consecutive ranks.
    pub fn successive_abs_diff_sum(&self) -> usize {
        self.ranks.windows(2).map(|w| w[0].abs_diff(w[1])).sum()
    }

    /// Σ r[i].
    pub fn sum(&self) -> usize {
        self.ranks.iter().sum()
    }
}
