//! xi_correlation::statistic — assembly of the Xi coefficient.
//!
//! Purpose
//! -------
//! Turn the `y` values, already reordered by the ascending order of `x`,
//! into the Xi coefficient of Chatterjee (2021, JASA 116, 2009–2022).
//!
//! Key behaviors
//! -------------
//! - Let r be the ordinal ranks of the reordered `y` and
//!   S = Σᵢ |r[i+1] − r[i]|.
//! - [`TieMode::NoTies`]: ξ = 1 − 3·S / (n² − 1).
//! - [`TieMode::Ties`]: with r_max the max ranks of the reordered `y`,
//!   ξ = 1 − n·S / (2·Σᵢ r_max[i]·(n − 1)).
//!
//! Invariants & assumptions
//! ------------------------
//! - Callers pass at least two values (guaranteed by validation), so the
//!   no-ties denominator n² − 1 is ≥ 3.
//! - The ties denominator equals 2·(n − 1)·Σ r_max. Every rank is ≥ 1, so it
//!   is positive for n ≥ 2, even when all `y` values are equal.
//! - The division is never guarded. A zero denominator yields ±∞ or `NaN`
//!   in ξ exactly as f64 division does; it is not turned into an error.
//!
//! Conventions
//! -----------
//! - Sums over ranks are exact in `usize`; the final ratio is formed in
//!   `f64`.

use crate::xi_correlation::{options::TieMode, ranking::RankVector};

/// XiTerms — numerator and denominator of the Xi ratio.
///
/// ξ = 1 − nominator / denominator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XiTerms {
    nominator: f64,
    denominator: f64,
}

impl XiTerms {
    /// Build the terms from `y` values reordered by `x`.
    ///
    /// Parameters
    /// ----------
    /// - `y_sorted`: `&[f64]`
    ///   The dependent variable reordered by the stable ascending order of
    ///   the independent variable. Length n ≥ 2, no `NaN`.
    /// - `ties`: [`TieMode`]
    ///   Selects the formula variant.
    pub fn assemble(y_sorted: &[f64], ties: TieMode) -> Self {
        let n = y_sorted.len() as f64;
        let ordinal = RankVector::ordinal(y_sorted);
        let s = ordinal.successive_abs_diff_sum() as f64;

        match ties {
            TieMode::NoTies => XiTerms { nominator: 3.0 * s, denominator: n * n - 1.0 },
            TieMode::Ties => {
                let max = RankVector::max(y_sorted);
                XiTerms { nominator: n * s, denominator: 2.0 * max.sum() as f64 * (n - 1.0) }
            }
        }
    }

    pub fn nominator(&self) -> f64 {
        self.nominator
    }

    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    /// ξ = 1 − nominator / denominator, unguarded.
    pub fn xi(&self) -> f64 {
        1.0 - self.nominator / self.denominator
    }
}

/// Compute ξ from `y` values reordered by `x`.
pub fn xi_statistic(y_sorted: &[f64], ties: TieMode) -> f64 {
    XiTerms::assemble(y_sorted, ties).xi()
}
