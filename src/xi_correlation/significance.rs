//! xi_correlation::significance — asymptotic p-value for ξ.
//!
//! Under independence, √n·ξ is asymptotically N(0, 2/5) in the sense used
//! here: the p-value is the upper tail of `Normal(0, 2 / 5 / √n)` at ξ.
//! The approximation is trustworthy for n ≥ [`ASYMPTOTIC_MIN_N`]; below
//! that it is a heuristic only, and no exact finite-sample distribution is
//! computed.
use statrs::distribution::{ContinuousCDF, Normal};

/// Smallest sample size for which the normal approximation is considered
/// valid.
pub const ASYMPTOTIC_MIN_N: usize = 20;

/// Standard deviation of ξ under independence: 2 / 5 / √n.
#[inline]
pub fn null_scale(n: usize) -> f64 {
    2.0 / 5.0 / (n as f64).sqrt()
}

/// Whether the normal approximation is in its valid regime for `n`.
#[inline]
pub fn is_asymptotic(n: usize) -> bool {
    n >= ASYMPTOTIC_MIN_N
}

/// One-sided p-value P(Ξ ≥ ξ) for `Ξ ~ Normal(0, null_scale(n))`.
///
/// Non-finite `xi` propagates: `NaN` gives `NaN`, `+∞` gives 0 and `−∞`
/// gives 1.
pub fn p_value(xi: f64, n: usize) -> f64 {
    Normal::standard().sf(xi / null_scale(n))
}
