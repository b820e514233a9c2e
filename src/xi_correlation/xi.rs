//! xi_correlation::xi — Chatterjee's Xi correlation coefficient.
//!
//! Purpose
//! -------
//! Compute the Xi (ξ) rank correlation coefficient of Chatterjee (2021,
//! JASA 116, 2009–2022) between paired sequences `x` and `y`, together with
//! its one-sided asymptotic p-value under the null of independence.
//!
//! Key behaviors
//! -------------
//! - Validate the pair (array-like, length ≥ 2, equal lengths, no `NaN`)
//!   before any computation.
//! - Reorder `y` by the stable ascending order of `x`, rank the result and
//!   assemble ξ with the no-ties or ties-adjusted formula.
//! - Map ξ to P(Ξ ≥ ξ) under `Normal(0, 2 / 5 / √n)`.
//! - Return a compact [`XiOutcome`] value with accessors.
//!
//! Invariants & assumptions
//! ------------------------
//! - ξ measures how well `y` is explained by a function of `x`; it is
//!   directional, so `xi(x, y)` and `xi(y, x)` generally differ.
//! - ξ is close to 0 under independence and approaches 1 under exact
//!   functional dependence. Small-sample edge effects can push it slightly
//!   outside [−1, 1] in principle; nothing is clamped.
//! - Duplicated `x` values are ordered by their original position, so
//!   repeated calls on the same input always agree.
//! - A zero denominator is not an error: ±∞ or `NaN` propagates into ξ and
//!   the p-value, and a `tracing` warning is emitted.
//!
//! Conventions
//! -----------
//! - `ties = false` (the default) selects the no-ties formula; `true`
//!   selects the ties-adjusted formula for repeated values in `y`.
//! - Errors use [`XiError`](crate::xi_correlation::errors::XiError) through
//!   the [`XiResult`] alias.
//!
//! Downstream usage
//! ----------------
//! - Call [`xi_cor_coeff`] with a boolean tie flag, or
//!   [`xi_cor_coeff_with`] with an [`XiOptions`] value, and read
//!   `(xi, p_value)` from [`XiOutcome::as_tuple`].
//! - Check [`XiOutcome::is_asymptotic`] before interpreting the p-value for
//!   small samples.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the reference value ξ = 0.5 for `x = y = [1..5]`, check
//!   directionality, stable tie-breaking on `x`, string inputs and error
//!   propagation, and use `proptest` to assert that p-values lie in [0, 1].

use tracing::{debug, warn};

use crate::xi_correlation::{
    array_like::ArrayLike,
    errors::XiResult,
    options::{TieMode, XiOptions},
    ranking::y_sorted_by_x,
    significance::{self, is_asymptotic},
    statistic::xi_statistic,
    validation::validate_pair,
};

/// XiOutcome — result of one Xi correlation computation.
///
/// Fields
/// ------
/// - `xi`: `f64`
///   The Xi coefficient.
/// - `p_value`: `f64`
///   One-sided asymptotic p-value of `xi` under independence.
/// - `n`: `usize`
///   Number of pairs.
/// - `ties`: [`TieMode`]
///   Formula variant used.
///
/// Invariants
/// ----------
/// - `n ≥ 2`.
/// - `p_value` lies in [0, 1] whenever `xi` is not `NaN`.
///
/// Notes
/// -----
/// - A plain `Copy` value that does not own the original data; safe to send
///   across threads or FFI boundaries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct XiOutcome {
    xi: f64,
    p_value: f64,
    n: usize,
    ties: TieMode,
}

impl XiOutcome {
    /// Compute the Xi correlation of `y` on `x`.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `&X`
    ///   Independent variable; any [`ArrayLike`] with length ≥ 2.
    /// - `y`: `&Y`
    ///   Dependent variable; any [`ArrayLike`] with the same length as `x`.
    /// - `options`: `&XiOptions`
    ///   Run configuration (tie mode).
    ///
    /// Returns
    /// -------
    /// `XiResult<XiOutcome>`
    ///   - `Ok(XiOutcome)` with ξ, its p-value, n and the tie mode.
    ///   - `Err(XiError)` when validation fails; no work is done in that case.
    ///
    /// Errors
    /// ------
    /// - `XiError::NotArrayLike`, `XiError::InsufficientLength`,
    ///   `XiError::NonFiniteData` (kind `InvalidArgument`).
    /// - `XiError::SizeMismatch` (kind `SizeMismatch`).
    ///
    /// Panics
    /// ------
    /// - Never panics; invalid inputs are reported as `XiError`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_xicorr::xi_correlation::{XiOptions, XiOutcome};
    ///
    /// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let outcome = XiOutcome::xi_correlation(&x, &x, &XiOptions::default()).unwrap();
    ///
    /// assert_eq!(outcome.xi(), 0.5);
    /// assert!((0.0..=1.0).contains(&outcome.p_value()));
    /// assert!(!outcome.is_asymptotic());
    /// ```
    pub fn xi_correlation<X, Y>(x: &X, y: &Y, options: &XiOptions) -> XiResult<Self>
    where
        X: ArrayLike + ?Sized,
        Y: ArrayLike + ?Sized,
    {
        let sample = validate_pair(x, y)?;
        let n = sample.n();
        let ties = options.ties;
        debug!(n, ties = ties.is_ties(), "computing xi correlation");
        if !is_asymptotic(n) {
            debug!(n, "sample below asymptotic regime; p-value is heuristic");
        }

        let y_sorted = y_sorted_by_x(&sample);
        let xi = xi_statistic(&y_sorted, ties);
        if !xi.is_finite() {
            warn!(n, xi, "xi correlation is not finite");
        }
        let p_value = significance::p_value(xi, n);
        debug!(xi, p_value, "xi correlation computed");

        Ok(XiOutcome { xi, p_value, n, ties })
    }

    /// The Xi coefficient.
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// One-sided asymptotic p-value of [`xi`](Self::xi).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Number of pairs.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn ties(&self) -> TieMode {
        self.ties
    }

    /// `(xi, p_value)`.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.xi, self.p_value)
    }

    /// Whether `n` is large enough (≥ 20) for the p-value to be reliable.
    pub fn is_asymptotic(&self) -> bool {
        is_asymptotic(self.n)
    }
}

/// Compute the Xi correlation coefficient and its p-value.
///
/// `ties = false` selects the no-ties formula, `true` the ties-adjusted one.
/// See [`XiOutcome::xi_correlation`] for errors and details.
///
/// ```rust
/// use rust_xicorr::xi_correlation::xi_cor_coeff;
///
/// let (xi, p_value) = xi_cor_coeff(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5], false)
///     .unwrap()
///     .as_tuple();
/// assert_eq!(xi, 0.5);
/// assert!(p_value < 0.01);
/// ```
pub fn xi_cor_coeff<X, Y>(x: &X, y: &Y, ties: bool) -> XiResult<XiOutcome>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    XiOutcome::xi_correlation(x, y, &XiOptions::with_ties(ties))
}

/// [`xi_cor_coeff`] with an explicit [`XiOptions`].
pub fn xi_cor_coeff_with<X, Y>(x: &X, y: &Y, options: &XiOptions) -> XiResult<XiOutcome>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    XiOutcome::xi_correlation(x, y, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xi_correlation::errors::{Argument, XiError, XiErrorKind};
    use approx::assert_relative_eq;
    use ndarray::Array1;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The reference values for both formula variants.
    // - Dependence, independence and directionality behavior.
    // - Stable tie-breaking on duplicated `x`.
    // - Error propagation from validation.
    // - p-value range and finiteness as properties over random inputs.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Reproduce the reference value exactly.
    //
    // Given
    // -----
    // - x = y = [1, 2, 3, 4, 5], ties = false.
    //
    // Expect
    // ------
    // - ξ = 0.5 exactly, n = 5, tie mode NoTies.
    fn identical_five_point_sequences_give_one_half() {
        // Arrange
        let x = [1, 2, 3, 4, 5];

        // Act
        let outcome = xi_cor_coeff(&x, &x, false).unwrap();

        // Assert
        assert_eq!(outcome.xi(), 0.5);
        assert_eq!(outcome.n(), 5);
        assert_eq!(outcome.ties(), TieMode::NoTies);
        assert_relative_eq!(outcome.p_value(), 0.002594303776157786, max_relative = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Check the ties-adjusted variant on the same input.
    //
    // Given
    // -----
    // - x = y = [1, 2, 3, 4, 5], ties = true.
    //
    // Expect
    // ------
    // - ξ = 1 − 20/120 = 5/6.
    fn identical_five_point_sequences_ties_mode() {
        // Act
        let outcome = xi_cor_coeff(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5], true).unwrap();

        // Assert
        assert_relative_eq!(outcome.xi(), 5.0 / 6.0, epsilon = 1e-15);
        assert_eq!(outcome.ties(), TieMode::Ties);
    }

    #[test]
    // Purpose
    // -------
    // ξ approaches 1 under exact functional (even non-monotone) dependence.
    //
    // Given
    // -----
    // - x = 0..n on a grid, y = sin(x) with n = 2000 (oscillating).
    //
    // Expect
    // ------
    // - ξ > 0.95 and a vanishing p-value.
    fn functional_dependence_drives_xi_towards_one() {
        // Arrange
        let n = 2_000;
        let x: Array1<f64> = Array1::linspace(0.0, 20.0, n);
        let y: Array1<f64> = x.mapv(f64::sin);

        // Act
        let outcome = xi_cor_coeff(&x, &y, false).unwrap();

        // Assert
        assert!(outcome.xi() > 0.95, "expected xi near 1, got {}", outcome.xi());
        assert!(outcome.p_value() < 1e-10);
        assert!(outcome.is_asymptotic());
    }

    #[test]
    // Purpose
    // -------
    // ξ concentrates near 0 when y is noise unrelated to x.
    //
    // Given
    // -----
    // - x = 0..n, y i.i.d. uniform from a seeded RNG, n = 5000.
    //
    // Expect
    // ------
    // - |ξ| < 0.05 (about 9 null standard deviations of slack).
    fn independent_noise_gives_xi_near_zero() {
        // Arrange
        let n = 5_000;
        let mut rng = StdRng::seed_from_u64(7);
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..n).map(|_| rng.r#gen::<f64>()).collect();

        // Act
        let outcome = xi_cor_coeff(&x, &y, false).unwrap();

        // Assert
        assert!(outcome.xi().abs() < 0.05, "expected xi near 0, got {}", outcome.xi());
    }

    #[test]
    // Purpose
    // -------
    // The statistic is directional: swapping x and y changes the result.
    //
    // Given
    // -----
    // - x on a symmetric grid, y = x² (y is a function of x, not vice versa).
    //
    // Expect
    // ------
    // - xi(x, y) is close to 1 and clearly larger than xi(y, x).
    fn swapping_arguments_changes_xi() {
        // Arrange
        let x: Vec<f64> = (-50..=50).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();

        // Act
        let forward = xi_cor_coeff(&x, &y, false).unwrap();
        let backward = xi_cor_coeff(&y, &x, false).unwrap();

        // Assert
        assert!(forward.xi() > 0.9, "forward xi should be near 1, got {}", forward.xi());
        assert!(
            forward.xi() - backward.xi() > 0.3,
            "expected asymmetry, got forward {} vs backward {}",
            forward.xi(),
            backward.xi()
        );
    }

    #[test]
    // Purpose
    // -------
    // Duplicated x values are ordered by original position, so the result is
    // reproducible and depends on that order.
    //
    // Given
    // -----
    // - x = [1, 1, 2, 2], y = [1, 2, 3, 4] and y' = [2, 1, 4, 3] (tied pairs
    //   swapped).
    //
    // Expect
    // ------
    // - y in original order: ranks [1, 2, 3, 4], ξ = 1 − 9/15 = 0.4.
    // - y': ranks [2, 1, 4, 3], S = 5, ξ = 1 − 15/15 = 0.
    // - Repeated calls return identical outcomes.
    fn duplicated_x_uses_stable_order() {
        // Arrange
        let x = [1.0, 1.0, 2.0, 2.0];

        // Act
        let ordered = xi_cor_coeff(&x, &[1.0, 2.0, 3.0, 4.0], false).unwrap();
        let swapped = xi_cor_coeff(&x, &[2.0, 1.0, 4.0, 3.0], false).unwrap();
        let again = xi_cor_coeff(&x, &[2.0, 1.0, 4.0, 3.0], false).unwrap();

        // Assert
        assert_relative_eq!(ordered.xi(), 0.4, epsilon = 1e-15);
        assert_relative_eq!(swapped.xi(), 0.0, epsilon = 1e-15);
        assert_eq!(swapped, again);
    }

    #[test]
    // Purpose
    // -------
    // Validation errors surface unchanged through the entry point.
    //
    // Given
    // -----
    // - ([1], [2]), ([1, 2, 3], [1, 2]) and (5, [1, 2]).
    //
    // Expect
    // ------
    // - InsufficientLength(x), SizeMismatch(3, 2), NotArrayLike(x).
    fn validation_errors_propagate() {
        // Act
        let short = xi_cor_coeff(&[1], &[2], false);
        let mismatch = xi_cor_coeff(&[1, 2, 3], &[1, 2], false);
        let scalar = xi_cor_coeff(&5, &[1, 2], false);

        // Assert
        let short = short.unwrap_err();
        assert_eq!(short.kind(), XiErrorKind::InvalidArgument);
        assert_eq!(short.argument(), Some(Argument::X));
        assert_eq!(mismatch, Err(XiError::SizeMismatch { x_len: 3, y_len: 2 }));
        assert_eq!(scalar, Err(XiError::NotArrayLike { argument: Argument::X }));
    }

    #[test]
    // Purpose
    // -------
    // Strings pass the array-like check and produce an outcome.
    //
    // Given
    // -----
    // - x = "ab", y = [1, 2].
    //
    // Expect
    // ------
    // - `Ok` with n = 2 and a finite ξ.
    fn string_input_is_accepted() {
        // Act
        let outcome = xi_cor_coeff("ab", &[1, 2], false).unwrap();

        // Assert
        assert_eq!(outcome.n(), 2);
        assert!(outcome.xi().is_finite());
    }

    #[test]
    // Purpose
    // -------
    // The options-based entry point matches the boolean one.
    //
    // Given
    // -----
    // - A tied y series, run through both entry points in ties mode.
    //
    // Expect
    // ------
    // - Identical outcomes.
    fn options_entry_point_matches_flag_entry_point() {
        // Arrange
        let x = [0.3, 0.1, 0.4, 0.1, 0.5, 0.9];
        let y = [2.0, 2.0, 1.0, 3.0, 2.0, 1.0];

        // Act
        let by_flag = xi_cor_coeff(&x, &y, true).unwrap();
        let by_options = xi_cor_coeff_with(&x, &y, &XiOptions::new(TieMode::Ties)).unwrap();

        // Assert
        assert_eq!(by_flag, by_options);
    }

    proptest! {
        #[test]
        // Purpose
        // -------
        // For any valid finite input, ξ is finite and the p-value lies in
        // [0, 1], in both tie modes.
        fn xi_is_finite_and_p_value_in_unit_interval(
            pairs in prop::collection::vec((-1e6f64..1e6, -5i32..5), 2..200),
            ties in any::<bool>(),
        ) {
            let x: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
            let y: Vec<f64> = pairs.iter().map(|(_, y)| f64::from(*y)).collect();

            let outcome = xi_cor_coeff(&x, &y, ties).unwrap();

            prop_assert!(outcome.xi().is_finite());
            prop_assert!((0.0..=1.0).contains(&outcome.p_value()));
        }
    }
}
