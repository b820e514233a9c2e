//! xi_correlation — Chatterjee's Xi rank correlation and its significance.
//!
//! Purpose
//! -------
//! Collect the Xi correlation routine and its supporting infrastructure:
//! the array-like input capability, validation, rank transform, statistic
//! assembly, asymptotic significance and error handling, including the
//! Python bridge for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose the entry points [`xi_cor_coeff`] (boolean tie flag) and
//!   [`xi_cor_coeff_with`] / [`XiOutcome::xi_correlation`] (explicit
//!   [`XiOptions`]).
//! - Accept any [`ArrayLike`] input: numeric slices, arrays and vectors,
//!   1-D `ndarray` arrays and views of `f64`, and strings (by code point).
//!   Numeric scalars implement the trait but are rejected at runtime.
//! - Report validation failures through [`XiError`] / [`XiResult`], split
//!   into invalid-argument and size-mismatch kinds via [`XiErrorKind`].
//!
//! Invariants & assumptions
//! ------------------------
//! - All validation happens before any ranking; the routine either fully
//!   succeeds or fails without doing work.
//! - Every call is pure and stateless. Inputs are copied into local buffers,
//!   so concurrent calls from many threads need no coordination.
//! - Cost is O(n log n), dominated by the index sorts.
//!
//! Conventions
//! -----------
//! - `x` is the independent variable and `y` the dependent one; ξ measures
//!   how much `y` is a function of `x`.
//! - Non-finite results are values, not errors.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_xicorr::xi_correlation::{xi_cor_coeff, XiResult};
//!
//!   fn dependence(x: &[f64], y: &[f64]) -> XiResult<(f64, f64)> {
//!       Ok(xi_cor_coeff(x, y, false)?.as_tuple())
//!   }
//!   # assert!(dependence(&[1.0, 2.0, 3.0], &[3.0, 1.0, 2.0]).is_ok());
//!   ```
//!
//!   and only refers to the submodules directly when matching on
//!   [`XiError`] variants or reusing the ranking helpers.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own stage; [`xi`] tests the
//!   assembled pipeline, including property tests on random inputs.

pub mod array_like;
pub mod errors;
pub mod options;
pub mod ranking;
pub mod significance;
pub mod statistic;
pub mod validation;
pub mod xi;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::array_like::{ArrayLike, is_array_like};
pub use self::errors::{Argument, XiError, XiErrorKind, XiResult};
pub use self::options::{TieMode, XiOptions};
pub use self::validation::{PairedSample, validate_pair};
pub use self::xi::{XiOutcome, xi_cor_coeff, xi_cor_coeff_with};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_xicorr::xi_correlation::prelude::*;
//
// to import the main surface in a single line.

pub mod prelude {
    pub use super::array_like::ArrayLike;
    pub use super::errors::{XiError, XiResult};
    pub use super::options::{TieMode, XiOptions};
    pub use super::xi::{XiOutcome, xi_cor_coeff};
}
