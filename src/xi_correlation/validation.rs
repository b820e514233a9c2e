//! xi_correlation::validation — input guards for the Xi routine.
//!
//! Purpose
//! -------
//! Centralize the precondition checks on the paired inputs `x` and `y` and
//! coerce validated inputs into the flat numeric representation used by the
//! ranking stage.
//!
//! Key behaviors
//! -------------
//! - Check, in order: `x` is array-like, `y` is array-like, `x` has at least
//!   [`MIN_OBSERVATIONS`] elements, `y` has at least [`MIN_OBSERVATIONS`]
//!   elements, and both lengths agree.
//! - Copy both inputs into owned `Vec<f64>` buffers and reject `NaN`
//!   entries, which cannot be placed in an ascending order.
//!
//! Invariants & assumptions
//! ------------------------
//! - A successfully built [`PairedSample`] always has `x.len() == y.len()`
//!   and `n >= 2`, and contains no `NaN`. Infinite values are kept; they
//!   order like any other value.
//!
//! Conventions
//! -----------
//! - This module performs no ranking or arithmetic; it only checks and
//!   copies.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each error branch of [`validate_pair`], including the
//!   check order, and a simple success path.

use crate::xi_correlation::{
    array_like::ArrayLike,
    errors::{Argument, XiError, XiResult},
};

/// Minimum number of paired observations for the Xi statistic.
pub const MIN_OBSERVATIONS: usize = 2;

/// PairedSample — validated, owned copy of the inputs `x` and `y`.
///
/// Invariants
/// ----------
/// - `x.len() == y.len() >= MIN_OBSERVATIONS`.
/// - No element is `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSample {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PairedSample {
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of pairs.
    pub fn n(&self) -> usize {
        self.x.len()
    }
}

/// Validate the paired inputs and copy them into a [`PairedSample`].
///
/// Parameters
/// ----------
/// - `x`: `&X`
///   Independent variable. Must be array-like with length ≥ 2.
/// - `y`: `&Y`
///   Dependent variable. Must be array-like with length ≥ 2 and the same
///   length as `x`.
///
/// Returns
/// -------
/// `XiResult<PairedSample>`
///   - `Ok(PairedSample)` holding owned `f64` copies of both inputs.
///   - `Err(XiError)` naming the first violated condition.
///
/// Errors
/// ------
/// - `XiError::NotArrayLike { argument }`
///   `x` (checked first) or `y` has no length.
/// - `XiError::InsufficientLength { argument, len, min }`
///   `x` (checked first) or `y` has fewer than [`MIN_OBSERVATIONS`]
///   elements.
/// - `XiError::SizeMismatch { x_len, y_len }`
///   Both inputs are long enough but differ in length.
/// - `XiError::NonFiniteData { argument, index, value }`
///   An element of `x` (checked first) or `y` is `NaN`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_xicorr::xi_correlation::validation::validate_pair;
/// # use rust_xicorr::xi_correlation::errors::XiError;
/// let sample = validate_pair(&[1, 2, 3], &[0.5, 0.1, 0.9]).unwrap();
/// assert_eq!(sample.n(), 3);
///
/// match validate_pair(&[1.0, 2.0, 3.0], &[1.0, 2.0]) {
///     Err(XiError::SizeMismatch { x_len: 3, y_len: 2 }) => (),
///     other => panic!("expected SizeMismatch error, got {other:?}"),
/// }
/// ```
pub fn validate_pair<X, Y>(x: &X, y: &Y) -> XiResult<PairedSample>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    let x_len = x.length().ok_or(XiError::NotArrayLike { argument: Argument::X })?;
    let y_len = y.length().ok_or(XiError::NotArrayLike { argument: Argument::Y })?;

    check_length(Argument::X, x_len)?;
    check_length(Argument::Y, y_len)?;

    if x_len != y_len {
        return Err(XiError::SizeMismatch { x_len, y_len });
    }

    let x = coerce(Argument::X, x)?;
    let y = coerce(Argument::Y, y)?;

    Ok(PairedSample { x, y })
}

#[inline]
fn check_length(argument: Argument, len: usize) -> XiResult<()> {
    if len < MIN_OBSERVATIONS {
        return Err(XiError::InsufficientLength { argument, len, min: MIN_OBSERVATIONS });
    }
    Ok(())
}

fn coerce<A: ArrayLike + ?Sized>(argument: Argument, data: &A) -> XiResult<Vec<f64>> {
    let values = data.to_values().ok_or(XiError::NotArrayLike { argument })?;
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| v.is_nan()) {
        return Err(XiError::NonFiniteData { argument, index, value });
    }
    Ok(values)
}
