//! xi_correlation::errors — error types for the Xi correlation routine.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias returned by the Xi correlation
//! entry points, together with a conversion layer to Python exceptions for
//! the PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`XiResult`] and [`XiError`] as the canonical result and error
//!   types for input validation and option parsing.
//! - Group variants into two caller-facing kinds via [`XiErrorKind`]:
//!   invalid arguments (capability, length, data and option failures) and
//!   size mismatches between `x` and `y`.
//! - Attach `Display` messages that name the offending argument and the
//!   violated condition.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every [`XiError`] is produced before any ranking work starts; there is
//!   no partial-failure mode.
//! - Non-finite *results* (e.g. a zero denominator) are never reported as
//!   errors; they propagate as `f64` values for the caller to inspect.
//!
//! Conventions
//! -----------
//! - Argument names are rendered in backticks (`x`, `y`) to match the
//!   public parameter names of [`xi_cor_coeff`](super::xi::xi_cor_coeff).
//! - At the Python boundary, [`XiErrorKind::InvalidArgument`] maps to
//!   `ValueError` and [`XiErrorKind::SizeMismatch`] maps to `IndexError`.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's message embeds its payload and
//!   that variants are classified into the right [`XiErrorKind`].

use std::fmt;

#[cfg(feature = "python-bindings")]
use pyo3::{
    PyErr,
    exceptions::{PyIndexError, PyValueError},
};

pub type XiResult<T> = Result<T, XiError>;

/// Which of the paired inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    X,
    Y,
}

impl Argument {
    pub fn name(&self) -> &'static str {
        match self {
            Argument::X => "x",
            Argument::Y => "y",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.name())
    }
}

/// Coarse classification of [`XiError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XiErrorKind {
    InvalidArgument,
    SizeMismatch,
}

/// XiError — validation failures for the Xi correlation routine.
///
/// Variants
/// --------
/// - `NotArrayLike { argument }`
///   The input has no notion of length (e.g. a scalar).
/// - `InsufficientLength { argument, len, min }`
///   The input has fewer than `min` elements.
/// - `SizeMismatch { x_len, y_len }`
///   `x` and `y` differ in length.
/// - `NonFiniteData { argument, index, value }`
///   The input holds a `NaN` at `index`, which has no place in an ascending
///   order.
/// - `InvalidTieMode { name }`
///   A tie-mode name could not be parsed.
///
/// Notes
/// -----
/// - Use [`XiError::kind`] to branch on the error category rather than
///   matching every variant.
#[derive(Debug, Clone, PartialEq)]
pub enum XiError {
    // ---- Invalid arguments ----
    NotArrayLike { argument: Argument },
    InsufficientLength { argument: Argument, len: usize, min: usize },
    NonFiniteData { argument: Argument, index: usize, value: f64 },
    InvalidTieMode { name: String },

    // ---- Size mismatch ----
    SizeMismatch { x_len: usize, y_len: usize },
}

impl XiError {
    pub fn kind(&self) -> XiErrorKind {
        match self {
            XiError::SizeMismatch { .. } => XiErrorKind::SizeMismatch,
            XiError::NotArrayLike { .. }
            | XiError::InsufficientLength { .. }
            | XiError::NonFiniteData { .. }
            | XiError::InvalidTieMode { .. } => XiErrorKind::InvalidArgument,
        }
    }

    /// The input the error refers to, if it concerns a single argument.
    pub fn argument(&self) -> Option<Argument> {
        match self {
            XiError::NotArrayLike { argument }
            | XiError::InsufficientLength { argument, .. }
            | XiError::NonFiniteData { argument, .. } => Some(*argument),
            XiError::InvalidTieMode { .. } | XiError::SizeMismatch { .. } => None,
        }
    }
}

impl std::error::Error for XiError {}

impl fmt::Display for XiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XiError::NotArrayLike { argument } => {
                write!(f, "Argument {argument} is not array-like.")
            }
            XiError::InsufficientLength { argument, len, min } => write!(
                f,
                "Length of argument {argument} must be greater than or equal to {min} (got {len})."
            ),
            XiError::NonFiniteData { argument, index, value } => write!(
                f,
                "Argument {argument} holds {value} at index {index}; values must be orderable."
            ),
            XiError::InvalidTieMode { name } => write!(
                f,
                "Invalid tie mode {name:?}. Valid options are case insensitive 'no_ties' or 'ties'."
            ),
            XiError::SizeMismatch { x_len, y_len } => {
                write!(f, "`x` and `y` variables array size mismatch: {x_len}, {y_len}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<XiError> for PyErr {
    fn from(err: XiError) -> PyErr {
        match err.kind() {
            XiErrorKind::InvalidArgument => PyValueError::new_err(err.to_string()),
            XiErrorKind::SizeMismatch => PyIndexError::new_err(err.to_string()),
        }
    }
}
