//! Python-side input helpers for the PyO3 bindings.
//!
//! Python callers may pass numpy arrays, pandas Series, plain sequences or
//! strings. The structural array-like rule is the same as on the Rust side
//! (a length plus indexed access), checked here through `__len__` and
//! `__getitem__` before any conversion.
#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyString};

#[cfg(feature = "python-bindings")]
use crate::xi_correlation::{ArrayLike, XiError, errors::Argument};

/// `true` iff `raw` exposes both `__len__` and `__getitem__`.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn is_py_array_like(raw: &Bound<'_, PyAny>) -> PyResult<bool> {
    Ok(raw.hasattr("__len__")? && raw.hasattr("__getitem__")?)
}

/// Copy a 1-D float64 array-like into an owned buffer.
///
/// Tries, in order: a numpy `float64` array (any stride), an object with
/// `to_numpy()` (pandas), and finally any sequence of floats.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_values(raw: &Bound<'_, PyAny>, argument: Argument) -> PyResult<Vec<f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr.as_array().to_vec());
    }

    if let Ok(obj) = raw.call_method0("to_numpy") {
        if let Ok(series) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(series.as_array().to_vec());
        }
    }

    raw.extract::<Vec<f64>>().map_err(|_| {
        PyTypeError::new_err(format!(
            "argument `{}` must be a 1-D numpy.ndarray, pandas.Series, str, or sequence of float64",
            argument.name()
        ))
    })
}

/// Check both inputs for the array-like capability, then convert them.
///
/// Capability is checked for `x` and `y` before either is converted, so a
/// non-array-like `y` is reported even when `x` would fail conversion.
/// Strings are converted per character by code point.
#[cfg(feature = "python-bindings")]
pub fn extract_xi_pair(
    x: &Bound<'_, PyAny>, y: &Bound<'_, PyAny>,
) -> PyResult<(Vec<f64>, Vec<f64>)> {
    for (raw, argument) in [(x, Argument::X), (y, Argument::Y)] {
        if !is_py_array_like(raw)? {
            return Err(XiError::NotArrayLike { argument }.into());
        }
    }
    Ok((extract_xi_input(x, Argument::X)?, extract_xi_input(y, Argument::Y)?))
}

#[cfg(feature = "python-bindings")]
fn extract_xi_input(raw: &Bound<'_, PyAny>, argument: Argument) -> PyResult<Vec<f64>> {
    if let Ok(text) = raw.downcast::<PyString>() {
        let text = text.to_cow()?;
        let values = ArrayLike::to_values(&*text).ok_or(XiError::NotArrayLike { argument })?;
        return Ok(values);
    }
    extract_f64_values(raw, argument)
}
