//! rust_xicorr — Chatterjee's Xi rank correlation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the Xi correlation routine to Python via the `_rust_xicorr`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing class, function and submodule used by the
//! `rust_xicorr` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`xi_correlation`) as the public crate
//!   surface.
//! - Define the `XiCorrelation` `#[pyclass]`, the `xi_cor_coeff`
//!   `#[pyfunction]` and the `#[pymodule]` initializer.
//! - Register the `xi_correlation` Python submodule under `rust_xicorr` so
//!   that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in `xi_correlation`; this file performs only
//!   FFI glue, input conversion and error mapping.
//! - Python inputs pass the same structural array-like check as Rust inputs
//!   (`__len__` and `__getitem__`) before conversion.
//!
//! Conventions
//! -----------
//! - Invalid-argument errors surface in Python as `ValueError`, size
//!   mismatches as `IndexError`, and unconvertible element types as
//!   `TypeError`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`xi_correlation`] directly and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration tests under `tests/`. The PyO3 layer is
//!   exercised from Python.

pub mod utils;
pub mod xi_correlation;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    utils::extract_xi_pair,
    xi_correlation::{XiOptions, XiOutcome},
};

/// XiCorrelation — Python-facing wrapper for the Xi correlation coefficient.
///
/// Purpose
/// -------
/// Represent the result of one Xi correlation computation when called from
/// Python and forward all computation to [`XiOutcome`].
///
/// Parameters
/// ----------
/// Constructed from Python via `XiCorrelation(x, y, ties=False)`:
/// - `x`, `y`: `&PyAny`
///   Array-like inputs (numpy array, pandas Series, sequence or str) of
///   equal length ≥ 2.
/// - `ties`: `bool`
///   Use the ties-adjusted formula when `True`.
///
/// Fields
/// ------
/// - `inner`: [`XiOutcome`]
///   Rust-side outcome backing the getters.
///
/// Notes
/// -----
/// - Native Rust code should call [`XiOutcome::xi_correlation`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_xicorr.xi_correlation", frozen)]
pub struct XiCorrelation {
    inner: XiOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl XiCorrelation {
    #[new]
    #[pyo3(text_signature = "(x, y, /, ties=False)", signature = (x, y, ties = false))]
    pub fn new<'py>(
        x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ties: bool,
    ) -> PyResult<XiCorrelation> {
        let (x, y) = extract_xi_pair(x, y)?;
        let inner = XiOutcome::xi_correlation(&x, &y, &XiOptions::with_ties(ties))?;
        Ok(XiCorrelation { inner })
    }

    /// The Xi correlation coefficient.
    #[getter]
    pub fn xi(&self) -> f64 {
        self.inner.xi()
    }

    /// One-sided asymptotic p-value of `xi`.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    #[getter]
    pub fn n(&self) -> usize {
        self.inner.n()
    }

    #[getter]
    pub fn ties(&self) -> bool {
        self.inner.ties().is_ties()
    }

    /// `True` when n ≥ 20 and the p-value approximation is reliable.
    #[getter]
    pub fn is_asymptotic(&self) -> bool {
        self.inner.is_asymptotic()
    }

    fn __repr__(&self) -> String {
        format!(
            "XiCorrelation(xi={}, pvalue={}, n={}, ties={})",
            self.inner.xi(),
            self.inner.p_value(),
            self.inner.n(),
            if self.inner.ties().is_ties() { "True" } else { "False" }
        )
    }
}

/// Compute the Xi correlation coefficient and p-value, returned as a tuple.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "xi_cor_coeff", signature = (x, y, ties = false))]
pub fn py_xi_cor_coeff<'py>(
    x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ties: bool,
) -> PyResult<(f64, f64)> {
    let (x, y) = extract_xi_pair(x, y)?;
    let outcome = XiOutcome::xi_correlation(&x, &y, &XiOptions::with_ties(ties))?;
    Ok(outcome.as_tuple())
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_xicorr<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let xi_correlation_mod = PyModule::new(_py, "xi_correlation")?;
    xi_correlation(_py, m, &xi_correlation_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_xicorr.xi_correlation", xi_correlation_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn xi_correlation<'py>(
    _py: Python, rust_xicorr: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<XiCorrelation>()?;
    m.add_function(wrap_pyfunction!(py_xi_cor_coeff, m)?)?;
    rust_xicorr.add_submodule(m)?;
    rust_xicorr.add_function(wrap_pyfunction!(py_xi_cor_coeff, rust_xicorr)?)?;
    Ok(())
}
