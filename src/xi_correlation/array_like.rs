//! xi_correlation::array_like — the structural "array-like" capability.
//!
//! Purpose
//! -------
//! Express the capability set {has-length, supports indexed access} that the
//! Xi routine requires of its inputs, and coerce capable values into flat
//! `f64` buffers.
//!
//! Key behaviors
//! -------------
//! - [`ArrayLike::length`] returns `None` for values without a length
//!   (numeric scalars), which [`is_array_like`] reports as `false`.
//! - Numeric slices, arrays and vectors coerce element-wise with `as f64`.
//! - 1-D `ndarray` arrays and views of `f64` are read as-is.
//! - `str` and `String` are array-like: each `char` is one element and
//!   coerces to its Unicode scalar value. This mirrors the usual
//!   categorical-to-integer encoding for rank statistics.
//!
//! Conventions
//! -----------
//! - References forward to the referent, so `&Vec<f64>`, `&[f64]` and
//!   `&&str` behave like their targets.

use ndarray::{ArrayBase, Data, Ix1};

/// Structural capability required of Xi correlation inputs.
///
/// Implementors report a length and give indexed access to elements as
/// `f64`. Types that are *not* array-like (scalars) still implement the trait
/// and return `None` from [`length`](Self::length), so the check can be made
/// at runtime with a descriptive error.
pub trait ArrayLike {
    /// Number of elements, or `None` when the value has no length.
    fn length(&self) -> Option<usize>;

    /// Element at `index` coerced to `f64`, or `None` when out of range or
    /// not indexable.
    fn element(&self, index: usize) -> Option<f64>;

    /// Copy every element into a flat `f64` buffer.
    ///
    /// Returns `None` when the value is not array-like.
    fn to_values(&self) -> Option<Vec<f64>> {
        let len = self.length()?;
        (0..len).map(|i| self.element(i)).collect()
    }
}

/// `true` iff `value` supports a length query and indexed element access.
pub fn is_array_like<T: ArrayLike + ?Sized>(value: &T) -> bool {
    value.length().is_some()
}

macro_rules! impl_numeric_slice {
    ($($t:ty),* $(,)?) => {
        $(
            impl ArrayLike for [$t] {
                #[inline]
                fn length(&self) -> Option<usize> {
                    Some(self.len())
                }

                #[inline]
                fn element(&self, index: usize) -> Option<f64> {
                    self.get(index).map(|&v| v as f64)
                }

                fn to_values(&self) -> Option<Vec<f64>> {
                    Some(self.iter().map(|&v| v as f64).collect())
                }
            }
        )*
    };
}

impl_numeric_slice!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl ArrayLike for $t {
                #[inline]
                fn length(&self) -> Option<usize> {
                    None
                }

                #[inline]
                fn element(&self, _index: usize) -> Option<f64> {
                    None
                }
            }
        )*
    };
}

impl_scalar!(f64, f32, i32, i64, u32, u64, usize);

impl<T> ArrayLike for Vec<T>
where
    [T]: ArrayLike,
{
    fn length(&self) -> Option<usize> {
        self.as_slice().length()
    }

    fn element(&self, index: usize) -> Option<f64> {
        self.as_slice().element(index)
    }

    fn to_values(&self) -> Option<Vec<f64>> {
        self.as_slice().to_values()
    }
}

impl<T, const N: usize> ArrayLike for [T; N]
where
    [T]: ArrayLike,
{
    fn length(&self) -> Option<usize> {
        self.as_slice().length()
    }

    fn element(&self, index: usize) -> Option<f64> {
        self.as_slice().element(index)
    }

    fn to_values(&self) -> Option<Vec<f64>> {
        self.as_slice().to_values()
    }
}

impl<S> ArrayLike for ArrayBase<S, Ix1>
where
    S: Data<Elem = f64>,
{
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }

    fn element(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }

    fn to_values(&self) -> Option<Vec<f64>> {
        Some(self.iter().copied().collect())
    }
}

impl ArrayLike for str {
    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }

    fn element(&self, index: usize) -> Option<f64> {
        self.chars().nth(index).map(|c| f64::from(u32::from(c)))
    }

    fn to_values(&self) -> Option<Vec<f64>> {
        Some(self.chars().map(|c| f64::from(u32::from(c))).collect())
    }
}

impl ArrayLike for String {
    fn length(&self) -> Option<usize> {
        self.as_str().length()
    }

    fn element(&self, index: usize) -> Option<f64> {
        self.as_str().element(index)
    }

    fn to_values(&self) -> Option<Vec<f64>> {
        self.as_str().to_values()
    }
}

impl<A: ArrayLike + ?Sized> ArrayLike for &A {
    fn length(&self) -> Option<usize> {
        (**self).length()
    }

    fn element(&self, index: usize) -> Option<f64> {
        (**self).element(index)
    }

    fn to_values(&self) -> Option<Vec<f64>> {
        (**self).to_values()
    }
}
