//! Floating point tolerance shared by every comparison in the unit algebra.

use std::cmp::Ordering;

/// Absolute tolerance under which two magnitudes, lengths or powers are
/// considered equal.
pub const EPSILON: f64 = 1e-15;

/// Three-way comparison of `a` and `b` with an absolute tolerance.
///
/// Returns `Equal` whenever the two lie within `epsilon` of each other.
/// NaN never compares greater or less, so it lands on `Equal`.
pub fn compare_f64(a: f64, b: f64, epsilon: f64) -> Ordering {
    if a - epsilon > b {
        Ordering::Greater
    } else if a + epsilon < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// `true` if `value` is zero within [`EPSILON`].
#[inline]
pub fn is_zero(value: f64) -> bool {
    compare_f64(value, 0.0, EPSILON) == Ordering::Equal
}

/// `true` if `a` and `b` are equal within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    compare_f64(a, b, EPSILON) == Ordering::Equal
}
