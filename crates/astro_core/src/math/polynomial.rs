//! Polynomial evaluation and integer helpers.
//!
//! All polynomial coefficient slices in this crate are in **ascending**
//! order: `coeffs[0]` is the constant term.

use num_traits::Float;

/// Evaluates a polynomial at `x` using Horner's method.
///
/// Coefficients are in ascending order, so `[c0, c1, c2]` evaluates
/// `c0 + c1·x + c2·x²`. An empty slice evaluates to zero.
///
/// # Examples
/// ```
/// use astro_core::math::polynomial::horner;
///
/// // 1 + 2x + 3x² at x = 2
/// assert_eq!(horner(2.0_f64, &[1.0, 2.0, 3.0]), 17.0);
/// ```
#[inline]
pub fn horner<T: Float>(x: T, coeffs: &[T]) -> T {
    coeffs
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

/// Integer division rounding toward negative infinity.
///
/// Calendar formulas depend on floor semantics for negative years, where
/// Rust's `/` would truncate toward zero.
///
/// # Examples
/// ```
/// use astro_core::math::polynomial::floor_div;
///
/// assert_eq!(floor_div(-1, 4), -1);
/// assert_eq!(floor_div(7, 4), 1);
/// ```
#[inline]
pub fn floor_div(x: i64, y: i64) -> i64 {
    let q = x / y;
    if (x % y != 0) && ((x < 0) != (y < 0)) {
        q - 1
    } else {
        q
    }
}
