//! Interpolation over unequally spaced abscissae.

use crate::types::InterpolationError;
use num_traits::Float;

/// One `(x, y)` row of an unequally spaced table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<T> {
    /// Abscissa
    pub x: T,
    /// Ordinate
    pub y: T,
}

impl<T> Sample<T> {
    /// Creates a sample.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Sample<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Interpolates at `x` through Lagrange's formula.
///
/// Abscissae need not be equally spaced or ordered, but they must be
/// distinct. Repeated abscissae are not detected: the division by zero
/// propagates as an infinite or NaN result.
///
/// # Example
///
/// ```
/// use astro_core::math::interpolators::{lagrange, Sample};
///
/// // sin x at six arguments in degrees
/// let table = [
///     Sample::<f64>::new(29.43, 0.4913598),
///     Sample::new(30.97, 0.5145891),
///     Sample::new(27.69, 0.4646875),
///     Sample::new(28.11, 0.4711658),
///     Sample::new(31.58, 0.5236885),
///     Sample::new(33.05, 0.5453707),
/// ];
/// assert!((lagrange(30.0, &table) - 0.5).abs() < 1e-7);
/// ```
pub fn lagrange<T: Float>(x: T, table: &[Sample<T>]) -> T {
    table
        .iter()
        .enumerate()
        .fold(T::zero(), |sum, (i, si)| {
            let weight = table
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(T::one(), |prod, (_, sj)| prod * (x - sj.x) / (si.x - sj.x));
            sum + si.y * weight
        })
}

/// Builds the interpolating polynomial through `table`.
///
/// Returns `table.len()` coefficients in ascending order (constant term
/// first), suitable for [`horner`](crate::math::polynomial::horner). Each
/// Lagrange basis polynomial is accumulated by repeated multiplication by
/// `(X - xj)`. An empty table yields an empty polynomial.
///
/// # Example
///
/// ```
/// use astro_core::math::interpolators::{lagrange_poly, Sample};
///
/// // y = 1 + 2x + 3x²
/// let table = [Sample::<f64>::new(0.0, 1.0), Sample::new(1.0, 6.0), Sample::new(2.0, 17.0)];
/// let p = lagrange_poly(&table);
/// assert!((p[0] - 1.0).abs() < 1e-12);
/// assert!((p[1] - 2.0).abs() < 1e-12);
/// assert!((p[2] - 3.0).abs() < 1e-12);
/// ```
pub fn lagrange_poly<T: Float>(table: &[Sample<T>]) -> Vec<T> {
    let len = table.len();
    let mut sum = vec![T::zero(); len];
    let mut basis = vec![T::zero(); len];

    for (i, si) in table.iter().enumerate() {
        // basis holds a monic polynomial in its top `degree + 1` slots
        basis.iter_mut().for_each(|c| *c = T::zero());
        basis[len - 1] = T::one();
        let mut low = len - 1;
        let mut den = T::one();

        for (j, sj) in table.iter().enumerate() {
            if j == i {
                continue;
            }
            // multiply by (X - xj), shifting the polynomial down one slot
            basis[low - 1] = basis[low] * -sj.x;
            for k in low..len - 1 {
                basis[k] = basis[k] - basis[k + 1] * sj.x;
            }
            low -= 1;
            den = den * (si.x - sj.x);
        }

        let scale = si.y / den;
        for (acc, &b) in sum.iter_mut().zip(basis.iter()) {
            *acc = *acc + b * scale;
        }
    }
    sum
}

/// Interpolates the value halfway between the two central rows of a
/// four-row equally spaced table.
///
/// # Errors
///
/// `InvalidSampleCount` unless `y` holds exactly four values.
///
/// # Example
///
/// ```
/// use astro_core::math::interpolators::len4_half;
///
/// // y = x³ at x = 0, 1, 2, 3
/// let mid = len4_half(&[0.0_f64, 1.0, 8.0, 27.0]).unwrap();
/// assert!((mid - 3.375).abs() < 1e-12);
/// ```
pub fn len4_half<T: Float>(y: &[T]) -> Result<T, InterpolationError> {
    let [y0, y1, y2, y3]: [T; 4] = y
        .try_into()
        .map_err(|_| InterpolationError::InvalidSampleCount {
            got: y.len(),
            need: 4,
        })?;
    let nine = T::from(9.0).unwrap();
    let sixteen = T::from(16.0).unwrap();
    Ok((nine * (y1 + y2) - y0 - y3) / sixteen)
}
