//! Five-row equally spaced interpolation table.

use super::traits::{EquallySpacedTable, ZeroStrategy};
use crate::math::polynomial::horner;
use crate::math::solvers::iterate::{fixed_point, FixedPoint};
use crate::types::InterpolationError;
use num_traits::Float;
use tracing::debug;

/// Fourth difference interpolation over five equally spaced rows.
///
/// Differences are named after the classic difference table:
///
/// ```text
/// y0
///      a
/// y1       e
///      b       h
/// y2       f       k
///      c       j
/// y3       g
///      d
/// y4
/// ```
///
/// The interpolating quartic is stored as five coefficients in the factor
/// `n`, which runs over `[-2, 2]` across the table. Strict evaluation is
/// limited to the central half, `[-1, 1]`, where the quartic is most
/// reliable; extremum and zero searches accept the whole table.
///
/// # Example
///
/// ```
/// use astro_core::math::interpolators::{EquallySpacedTable, Len5};
///
/// // Horizontal parallax of the Moon in arcseconds, 1992 February 27.0 to 29.0
/// let table = Len5::<f64>::new(
///     27.0,
///     29.0,
///     &[3276.125, 3264.606, 3255.486, 3248.694, 3244.133],
/// )
/// .unwrap();
///
/// // February 28 at 3h20m
/// let y = table.interpolate_x(28.0 + (3.0 + 20.0 / 60.0) / 24.0);
/// assert!((y - 3253.369).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Len5<T: Float> {
    x1: T,
    x5: T,
    y: [T; 5],
    // first differences either side of y2
    b: T,
    c: T,
    // central second difference
    f: T,
    // third differences
    h: T,
    j: T,
    // fourth difference
    k: T,
    x_sum: T,
    x_diff: T,
    /// Quartic in `n`, ascending
    coeffs: [T; 5],
}

impl<T: Float> Len5<T> {
    /// Builds a table from five rows of equally spaced samples.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidSampleCount)` - `y.len() != 5`
    /// * `Err(InterpolationError::DegenerateAbscissae)` - `x1 == x5`
    pub fn new(x1: T, x5: T, y: &[T]) -> Result<Self, InterpolationError> {
        let y: [T; 5] = y
            .try_into()
            .map_err(|_| InterpolationError::InvalidSampleCount {
                got: y.len(),
                need: 5,
            })?;
        if x5 == x1 {
            return Err(InterpolationError::DegenerateAbscissae);
        }

        let a = y[1] - y[0];
        let b = y[2] - y[1];
        let c = y[3] - y[2];
        let d = y[4] - y[3];

        let e = b - a;
        let f = c - b;
        let g = d - c;

        let h = f - e;
        let j = g - f;

        let k = j - h;

        let two = T::from(2.0).unwrap();
        let twelve = T::from(12.0).unwrap();
        let twenty_four = T::from(24.0).unwrap();
        let coeffs = [
            y[2],
            (b + c) / two - (h + j) / twelve,
            f / two - k / twenty_four,
            (h + j) / twelve,
            k / twenty_four,
        ];

        Ok(Self {
            x1,
            x5,
            y,
            b,
            c,
            f,
            h,
            j,
            k,
            x_sum: x5 + x1,
            x_diff: x5 - x1,
            coeffs,
        })
    }

    /// The copied ordinates.
    #[inline]
    pub fn ys(&self) -> &[T; 5] {
        &self.y
    }

    /// Coefficients of the interpolating quartic in `n`, constant term first.
    #[inline]
    pub fn coefficients(&self) -> &[T; 5] {
        &self.coeffs
    }

    fn in_table(n: T) -> bool {
        let two = T::from(2.0).unwrap();
        n >= -two && n <= two
    }

    /// Runs the zero iteration and reports how many rounds it took.
    pub(crate) fn solve_zero(
        &self,
        strategy: ZeroStrategy,
    ) -> Result<FixedPoint<T>, InterpolationError> {
        let two = T::from(2.0).unwrap();
        let fp = match strategy {
            ZeroStrategy::Fast => {
                let twelve = T::from(12.0).unwrap();
                let num = [
                    T::from(-24.0).unwrap() * self.y[2],
                    T::zero(),
                    self.k - twelve * self.f,
                    -two * (self.h + self.j),
                    -self.k,
                ];
                let den = twelve * (self.b + self.c) - two * (self.h + self.j);
                fixed_point(|n0| horner(n0, &num) / den, T::zero())
            }
            ZeroStrategy::Refined => {
                let p = &self.coeffs;
                let slope = [
                    p[1],
                    two * p[2],
                    T::from(3.0).unwrap() * p[3],
                    T::from(4.0).unwrap() * p[4],
                ];
                fixed_point(|n0| n0 - horner(n0, p) / horner(n0, &slope), T::zero())
            }
        }
        .ok_or_else(|| {
            debug!(?strategy, "five-row zero search did not converge");
            InterpolationError::NoConvergence
        })?;

        if !Self::in_table(fp.value) {
            return Err(InterpolationError::ZeroOutsideTable);
        }
        Ok(fp)
    }
}

impl<T: Float> EquallySpacedTable<T> for Len5<T> {
    #[inline]
    fn interpolate_factor(&self, n: T) -> T {
        horner(n, &self.coeffs)
    }

    #[inline]
    fn factor_at(&self, x: T) -> T {
        let two = T::from(2.0).unwrap();
        let four = T::from(4.0).unwrap();
        (four * x - two * self.x_sum) / self.x_diff
    }

    #[inline]
    fn x_at(&self, n: T) -> T {
        let half = T::from(0.5).unwrap();
        let quarter = T::from(0.25).unwrap();
        half * self.x_sum + quarter * self.x_diff * n
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.x1, self.x5)
    }

    /// Extremum of the quartic, found by fixed-point iteration on its
    /// derivative.
    ///
    /// # Errors
    ///
    /// * `ExtremumOutsideTable` - The iteration denominator `k - 12f` is
    ///   zero, or the extremum lies outside `[-2, 2]`
    /// * `NoConvergence` - The iteration diverged
    fn extremum(&self) -> Result<(T, T), InterpolationError> {
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let six = T::from(6.0).unwrap();
        let twelve = T::from(12.0).unwrap();

        let num = [
            six * (self.b + self.c) - self.h - self.j,
            T::zero(),
            three * (self.h + self.j),
            two * self.k,
        ];
        let den = self.k - twelve * self.f;
        if den == T::zero() {
            return Err(InterpolationError::ExtremumOutsideTable);
        }

        let n0 = fixed_point(|n0| horner(n0, &num) / den, T::zero())
            .ok_or_else(|| {
                debug!("five-row extremum search did not converge");
                InterpolationError::NoConvergence
            })?
            .value;
        if !Self::in_table(n0) {
            return Err(InterpolationError::ExtremumOutsideTable);
        }
        Ok((self.x_at(n0), horner(n0, &self.coeffs)))
    }

    fn find_zero(&self, strategy: ZeroStrategy) -> Result<T, InterpolationError> {
        self.solve_zero(strategy).map(|fp| self.x_at(fp.value))
    }
}
