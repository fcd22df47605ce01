//! Three-row equally spaced interpolation table.

use super::traits::{EquallySpacedTable, ZeroStrategy};
use crate::math::solvers::iterate::{fixed_point, FixedPoint};
use crate::types::InterpolationError;
use num_traits::Float;
use tracing::{debug, trace};

/// Second difference interpolation over three equally spaced rows.
///
/// Only the first and last abscissae are stored; the middle one is
/// implicit. The interpolating polynomial is the parabola through the three
/// samples, written in the interpolating factor `n ∈ [-1, 1]` with `n = 0`
/// at the middle row.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use astro_core::math::interpolators::{EquallySpacedTable, Len3};
///
/// // Distance of Mars from Earth, 1992 November 7-9
/// let table = Len3::<f64>::new(7.0, 9.0, &[0.884226, 0.877366, 0.870531]).unwrap();
///
/// // 1992 November 8 at 4h21m
/// let y = table.interpolate_x(8.0 + (4.0 + 21.0 / 60.0) / 24.0);
/// assert!((y - 0.876125).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Len3<T: Float> {
    x1: T,
    x3: T,
    y: [T; 3],
    /// First differences
    a: T,
    b: T,
    /// Second difference
    c: T,
    ab_sum: T,
    x_sum: T,
    x_diff: T,
}

impl<T: Float> Len3<T> {
    /// Builds a table from three rows of equally spaced samples.
    ///
    /// # Arguments
    ///
    /// * `x1` - Abscissa of the first row
    /// * `x3` - Abscissa of the last row
    /// * `y` - Exactly three ordinates, copied into the table
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidSampleCount)` - `y.len() != 3`
    /// * `Err(InterpolationError::DegenerateAbscissae)` - `x1 == x3`
    ///
    /// # Example
    ///
    /// ```
    /// use astro_core::math::interpolators::Len3;
    /// use astro_core::types::InterpolationError;
    ///
    /// assert!(Len3::new(0.0, 2.0, &[1.0, 2.0, 3.0]).is_ok());
    /// assert_eq!(
    ///     Len3::new(1.0, 1.0, &[1.0, 2.0, 3.0]),
    ///     Err(InterpolationError::DegenerateAbscissae)
    /// );
    /// ```
    pub fn new(x1: T, x3: T, y: &[T]) -> Result<Self, InterpolationError> {
        let y: [T; 3] = y
            .try_into()
            .map_err(|_| InterpolationError::InvalidSampleCount {
                got: y.len(),
                need: 3,
            })?;
        if x3 == x1 {
            return Err(InterpolationError::DegenerateAbscissae);
        }

        let a = y[1] - y[0];
        let b = y[2] - y[1];
        let c = b - a;

        Ok(Self {
            x1,
            x3,
            y,
            a,
            b,
            c,
            ab_sum: a + b,
            x_sum: x3 + x1,
            x_diff: x3 - x1,
        })
    }

    /// Builds a table from the three rows of a longer table nearest to `x`.
    ///
    /// `y` holds all ordinates of an equally spaced table running from `x1`
    /// to `xn`. The window is centred on the row closest to `x` and clamped
    /// so it never runs past either end. Tables of exactly three rows are
    /// used as they are.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidSampleCount)` - Fewer than three rows
    /// * `Err(InterpolationError::DegenerateAbscissae)` - `x1 == xn`
    ///
    /// # Example
    ///
    /// ```
    /// use astro_core::math::interpolators::{EquallySpacedTable, Len3};
    ///
    /// // y = x² tabulated at x = 0, 1, ..., 5
    /// let ys = [0.0_f64, 1.0, 4.0, 9.0, 16.0, 25.0];
    /// let table = Len3::for_interpolate_x(3.2, 0.0, 5.0, &ys).unwrap();
    /// assert_eq!(table.domain(), (2.0, 4.0));
    /// assert!((table.interpolate_x(3.2) - 10.24).abs() < 1e-12);
    /// ```
    pub fn for_interpolate_x(x: T, x1: T, xn: T, y: &[T]) -> Result<Self, InterpolationError> {
        if y.len() <= 3 {
            return Self::new(x1, xn, y);
        }

        let rows = T::from(y.len() - 1).unwrap();
        let interval = (xn - x1) / rows;
        if interval == T::zero() {
            return Err(InterpolationError::DegenerateAbscissae);
        }

        let half = T::from(0.5).unwrap();
        let last_centre = y.len() - 2;
        // Clamp before the cast; NaN lands on the first window
        let nearest = ((x - x1) / interval + half)
            .floor()
            .max(T::one())
            .min(T::from(last_centre).unwrap());
        let centre = nearest.to_usize().unwrap_or(1);
        trace!(rows = y.len(), centre, "selected three-row window");

        let first = x1 + T::from(centre - 1).unwrap() * interval;
        let last = x1 + T::from(centre + 1).unwrap() * interval;
        Self::new(first, last, &y[centre - 1..=centre + 1])
    }

    /// The copied ordinates.
    #[inline]
    pub fn ys(&self) -> &[T; 3] {
        &self.y
    }

    /// First differences `(y1 - y0, y2 - y1)` and the second difference.
    #[inline]
    pub fn differences(&self) -> (T, T, T) {
        (self.a, self.b, self.c)
    }

    /// Runs the zero iteration and reports how many rounds it took.
    pub(crate) fn solve_zero(
        &self,
        strategy: ZeroStrategy,
    ) -> Result<FixedPoint<T>, InterpolationError> {
        let two = T::from(2.0).unwrap();
        let y1 = self.y[1];
        let (ab_sum, c) = (self.ab_sum, self.c);

        let fp = match strategy {
            ZeroStrategy::Fast => fixed_point(|n0| -two * y1 / (ab_sum + c * n0), T::zero()),
            ZeroStrategy::Refined => fixed_point(
                |n0| n0 - (two * y1 + n0 * (ab_sum + c * n0)) / (ab_sum + two * c * n0),
                T::zero(),
            ),
        }
        .ok_or_else(|| {
            debug!(?strategy, "three-row zero search did not converge");
            InterpolationError::NoConvergence
        })?;

        if fp.value < -T::one() || fp.value > T::one() {
            return Err(InterpolationError::ZeroOutsideTable);
        }
        Ok(fp)
    }
}

impl<T: Float> EquallySpacedTable<T> for Len3<T> {
    /// `y1 + n/2 · (a + b + n·c)`
    #[inline]
    fn interpolate_factor(&self, n: T) -> T {
        let half = T::from(0.5).unwrap();
        self.y[1] + n * half * (self.ab_sum + n * self.c)
    }

    #[inline]
    fn factor_at(&self, x: T) -> T {
        let two = T::from(2.0).unwrap();
        (two * x - self.x_sum) / self.x_diff
    }

    #[inline]
    fn x_at(&self, n: T) -> T {
        let half = T::from(0.5).unwrap();
        half * (self.x_sum + self.x_diff * n)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.x1, self.x3)
    }

    /// Vertex of the parabola, in closed form.
    ///
    /// # Errors
    ///
    /// * `NoExtremum` - The second difference is zero
    /// * `ExtremumOutsideTable` - The vertex lies outside `[-1, 1]`
    fn extremum(&self) -> Result<(T, T), InterpolationError> {
        if self.c == T::zero() {
            return Err(InterpolationError::NoExtremum);
        }
        let two = T::from(2.0).unwrap();
        let eight = T::from(8.0).unwrap();

        let n = self.ab_sum / (-two * self.c);
        if n < -T::one() || n > T::one() {
            return Err(InterpolationError::ExtremumOutsideTable);
        }
        let y = self.y[1] - (self.ab_sum * self.ab_sum) / (eight * self.c);
        Ok((self.x_at(n), y))
    }

    fn find_zero(&self, strategy: ZeroStrategy) -> Result<T, InterpolationError> {
        self.solve_zero(strategy).map(|fp| self.x_at(fp.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_valid() {
        let table = Len3::new(7.0, 9.0, &[0.884226, 0.877366, 0.870531]).unwrap();
        assert_eq!(table.domain(), (7.0, 9.0));
        assert_eq!(table.ys(), &[0.884226, 0.877366, 0.870531]);
        let (a, b, c) = table.differences();
        assert_abs_diff_eq!(a, -0.006860, epsilon = 1e-12);
        assert_abs_diff_eq!(b, -0.006835, epsilon = 1e-12);
        assert_abs_diff_eq!(c, 0.000025, epsilon = 1e-12);
    }

    #[test]
    fn test_new_wrong_count() {
        let result = Len3::new(0.0, 2.0, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            result,
            Err(InterpolationError::InvalidSampleCount { got: 4, need: 3 })
        );
        let result = Len3::new(0.0, 2.0, &[1.0, 2.0]);
        assert_eq!(
            result,
            Err(InterpolationError::InvalidSampleCount { got: 2, need: 3 })
        );
    }

    #[test]
    fn test_new_degenerate() {
        let result = Len3::new(5.0, 5.0, &[1.0, 2.0, 3.0]);
        assert_eq!(result, Err(InterpolationError::DegenerateAbscissae));
    }

    #[test]
    fn test_new_copies_samples() {
        let mut ys = vec![1.0, 2.0, 3.0];
        let table = Len3::new(0.0, 2.0, &ys).unwrap();
        ys[1] = 100.0;
        assert_eq!(table.interpolate_factor(0.0), 2.0);
    }

    // ========================================
    // Evaluation Tests
    // ========================================

    #[test]
    fn test_interpolate_x_mars_distance() {
        let table = Len3::new(7.0, 9.0, &[0.884226, 0.877366, 0.870531]).unwrap();
        let x = 8.0 + (4.0 + 21.0 / 60.0) / 24.0;
        assert_abs_diff_eq!(table.interpolate_x(x), 0.876125, epsilon = 1e-6);
    }

    #[test]
    fn test_interpolate_factor_zero_is_middle() {
        let table = Len3::new(-3.0, 11.0, &[0.3, -7.25, 19.0]).unwrap();
        assert_eq!(table.interpolate_factor(0.0), -7.25);
    }

    #[test]
    fn test_interpolate_factor_hits_rows() {
        let table = Len3::new(0.0, 2.0, &[2.0, 3.0, 6.0]).unwrap();
        assert_abs_diff_eq!(table.interpolate_factor(-1.0), 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(table.interpolate_factor(1.0), 6.0, epsilon = 1e-15);
    }

    #[test]
    fn test_interpolate_factor_strict() {
        let table = Len3::new(0.0, 2.0, &[2.0, 3.0, 6.0]).unwrap();
        assert!(table.interpolate_factor_strict(0.5).is_ok());
        assert!(table.interpolate_factor_strict(-1.0).is_ok());
        assert_eq!(
            table.interpolate_factor_strict(1.5),
            Err(InterpolationError::FactorOutOfRange { n: 1.5 })
        );
    }

    #[test]
    fn test_interpolate_x_unchecked_extrapolates() {
        // y = x² sampled at 0, 1, 2
        let table = Len3::new(0.0, 2.0, &[0.0, 1.0, 4.0]).unwrap();
        assert_abs_diff_eq!(table.interpolate_x(5.0), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_x_strict_remaps_error() {
        let table = Len3::new(0.0, 2.0, &[0.0, 1.0, 4.0]).unwrap();
        assert_abs_diff_eq!(
            table.interpolate_x_strict(1.5).unwrap(),
            2.25,
            epsilon = 1e-12
        );
        assert_eq!(
            table.interpolate_x_strict(3.0),
            Err(InterpolationError::AbscissaOutOfRange {
                x: 3.0,
                min: 0.0,
                max: 2.0
            })
        );
    }

    #[test]
    fn test_descending_abscissae() {
        let table = Len3::new(2.0, 0.0, &[4.0, 1.0, 0.0]).unwrap();
        assert_abs_diff_eq!(table.interpolate_x(0.5), 0.25, epsilon = 1e-12);
        match table.interpolate_x_strict(-1.0) {
            Err(InterpolationError::AbscissaOutOfRange { min, max, .. }) => {
                assert_eq!((min, max), (0.0, 2.0));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    // ========================================
    // Extremum Tests
    // ========================================

    #[test]
    fn test_extremum_mars_distance() {
        // Distance of Mars from Earth, 1992 May 12, 16, 20
        let table = Len3::new(12.0, 20.0, &[1.3814294, 1.3812213, 1.3812453]).unwrap();
        let (x, y) = table.extremum().unwrap();
        assert_abs_diff_eq!(x, 17.5864, epsilon = 1e-4);
        assert_abs_diff_eq!(y, 1.3812030, epsilon = 1e-7);
    }

    #[test]
    fn test_extremum_downward_parabola() {
        // y = -(x - 2)² + 5 at x = 1, 2, 3
        let table = Len3::new(1.0, 3.0, &[4.0, 5.0, 4.0]).unwrap();
        let (x, y) = table.extremum().unwrap();
        assert_abs_diff_eq!(x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extremum_linear_table() {
        let table = Len3::new(0.0, 2.0, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(table.extremum(), Err(InterpolationError::NoExtremum));
    }

    #[test]
    fn test_extremum_outside() {
        // y = (x - 10)² sampled at 0, 1, 2
        let table = Len3::new(0.0, 2.0, &[100.0, 81.0, 64.0]).unwrap();
        assert_eq!(
            table.extremum(),
            Err(InterpolationError::ExtremumOutsideTable)
        );
    }

    // ========================================
    // Zero Tests
    // ========================================

    #[test]
    fn test_find_zero_declination() {
        // Declination of Mercury, 1973 February 26-28, in arcseconds
        let table = Len3::new(26.0, 28.0, &[-1693.4, 406.3, 2303.2]).unwrap();
        let fast = table.find_zero(ZeroStrategy::Fast).unwrap();
        let refined = table.find_zero(ZeroStrategy::Refined).unwrap();
        assert_abs_diff_eq!(fast, 26.79873, epsilon = 1e-5);
        assert_abs_diff_eq!(refined, fast, epsilon = 1e-9);
    }

    #[test]
    fn test_find_zero_steep_curve() {
        let table = Len3::new(-1.0, 1.0, &[-2.0, 3.0, 2.0]).unwrap();
        let x = table.find_zero(ZeroStrategy::Refined).unwrap();
        assert_relative_eq!(x, -0.720759220056, epsilon = 1e-12);
        assert_eq!(
            table.find_zero(ZeroStrategy::Fast),
            Err(InterpolationError::NoConvergence)
        );
    }

    #[test]
    fn test_find_zero_refined_needs_fewer_rounds() {
        let table = Len3::new(0.0, 2.0, &[-1.0, 1.0, 4.0]).unwrap();
        let fast = table.solve_zero(ZeroStrategy::Fast).unwrap();
        let refined = table.solve_zero(ZeroStrategy::Refined).unwrap();
        let expected_n = (17.0_f64.sqrt() - 5.0) / 2.0;
        assert_abs_diff_eq!(fast.value, expected_n, epsilon = 1e-9);
        assert_abs_diff_eq!(refined.value, fast.value, epsilon = 1e-9);
        assert!(refined.iterations <= fast.iterations);
        assert_abs_diff_eq!(
            table.find_zero(ZeroStrategy::Refined).unwrap(),
            1.0 + expected_n,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_find_zero_at_middle_row() {
        let table = Len3::new(0.0, 2.0, &[-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(table.find_zero(ZeroStrategy::Fast), Ok(1.0));
        assert_eq!(table.find_zero(ZeroStrategy::Refined), Ok(1.0));
    }

    #[test]
    fn test_find_zero_outside() {
        // y = x - 10 sampled at 0, 1, 2
        let table = Len3::new(0.0, 2.0, &[-10.0, -9.0, -8.0]).unwrap();
        assert_eq!(
            table.find_zero(ZeroStrategy::Fast),
            Err(InterpolationError::ZeroOutsideTable)
        );
    }

    // ========================================
    // Window Selection Tests
    // ========================================

    #[test]
    fn test_for_interpolate_x_clamps_to_ends() {
        let ys = [0.0, 1.0, 4.0, 9.0, 16.0, 25.0];
        let low = Len3::for_interpolate_x(-3.0, 0.0, 5.0, &ys).unwrap();
        assert_eq!(low.domain(), (0.0, 2.0));
        let high = Len3::for_interpolate_x(40.0, 0.0, 5.0, &ys).unwrap();
        assert_eq!(high.domain(), (3.0, 5.0));
        assert_eq!(high.ys(), &[9.0, 16.0, 25.0]);
    }

    #[test]
    fn test_for_interpolate_x_far_outside_table() {
        let ys = [0.0, 1.0, 4.0, 9.0, 16.0, 25.0];
        let high = Len3::for_interpolate_x(1e30, 0.0, 5.0, &ys).unwrap();
        assert_eq!(high.domain(), (3.0, 5.0));
        let low = Len3::for_interpolate_x(-1e30, 0.0, 5.0, &ys).unwrap();
        assert_eq!(low.domain(), (0.0, 2.0));
        let nan = Len3::for_interpolate_x(f64::NAN, 0.0, 5.0, &ys).unwrap();
        assert_eq!(nan.domain(), (0.0, 2.0));
    }

    #[test]
    fn test_for_interpolate_x_exact_three_rows() {
        let table = Len3::for_interpolate_x(100.0, 0.0, 2.0, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(table.domain(), (0.0, 2.0));
    }

    #[test]
    fn test_for_interpolate_x_errors() {
        assert_eq!(
            Len3::for_interpolate_x(0.0, 0.0, 1.0, &[1.0, 2.0]),
            Err(InterpolationError::InvalidSampleCount { got: 2, need: 3 })
        );
        assert_eq!(
            Len3::for_interpolate_x(0.0, 1.0, 1.0, &[1.0, 2.0, 3.0, 4.0]),
            Err(InterpolationError::DegenerateAbscissae)
        );
    }
}
