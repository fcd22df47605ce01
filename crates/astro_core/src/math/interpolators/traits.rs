//! Common capability of the equally spaced interpolation tables.

use crate::types::InterpolationError;
use num_traits::Float;

/// Estimation step used when iterating towards a zero of a table.
///
/// # Variants
/// - `Fast`: Cheap estimate; works well for gentle curves but can converge
///   slowly or fail on sharply curved tables
/// - `Refined`: Newton-style correction using the derivative of the
///   interpolating polynomial; converges more reliably on steep curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZeroStrategy {
    /// Quick estimate without a derivative term.
    #[default]
    Fast,
    /// Newton-style estimate.
    Refined,
}

/// Interpolation table over equally spaced abscissae.
///
/// Implementors hold a fixed window of samples whose interior abscissae are
/// implicit. Queries are made either by real abscissa `x` or by the
/// interpolating factor `n`, which is the distance from the central row in
/// units of the tabular interval.
///
/// # Required Methods
///
/// - `interpolate_factor`: Evaluate the interpolating polynomial at factor `n`
/// - `factor_at` / `x_at`: Map between abscissa and factor
/// - `domain`: First and last abscissae of the table
/// - `extremum`: Location and value of the extremum
/// - `find_zero`: Abscissa where the polynomial vanishes
///
/// The strict and abscissa-based evaluations are provided in terms of
/// these.
///
/// # Example
///
/// ```
/// use astro_core::math::interpolators::{EquallySpacedTable, Len3};
///
/// let table = Len3::<f64>::new(1.0, 3.0, &[1.0, 4.0, 9.0]).unwrap();
/// assert_eq!(table.domain(), (1.0, 3.0));
/// assert!((table.interpolate_x(2.5) - 6.25).abs() < 1e-12);
/// ```
pub trait EquallySpacedTable<T: Float> {
    /// Evaluate at interpolating factor `n`, without a range check.
    fn interpolate_factor(&self, n: T) -> T;

    /// Interpolating factor corresponding to abscissa `x`.
    fn factor_at(&self, x: T) -> T;

    /// Abscissa corresponding to interpolating factor `n`.
    fn x_at(&self, n: T) -> T;

    /// First and last abscissae the table was built from.
    fn domain(&self) -> (T, T);

    /// Returns `(x, y)` at the extremum of the interpolating polynomial.
    ///
    /// # Errors
    ///
    /// `NoExtremum`, `ExtremumOutsideTable` or `NoConvergence`, depending
    /// on the table.
    fn extremum(&self) -> Result<(T, T), InterpolationError>;

    /// Returns the abscissa where the interpolating polynomial is zero.
    ///
    /// # Errors
    ///
    /// `NoConvergence` when iteration fails, `ZeroOutsideTable` when the
    /// zero lies outside the table.
    fn find_zero(&self, strategy: ZeroStrategy) -> Result<T, InterpolationError>;

    /// Evaluate at interpolating factor `n`, restricted to `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// `FactorOutOfRange` when `n` lies outside `[-1, 1]`.
    fn interpolate_factor_strict(&self, n: T) -> Result<T, InterpolationError> {
        if n < -T::one() || n > T::one() {
            return Err(InterpolationError::FactorOutOfRange {
                n: n.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.interpolate_factor(n))
    }

    /// Evaluate at abscissa `x`, without a range check.
    #[inline]
    fn interpolate_x(&self, x: T) -> T {
        self.interpolate_factor(self.factor_at(x))
    }

    /// Evaluate at abscissa `x`, restricted to factors in `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// `AbscissaOutOfRange` when `x` maps to a factor outside `[-1, 1]`. The
    /// reported bounds are the abscissae at factors `-1` and `1`.
    fn interpolate_x_strict(&self, x: T) -> Result<T, InterpolationError> {
        self.interpolate_factor_strict(self.factor_at(x))
            .map_err(|err| match err {
                InterpolationError::FactorOutOfRange { .. } => {
                    let lo = self.x_at(-T::one());
                    let hi = self.x_at(T::one());
                    InterpolationError::AbscissaOutOfRange {
                        x: x.to_f64().unwrap_or(f64::NAN),
                        min: lo.min(hi).to_f64().unwrap_or(f64::NAN),
                        max: lo.max(hi).to_f64().unwrap_or(f64::NAN),
                    }
                }
                other => other,
            })
    }
}
