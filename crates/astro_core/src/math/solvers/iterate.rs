//! Fixed-point iteration to a precision target.

use num_traits::Float;
use tracing::{debug, trace};

use crate::types::IterationError;

/// Rounds allowed to [`fixed_point`] before it reports failure.
pub(crate) const FIXED_POINT_ROUNDS: usize = 50;

/// Relative change below which an estimate counts as converged.
const FULL_PRECISION: f64 = 1e-15;

/// Iterates `better` from `start` until successive estimates differ by less
/// than `10^-places`.
///
/// `better` is an improvement function: given an estimate it returns a
/// better one. The first estimate whose absolute change from its
/// predecessor drops below the threshold is returned.
///
/// # Errors
///
/// Returns [`IterationError::MaxIterationsExceeded`] when `max_iterations`
/// estimates have been computed without meeting the target.
///
/// # Example
///
/// ```
/// use astro_core::math::solvers::decimal_places;
///
/// // Newton step for √2
/// let root = decimal_places(|x: f64| (x + 2.0 / x) / 2.0, 1.0, 6, 20).unwrap();
/// assert!((root - 1.414214).abs() < 1e-6);
/// ```
pub fn decimal_places<T, F>(
    mut better: F,
    start: T,
    places: i32,
    max_iterations: usize,
) -> Result<T, IterationError>
where
    T: Float,
    F: FnMut(T) -> T,
{
    let ten = T::from(10.0).unwrap();
    let threshold = ten.powi(-places);

    let mut current = start;
    for _ in 0..max_iterations {
        let next = better(current);
        if (next - current).abs() < threshold {
            return Ok(next);
        }
        current = next;
    }

    debug!(places, max_iterations, "decimal place iteration did not converge");
    Err(IterationError::MaxIterationsExceeded {
        iterations: max_iterations,
    })
}

/// Iterates `better` from `start` to (nearly) the full precision of `f64`.
///
/// Convergence is a relative change below `1e-15`, about fifteen
/// significant figures. An estimate that reproduces its predecessor exactly
/// is also accepted, so a fixed point at zero converges.
///
/// # Errors
///
/// Returns [`IterationError::MaxIterationsExceeded`] when `max_iterations`
/// estimates have been computed without meeting the target.
///
/// # Example
///
/// ```
/// use astro_core::math::solvers::full_precision;
///
/// let root = full_precision(|x: f64| (x + 2.0 / x) / 2.0, 1.0, 20).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-15);
/// ```
pub fn full_precision<T, F>(mut better: F, start: T, max_iterations: usize) -> Result<T, IterationError>
where
    T: Float,
    F: FnMut(T) -> T,
{
    let mut current = start;
    for _ in 0..max_iterations {
        let next = better(current);
        if converged(current, next) {
            return Ok(next);
        }
        current = next;
    }

    debug!(max_iterations, "full precision iteration did not converge");
    Err(IterationError::MaxIterationsExceeded {
        iterations: max_iterations,
    })
}

/// Outcome of a successful [`fixed_point`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FixedPoint<T> {
    /// Converged estimate.
    pub value: T,
    /// Estimates computed, including the accepted one.
    pub iterations: usize,
}

/// Iterates `f` from `start` for at most [`FIXED_POINT_ROUNDS`] rounds.
///
/// Returns `None` as soon as an estimate is infinite or NaN, or when the
/// rounds run out.
pub(crate) fn fixed_point<T, F>(mut f: F, start: T) -> Option<FixedPoint<T>>
where
    T: Float,
    F: FnMut(T) -> T,
{
    let mut n0 = start;
    for round in 1..=FIXED_POINT_ROUNDS {
        let n1 = f(n0);
        if !n1.is_finite() {
            trace!(round, "fixed point iteration produced a non-finite estimate");
            return None;
        }
        if converged(n0, n1) {
            return Some(FixedPoint {
                value: n1,
                iterations: round,
            });
        }
        n0 = n1;
    }

    trace!(rounds = FIXED_POINT_ROUNDS, "fixed point iteration exhausted its rounds");
    None
}

#[inline]
fn converged<T: Float>(previous: T, next: T) -> bool {
    if next == previous {
        return true;
    }
    let tolerance = T::from(FULL_PRECISION).unwrap();
    ((next - previous) / previous).abs() < tolerance
}
