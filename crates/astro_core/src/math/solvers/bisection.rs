//! Root finding by bisection.

use num_traits::Float;

/// Number of halvings performed by [`binary_root`].
///
/// An `f64` mantissa carries 52 bits, so each halving gains at most one bit
/// of precision.
pub const BISECTION_ROUNDS: usize = 52;

/// Finds a root of `f` between `lower` and `upper` by binary search.
///
/// Performs [`BISECTION_ROUNDS`] halvings, stopping early only when `f`
/// evaluates to exactly zero at a midpoint. The half kept is the one whose
/// lower end changes sign relative to the lower bound, so the bounds may be
/// given in either order. A root must exist between the bounds; otherwise
/// the result is not meaningful.
///
/// Returns the last midpoint evaluated.
///
/// # Example
///
/// ```
/// use astro_core::math::solvers::binary_root;
///
/// let root = binary_root(|x: f64| x * x - 2.0, 0.0, 2.0);
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn binary_root<T, F>(mut f: F, lower: T, upper: T) -> T
where
    T: Float,
    F: FnMut(T) -> T,
{
    let two = T::from(2.0).unwrap();

    let mut lower = lower;
    let mut upper = upper;
    let mut y_lower = f(lower);
    let mut mid = lower;

    for _ in 0..BISECTION_ROUNDS {
        mid = (lower + upper) / two;
        let y_mid = f(mid);
        if y_mid == T::zero() {
            break;
        }
        if y_lower.is_sign_negative() == y_mid.is_sign_negative() {
            lower = mid;
            y_lower = y_mid;
        } else {
            upper = mid;
        }
    }

    mid
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_binary_root_linear() {
        let root = binary_root(|x: f64| x - 3.0, 0.0, 10.0);
        assert_abs_diff_eq!(root, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_binary_root_exact_midpoint() {
        let mut calls = 0;
        let root = binary_root(
            |x: f64| {
                calls += 1;
                x - 5.0
            },
            0.0,
            10.0,
        );
        assert_eq!(root, 5.0);
        // One evaluation at the lower bound, one at the midpoint
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_binary_root_reversed_bounds() {
        let root = binary_root(|x: f64| x * x - 2.0, 2.0, 0.0);
        assert_abs_diff_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_binary_root_decreasing_function() {
        let root = binary_root(|x: f64| 1.0 - x.exp(), -1.0, 2.0);
        assert_abs_diff_eq!(root, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_binary_root_kepler_equation() {
        // E - e sin E = M, with e = 0.1 and M = 5°
        let e = 0.1_f64;
        let m = 5.0_f64.to_radians();
        let root = binary_root(|ea: f64| ea - e * ea.sin() - m, m - e, m + e);
        assert_abs_diff_eq!(root.to_degrees(), 5.554589, epsilon = 1e-6);
    }

    #[test]
    fn test_binary_root_performs_all_rounds() {
        let mut calls = 0;
        let _ = binary_root(
            |x: f64| {
                calls += 1;
                x - 1.0 / 3.0
            },
            0.0,
            1.0,
        );
        assert_eq!(calls, BISECTION_ROUNDS + 1);
    }
}
