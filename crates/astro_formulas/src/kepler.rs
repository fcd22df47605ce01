//! Solutions of Kepler's equation, `E = M + e·sin E`.
//!
//! This module provides:
//! - `kepler1`: Direct fixed-point iteration, adequate for small eccentricity
//! - `kepler2`: Newton's method, converging quickly for `e` up to about 0.99
//! - `kepler3`: Bisection, always converging for `0 <= e < 1`
//! - `true_anomaly` and `radius`: Quantities derived from `E`
//!
//! Iterative solvers stop once successive estimates of `E` (radians) agree
//! to the configured number of decimal places.
//!
//! # Examples
//!
//! ```
//! use astro_core::math::solvers::IterationConfig;
//! use astro_core::types::Angle;
//! use astro_formulas::kepler::kepler2;
//!
//! let ea = kepler2(0.1, Angle::from_deg(5.0), &IterationConfig::new(8, 50)).unwrap();
//! assert!((ea.deg() - 5.554589).abs() < 1e-6);
//! ```

use astro_core::math::solvers::{binary_root, IterationConfig};
use astro_core::types::Angle;
use tracing::debug;

use crate::error::FormulaError;

/// Solves Kepler's equation by iterating `E₁ = M + e·sin E₀`.
///
/// Convergence is slow for eccentricities near 1.
///
/// # Errors
///
/// `FormulaError::Iteration` when `config.max_iterations` is reached first.
pub fn kepler1(e: f64, m: Angle, config: &IterationConfig) -> Result<Angle, FormulaError> {
    let m = m.rad();
    let ea = config
        .iterate_decimal(|ea: f64| m + e * ea.sin(), m)
        .map_err(|err| {
            debug!(e, m, "kepler1 did not converge");
            err
        })?;
    Ok(Angle::from_rad(ea))
}

/// Solves Kepler's equation by Newton's method.
///
/// # Errors
///
/// `FormulaError::Iteration` when `config.max_iterations` is reached first.
pub fn kepler2(e: f64, m: Angle, config: &IterationConfig) -> Result<Angle, FormulaError> {
    let m = m.rad();
    let ea = config
        .iterate_decimal(
            |ea: f64| {
                let (s, c) = ea.sin_cos();
                ea + (m + e * s - ea) / (1.0 - e * c)
            },
            m,
        )
        .map_err(|err| {
            debug!(e, m, "kepler2 did not converge");
            err
        })?;
    Ok(Angle::from_rad(ea))
}

/// Solves Kepler's equation by bisection.
///
/// The root always lies in `[M - e, M + e]`, so no failure is possible.
/// Precision is that of a full `f64` bisection.
pub fn kepler3(e: f64, m: Angle) -> Angle {
    let m = m.rad();
    Angle::from_rad(binary_root(|ea: f64| ea - e * ea.sin() - m, m - e, m + e))
}

/// True anomaly from the eccentric anomaly.
pub fn true_anomaly(e: f64, ea: Angle) -> Angle {
    Angle::from_rad(2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (ea * 0.5).tan()).atan())
}

/// Radius vector from the eccentric anomaly, in the unit of `a`.
pub fn radius(e: f64, ea: Angle, a: f64) -> f64 {
    a * (1.0 - e * ea.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use astro_core::types::IterationError;
    use proptest::prelude::*;

    // ========================================
    // Worked values
    // ========================================

    #[test]
    fn test_kepler1_small_eccentricity() {
        let ea = kepler1(0.1, Angle::from_deg(5.0), &IterationConfig::new(8, 50)).unwrap();
        assert_abs_diff_eq!(ea.deg(), 5.554589, epsilon = 1e-6);
    }

    #[test]
    fn test_kepler1_fails_for_high_eccentricity() {
        let result = kepler1(0.99, Angle::from_deg(2.0), &IterationConfig::new(10, 50));
        assert_eq!(
            result,
            Err(FormulaError::Iteration(
                IterationError::MaxIterationsExceeded { iterations: 50 }
            ))
        );
    }

    #[test]
    fn test_kepler2_high_eccentricity() {
        let ea = kepler2(0.99, Angle::from_deg(2.0), &IterationConfig::new(10, 50)).unwrap();
        assert_abs_diff_eq!(ea.deg(), 32.361007, epsilon = 1e-6);
    }

    #[test]
    fn test_kepler3_matches_newton() {
        let ea = kepler3(0.99, Angle::from_deg(0.2));
        assert_abs_diff_eq!(ea.deg(), 11.786831, epsilon = 1e-6);
    }

    #[test]
    fn test_true_anomaly_and_radius_at_perihelion() {
        assert_eq!(true_anomaly(0.5, Angle::ZERO).rad(), 0.0);
        assert_abs_diff_eq!(radius(0.5, Angle::ZERO, 2.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_true_anomaly_circular_orbit() {
        let ea = Angle::from_deg(40.0);
        assert_abs_diff_eq!(true_anomaly(0.0, ea).deg(), 40.0, epsilon = 1e-12);
    }

    // ========================================
    // Property-Based Tests
    // ========================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn test_kepler3_satisfies_equation(
            e in 0.0..0.999_f64,
            m in -std::f64::consts::PI..std::f64::consts::PI,
        ) {
            let ea = kepler3(e, Angle::from_rad(m)).rad();
            prop_assert!((ea - e * ea.sin() - m).abs() < 1e-12);
        }

        #[test]
        fn test_kepler2_agrees_with_kepler3(
            e in 0.0..0.9_f64,
            m in -std::f64::consts::PI..std::f64::consts::PI,
        ) {
            let newton = kepler2(e, Angle::from_rad(m), &IterationConfig::new(12, 100)).unwrap();
            let bisect = kepler3(e, Angle::from_rad(m));
            prop_assert!((newton.rad() - bisect.rad()).abs() < 1e-10);
        }
    }
}
