//! Nutation and the obliquity of the ecliptic.
//!
//! This module provides:
//! - `mean_obliquity`: IAU polynomial, valid within a few centuries of J2000
//! - `mean_obliquity_laskar`: Laskar's polynomial, valid over ±10000 years
//! - `nutation`: Nutation in longitude and obliquity from the four-term series
//! - `nutation_in_ra`: Nutation in right ascension (equation of the equinoxes)
//!
//! The nutation series is the abbreviated one, accurate to 0.5″ in Δψ and
//! 0.1″ in Δε.

use astro_core::math::polynomial::horner;
use astro_core::types::{j2000_century, Angle, HourAngle};

/// Mean obliquity of the ecliptic by the IAU 1980 polynomial.
///
/// Error is below 1″ over 2000 years from J2000 and grows quickly beyond.
///
/// # Examples
///
/// ```
/// use astro_formulas::nutation::mean_obliquity;
///
/// // 1987 April 10, 0h TD: ε₀ = 23°26′27.407″
/// let eps = mean_obliquity(2446895.5);
/// assert!((eps.sec() - 84387.407).abs() < 1e-3);
/// ```
pub fn mean_obliquity(jde: f64) -> Angle {
    Angle::from_sec(horner(
        j2000_century(jde),
        &[84381.448, -46.815, -0.00059, 0.001813],
    ))
}

/// Mean obliquity of the ecliptic by Laskar's polynomial.
///
/// Accurate to 0.01″ within 1000 years of J2000 and to a few arc seconds
/// over 10000 years.
pub fn mean_obliquity_laskar(jde: f64) -> Angle {
    // Argument is in units of 10000 Julian years
    let u = j2000_century(jde) * 0.01;
    Angle::from_sec(horner(
        u,
        &[
            84381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79,
            2.45,
        ],
    ))
}

/// Nutation in longitude (Δψ) and obliquity (Δε), in that order.
///
/// Uses the longitude of the Moon's ascending node and the mean longitudes
/// of the Sun and Moon.
pub fn nutation(jde: f64) -> (Angle, Angle) {
    let t = j2000_century(jde);
    let node = Angle::from_deg(horner(
        t,
        &[125.04452, -1934.136261, 0.0020708, 1.0 / 450000.0],
    ));
    let sun = Angle::from_deg(280.4665 + 36000.7698 * t);
    let moon = Angle::from_deg(218.3165 + 481267.8813 * t);

    let (s_node, c_node) = node.sin_cos();
    let (s_2node, c_2node) = (node * 2.0).sin_cos();
    let (s_2sun, c_2sun) = (sun * 2.0).sin_cos();
    let (s_2moon, c_2moon) = (moon * 2.0).sin_cos();

    let d_psi = -17.20 * s_node - 1.32 * s_2sun - 0.23 * s_2moon + 0.21 * s_2node;
    let d_eps = 9.20 * c_node + 0.57 * c_2sun + 0.10 * c_2moon - 0.09 * c_2node;
    (Angle::from_sec(d_psi), Angle::from_sec(d_eps))
}

/// Nutation in right ascension, `Δψ·cos ε`, with ε the true obliquity.
///
/// This is the difference between apparent and mean sidereal time.
pub fn nutation_in_ra(jde: f64) -> HourAngle {
    let (d_psi, d_eps) = nutation(jde);
    let eps = mean_obliquity(jde) + d_eps;
    HourAngle::from_rad(d_psi.rad() * eps.cos())
}
