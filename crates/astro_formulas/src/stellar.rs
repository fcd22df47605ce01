//! Stellar magnitudes.
//!
//! Magnitudes are logarithmic: a difference of 5 magnitudes is a brightness
//! ratio of exactly 100.

use astro_core::types::Angle;

/// Combined magnitude of two stars.
pub fn sum(m1: f64, m2: f64) -> f64 {
    let x = 0.4 * (m2 - m1);
    m2 - 2.5 * (10f64.powf(x) + 1.0).log10()
}

/// Combined magnitude of any number of stars.
///
/// An empty slice has no light and yields positive infinity.
pub fn sum_n(magnitudes: &[f64]) -> f64 {
    let flux: f64 = magnitudes.iter().map(|m| 10f64.powf(-0.4 * m)).sum();
    -2.5 * flux.log10()
}

/// Brightness ratio of star 1 to star 2, given their magnitudes.
pub fn ratio(m1: f64, m2: f64) -> f64 {
    10f64.powf(0.4 * (m2 - m1))
}

/// Magnitude difference corresponding to a brightness ratio.
pub fn difference(ratio: f64) -> f64 {
    2.5 * ratio.log10()
}

/// Absolute magnitude from apparent magnitude `m` and annual parallax.
pub fn absolute_by_parallax(m: f64, parallax: Angle) -> f64 {
    m + 5.0 + 5.0 * parallax.sec().log10()
}

/// Absolute magnitude from apparent magnitude `m` and distance in parsecs.
pub fn absolute_by_distance(m: f64, d: f64) -> f64 {
    m + 5.0 - 5.0 * d.log10()
}
