//! Low-accuracy solar quantities.
//!
//! Both functions take Julian centuries from J2000 (see
//! [`j2000_century`](astro_core::types::j2000_century)).

use astro_core::math::polynomial::horner;
use astro_core::types::Angle;

/// Mean anomaly of the Sun.
///
/// The result is not reduced to `[0, 2π)`.
pub fn mean_anomaly(t: f64) -> Angle {
    Angle::from_deg(horner(t, &[357.52911, 35999.05029, -0.0001537]))
}

/// Eccentricity of the Earth's orbit.
pub fn eccentricity(t: f64) -> f64 {
    horner(t, &[0.016708634, -0.000042037, -0.0000001267])
}
