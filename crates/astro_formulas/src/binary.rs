//! Binary star orbits.
//!
//! Positions follow from the true orbital elements: the mean anomaly comes
//! from [`mean_anomaly`], the eccentric anomaly from one of the
//! [`kepler`](crate::kepler) solvers, and [`position`] projects the orbit
//! onto the sky.

use std::f64::consts::PI;

use astro_core::types::Angle;

/// Orbital elements of a visual binary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryElements {
    /// Period of revolution, mean solar years
    pub period: f64,
    /// Time of periastron, decimal year
    pub t_peri: f64,
    /// Eccentricity of the true orbit
    pub e: f64,
    /// Apparent angular semimajor axis
    pub a: Angle,
    /// Inclination to the plane of the sky
    pub i: Angle,
    /// Position angle of the ascending node
    pub node: Angle,
    /// Longitude of periastron
    pub peri: Angle,
}

impl BinaryElements {
    /// Mean anomaly at decimal year `year`.
    pub fn mean_anomaly(&self, year: f64) -> Angle {
        mean_anomaly(year, self.t_peri, self.period)
    }

    /// Position angle and angular separation for eccentric anomaly `ea`.
    pub fn position(&self, ea: Angle) -> (Angle, Angle) {
        position(self.e, self.a, self.i, self.node, self.peri, ea)
    }

    /// Eccentricity of the apparent orbit.
    pub fn apparent_eccentricity(&self) -> f64 {
        apparent_eccentricity(self.e, self.i, self.peri)
    }
}

/// Mean anomaly at decimal year `year`, reduced to `[0, 2π)`.
///
/// `t_peri` is the time of periastron as a decimal year and `period` the
/// period of revolution in mean solar years.
pub fn mean_anomaly(year: f64, t_peri: f64, period: f64) -> Angle {
    Angle::from_rad(2.0 * PI / period * (year - t_peri)).modulo_1()
}

/// Apparent position angle θ and angular separation ρ, in that order.
///
/// `a` is the angular semimajor axis; ρ comes out in the same unit.
pub fn position(e: f64, a: Angle, i: Angle, node: Angle, peri: Angle, ea: Angle) -> (Angle, Angle) {
    let r = a * (1.0 - e * ea.cos());
    let nu = Angle::from_rad(2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (ea * 0.5).tan()).atan());
    let (s_nw, c_nw) = (nu + peri).sin_cos();
    let num = s_nw * i.cos();
    let theta = (Angle::from_rad(num.atan2(c_nw)) + node).modulo_1();
    let rho = r * (num * num + c_nw * c_nw).sqrt();
    (theta, rho)
}

/// Eccentricity of the apparent (projected) orbit.
pub fn apparent_eccentricity(e: f64, i: Angle, peri: Angle) -> f64 {
    let ci = i.cos();
    let (s_w, c_w) = peri.sin_cos();
    let a = (1.0 - e * e * c_w * c_w) * ci * ci;
    let b = e * e * s_w * c_w * ci;
    let c = 1.0 - e * e * s_w * s_w;
    let d = a - c;
    let sqrt_d = (d * d + 4.0 * b * b).sqrt();
    (2.0 * sqrt_d / (a + c + sqrt_d)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kepler::kepler3;
    use approx::assert_abs_diff_eq;

    // η Coronae Borealis
    fn eta_cor_bor() -> BinaryElements {
        BinaryElements {
            period: 41.623,
            t_peri: 1934.008,
            e: 0.2763,
            a: Angle::from_sec(0.907),
            i: Angle::from_deg(59.025),
            node: Angle::from_deg(23.717),
            peri: Angle::from_deg(219.907),
        }
    }

    #[test]
    fn test_mean_anomaly_1980() {
        let m = eta_cor_bor().mean_anomaly(1980.0);
        assert_abs_diff_eq!(m.deg(), 37.78776, epsilon = 1e-5);
    }

    #[test]
    fn test_position_1980() {
        let orbit = eta_cor_bor();
        let ea = kepler3(orbit.e, orbit.mean_anomaly(1980.0));
        let (theta, rho) = orbit.position(ea);
        assert_abs_diff_eq!(theta.deg(), 318.4, epsilon = 0.05);
        assert_abs_diff_eq!(rho.sec(), 0.411, epsilon = 5e-4);
    }

    #[test]
    fn test_apparent_eccentricity() {
        assert_abs_diff_eq!(eta_cor_bor().apparent_eccentricity(), 0.860, epsilon = 5e-4);
    }

    #[test]
    fn test_face_on_circular_orbit() {
        // Circular orbit seen face on keeps its full radius and true shape
        let (_, rho) = position(
            0.0,
            Angle::from_sec(2.0),
            Angle::ZERO,
            Angle::ZERO,
            Angle::ZERO,
            Angle::from_deg(75.0),
        );
        assert_abs_diff_eq!(rho.sec(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(apparent_eccentricity(0.0, Angle::ZERO, Angle::ZERO), 0.0, epsilon = 1e-12);
    }
}
