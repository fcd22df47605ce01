//! Motion in a parabolic orbit around the Sun.

use std::f64::consts::SQRT_2;

use astro_core::types::{Angle, GAUSS_K};

/// Elements of a parabolic orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParabolicElements {
    /// Time of perihelion passage, JDE
    pub time_p: f64,
    /// Perihelion distance, AU
    pub p_dis: f64,
}

impl ParabolicElements {
    /// True anomaly and heliocentric distance (AU) at `jde`.
    ///
    /// Solves Barker's equation `s³ + 3s = W` in closed form, with
    /// `s = tan(ν/2)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use astro_formulas::parabolic::ParabolicElements;
    ///
    /// let orbit = ParabolicElements { time_p: 2450917.9358, p_dis: 1.487469 };
    /// let (nu, r) = orbit.anomaly_distance(2451030.5);
    /// assert!((nu.deg() - 66.78862).abs() < 1e-5);
    /// assert!((r - 2.133911).abs() < 1e-6);
    /// ```
    pub fn anomaly_distance(&self, jde: f64) -> (Angle, f64) {
        let q = self.p_dis;
        let w = 3.0 * GAUSS_K / SQRT_2 * (jde - self.time_p) / q / q.sqrt();
        let g = w * 0.5;
        let y = (g + (g * g + 1.0).sqrt()).cbrt();
        let s = y - 1.0 / y;
        (Angle::from_rad(2.0 * s.atan()), q * (1.0 + s * s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn orbit() -> ParabolicElements {
        ParabolicElements {
            time_p: 2450917.9358,
            p_dis: 1.487469,
        }
    }

    #[test]
    fn test_at_perihelion() {
        let (nu, r) = orbit().anomaly_distance(orbit().time_p);
        assert_abs_diff_eq!(nu.rad(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r, orbit().p_dis, epsilon = 1e-15);
    }

    #[test]
    fn test_after_perihelion() {
        let (nu, r) = orbit().anomaly_distance(2451030.5);
        assert_abs_diff_eq!(nu.deg(), 66.78862, epsilon = 1e-5);
        assert_abs_diff_eq!(r, 2.133911, epsilon = 1e-6);
    }

    #[test]
    fn test_before_perihelion_is_negative_anomaly() {
        let (nu, r) = orbit().anomaly_distance(2450630.5);
        assert_abs_diff_eq!(nu.deg(), -103.13303, epsilon = 1e-5);
        assert_abs_diff_eq!(r, 3.849621, epsilon = 1e-6);
    }

    #[test]
    fn test_barker_equation_holds() {
        for days in [-300.0, -20.0, 5.0, 150.0, 1000.0] {
            let o = orbit();
            let (nu, _) = o.anomaly_distance(o.time_p + days);
            let s = (nu * 0.5).tan();
            let w = 3.0 * GAUSS_K / SQRT_2 * days / o.p_dis.powf(1.5);
            assert_abs_diff_eq!(s * s * s + 3.0 * s, w, epsilon = 1e-9 * (1.0 + w.abs()));
        }
    }
}
