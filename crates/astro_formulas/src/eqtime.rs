//! Equation of time.
//!
//! The equation of time is apparent minus mean solar time, returned as an
//! hour angle. Positive values mean the apparent Sun is ahead of the mean
//! Sun.

use astro_core::math::polynomial::horner;
use astro_core::types::{j2000_century, Angle, HourAngle};

use crate::nutation::mean_obliquity;
use crate::solar;

/// Mean longitude of the Sun, as a polynomial in Julian millennia.
fn mean_longitude(tau: f64) -> Angle {
    Angle::from_deg(horner(
        tau,
        &[
            280.4664567,
            360007.6982779,
            0.03032028,
            1.0 / 49931.0,
            -1.0 / 15300.0,
            -1.0 / 2000000.0,
        ],
    ))
}

/// Equation of time by Smart's series.
///
/// Needs no planetary theory; accuracy is a few seconds of time.
///
/// # Examples
///
/// ```
/// use astro_formulas::eqtime::e_smart;
///
/// // 1992 October 13, 0h TD
/// let e = e_smart(2448908.5);
/// assert!((e.minutes() - 13.711).abs() < 1e-3);
/// ```
pub fn e_smart(jde: f64) -> HourAngle {
    let eps = mean_obliquity(jde);
    let y = (eps * 0.5).tan().powi(2);
    let t = j2000_century(jde);
    let l0 = mean_longitude(t * 0.1);
    let e = solar::eccentricity(t);
    let m = solar::mean_anomaly(t);

    let (s_2l0, c_2l0) = (l0 * 2.0).sin_cos();
    let s_m = m.sin();
    HourAngle::from_rad(
        y * s_2l0 - 2.0 * e * s_m + 4.0 * e * y * s_m * c_2l0
            - y * y * s_2l0 * c_2l0
            - 1.25 * e * e * (m * 2.0).sin(),
    )
}
