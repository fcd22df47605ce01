//! Sidereal time at Greenwich.
//!
//! Mean sidereal time uses the IAU 1982 polynomial evaluated at 0h UT,
//! advanced by the ratio of sidereal to solar day for the time elapsed since
//! 0h. Apparent sidereal time adds the nutation in right ascension.
//!
//! All results are reduced to `[0, 86400)` seconds.
//!
//! # Examples
//!
//! ```
//! use astro_formulas::sidereal;
//!
//! // 1987 April 10, 19h21m UT
//! let st = sidereal::mean(2446896.30625);
//! let (_, h, m, s) = st.to_hms();
//! assert_eq!((h, m), (8, 34));
//! assert!((s - 57.0896).abs() < 1e-3);
//! ```

use astro_core::math::polynomial::horner;
use astro_core::types::{j2000_century, Time};

use crate::nutation::nutation_in_ra;

/// Mean sidereal time at 0h UT, in seconds, as a polynomial in Julian
/// centuries from J2000.
const IAU82: [f64; 4] = [24110.54841, 8640184.812866, 0.093104, -0.0000062];

/// Sidereal days per solar day.
pub const SIDEREAL_RATE: f64 = 1.00273790935;

/// Splits a JD into the Julian day of the preceding 0h UT and the fraction
/// of the day since then.
fn split_0ut(jd: f64) -> (f64, f64) {
    let shifted = jd + 0.5;
    let j0 = shifted.floor();
    (j0 - 0.5, shifted - j0)
}

/// Unreduced mean sidereal time at 0h UT, and the elapsed day fraction.
fn mean_0ut_parts(jd: f64) -> (Time, f64) {
    let (jd0, frac) = split_0ut(jd);
    (Time::from_sec(horner(j2000_century(jd0), &IAU82)), frac)
}

/// Mean sidereal time at Greenwich for the given JD.
pub fn mean(jd: f64) -> Time {
    let (s0, frac) = mean_0ut_parts(jd);
    (s0 + Time::from_day(frac * SIDEREAL_RATE)).modulo_1()
}

/// Mean sidereal time at Greenwich at 0h UT of the day containing `jd`.
pub fn mean_0ut(jd: f64) -> Time {
    mean_0ut_parts(jd).0.modulo_1()
}

/// Apparent sidereal time at Greenwich for the given JD.
pub fn apparent(jd: f64) -> Time {
    (mean(jd) + nutation_in_ra(jd).time()).modulo_1()
}

/// Apparent sidereal time at Greenwich at 0h UT of the day containing `jd`.
///
/// Nutation is evaluated at 0h as well.
pub fn apparent_0ut(jd: f64) -> Time {
    let (jd0, _) = split_0ut(jd);
    (mean_0ut(jd) + nutation_in_ra(jd0).time()).modulo_1()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn hms(h: i64, m: i64, s: f64) -> f64 {
        Time::from_hms(false, h, m, s).sec()
    }

    #[test]
    fn test_mean_at_0h() {
        // 1987 April 10, 0h UT
        assert_abs_diff_eq!(mean(2446895.5).sec(), hms(13, 10, 46.3668), epsilon = 1e-3);
    }

    #[test]
    fn test_mean_during_day() {
        // 1987 April 10, 19h21m UT
        assert_abs_diff_eq!(mean(2446896.30625).sec(), hms(8, 34, 57.0896), epsilon = 1e-3);
    }

    #[test]
    fn test_mean_0ut_ignores_time_of_day() {
        assert_abs_diff_eq!(
            mean_0ut(2446896.30625).sec(),
            mean(2446895.5).sec(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_apparent() {
        // 13h10m46.1351s from the full nutation series
        assert_abs_diff_eq!(apparent(2446895.5).sec(), hms(13, 10, 46.1351), epsilon = 0.01);
    }

    #[test]
    fn test_apparent_0ut() {
        assert_abs_diff_eq!(
            apparent_0ut(2446896.30625).sec(),
            apparent(2446895.5).sec(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_results_in_one_day() {
        for k in 0..100 {
            let jd = 2400000.5 + k as f64 * 123.37;
            let s = apparent(jd).sec();
            assert!((0.0..86400.0).contains(&s), "{} out of range at {}", s, jd);
        }
    }
}
