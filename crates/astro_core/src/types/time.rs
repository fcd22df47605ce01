//! Time quantities and epoch constants.
//!
//! This module provides:
//! - `Time`: A duration or clock reading in seconds of time
//! - Epoch constants (`J2000`, `JULIAN_CENTURY`, `MJD_OFFSET`)
//! - `j2000_century`: Julian centuries elapsed since J2000.0
//!
//! # Examples
//!
//! ```
//! use astro_core::types::time::{j2000_century, Time};
//!
//! // 1987 April 10, 0h UT (JD 2446895.5)
//! let t = j2000_century(2446895.5);
//! assert!((t + 0.127296372348).abs() < 1e-12);
//!
//! let noon = Time::from_day(0.5);
//! assert_eq!(noon.sec(), 43200.0);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Sub};

use super::angle::{reduce, split_sexagesimal, Angle};

/// Julian day of the J2000.0 epoch (2000 January 1.5 TD).
pub const J2000: f64 = 2451545.0;

/// Days in a Julian century.
pub const JULIAN_CENTURY: f64 = 36525.0;

/// Difference between Julian day and Modified Julian day.
pub const MJD_OFFSET: f64 = 2400000.5;

/// Gaussian gravitational constant (AU^{3/2} / day).
pub const GAUSS_K: f64 = 0.01720209895;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Returns the number of Julian centuries since J2000.0.
///
/// The argument is a Julian ephemeris day (or Julian day, where the
/// distinction does not matter for the caller's precision).
#[inline]
pub fn j2000_century(jde: f64) -> f64 {
    (jde - J2000) / JULIAN_CENTURY
}

/// Time, in seconds.
///
/// Represents either a duration or a time of day. A full day is 86400
/// seconds, which corresponds to a full circle (2π radians) when converting
/// to an angle.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Time(f64);

impl Time {
    /// Creates a time from seconds.
    #[inline]
    pub const fn from_sec(sec: f64) -> Self {
        Time(sec)
    }

    /// Creates a time from a fraction of a day.
    #[inline]
    pub fn from_day(day: f64) -> Self {
        Time(day * SECONDS_PER_DAY)
    }

    /// Creates a time from hours, minutes and seconds.
    pub fn from_hms(neg: bool, h: i64, m: i64, s: f64) -> Self {
        let sec = h as f64 * 3600.0 + m as f64 * 60.0 + s;
        Time(if neg { -sec } else { sec })
    }

    /// Creates a time from an angle, where 2π radians is one day.
    #[inline]
    pub fn from_rad(rad: f64) -> Self {
        Time(rad * SECONDS_PER_DAY / (2.0 * PI))
    }

    /// Returns the time in seconds.
    #[inline]
    pub const fn sec(self) -> f64 {
        self.0
    }

    /// Returns the time in minutes.
    #[inline]
    pub fn min(self) -> f64 {
        self.0 / 60.0
    }

    /// Returns the time in hours.
    #[inline]
    pub fn hours(self) -> f64 {
        self.0 / 3600.0
    }

    /// Returns the time as a fraction of a day.
    #[inline]
    pub fn day(self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }

    /// Returns the time converted to radians, where one day is 2π.
    #[inline]
    pub fn rad(self) -> f64 {
        self.0 * 2.0 * PI / SECONDS_PER_DAY
    }

    /// Returns the time converted to an angle, where one day is 2π.
    #[inline]
    pub fn angle(self) -> Angle {
        Angle::from_rad(self.rad())
    }

    /// Reduces the time to the range `[0, 86400)` seconds.
    #[inline]
    pub fn modulo_1(self) -> Self {
        Time(reduce(self.0, SECONDS_PER_DAY))
    }

    /// Splits the time into sign, hours, minutes and seconds.
    pub fn to_hms(self) -> (bool, i64, i64, f64) {
        split_sexagesimal(self.hours())
    }
}

impl Add for Time {
    type Output = Time;

    #[inline]
    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    #[inline]
    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (neg, h, m, s) = self.to_hms();
        write!(f, "{}{}ʰ{:02}ᵐ{:07.4}ˢ", if neg { "-" } else { "" }, h, m, s)
    }
}
