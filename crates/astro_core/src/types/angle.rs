//! Angle types for astronomical computation.
//!
//! This module provides:
//! - `Angle`: A general angle in radians (longitudes, latitudes, obliquity)
//! - `RightAscension`: An angle in radians, always reduced to `[0, 2π)`
//! - `HourAngle`: An angle in radians measured in the time direction
//!
//! All three are thin `f64` newtypes. Units are radians internally; the
//! constructors and accessors convert to and from degrees, arc seconds and
//! sexagesimal components.
//!
//! # Examples
//!
//! ```
//! use astro_core::types::{Angle, RightAscension};
//!
//! let dec = Angle::from_dms(false, 28, 1, 34.26);
//! assert!((dec.deg() - 28.026183).abs() < 1e-6);
//!
//! let ra = RightAscension::from_hms(7, 45, 18.946);
//! assert!((ra.deg() - 116.328942).abs() < 1e-6);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::time::Time;

const TWO_PI: f64 = 2.0 * PI;

/// An angle in radians.
///
/// No range reduction is applied on construction; use
/// [`Angle::modulo_1`] to reduce to `[0, 2π)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle(f64);

impl Angle {
    /// Zero angle.
    pub const ZERO: Angle = Angle(0.0);

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_rad(rad: f64) -> Self {
        Angle(rad)
    }

    /// Creates an angle from decimal degrees.
    #[inline]
    pub fn from_deg(deg: f64) -> Self {
        Angle(deg.to_radians())
    }

    /// Creates an angle from arc minutes.
    #[inline]
    pub fn from_min(min: f64) -> Self {
        Angle::from_deg(min / 60.0)
    }

    /// Creates an angle from arc seconds.
    #[inline]
    pub fn from_sec(sec: f64) -> Self {
        Angle::from_deg(sec / 3600.0)
    }

    /// Creates an angle from sexagesimal degrees, minutes and seconds.
    ///
    /// The sign is carried separately so that angles such as `-0°30′` can be
    /// expressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use astro_core::types::Angle;
    ///
    /// let a = Angle::from_dms(true, 0, 30, 0.0);
    /// assert!((a.deg() + 0.5).abs() < 1e-12);
    /// ```
    pub fn from_dms(neg: bool, d: i64, m: i64, s: f64) -> Self {
        let deg = (d as f64 * 3600.0 + m as f64 * 60.0 + s) / 3600.0;
        Angle::from_deg(if neg { -deg } else { deg })
    }

    /// Returns the angle in radians.
    #[inline]
    pub const fn rad(self) -> f64 {
        self.0
    }

    /// Returns the angle in decimal degrees.
    #[inline]
    pub fn deg(self) -> f64 {
        self.0.to_degrees()
    }

    /// Returns the angle in arc minutes.
    #[inline]
    pub fn min(self) -> f64 {
        self.deg() * 60.0
    }

    /// Returns the angle in arc seconds.
    #[inline]
    pub fn sec(self) -> f64 {
        self.deg() * 3600.0
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    /// Sine and cosine of the angle, in that order.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }

    /// Absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self {
        Angle(self.0.abs())
    }

    /// Reduces the angle to the range `[0, 2π)`.
    #[inline]
    pub fn modulo_1(self) -> Self {
        Angle(reduce(self.0, TWO_PI))
    }
}

impl Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl Sub for Angle {
    type Output = Angle;

    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        self.0 -= rhs.0;
    }
}

impl Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn div(self, rhs: f64) -> Angle {
        Angle(self.0 / rhs)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (neg, d, m, s) = split_sexagesimal(self.deg());
        write!(f, "{}{}°{:02}′{:06.3}″", if neg { "-" } else { "" }, d, m, s)
    }
}

/// Right ascension, in radians, reduced to `[0, 2π)`.
///
/// # Examples
///
/// ```
/// use astro_core::types::RightAscension;
///
/// let ra = RightAscension::from_hours(25.0);
/// assert!((ra.hours() - 1.0).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RightAscension(f64);

impl RightAscension {
    /// Creates a right ascension from radians, reducing to `[0, 2π)`.
    #[inline]
    pub fn from_rad(rad: f64) -> Self {
        RightAscension(reduce(rad, TWO_PI))
    }

    /// Creates a right ascension from decimal hours.
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        RightAscension::from_rad(hours * PI / 12.0)
    }

    /// Creates a right ascension from hours, minutes and seconds of time.
    pub fn from_hms(h: i64, m: i64, s: f64) -> Self {
        RightAscension::from_hours((h as f64 * 3600.0 + m as f64 * 60.0 + s) / 3600.0)
    }

    /// Returns the right ascension in radians.
    #[inline]
    pub const fn rad(self) -> f64 {
        self.0
    }

    /// Returns the right ascension in decimal hours.
    #[inline]
    pub fn hours(self) -> f64 {
        self.0 * 12.0 / PI
    }

    /// Returns the right ascension in decimal degrees.
    #[inline]
    pub fn deg(self) -> f64 {
        self.0.to_degrees()
    }

    /// Returns the right ascension as a general angle.
    #[inline]
    pub fn angle(self) -> Angle {
        Angle(self.0)
    }

    /// Returns the right ascension as time (seconds).
    #[inline]
    pub fn time(self) -> Time {
        Time::from_rad(self.0)
    }

    /// Sine and cosine, in that order.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

impl fmt::Display for RightAscension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (_, h, m, s) = split_sexagesimal(self.hours());
        write!(f, "{}ʰ{:02}ᵐ{:06.3}ˢ", h, m, s)
    }
}

/// Hour angle, in radians.
///
/// Used for quantities measured in the direction of time, such as the
/// equation of time and nutation in right ascension.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HourAngle(f64);

impl HourAngle {
    /// Creates an hour angle from radians.
    #[inline]
    pub const fn from_rad(rad: f64) -> Self {
        HourAngle(rad)
    }

    /// Creates an hour angle from sexagesimal hours, minutes and seconds.
    pub fn from_hms(neg: bool, h: i64, m: i64, s: f64) -> Self {
        let hours = (h as f64 * 3600.0 + m as f64 * 60.0 + s) / 3600.0;
        HourAngle((if neg { -hours } else { hours }) * PI / 12.0)
    }

    /// Returns the hour angle in radians.
    #[inline]
    pub const fn rad(self) -> f64 {
        self.0
    }

    /// Returns the hour angle in decimal hours.
    #[inline]
    pub fn hours(self) -> f64 {
        self.0 * 12.0 / PI
    }

    /// Returns the hour angle in minutes of time.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.hours() * 60.0
    }

    /// Returns the hour angle as time (seconds).
    #[inline]
    pub fn time(self) -> Time {
        Time::from_rad(self.0)
    }
}

impl fmt::Display for HourAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (neg, h, m, s) = split_sexagesimal(self.hours());
        write!(f, "{}{}ʰ{:02}ᵐ{:06.3}ˢ", if neg { "-" } else { "" }, h, m, s)
    }
}

/// Reduces `x` to `[0, period)`.
///
/// `rem_euclid` can round up to exactly `period` for tiny negative inputs;
/// that case folds back to zero.
#[inline]
pub(crate) fn reduce(x: f64, period: f64) -> f64 {
    let r = x.rem_euclid(period);
    if r >= period {
        0.0
    } else {
        r
    }
}

/// Splits a decimal value into sign, whole units, minutes and seconds.
pub(crate) fn split_sexagesimal(value: f64) -> (bool, i64, i64, f64) {
    let neg = value < 0.0;
    let total = value.abs() * 3600.0;
    let units = (total / 3600.0).floor();
    let rem = total - units * 3600.0;
    let minutes = (rem / 60.0).floor();
    let seconds = rem - minutes * 60.0;
    (neg, units as i64, minutes as i64, seconds)
}
