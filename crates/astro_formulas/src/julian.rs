//! Julian day and calendar conversions.
//!
//! Conversions follow the integer formulation of the Julian day algorithm,
//! with floor division throughout so that negative years are handled
//! correctly. Results are not valid before JD 0 (-4712 January 1.5,
//! Julian calendar).
//!
//! # Examples
//!
//! ```
//! use astro_formulas::julian::{calendar_gregorian_to_jd, jd_to_calendar};
//!
//! // Launch of Sputnik 1
//! let jd = calendar_gregorian_to_jd(1957, 10, 4.81);
//! assert!((jd - 2436116.31).abs() < 1e-6);
//!
//! let date = jd_to_calendar(jd);
//! assert_eq!((date.year, date.month), (1957, 10));
//! assert!((date.day - 4.81).abs() < 1e-6);
//! ```

use astro_core::math::polynomial::floor_div;
use astro_core::types::time::MJD_OFFSET;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};

use crate::error::FormulaError;

/// First Julian day number on the Gregorian calendar (1582 October 15).
pub const GREGORIAN_START: i64 = 2299161;

/// A calendar date with a fractional day of month.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    /// Astronomical year (year 0 is 1 BC)
    pub year: i32,
    /// Month, `1..=12`
    pub month: u32,
    /// Day of month including the fraction of the day
    pub day: f64,
}

impl CalendarDate {
    /// Creates a date, checking the month.
    ///
    /// # Errors
    ///
    /// `FormulaError::InvalidMonth` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32, day: f64) -> Result<Self, FormulaError> {
        if !(1..=12).contains(&month) {
            return Err(FormulaError::InvalidMonth { month });
        }
        Ok(Self { year, month, day })
    }

    /// Julian day, reading the date on the Gregorian calendar.
    pub fn to_jd_gregorian(&self) -> f64 {
        calendar_gregorian_to_jd(self.year, self.month, self.day)
    }

    /// Julian day, reading the date on the Julian calendar.
    pub fn to_jd_julian(&self) -> f64 {
        calendar_julian_to_jd(self.year, self.month, self.day)
    }
}

/// Shifts January and February to months 13 and 14 of the previous year.
#[inline]
fn march_based(year: i32, month: u32) -> (i64, i64) {
    let (y, m) = (i64::from(year), i64::from(month));
    if m <= 2 {
        (y - 1, m + 12)
    } else {
        (y, m)
    }
}

/// Converts a Gregorian calendar date to a Julian day.
///
/// Negative years are valid back to JD 0.
pub fn calendar_gregorian_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = march_based(year, month);
    let a = floor_div(y, 100);
    let b = 2 - a + floor_div(a, 4);
    floor_div(36525 * (y + 4716), 100) as f64 + (floor_div(306 * (m + 1), 10) + b) as f64 + day
        - 1524.5
}

/// Converts a Julian calendar date to a Julian day.
///
/// Negative years are valid back to JD 0.
pub fn calendar_julian_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = march_based(year, month);
    floor_div(36525 * (y + 4716), 100) as f64 + floor_div(306 * (m + 1), 10) as f64 + day - 1524.5
}

/// Returns `true` if `year` is a leap year on the Julian calendar.
#[inline]
pub fn leap_year_julian(year: i32) -> bool {
    year.rem_euclid(4) == 0
}

/// Returns `true` if `year` is a leap year on the Gregorian calendar.
#[inline]
pub fn leap_year_gregorian(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Converts a Julian day to a calendar date.
///
/// Days before [`GREGORIAN_START`] are returned on the Julian calendar,
/// later days on the Gregorian calendar.
pub fn jd_to_calendar(jd: f64) -> CalendarDate {
    let (z, f) = split_day(jd);
    let a = if z >= GREGORIAN_START {
        gregorian_correction(z)
    } else {
        z
    };
    calendar_from_day_number(a, f)
}

/// Converts a Julian day to a proleptic Gregorian calendar date.
///
/// The Gregorian calendar is used even before its introduction, matching
/// the convention of `chrono` dates.
pub fn jd_to_calendar_gregorian(jd: f64) -> CalendarDate {
    let (z, f) = split_day(jd);
    calendar_from_day_number(gregorian_correction(z), f)
}

#[inline]
fn split_day(jd: f64) -> (i64, f64) {
    let shifted = jd + 0.5;
    (shifted.trunc() as i64, shifted.fract())
}

#[inline]
fn gregorian_correction(z: i64) -> i64 {
    let alpha = floor_div(z * 100 - 186721625, 3652425);
    z + 1 + alpha - floor_div(alpha, 4)
}

fn calendar_from_day_number(a: i64, f: f64) -> CalendarDate {
    let b = a + 1524;
    let c = floor_div(b * 100 - 12210, 36525);
    let d = floor_div(36525 * c, 100);
    let e = floor_div((b - d) * 10000, 306001);

    let day = (b - d - floor_div(306001 * e, 10000)) as f64 + f;
    let month = if e == 14 || e == 15 { e - 13 } else { e - 1 };
    let year = if month <= 2 { c - 4715 } else { c - 4716 };

    CalendarDate {
        year: year as i32,
        month: month as u32,
        day,
    }
}

/// Converts a UTC date-time to a Julian day.
///
/// `chrono` dates are proleptic Gregorian, so the Gregorian conversion is
/// used for every date.
pub fn datetime_to_jd(dt: DateTime<Utc>) -> f64 {
    let seconds = f64::from(dt.num_seconds_from_midnight()) + f64::from(dt.nanosecond()) * 1e-9;
    let day = f64::from(dt.day()) + seconds / 86400.0;
    calendar_gregorian_to_jd(dt.year(), dt.month(), day)
}

/// Converts a Julian day to a UTC date-time, to the nearest millisecond.
///
/// Returns `None` when the date is outside the range `chrono` represents.
pub fn jd_to_datetime(jd: f64) -> Option<DateTime<Utc>> {
    let date = jd_to_calendar_gregorian(jd);
    let midnight = NaiveDate::from_ymd_opt(date.year, date.month, 1)?.and_hms_opt(0, 0, 0)?;
    let offset = Duration::milliseconds(((date.day - 1.0) * 86_400_000.0).round() as i64);
    let naive = midnight.checked_add_signed(offset)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Converts a Julian day to a Modified Julian day.
#[inline]
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - MJD_OFFSET
}

/// Converts a Modified Julian day to a Julian day.
#[inline]
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + MJD_OFFSET
}

/// Day of the week for a Julian day: 0 is Sunday, 6 is Saturday.
pub fn day_of_week(jd: f64) -> u32 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u32
}

/// Days in the months preceding `month`.
#[inline]
fn whole_months(month: u32, k: u32) -> u32 {
    275 * month / 9 - k * ((month + 9) / 12) - 30
}

#[inline]
fn leap_k(leap: bool) -> u32 {
    if leap {
        1
    } else {
        2
    }
}

/// Day number within the year, January 1 being day 1.
///
/// Not specific to either calendar; the caller says whether the year is a
/// leap year. The day of month is not checked against the month length.
///
/// # Errors
///
/// `FormulaError::InvalidMonth` when `month` is outside `1..=12`.
pub fn day_of_year(month: u32, day: u32, leap: bool) -> Result<u32, FormulaError> {
    if !(1..=12).contains(&month) {
        return Err(FormulaError::InvalidMonth { month });
    }
    Ok(whole_months(month, leap_k(leap)) + day)
}

/// Day number within a Gregorian calendar year.
pub fn day_of_year_gregorian(year: i32, month: u32, day: u32) -> Result<u32, FormulaError> {
    day_of_year(month, day, leap_year_gregorian(year))
}

/// Day number within a Julian calendar year.
pub fn day_of_year_julian(year: i32, month: u32, day: u32) -> Result<u32, FormulaError> {
    day_of_year(month, day, leap_year_julian(year))
}

/// Month and day of month for a day number within the year.
///
/// # Errors
///
/// `FormulaError::InvalidDayOfYear` when `n` is zero or past the end of
/// the year.
pub fn day_of_year_to_calendar(n: u32, leap: bool) -> Result<(u32, u32), FormulaError> {
    let days = if leap { 366 } else { 365 };
    if n == 0 || n > days {
        return Err(FormulaError::InvalidDayOfYear { day: n, leap });
    }
    let k = leap_k(leap);
    let month = if n < 32 {
        1
    } else {
        (900 * (k + n) + 98 * 275) / 27500
    };
    Ok((month, n - whole_months(month, k)))
}
