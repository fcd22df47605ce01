//! Calendar command implementation
//!
//! Converts a Julian day to a calendar date, weekday and day of year.

use astro_formulas::julian::{self, GREGORIAN_START};
use chrono::SecondsFormat;
use serde::Serialize;
use tracing::debug;

use super::{emit, OutputFormat, Render};
use crate::config::CliConfig;
use crate::Result;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Calendar date of a Julian day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarReport {
    pub jd: f64,
    pub year: i32,
    pub month: u32,
    pub day: f64,
    pub calendar: &'static str,
    pub weekday: &'static str,
    pub day_of_year: u32,
    /// ISO 8601 UTC instant, when representable
    pub utc: Option<String>,
}

impl Render for CalendarReport {
    fn render_text(&self, precision: usize) -> String {
        let mut out = format!(
            "{} {:02} {:.*} ({}, {})\nDay of year {}",
            self.year, self.month, precision, self.day, self.calendar, self.weekday, self.day_of_year
        );
        if let Some(utc) = &self.utc {
            out.push_str(&format!("\nUTC {}", utc));
        }
        out
    }
}

/// Compute the calendar date for `jd`
///
/// Dates before the Gregorian reform are given on the Julian calendar
/// unless `proleptic` is set.
pub fn compute(jd: f64, proleptic: bool) -> Result<CalendarReport> {
    let julian_calendar = !proleptic && jd + 0.5 < GREGORIAN_START as f64;
    let date = if proleptic {
        julian::jd_to_calendar_gregorian(jd)
    } else {
        julian::jd_to_calendar(jd)
    };

    let whole_day = date.day.floor() as u32;
    let day_of_year = if julian_calendar {
        julian::day_of_year_julian(date.year, date.month, whole_day)?
    } else {
        julian::day_of_year_gregorian(date.year, date.month, whole_day)?
    };

    let utc = julian::jd_to_datetime(jd).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true));
    if utc.is_none() {
        debug!(jd, "date outside the range of chrono");
    }

    Ok(CalendarReport {
        jd,
        year: date.year,
        month: date.month,
        day: date.day,
        calendar: if julian_calendar { "julian" } else { "gregorian" },
        weekday: WEEKDAYS[julian::day_of_week(jd) as usize],
        day_of_year,
        utc,
    })
}

/// Run the calendar command
pub fn run(jd: f64, proleptic: bool, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let report = compute(jd, proleptic)?;
    emit(&report, format, config.output_precision)
}
