//! Jd command implementation
//!
//! Converts a calendar date to a Julian day.

use astro_formulas::julian::{self, CalendarDate};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::{emit, OutputFormat, Render};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Calendar used to read a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    Gregorian,
    Julian,
}

/// Julian day of a date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JdReport {
    pub jd: f64,
    pub mjd: f64,
    pub calendar: Calendar,
}

impl Render for JdReport {
    fn render_text(&self, precision: usize) -> String {
        format!(
            "JD  {:.*}\nMJD {:.*}",
            precision, self.jd, precision, self.mjd
        )
    }
}

/// Compute the Julian day for a date, or for the current instant when no
/// date is given
pub fn compute(
    year: Option<i32>,
    month: Option<u32>,
    day: Option<f64>,
    julian_calendar: bool,
) -> Result<JdReport> {
    let calendar = if julian_calendar {
        Calendar::Julian
    } else {
        Calendar::Gregorian
    };

    let jd = match (year, month, day) {
        (Some(year), Some(month), Some(day)) => {
            let date = CalendarDate::new(year, month, day)?;
            match calendar {
                Calendar::Gregorian => date.to_jd_gregorian(),
                Calendar::Julian => date.to_jd_julian(),
            }
        }
        (None, None, None) => {
            if julian_calendar {
                return Err(CliError::invalid_argument(
                    "--julian needs an explicit date",
                ));
            }
            julian::datetime_to_jd(Utc::now())
        }
        _ => {
            return Err(CliError::invalid_argument(
                "give year, month and day together, or none for the current time",
            ))
        }
    };

    Ok(JdReport {
        jd,
        mjd: julian::jd_to_mjd(jd),
        calendar,
    })
}

/// Run the jd command
pub fn run(
    year: Option<i32>,
    month: Option<u32>,
    day: Option<f64>,
    julian_calendar: bool,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let report = compute(year, month, day, julian_calendar)?;
    info!(jd = report.jd, calendar = ?report.calendar, "converted calendar date");
    emit(&report, format, config.output_precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gregorian_date() {
        let report = compute(Some(1957), Some(10), Some(4.81), false).unwrap();
        assert_abs_diff_eq!(report.jd, 2436116.31, epsilon = 1e-6);
        assert_abs_diff_eq!(report.mjd, 36115.81, epsilon = 1e-6);
        assert_eq!(report.calendar, Calendar::Gregorian);
    }

    #[test]
    fn test_julian_date() {
        let report = compute(Some(333), Some(1), Some(27.5), true).unwrap();
        assert_abs_diff_eq!(report.jd, 1842713.0, epsilon = 1e-9);
    }

    #[test]
    fn test_now_is_after_2020() {
        let report = compute(None, None, None, false).unwrap();
        assert!(report.jd > 2458849.5);
    }

    #[test]
    fn test_partial_date_rejected() {
        let result = compute(Some(2000), None, Some(1.0), false);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_month_rejected() {
        let result = compute(Some(2000), Some(13), Some(1.0), false);
        assert!(matches!(result, Err(CliError::Formula(_))));
    }

    #[test]
    fn test_render_text() {
        let report = compute(Some(2000), Some(1), Some(1.5), false).unwrap();
        assert_eq!(report.render_text(1), "JD  2451545.0\nMJD 51544.5");
    }
}
