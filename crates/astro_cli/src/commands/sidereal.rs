//! Sidereal command implementation
//!
//! Prints Greenwich sidereal time for a Julian day.

use astro_core::types::Time;
use astro_formulas::sidereal;
use serde::Serialize;

use super::{emit, OutputFormat, Render};
use crate::config::CliConfig;
use crate::Result;

/// Sidereal time at Greenwich
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiderealReport {
    pub jd: f64,
    pub apparent: bool,
    pub at_0h: bool,
    /// Sidereal time in seconds, `[0, 86400)`
    pub seconds: f64,
}

impl Render for SiderealReport {
    fn render_text(&self, precision: usize) -> String {
        let (_, h, m, s) = Time::from_sec(self.seconds).to_hms();
        format!(
            "{} sidereal time{}: {}h {:02}m {:.*}s",
            if self.apparent { "Apparent" } else { "Mean" },
            if self.at_0h { " at 0h UT" } else { "" },
            h,
            m,
            precision,
            s
        )
    }
}

/// Compute sidereal time at `jd`
pub fn compute(jd: f64, apparent: bool, at_0h: bool) -> SiderealReport {
    let st = match (apparent, at_0h) {
        (false, false) => sidereal::mean(jd),
        (false, true) => sidereal::mean_0ut(jd),
        (true, false) => sidereal::apparent(jd),
        (true, true) => sidereal::apparent_0ut(jd),
    };

    SiderealReport {
        jd,
        apparent,
        at_0h,
        seconds: st.sec(),
    }
}

/// Run the sidereal command
pub fn run(
    jd: f64,
    apparent: bool,
    at_0h: bool,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    emit(&compute(jd, apparent, at_0h), format, config.output_precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_sidereal_time() {
        let report = compute(2446896.30625, false, false);
        assert_abs_diff_eq!(report.seconds, 8.0 * 3600.0 + 34.0 * 60.0 + 57.0896, epsilon = 1e-3);
        assert_eq!(report.render_text(2), "Mean sidereal time: 8h 34m 57.09s");
    }

    #[test]
    fn test_apparent_at_0h() {
        let report = compute(2446896.30625, true, true);
        assert!(report.render_text(1).starts_with("Apparent sidereal time at 0h UT: 13h 10m 46.1"));
    }
}
