//! Eqtime command implementation
//!
//! Prints the equation of time for a Julian ephemeris day.

use astro_formulas::eqtime::e_smart;
use serde::Serialize;

use super::{emit, OutputFormat, Render};
use crate::config::CliConfig;
use crate::Result;

/// Equation of time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EqTimeReport {
    pub jde: f64,
    /// Apparent minus mean solar time, minutes
    pub minutes: f64,
}

impl Render for EqTimeReport {
    fn render_text(&self, precision: usize) -> String {
        format!("Equation of time: {:+.*} min", precision, self.minutes)
    }
}

/// Compute the equation of time at `jde`
pub fn compute(jde: f64) -> EqTimeReport {
    EqTimeReport {
        jde,
        minutes: e_smart(jde).minutes(),
    }
}

/// Run the eqtime command
pub fn run(jde: f64, config: &CliConfig, format: OutputFormat) -> Result<()> {
    emit(&compute(jde), format, config.output_precision)
}
