//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands compute a
//! serialisable report and hand it to [`emit`] for printing.

pub mod calendar;
pub mod eqtime;
pub mod interp;
pub mod jd;
pub mod kepler;
pub mod sidereal;

use clap::ValueEnum;
use serde::Serialize;

use crate::Result;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// A command result that can be printed as text or JSON
pub trait Render: Serialize {
    /// Text rendering with `precision` decimals for computed values
    fn render_text(&self, precision: usize) -> String;
}

/// Render a report in the requested format
pub fn render<R: Render>(report: &R, format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text(precision)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Print a report to stdout in the requested format
pub fn emit<R: Render>(report: &R, format: OutputFormat, precision: usize) -> Result<()> {
    println!("{}", render(report, format, precision)?);
    Ok(())
}
