//! Interpolation command implementations
//!
//! Builds a three- or five-row equally spaced table from the command line
//! and evaluates it, locates its extremum, or locates its zero.

use astro_core::math::interpolators::{EquallySpacedTable, Len3, Len5, ZeroStrategy};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use super::{emit, OutputFormat, Render};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Table definition shared by the interpolation commands
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Abscissa of the first row
    #[arg(long, allow_hyphen_values = true)]
    pub x1: f64,

    /// Abscissa of the last row
    #[arg(long, visible_aliases = ["x3", "x5"], allow_hyphen_values = true)]
    pub xn: f64,

    /// Comma separated row values
    #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub y: Vec<f64>,
}

/// A table of either supported length
#[derive(Debug)]
pub enum Table {
    Three(Len3<f64>),
    Five(Len5<f64>),
}

impl Table {
    /// Build a table from its first and last abscissae and 3 or 5 rows
    pub fn new(x1: f64, xn: f64, ys: &[f64]) -> Result<Self> {
        match ys.len() {
            3 => Ok(Table::Three(Len3::new(x1, xn, ys)?)),
            5 => Ok(Table::Five(Len5::new(x1, xn, ys)?)),
            n => Err(CliError::invalid_argument(format!(
                "expected 3 or 5 rows, got {}",
                n
            ))),
        }
    }

    /// Number of rows in the table
    pub fn rows(&self) -> usize {
        match self {
            Table::Three(_) => 3,
            Table::Five(_) => 5,
        }
    }

    /// Interpolated value at `x`
    pub fn interpolate(&self, x: f64, strict: bool) -> Result<f64> {
        let y = match (self, strict) {
            (Table::Three(t), false) => t.interpolate_x(x),
            (Table::Five(t), false) => t.interpolate_x(x),
            (Table::Three(t), true) => t.interpolate_x_strict(x)?,
            (Table::Five(t), true) => t.interpolate_x_strict(x)?,
        };
        Ok(y)
    }

    /// Abscissa and value of the extremum
    pub fn extremum(&self) -> Result<(f64, f64)> {
        let found = match self {
            Table::Three(t) => t.extremum()?,
            Table::Five(t) => t.extremum()?,
        };
        Ok(found)
    }

    /// Abscissa of the zero
    pub fn find_zero(&self, strategy: ZeroStrategy) -> Result<f64> {
        let x = match self {
            Table::Three(t) => t.find_zero(strategy)?,
            Table::Five(t) => t.find_zero(strategy)?,
        };
        Ok(x)
    }
}

/// Interpolated value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationReport {
    pub rows: usize,
    pub x: f64,
    pub y: f64,
}

impl Render for InterpolationReport {
    fn render_text(&self, precision: usize) -> String {
        format!("y({}) = {:.*}", self.x, precision, self.y)
    }
}

/// Extremum of a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremumReport {
    pub rows: usize,
    pub x: f64,
    pub y: f64,
}

impl Render for ExtremumReport {
    fn render_text(&self, precision: usize) -> String {
        format!(
            "Extremum at x = {:.*}, y = {:.*}",
            precision, self.x, precision, self.y
        )
    }
}

/// Zero of a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZeroReport {
    pub rows: usize,
    pub strategy: ZeroStrategy,
    pub x: f64,
}

impl Render for ZeroReport {
    fn render_text(&self, precision: usize) -> String {
        format!("Zero at x = {:.*}", precision, self.x)
    }
}

/// Interpolate a table with exactly `rows` rows at `at`
pub fn interpolate(
    rows: usize,
    x1: f64,
    xn: f64,
    ys: &[f64],
    at: f64,
    strict: bool,
) -> Result<InterpolationReport> {
    if ys.len() != rows {
        return Err(CliError::invalid_argument(format!(
            "expected {} rows, got {}",
            rows,
            ys.len()
        )));
    }
    let table = Table::new(x1, xn, ys)?;
    let y = table.interpolate(at, strict)?;
    debug!(rows, at, y, strict, "interpolated table");
    Ok(InterpolationReport { rows, x: at, y })
}

/// Locate the extremum of a 3- or 5-row table
pub fn extremum(x1: f64, xn: f64, ys: &[f64]) -> Result<ExtremumReport> {
    let table = Table::new(x1, xn, ys)?;
    let (x, y) = table.extremum()?;
    Ok(ExtremumReport {
        rows: table.rows(),
        x,
        y,
    })
}

/// Locate the zero of a 3- or 5-row table
pub fn zero(x1: f64, xn: f64, ys: &[f64], refined: bool) -> Result<ZeroReport> {
    let table = Table::new(x1, xn, ys)?;
    let strategy = if refined {
        ZeroStrategy::Refined
    } else {
        ZeroStrategy::Fast
    };
    let x = table.find_zero(strategy)?;
    Ok(ZeroReport {
        rows: table.rows(),
        strategy,
        x,
    })
}

/// Run the interp3 / interp5 commands
pub fn run_interpolate(
    rows: usize,
    table: &TableArgs,
    at: f64,
    strict: bool,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let report = interpolate(rows, table.x1, table.xn, &table.y, at, strict)?;
    emit(&report, format, config.output_precision)
}

/// Run the extremum command
pub fn run_extremum(table: &TableArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let report = extremum(table.x1, table.xn, &table.y)?;
    emit(&report, format, config.output_precision)
}

/// Run the zero command
pub fn run_zero(
    table: &TableArgs,
    refined: bool,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let report = zero(table.x1, table.xn, &table.y, refined)?;
    emit(&report, format, config.output_precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use astro_core::types::InterpolationError;

    const DECLINATION: [f64; 5] = [-1693.4, 406.3, 2303.2, 4198.7, 6032.2];

    #[test]
    fn test_interpolate_three_rows() {
        let report =
            interpolate(3, 7.0, 9.0, &[0.884226, 0.877366, 0.870531], 8.18125, false).unwrap();
        assert_abs_diff_eq!(report.y, 0.876125, epsilon = 1e-6);
    }

    #[test]
    fn test_interpolate_row_count_mismatch() {
        let result = interpolate(5, 7.0, 9.0, &[0.884226, 0.877366, 0.870531], 8.0, false);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_interpolate_strict_outside_table() {
        let result = interpolate(3, 0.0, 2.0, &[1.0, 2.0, 5.0], 3.5, true);
        assert!(matches!(
            result,
            Err(CliError::Interpolation(InterpolationError::AbscissaOutOfRange { .. }))
        ));
        assert!(interpolate(3, 0.0, 2.0, &[1.0, 2.0, 5.0], 3.5, false).is_ok());
    }

    #[test]
    fn test_extremum_mars_distance() {
        let report = extremum(12.0, 20.0, &[1.3814294, 1.3812213, 1.3812453]).unwrap();
        assert_eq!(report.rows, 3);
        assert_abs_diff_eq!(report.x, 17.5864, epsilon = 1e-4);
        assert_abs_diff_eq!(report.y, 1.3812030, epsilon = 1e-7);
    }

    #[test]
    fn test_zero_five_rows() {
        let report = zero(25.0, 29.0, &DECLINATION, false).unwrap();
        assert_eq!(report.rows, 5);
        assert_abs_diff_eq!(report.x, 25.793135245, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_three_rows_refined() {
        let report = zero(26.0, 28.0, &DECLINATION[..3], true).unwrap();
        assert_eq!(report.strategy, ZeroStrategy::Refined);
        assert_abs_diff_eq!(report.x, 26.79873, epsilon = 1e-5);
    }

    #[test]
    fn test_unsupported_row_count() {
        let result = zero(0.0, 3.0, &[1.0, 2.0, 3.0, 4.0], false);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_render_text() {
        let report = ZeroReport {
            rows: 3,
            strategy: ZeroStrategy::Fast,
            x: 26.798732,
        };
        assert_eq!(report.render_text(3), "Zero at x = 26.799");
    }
}
