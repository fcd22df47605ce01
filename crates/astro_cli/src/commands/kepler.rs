//! Kepler command implementation
//!
//! Solves Kepler's equation with the configured iteration settings.

use astro_core::types::Angle;
use astro_formulas::kepler;
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use super::{emit, OutputFormat, Render};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Solution method for Kepler's equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeplerMethod {
    /// Fixed-point iteration
    Iterate,
    /// Newton's method
    #[default]
    Newton,
    /// Bisection
    Bisection,
}

/// Eccentric and true anomaly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeplerReport {
    pub method: KeplerMethod,
    pub eccentricity: f64,
    pub mean_anomaly_deg: f64,
    pub eccentric_anomaly_deg: f64,
    pub true_anomaly_deg: f64,
}

impl Render for KeplerReport {
    fn render_text(&self, precision: usize) -> String {
        format!(
            "E = {:.*}°\nν = {:.*}°",
            precision, self.eccentric_anomaly_deg, precision, self.true_anomaly_deg
        )
    }
}

/// Solve Kepler's equation for eccentricity `e` and mean anomaly in degrees
pub fn compute(
    e: f64,
    mean_anomaly_deg: f64,
    method: KeplerMethod,
    config: &CliConfig,
) -> Result<KeplerReport> {
    if !(0.0..1.0).contains(&e) {
        return Err(CliError::invalid_argument(format!(
            "eccentricity {} outside [0, 1)",
            e
        )));
    }

    let m = Angle::from_deg(mean_anomaly_deg);
    let ea = match method {
        KeplerMethod::Iterate => kepler::kepler1(e, m, &config.iteration)?,
        KeplerMethod::Newton => kepler::kepler2(e, m, &config.iteration)?,
        KeplerMethod::Bisection => kepler::kepler3(e, m),
    };

    Ok(KeplerReport {
        method,
        eccentricity: e,
        mean_anomaly_deg,
        eccentric_anomaly_deg: ea.deg(),
        true_anomaly_deg: kepler::true_anomaly(e, ea).deg(),
    })
}

/// Run the kepler command
pub fn run(
    e: f64,
    mean_anomaly_deg: f64,
    method: KeplerMethod,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let report = compute(e, mean_anomaly_deg, method, config)?;
    info!(?method, e, "solved Kepler's equation");
    emit(&report, format, config.output_precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use astro_core::math::solvers::IterationConfig;

    #[test]
    fn test_each_method_agrees() {
        let config = CliConfig::default();
        for method in [KeplerMethod::Iterate, KeplerMethod::Newton, KeplerMethod::Bisection] {
            let report = compute(0.1, 5.0, method, &config).unwrap();
            assert_abs_diff_eq!(report.eccentric_anomaly_deg, 5.554589, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_iteration_limit_from_config() {
        let config = CliConfig {
            iteration: IterationConfig::new(10, 20),
            ..CliConfig::default()
        };
        let result = compute(0.99, 2.0, KeplerMethod::Iterate, &config);
        assert!(matches!(result, Err(CliError::Formula(_))));
        assert!(compute(0.99, 2.0, KeplerMethod::Newton, &config).is_ok());
    }

    #[test]
    fn test_rejects_open_orbit() {
        let result = compute(1.0, 10.0, KeplerMethod::Bisection, &CliConfig::default());
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
