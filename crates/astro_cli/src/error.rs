//! Error types for the astro CLI.

use astro_core::types::InterpolationError;
use astro_formulas::FormulaError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command argument was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Interpolation table construction or evaluation failed
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// A formula rejected its input or failed to converge
    #[error("Formula error: {0}")]
    Formula(#[from] FormulaError),

    /// JSON output could not be produced
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("expected 3 or 5 rows");
        assert_eq!(err.to_string(), "Invalid argument: expected 3 or 5 rows");

        let err: CliError = InterpolationError::NoExtremum.into();
        assert!(err.to_string().starts_with("Interpolation error:"));

        let err: CliError = FormulaError::InvalidMonth { month: 13 }.into();
        assert_eq!(err.to_string(), "Formula error: Invalid month: 13");
    }
}
