//! CLI configuration management
//!
//! Loads settings from an optional TOML file, then applies `ASTRO_*`
//! environment variable overrides.

use std::path::Path;
use std::str::FromStr;

use astro_core::math::solvers::IterationConfig;
use serde::Deserialize;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Largest number of decimals printed for any value
const MAX_PRECISION: usize = 15;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Decimals printed for computed values
    pub output_precision: usize,
    /// Precision and iteration limit for the iterative solvers
    pub iteration: IterationConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            output_precision: 6,
            iteration: IterationConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        if let Ok(level) = std::env::var("ASTRO_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Ok(precision) = std::env::var("ASTRO_OUTPUT_PRECISION") {
            self.output_precision = parse_env("ASTRO_OUTPUT_PRECISION", &precision)?;
        }

        if let Ok(places) = std::env::var("ASTRO_DECIMAL_PLACES") {
            self.iteration.decimal_places = parse_env("ASTRO_DECIMAL_PLACES", &places)?;
        }

        if let Ok(max) = std::env::var("ASTRO_MAX_ITERATIONS") {
            self.iteration.max_iterations = parse_env("ASTRO_MAX_ITERATIONS", &max)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.output_precision > MAX_PRECISION {
            errors.push(format!(
                "output_precision {} exceeds maximum allowed ({})",
                self.output_precision, MAX_PRECISION
            ));
        }

        errors.extend(
            self.iteration
                .problems()
                .into_iter()
                .map(|problem| format!("iteration.{}", problem)),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (if present) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid value", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output_precision, 6);
        assert_eq!(config.iteration, IterationConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"
output_precision = 9

[iteration]
decimal_places = 10
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_precision, 9);
        assert_eq!(config.iteration.decimal_places, 10);
        // Unset keys keep their defaults
        assert_eq!(config.iteration.max_iterations, 50);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output_precision = \"many\"").unwrap();

        let result = CliConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_validate_precision_too_large() {
        let config = CliConfig {
            output_precision: 40,
            ..CliConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("output_precision")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_iteration_limits() {
        let config = CliConfig {
            iteration: IterationConfig {
                decimal_places: -1,
                max_iterations: 0,
            },
            ..CliConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(
                errors,
                vec![
                    "iteration.decimal_places must be non-negative",
                    "iteration.max_iterations must be greater than 0"
                ]
            ),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_agrees_with_iteration_constructor() {
        // Anything validate accepts can be built with IterationConfig::new
        let config = CliConfig {
            iteration: IterationConfig {
                decimal_places: 0,
                max_iterations: 1,
            },
            ..CliConfig::default()
        };
        assert!(config.validate().is_ok());
        let built = IterationConfig::new(0, 1);
        assert_eq!(built, config.iteration);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        let result: Result<usize, _> = parse_env("ASTRO_OUTPUT_PRECISION", "six");
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
        let value: usize = parse_env("ASTRO_OUTPUT_PRECISION", " 8 ").unwrap();
        assert_eq!(value, 8);
    }
}
