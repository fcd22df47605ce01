//! Iteration configuration types.

use num_traits::Float;

use super::iterate::{decimal_places, full_precision};
use crate::types::IterationError;

/// Configuration for the generic iteration primitives.
///
/// Bundles the precision target and iteration limit so that callers (the
/// CLI, Kepler solvers) can carry them around as one value and load them
/// from configuration files.
///
/// # Example
///
/// ```
/// use astro_core::math::solvers::IterationConfig;
///
/// // Use default configuration
/// let config = IterationConfig::default();
/// assert_eq!(config.decimal_places, 12);
/// assert_eq!(config.max_iterations, 50);
///
/// // Custom configuration
/// let custom = IterationConfig {
///     decimal_places: 6,
///     max_iterations: 20,
/// };
/// let root = custom.iterate_decimal(|x: f64| (x + 2.0 / x) / 2.0, 1.0).unwrap();
/// assert!((root - 1.414214).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IterationConfig {
    /// Number of decimal places the result must be stable to.
    pub decimal_places: i32,

    /// Maximum number of iterations before giving up.
    ///
    /// If the iteration doesn't converge within this limit,
    /// it returns `IterationError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl Default for IterationConfig {
    /// Default values:
    /// - `decimal_places`: 12
    /// - `max_iterations`: 50
    fn default() -> Self {
        Self {
            decimal_places: 12,
            max_iterations: 50,
        }
    }
}

impl IterationConfig {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `decimal_places < 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use astro_core::math::solvers::IterationConfig;
    ///
    /// let config = IterationConfig::new(8, 100);
    /// assert_eq!(config.max_iterations, 100);
    /// ```
    pub fn new(decimal_places: i32, max_iterations: usize) -> Self {
        let config = Self {
            decimal_places,
            max_iterations,
        };
        if let Some(problem) = config.problems().first() {
            panic!("{}", problem);
        }
        config
    }

    /// Fields outside their valid range, described by name.
    ///
    /// Empty for a usable configuration. [`IterationConfig::new`] panics on
    /// the first entry; configuration loaders can report all of them.
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if self.decimal_places < 0 {
            problems.push("decimal_places must be non-negative");
        }
        if self.max_iterations == 0 {
            problems.push("max_iterations must be greater than 0");
        }
        problems
    }

    /// Iterate `better` from `start` to this configuration's decimal places.
    pub fn iterate_decimal<T, F>(&self, better: F, start: T) -> Result<T, IterationError>
    where
        T: Float,
        F: FnMut(T) -> T,
    {
        decimal_places(better, start, self.decimal_places, self.max_iterations)
    }

    /// Iterate `better` from `start` to full `f64` precision, using only the
    /// iteration limit of this configuration.
    pub fn iterate_full<T, F>(&self, better: F, start: T) -> Result<T, IterationError>
    where
        T: Float,
        F: FnMut(T) -> T,
    {
        full_precision(better, start, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IterationConfig::default();
        assert_eq!(config.decimal_places, 12);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_new_config() {
        let config = IterationConfig::new(4, 10);
        assert_eq!(config.decimal_places, 4);
        assert_eq!(config.max_iterations, 10);
    }

    #[test]
    #[should_panic(expected = "decimal_places must be non-negative")]
    fn test_new_config_negative_places_panics() {
        let _ = IterationConfig::new(-1, 10);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be greater than 0")]
    fn test_new_config_zero_iterations_panics() {
        let _ = IterationConfig::new(6, 0);
    }

    #[test]
    fn test_problems_lists_every_field() {
        assert!(IterationConfig::default().problems().is_empty());
        let config = IterationConfig {
            decimal_places: -3,
            max_iterations: 0,
        };
        assert_eq!(
            config.problems(),
            vec![
                "decimal_places must be non-negative",
                "max_iterations must be greater than 0"
            ]
        );
    }

    #[test]
    fn test_iterate_full_uses_limit() {
        let config = IterationConfig::new(6, 2);
        // Converges far too slowly to finish in two steps
        let result = config.iterate_full(|x: f64| x * 0.5 + 1.0, 0.0);
        assert_eq!(
            result,
            Err(IterationError::MaxIterationsExceeded { iterations: 2 })
        );
    }

    #[test]
    fn test_iterate_decimal_sqrt() {
        let config = IterationConfig::default();
        let root = config
            .iterate_decimal(|x: f64| (x + 2.0 / x) / 2.0, 1.0)
            .unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_config_copy_and_debug() {
        let config1 = IterationConfig::default();
        let config2 = config1;
        assert_eq!(config1, config2);
        let debug_str = format!("{:?}", config1);
        assert!(debug_str.contains("IterationConfig"));
        assert!(debug_str.contains("max_iterations"));
    }
}
