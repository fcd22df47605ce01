//! Error types for formula evaluation.
//!
//! This module provides:
//! - `FormulaError`: Invalid calendar input and iteration failures

use astro_core::types::IterationError;
use thiserror::Error;

/// Formula evaluation errors.
///
/// Most formulas are total functions of their inputs. The exceptions are
/// calendar conversions that take an index (month, day of year) and the
/// iterative Kepler solvers.
///
/// # Variants
/// - `InvalidMonth`: Month outside `1..=12`
/// - `InvalidDayOfYear`: Day number outside the year
/// - `Iteration`: An iterative solver ran out of iterations
///
/// # Examples
/// ```
/// use astro_formulas::FormulaError;
///
/// let err = FormulaError::InvalidDayOfYear { day: 367, leap: true };
/// assert!(format!("{}", err).contains("367"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormulaError {
    /// Month number outside `1..=12`.
    #[error("Invalid month: {month}")]
    InvalidMonth {
        /// The rejected month
        month: u32,
    },

    /// Day number outside the year.
    #[error("Invalid day of year: {day} (leap year: {leap})")]
    InvalidDayOfYear {
        /// The rejected day number
        day: u32,
        /// Whether the year was taken as a leap year
        leap: bool,
    },

    /// An iterative solver failed to converge.
    #[error("Iteration failed: {0}")]
    Iteration(#[from] IterationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_month_display() {
        let err = FormulaError::InvalidMonth { month: 13 };
        assert_eq!(format!("{}", err), "Invalid month: 13");
    }

    #[test]
    fn test_invalid_day_of_year_display() {
        let err = FormulaError::InvalidDayOfYear {
            day: 366,
            leap: false,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid day of year: 366 (leap year: false)"
        );
    }

    #[test]
    fn test_from_iteration_error() {
        let err: FormulaError = IterationError::MaxIterationsExceeded { iterations: 7 }.into();
        assert!(matches!(err, FormulaError::Iteration(_)));
        assert!(format!("{}", err).contains("7 iterations"));
    }
}
