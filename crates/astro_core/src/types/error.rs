//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolation table construction and queries
//! - `IterationError`: Errors from the generic iteration primitives

use thiserror::Error;

/// Interpolation-related errors.
///
/// Every variant is a caller-input or convergence failure; none signals a
/// broken internal invariant.
///
/// # Variants
/// - `InvalidSampleCount`: Table built with the wrong number of y values
/// - `DegenerateAbscissae`: First and last abscissae are equal
/// - `FactorOutOfRange`: Strict evaluation with an interpolating factor outside `[-1, 1]`
/// - `AbscissaOutOfRange`: Strict evaluation with an x outside the table
/// - `NoExtremum`: Table has no curvature
/// - `ExtremumOutsideTable`: Extremum found, but outside the table
/// - `ZeroOutsideTable`: Zero found, but outside the table
/// - `NoConvergence`: Fixed-point iteration diverged or ran out of rounds
///
/// # Examples
/// ```
/// use astro_core::types::InterpolationError;
///
/// let err = InterpolationError::InvalidSampleCount { got: 4, need: 3 };
/// assert_eq!(format!("{}", err), "Invalid sample count: got 4, need exactly 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Wrong number of y values for the table size.
    #[error("Invalid sample count: got {got}, need exactly {need}")]
    InvalidSampleCount {
        /// Number of values provided
        got: usize,
        /// Number of values the table requires
        need: usize,
    },

    /// First and last abscissae are equal, so the table has no x range.
    #[error("Degenerate abscissae: first and last x values must differ")]
    DegenerateAbscissae,

    /// Interpolating factor outside the strict range.
    #[error("Interpolating factor {n} outside range [-1, 1]")]
    FactorOutOfRange {
        /// The rejected factor
        n: f64,
    },

    /// Abscissa outside the strict range of the table.
    #[error("Abscissa {x} outside valid domain [{min}, {max}]")]
    AbscissaOutOfRange {
        /// The rejected abscissa
        x: f64,
        /// Lower end of the strict range
        min: f64,
        /// Upper end of the strict range
        max: f64,
    },

    /// The interpolating function is linear; there is no extremum.
    #[error("No extremum in table")]
    NoExtremum,

    /// An extremum exists but falls outside the table.
    #[error("Extremum falls outside of table")]
    ExtremumOutsideTable,

    /// A zero exists but falls outside the table.
    #[error("Zero falls outside of table")]
    ZeroOutsideTable,

    /// Fixed-point iteration diverged or exhausted its rounds.
    #[error("Failure to converge")]
    NoConvergence,
}

/// Iteration primitive errors.
///
/// # Examples
/// ```
/// use astro_core::types::IterationError;
///
/// let err = IterationError::MaxIterationsExceeded { iterations: 20 };
/// assert!(format!("{}", err).contains("20 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IterationError {
    /// Iteration did not meet its precision target within the limit.
    #[error("Maximum iterations reached: no convergence after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },
}
