//! Core numeric and astronomical types.
//!
//! This module provides:
//! - `angle`: Angle newtypes (`Angle`, `RightAscension`, `HourAngle`) in radians
//! - `time`: `Time` in seconds, plus epoch constants such as `J2000`
//! - `error`: Structured error types for interpolation and iteration
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Angle`], [`RightAscension`], [`HourAngle`] from `angle`
//! - [`Time`], [`J2000`], [`JULIAN_CENTURY`], [`j2000_century`] from `time`
//! - [`InterpolationError`], [`IterationError`] from `error`

pub mod angle;
pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use angle::{Angle, HourAngle, RightAscension};
pub use error::{InterpolationError, IterationError};
pub use time::{j2000_century, Time, GAUSS_K, J2000, JULIAN_CENTURY};
