//! # astro_core: Numerical Foundation for Astronomical Algorithms
//!
//! ## Layer 1 (Foundation) Role
//!
//! astro_core serves as the bottom layer of the workspace, providing:
//! - Angle and time newtypes: `Angle`, `RightAscension`, `HourAngle`, `Time` (`types`)
//! - Error types: `InterpolationError`, `IterationError` (`types::error`)
//! - Polynomial evaluation (`math::polynomial`)
//! - Equally spaced and Lagrange interpolation (`math::interpolators`)
//! - Fixed-point iteration and bisection (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other astro_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - tracing: Diagnostics for convergence failures (no subscriber installed)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use astro_core::math::interpolators::{EquallySpacedTable, Len3};
//! use astro_core::math::solvers::decimal_places;
//! use astro_core::types::Angle;
//!
//! // Interpolate a three-row table
//! let table = Len3::<f64>::new(7.0, 9.0, &[0.884226, 0.877366, 0.870531]).unwrap();
//! let y = table.interpolate_x(8.18125);
//! # assert!((y - 0.876125).abs() < 1e-6);
//!
//! // Refine an estimate to six decimal places
//! let root = decimal_places(|x: f64| (x + 2.0 / x) / 2.0, 1.0, 6, 20).unwrap();
//! # assert!((root - 1.414214).abs() < 1e-6);
//!
//! // Angles are radians internally
//! let a = Angle::from_deg(90.0);
//! assert!((a.rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for angle/time types, samples,
//!   errors and `IterationConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
