//! Iteration and root-finding primitives.
//!
//! These are the small, generic building blocks the interpolation tables and
//! the formula crates use to refine an estimate until it stops changing.
//!
//! ## Available Primitives
//!
//! - [`decimal_places`]: Iterate until the absolute change is below `10^-places`
//! - [`full_precision`]: Iterate until the relative change is below `1e-15`
//! - [`binary_root`]: Fixed 52-round bisection between two bounds
//!
//! ## Configuration
//!
//! [`IterationConfig`] bundles:
//! - `decimal_places`: Precision target (default: 12)
//! - `max_iterations`: Maximum iteration count (default: 50)
//!
//! ## Examples
//!
//! ```
//! use astro_core::math::solvers::{binary_root, full_precision};
//!
//! // Solve x² - 2 = 0 (find √2) by Newton improvement
//! let root = full_precision(|x: f64| (x + 2.0 / x) / 2.0, 1.0, 20).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-15);
//!
//! // The same root by bisection
//! let root = binary_root(|x: f64| x * x - 2.0, 1.0, 2.0);
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-12);
//! ```

mod bisection;
mod config;
pub(crate) mod iterate;

// Re-export public types at module level
pub use bisection::{binary_root, BISECTION_ROUNDS};
pub use config::IterationConfig;
pub use iterate::{decimal_places, full_precision};
