//! Table interpolation.
//!
//! This module interpolates tabulated ephemeris values: fixed windows of
//! equally spaced rows, and arbitrary unequally spaced samples.
//!
//! ## Available Interpolators
//!
//! - [`Len3`]: Second difference interpolation over three rows
//! - [`Len5`]: Fourth difference interpolation over five rows
//! - [`lagrange`] / [`lagrange_poly`]: Lagrange's formula for unequal spacing
//! - [`len4_half`]: Centre value of a four-row table
//!
//! ## Core Trait
//!
//! Both equally spaced tables implement [`EquallySpacedTable`], which defines:
//! - `interpolate_factor(n)` and `interpolate_x(x)`, plus checked `_strict` forms
//! - `extremum() -> Result<(x, y), InterpolationError>`
//! - `find_zero(ZeroStrategy) -> Result<x, InterpolationError>`
//!
//! ## Example
//!
//! ```
//! use astro_core::math::interpolators::{EquallySpacedTable, Len3, ZeroStrategy};
//!
//! // Declination of Mercury in arcseconds, 1973 February 26-28
//! let table = Len3::<f64>::new(26.0, 28.0, &[-1693.4, 406.3, 2303.2]).unwrap();
//!
//! // Time the declination crosses zero
//! let x = table.find_zero(ZeroStrategy::Refined).unwrap();
//! assert!((x - 26.79873).abs() < 1e-5);
//! ```

mod lagrange;
mod len3;
mod len5;
mod traits;

// Re-export public types at module level
pub use lagrange::{lagrange, lagrange_poly, len4_half, Sample};
pub use len3::Len3;
pub use len5::Len5;
pub use traits::{EquallySpacedTable, ZeroStrategy};
