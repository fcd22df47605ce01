//! # astro_formulas: Closed-Form Astronomical Formulas
//!
//! ## Layer 2 (Formulas) Role
//!
//! astro_formulas builds on astro_core's angle types, polynomials and
//! iteration primitives to provide:
//! - Calendar and Julian day conversions (`julian`)
//! - Obliquity and nutation (`nutation`), sidereal time (`sidereal`)
//! - Coordinate transformations (`coord`)
//! - Equation of time (`eqtime`) with its solar helpers (`solar`)
//! - Kepler's equation (`kepler`), binary stars (`binary`), parabolic
//!   orbits (`parabolic`) and the position of Pluto (`pluto`)
//! - Stellar magnitudes (`stellar`)
//!
//! Every formula is a pure function of its arguments. Only the calendar
//! helpers that take an index and the iterative Kepler solvers can fail;
//! they return [`FormulaError`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use astro_formulas::{julian, sidereal};
//!
//! let jd = julian::calendar_gregorian_to_jd(1987, 4, 10.0);
//! let st = sidereal::mean(jd);
//! # assert!((st.sec() - 47446.3668).abs() < 1e-3);
//! println!("{}", st);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for dates, coordinates and
//!   orbital elements

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod binary;
pub mod coord;
pub mod eqtime;
pub mod error;
pub mod julian;
pub mod kepler;
pub mod nutation;
pub mod parabolic;
pub mod pluto;
pub mod sidereal;
pub mod solar;
pub mod stellar;

pub use error::FormulaError;
