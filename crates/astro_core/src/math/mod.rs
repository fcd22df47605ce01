//! Numerical building blocks: polynomials, table interpolation and iteration.

pub mod interpolators;
pub mod polynomial;
pub mod solvers;
