//! Direct solvers for dense linear systems
//!
//! This module provides the shared factorization foundation of the engine:
//! - [`LuFactorization`]: LU decomposition with partial pivoting
//! - [`lu_solve`]: factorize-and-solve convenience
//!
//! Solve, inverse, and determinant all route through the same
//! factorization.

mod lu;

pub use lu::{lu_solve, LuFactorization};
