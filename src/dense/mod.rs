//! Dense matrix and vector primitives
//!
//! Owned, row-major storage with bounds-checked element access:
//! - [`Vector`]: fixed-length real vector
//! - [`Matrix`]: two-dimensional dense matrix
//!
//! Arithmetic kernels (add, multiply, transpose, dot, cross, norm) live on
//! the types themselves; factorization-backed operations delegate to
//! [`crate::direct`] and [`crate::eigen`].

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
