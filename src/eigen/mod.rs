//! Eigen solvers for symmetric matrices
//!
//! This module provides cyclic Jacobi iteration:
//! - [`symmetric_eigenvalues`]: eigenvalues only
//! - [`symmetric_eigen`]: eigenvalues plus the accumulated eigenvector basis
//!
//! Eigenvalues are returned in ascending order.

mod jacobi;

pub use jacobi::{symmetric_eigen, symmetric_eigenvalues, JacobiConfig, JacobiSolution};
