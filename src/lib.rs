//! Dense linear algebra engine
//!
//! This crate provides dense matrix and vector primitives together with the
//! direct solvers built on top of them:
//!
//! - **Primitives**: [`Matrix`] and [`Vector`] with owned, row-major storage
//!   and bounds-checked element access
//! - **Direct Solver**: LU decomposition with partial pivoting, backing
//!   linear-system solve, inverse, and determinant
//! - **Eigen Solver**: cyclic Jacobi iteration for symmetric matrices
//! - **Generic Scalar Types**: works with `f64` (default) and `f32`
//!
//! Every operation is synchronous and self-contained: instances own their
//! storage exclusively, and no call shares state with any other.
//!
//! # Example
//!
//! ```
//! use math_dense::{Matrix, Vector};
//!
//! let a = Matrix::from_vec(2, 2, vec![2.0_f64, 3.0, 4.0, 5.0])?;
//! let b = Vector::from_slice(&[8.0, 14.0]);
//!
//! let x = a.solve(&b)?;
//! assert!((x.get(0)? - 1.0).abs() < 1e-12);
//! assert!((x.get(1)? - 2.0).abs() < 1e-12);
//! # Ok::<(), math_dense::LinAlgError>(())
//! ```

pub mod dense;
pub mod direct;
pub mod eigen;
pub mod error;
pub mod traits;

// Re-export main types
pub use dense::{Matrix, Vector};
pub use error::{LinAlgError, Result};
pub use traits::RealScalar;

// Re-export direct solvers
pub use direct::{lu_solve, LuFactorization};

// Re-export eigen solvers
pub use eigen::{symmetric_eigen, symmetric_eigenvalues, JacobiConfig, JacobiSolution};
