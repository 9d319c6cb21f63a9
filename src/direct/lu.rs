//! LU decomposition solver
//!
//! LU factorization with partial pivoting for solving dense linear systems,
//! computing inverses, and computing determinants. Partial pivoting is not
//! optional here: without it, small pivots amplify rounding error
//! catastrophically.

use crate::error::{LinAlgError, Result};
use crate::traits::RealScalar;
use crate::{Matrix, Vector};

/// LU factorization result, `P·A = L·U`
///
/// `L` (unit lower triangular, diagonal implicit) and `U` (upper triangular)
/// are packed into one matrix; the permutation is kept as a per-step pivot
/// record. The factorization can be reused to solve against multiple
/// right-hand sides without re-factorizing.
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealScalar> {
    /// Packed L and U factors (elimination multipliers below the diagonal)
    lu: Matrix<T>,
    /// `pivots[k]` is the row swapped into position `k` at step `k`
    pivots: Vec<usize>,
    /// Determinant sign, flipped on each row swap
    sign: T,
    /// Matrix dimension
    n: usize,
}

impl<T: RealScalar> LuFactorization<T> {
    /// Factor a square matrix with the default singularity threshold
    ///
    /// The threshold is machine-epsilon-relative, `max|a_ij| · ε · n`, so a
    /// uniformly rescaled system is classified the same way as the original.
    /// Fails with [`LinAlgError::NotSquare`] or
    /// [`LinAlgError::SingularMatrix`].
    pub fn factorize(a: &Matrix<T>) -> Result<Self> {
        let n = a.rows();
        let amax = a
            .data
            .iter()
            .fold(T::zero(), |acc, &v| acc.max(v.abs()));
        let tol = amax * T::epsilon() * T::from_usize(n).unwrap_or_else(T::one);
        Self::with_tolerance(a, tol)
    }

    /// Factor a square matrix, declaring singularity when a selected pivot
    /// magnitude is `<= tol`
    ///
    /// `tol = 0` only rejects an exactly zero pivot column; this is the path
    /// the determinant uses so that near-singular matrices still produce
    /// their naturally tiny pivot product.
    pub fn with_tolerance(a: &Matrix<T>, tol: T) -> Result<Self> {
        let n = a.rows();
        if n != a.cols() {
            return Err(LinAlgError::NotSquare {
                rows: n,
                cols: a.cols(),
            });
        }

        let mut lu = a.data.clone();
        let mut pivots = vec![0usize; n];
        let mut sign = T::one();

        for k in 0..n {
            // Partial pivoting: largest magnitude in column k, rows k..n
            let mut max_val = lu[[k, k]].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = lu[[i, k]].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val <= tol {
                return Err(LinAlgError::SingularMatrix);
            }

            pivots[k] = max_row;
            if max_row != k {
                for j in 0..n {
                    lu.swap([k, j], [max_row, j]);
                }
                sign = -sign;
            }

            // Eliminate below the pivot, storing multipliers in the L part
            let pivot = lu[[k, k]];
            for i in (k + 1)..n {
                let mult = lu[[i, k]] / pivot;
                lu[[i, k]] = mult;
                for j in (k + 1)..n {
                    let update = mult * lu[[k, j]];
                    lu[[i, j]] -= update;
                }
            }
        }

        Ok(Self {
            lu: Matrix { data: lu },
            pivots,
            sign,
            n,
        })
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Solve `A x = b` using the pre-computed factorization
    ///
    /// Fails with [`LinAlgError::DimensionMismatch`] when `b.len() != n`.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        if b.len() != self.n {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        let mut x = b.data.clone();

        // Replay the row swaps in factorization order: x = P·b
        for k in 0..self.n {
            let pivot = self.pivots[k];
            if pivot != k {
                x.swap(k, pivot);
            }
        }

        // Forward substitution: L·y = P·b (unit diagonal)
        for i in 0..self.n {
            for j in 0..i {
                let l_ij = self.lu.data[[i, j]];
                let update = l_ij * x[j];
                x[i] -= update;
            }
        }

        // Back substitution: U·x = y
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                let u_ij = self.lu.data[[i, j]];
                let update = u_ij * x[j];
                x[i] -= update;
            }
            let u_ii = self.lu.data[[i, i]];
            if u_ii == T::zero() {
                return Err(LinAlgError::SingularMatrix);
            }
            x[i] /= u_ii;
        }

        Ok(Vector { data: x })
    }

    /// Determinant: the pivot product times the accumulated swap sign
    pub fn determinant(&self) -> T {
        let mut det = self.sign;
        for k in 0..self.n {
            det *= self.lu.data[[k, k]];
        }
        det
    }

    /// Inverse, solving `A·X = I` column by column
    pub fn inverse(&self) -> Result<Matrix<T>> {
        let mut inv = Matrix::zeros(self.n, self.n);
        for j in 0..self.n {
            let mut e = Vector::zeros(self.n);
            e.data[j] = T::one();
            let x = self.solve(&e)?;
            for i in 0..self.n {
                inv.data[[i, j]] = x.data[i];
            }
        }
        Ok(inv)
    }
}

/// Solve `A x = b` using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn lu_solve<T: RealScalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>> {
    LuFactorization::factorize(a)?.solve(b)
}
