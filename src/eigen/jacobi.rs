//! Cyclic Jacobi eigenvalue iteration
//!
//! Repeated plane rotations drive a symmetric matrix toward diagonal form;
//! the diagonal limit holds the eigenvalues and the accumulated rotation
//! product holds the eigenvectors. Each sweep visits every off-diagonal
//! pair `(p, q)` once and zeroes it with the rotation angle from
//! `tan(2θ) = 2·A[p][q] / (A[p][p] − A[q][q])`.
//!
//! Convergence is quadratic for well-posed symmetric input; the sweep cap is
//! a defensive bound, and hitting it returns the best current approximation
//! rather than an error.

use crate::error::{LinAlgError, Result};
use crate::traits::RealScalar;
use crate::{Matrix, Vector};
use ndarray::Array2;

/// Jacobi solver configuration
#[derive(Debug, Clone)]
pub struct JacobiConfig<R> {
    /// Convergence threshold on the off-diagonal Frobenius norm, relative
    /// to the Frobenius norm of the input matrix
    pub tolerance: R,
    /// Maximum number of cyclic sweeps
    pub max_sweeps: usize,
}

impl<R: RealScalar> Default for JacobiConfig<R> {
    fn default() -> Self {
        Self {
            // Scales with the working precision: ~2e-14 for f64
            tolerance: R::from_f64(100.0).unwrap() * R::epsilon(),
            max_sweeps: 64,
        }
    }
}

/// Jacobi solver result
#[derive(Debug, Clone)]
pub struct JacobiSolution<T: RealScalar> {
    /// Eigenvalues in ascending order
    pub eigenvalues: Vector<T>,
    /// Eigenvectors as matrix columns, in the same order as the
    /// eigenvalues; `None` when only eigenvalues were requested
    pub eigenvectors: Option<Matrix<T>>,
    /// Number of sweeps performed
    pub sweeps: usize,
    /// Final off-diagonal Frobenius norm
    pub off_diagonal: T,
    /// Whether the off-diagonal norm fell below the threshold
    pub converged: bool,
}

/// Eigenvalues of a symmetric matrix, ascending
///
/// The input is assumed symmetric: only a square-shape check is performed,
/// and asymmetric input yields unspecified values (not an error). Verifying
/// symmetry is the caller's responsibility.
pub fn symmetric_eigenvalues<T: RealScalar>(
    a: &Matrix<T>,
    config: &JacobiConfig<T>,
) -> Result<JacobiSolution<T>> {
    jacobi(a, config, false)
}

/// Eigenvalues and eigenvectors of a symmetric matrix
///
/// Eigenvalues come back ascending with the eigenvector columns permuted to
/// match, so `eigenvectors.col(k)` belongs to `eigenvalues[k]`. The same
/// symmetry contract as [`symmetric_eigenvalues`] applies.
pub fn symmetric_eigen<T: RealScalar>(
    a: &Matrix<T>,
    config: &JacobiConfig<T>,
) -> Result<JacobiSolution<T>> {
    jacobi(a, config, true)
}

fn jacobi<T: RealScalar>(
    a: &Matrix<T>,
    config: &JacobiConfig<T>,
    want_vectors: bool,
) -> Result<JacobiSolution<T>> {
    let n = a.rows();
    if n != a.cols() {
        return Err(LinAlgError::NotSquare {
            rows: n,
            cols: a.cols(),
        });
    }

    let mut m = a.data.clone();
    let mut vectors = want_vectors.then(|| Array2::<T>::eye(n));

    let threshold = config.tolerance * a.norm();
    let two = T::one() + T::one();

    let mut off = off_diagonal_norm(&m);
    let mut sweeps = 0;

    while off > threshold && sweeps < config.max_sweeps {
        for p in 0..n {
            for q in (p + 1)..n {
                let apq = m[[p, q]];
                if apq == T::zero() {
                    continue;
                }

                // Stable rotation: t = sgn(θ) / (|θ| + sqrt(θ² + 1))
                let theta = (m[[q, q]] - m[[p, p]]) / (two * apq);
                let t = {
                    let denom = theta.abs() + (theta * theta + T::one()).sqrt();
                    if theta >= T::zero() {
                        T::one() / denom
                    } else {
                        -(T::one() / denom)
                    }
                };
                let c = T::one() / (t * t + T::one()).sqrt();
                let s = t * c;

                let app = m[[p, p]];
                let aqq = m[[q, q]];
                m[[p, p]] = app - t * apq;
                m[[q, q]] = aqq + t * apq;
                m[[p, q]] = T::zero();
                m[[q, p]] = T::zero();

                for k in 0..n {
                    if k == p || k == q {
                        continue;
                    }
                    let akp = m[[k, p]];
                    let akq = m[[k, q]];
                    m[[k, p]] = c * akp - s * akq;
                    m[[p, k]] = m[[k, p]];
                    m[[k, q]] = s * akp + c * akq;
                    m[[q, k]] = m[[k, q]];
                }

                if let Some(v) = vectors.as_mut() {
                    for k in 0..n {
                        let vkp = v[[k, p]];
                        let vkq = v[[k, q]];
                        v[[k, p]] = c * vkp - s * vkq;
                        v[[k, q]] = s * vkp + c * vkq;
                    }
                }
            }
        }

        sweeps += 1;
        off = off_diagonal_norm(&m);
        log::debug!(
            "jacobi sweep {}: off-diagonal norm = {:.6e}",
            sweeps,
            off.to_f64().unwrap_or(0.0)
        );
    }

    let converged = off <= threshold;

    // Ascending eigenvalue order is part of the public contract; permute
    // the eigenvector columns to match
    let diag: Vec<T> = (0..n).map(|i| m[[i, i]]).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        diag[i]
            .partial_cmp(&diag[j])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let eigenvalues = Vector::from_vec(order.iter().map(|&i| diag[i]).collect());
    let eigenvectors = vectors.map(|v| {
        let mut sorted = Array2::zeros((n, n));
        for (new_j, &old_j) in order.iter().enumerate() {
            for k in 0..n {
                sorted[[k, new_j]] = v[[k, old_j]];
            }
        }
        Matrix { data: sorted }
    });

    Ok(JacobiSolution {
        eigenvalues,
        eigenvectors,
        sweeps,
        off_diagonal: off,
        converged,
    })
}

fn off_diagonal_norm<T: RealScalar>(m: &Array2<T>) -> T {
    let n = m.nrows();
    let mut acc = T::zero();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                acc += m[[i, j]] * m[[i, j]];
            }
        }
    }
    acc.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tridiagonal_eigenvalues() {
        let a = Matrix::from_vec(3, 3, vec![2.0_f64, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0])
            .unwrap();

        let solution = symmetric_eigenvalues(&a, &JacobiConfig::default()).unwrap();
        assert!(solution.converged);

        let ev = solution.eigenvalues.to_vec();
        let sqrt2 = 2.0_f64.sqrt();
        assert_relative_eq!(ev[0], 2.0 - sqrt2, epsilon = 1e-10);
        assert_relative_eq!(ev[1], 2.0, epsilon = 1e-10);
        assert_relative_eq!(ev[2], 2.0 + sqrt2, epsilon = 1e-10);
    }

    #[test]
    fn test_already_diagonal() {
        let a = Matrix::from_vec(3, 3, vec![3.0_f64, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0])
            .unwrap();

        let solution = symmetric_eigenvalues(&a, &JacobiConfig::default()).unwrap();
        assert!(solution.converged);
        assert_eq!(solution.sweeps, 0);
        assert_eq!(solution.eigenvalues.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_eigenvectors_satisfy_definition() {
        let a = Matrix::from_vec(3, 3, vec![2.0_f64, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0])
            .unwrap();

        let solution = symmetric_eigen(&a, &JacobiConfig::default()).unwrap();
        let vectors = solution.eigenvectors.expect("eigenvectors were requested");

        for k in 0..3 {
            let lambda = solution.eigenvalues.get(k).unwrap();
            let v = vectors.col(k).unwrap();
            let av = a.matvec(&v).unwrap();

            // A·v = λ·v
            let mut lv = v.clone();
            lv.scale(lambda);
            assert!(av.subtract(&lv).unwrap().norm() < 1e-10);

            // Rotations preserve unit length
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zero_matrix() {
        let a: Matrix<f64> = Matrix::zeros(4, 4);
        let solution = symmetric_eigenvalues(&a, &JacobiConfig::default()).unwrap();
        assert!(solution.converged);
        assert_eq!(solution.eigenvalues.to_vec(), vec![0.0; 4]);
    }

    #[test]
    fn test_not_square() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        assert_eq!(
            symmetric_eigenvalues(&a, &JacobiConfig::default()).err(),
            Some(LinAlgError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_sweep_cap_returns_best_approximation() {
        let a = Matrix::from_vec(2, 2, vec![2.0_f64, 1.0, 1.0, 2.0]).unwrap();
        let config = JacobiConfig {
            tolerance: 0.0,
            max_sweeps: 0,
        };

        // Cap of zero sweeps: no rotation ever runs, the diagonal is the
        // untouched input and the result is flagged as non-converged
        let solution = symmetric_eigenvalues(&a, &config).unwrap();
        assert!(!solution.converged);
        assert_eq!(solution.sweeps, 0);
        assert_eq!(solution.eigenvalues.to_vec(), vec![2.0, 2.0]);
        assert!(solution.off_diagonal > 0.0);
    }

    #[test]
    fn test_negative_eigenvalues_sorted() {
        // Eigenvalues 3 and -1
        let a = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 2.0, 1.0]).unwrap();
        let solution = symmetric_eigenvalues(&a, &JacobiConfig::default()).unwrap();

        let ev = solution.eigenvalues.to_vec();
        assert_relative_eq!(ev[0], -1.0, epsilon = 1e-10);
        assert_relative_eq!(ev[1], 3.0, epsilon = 1e-10);
    }
}
