//! Dense matrix primitive
//!
//! A [`Matrix`] stores `rows * cols` real values in row-major order with
//! exclusively owned storage. Combining kernels verify shape compatibility
//! up front and return new owned results; factorization-backed operations
//! (solve, inverse, determinant, eigenvalues) delegate to the
//! [`crate::direct`] and [`crate::eigen`] modules.

use crate::direct::LuFactorization;
use crate::eigen::{self, JacobiConfig};
use crate::error::{LinAlgError, Result};
use crate::traits::RealScalar;
use crate::Vector;
use ndarray::{Array1, Array2};
use rand::Rng;

/// Owned dense matrix of real values in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: RealScalar> {
    pub(crate) data: Array2<T>,
}

impl<T: RealScalar> Matrix<T> {
    /// Create a zero-filled matrix with the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a matrix from flat row-major data
    ///
    /// Fails with [`LinAlgError::DimensionMismatch`] when
    /// `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let got = data.len();
        let data = Array2::from_shape_vec((rows, cols), data).map_err(|_| {
            LinAlgError::DimensionMismatch {
                expected: rows * cols,
                got,
            }
        })?;
        Ok(Self { data })
    }

    /// Create the `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// Create a matrix with entries drawn uniformly from [-1, 1]
    pub fn random(rows: usize, cols: usize) -> Self {
        let mut rng = rand::rng();
        Self {
            data: Array2::from_shape_fn((rows, cols), |_| {
                T::from_f64(rng.random_range(-1.0..=1.0)).unwrap()
            }),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Shape as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// True when `rows == cols`
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self.data[[row, col]])
    }

    /// Overwrite the element at `(row, col)` in place
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        self.data[[row, col]] = value;
        Ok(())
    }

    /// Copy of row `i` as an owned vector
    pub fn row(&self, i: usize) -> Result<Vector<T>> {
        if i >= self.rows() {
            return Err(LinAlgError::OutOfRange {
                axis: 0,
                index: i,
                len: self.rows(),
            });
        }
        Ok(Vector {
            data: self.data.row(i).to_owned(),
        })
    }

    /// Copy of column `j` as an owned vector
    pub fn col(&self, j: usize) -> Result<Vector<T>> {
        if j >= self.cols() {
            return Err(LinAlgError::OutOfRange {
                axis: 1,
                index: j,
                len: self.cols(),
            });
        }
        Ok(Vector {
            data: self.data.column(j).to_owned(),
        })
    }

    /// Element-wise sum, returning a new matrix
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: &self.data + &other.data,
        })
    }

    /// Element-wise difference, returning a new matrix
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: &self.data - &other.data,
        })
    }

    /// Multiply every element by `k` in place
    pub fn scale(&mut self, k: T) {
        self.data.mapv_inplace(|x| x * k);
    }

    /// Overwrite with the identity pattern in place (ones on the main
    /// diagonal, zeros elsewhere); valid for any shape
    pub fn set_identity(&mut self) {
        let (rows, cols) = self.shape();
        for i in 0..rows {
            for j in 0..cols {
                self.data[[i, j]] = if i == j { T::one() } else { T::zero() };
            }
        }
    }

    /// Matrix product `C[i][j] = Σ_k A[i][k]·B[k][j]`
    ///
    /// The accumulation runs in canonical `k` order so results are
    /// bit-reproducible across runs. Fails with
    /// [`LinAlgError::DimensionMismatch`] when `self.cols() != other.rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.cols(),
                got: other.rows(),
            });
        }
        let (m, n, p) = (self.rows(), self.cols(), other.cols());
        let mut out = Array2::zeros((m, p));
        for i in 0..m {
            for j in 0..p {
                let mut acc = T::zero();
                for k in 0..n {
                    acc += self.data[[i, k]] * other.data[[k, j]];
                }
                out[[i, j]] = acc;
            }
        }
        Ok(Self { data: out })
    }

    /// Matrix-vector product `y = A * x`
    pub fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>> {
        if x.len() != self.cols() {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.cols(),
                got: x.len(),
            });
        }
        let mut out = Array1::zeros(self.rows());
        for i in 0..self.rows() {
            let mut acc = T::zero();
            for k in 0..self.cols() {
                acc += self.data[[i, k]] * x.data[k];
            }
            out[i] = acc;
        }
        Ok(Vector { data: out })
    }

    /// Transpose, returning a new `(cols, rows)` matrix
    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.t().to_owned(),
        }
    }

    /// Frobenius norm `sqrt(Σ a_ij²)`
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .map(|&x| x * x)
            .fold(T::zero(), |acc, v| acc + v)
            .sqrt()
    }

    /// Copy the elements out as flat row-major data
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().copied().collect()
    }

    /// Determinant via LU factorization with partial pivoting
    ///
    /// Fails with [`LinAlgError::NotSquare`] only. A singular matrix is not
    /// an error here: an exactly zero pivot column yields `0`, and a
    /// near-singular matrix yields the naturally tiny pivot product.
    pub fn determinant(&self) -> Result<T> {
        if !self.is_square() {
            return Err(LinAlgError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        match LuFactorization::with_tolerance(self, T::zero()) {
            Ok(factorization) => Ok(factorization.determinant()),
            Err(LinAlgError::SingularMatrix) => Ok(T::zero()),
            Err(e) => Err(e),
        }
    }

    /// Inverse via LU factorization, solving `A·X = I` column by column
    ///
    /// Fails with [`LinAlgError::NotSquare`] or
    /// [`LinAlgError::SingularMatrix`].
    pub fn inverse(&self) -> Result<Self> {
        LuFactorization::factorize(self)?.inverse()
    }

    /// Solve `A x = b` via LU factorization with partial pivoting
    ///
    /// Fails with [`LinAlgError::NotSquare`],
    /// [`LinAlgError::DimensionMismatch`] when `b.len() != rows`, or
    /// [`LinAlgError::SingularMatrix`].
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        LuFactorization::factorize(self)?.solve(b)
    }

    /// Eigenvalues of a symmetric matrix in ascending order
    ///
    /// Convenience wrapper over [`crate::eigen::symmetric_eigenvalues`] with
    /// the default Jacobi configuration. The matrix is assumed symmetric;
    /// see the eigen module for the full contract.
    pub fn symmetric_eigenvalues(&self) -> Result<Vector<T>> {
        let solution = eigen::symmetric_eigenvalues(self, &JacobiConfig::default())?;
        Ok(solution.eigenvalues)
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() {
            return Err(LinAlgError::OutOfRange {
                axis: 0,
                index: row,
                len: self.rows(),
            });
        }
        if col >= self.cols() {
            return Err(LinAlgError::OutOfRange {
                axis: 1,
                index: col,
                len: self.cols(),
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows() != other.rows() {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.rows(),
                got: other.rows(),
            });
        }
        if self.cols() != other.cols() {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.cols(),
                got: other.cols(),
            });
        }
        Ok(())
    }
}
