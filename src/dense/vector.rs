//! Dense vector primitive
//!
//! A [`Vector`] is a fixed-length, index-addressable sequence of real values
//! with exclusively owned storage. Element access is bounds-checked and
//! combining kernels verify operand lengths before touching any data.

use crate::error::{LinAlgError, Result};
use crate::traits::RealScalar;
use ndarray::Array1;

/// Owned dense vector of real values
///
/// Two vectors are equal iff they have the same length and are element-wise
/// equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: RealScalar> {
    pub(crate) data: Array1<T>,
}

impl<T: RealScalar> Vector<T> {
    /// Create a zero-filled vector of length `n`
    pub fn zeros(n: usize) -> Self {
        Self {
            data: Array1::zeros(n),
        }
    }

    /// Create a vector from an existing ordered sequence of values
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: Array1::from_vec(values.to_vec()),
        }
    }

    /// Create a vector taking ownership of `values`
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            data: Array1::from_vec(values),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at index `i`
    pub fn get(&self, i: usize) -> Result<T> {
        self.data.get(i).copied().ok_or(LinAlgError::OutOfRange {
            axis: 0,
            index: i,
            len: self.len(),
        })
    }

    /// Overwrite the element at index `i` in place
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        let len = self.len();
        match self.data.get_mut(i) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(LinAlgError::OutOfRange {
                axis: 0,
                index: i,
                len,
            }),
        }
    }

    /// Element-wise sum, returning a new vector
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(Self {
            data: &self.data + &other.data,
        })
    }

    /// Element-wise difference, returning a new vector
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(Self {
            data: &self.data - &other.data,
        })
    }

    /// Multiply every element by `k` in place
    pub fn scale(&mut self, k: T) {
        self.data.mapv_inplace(|x| x * k);
    }

    /// Dot product `Σ u_i·v_i`
    ///
    /// Accumulated in index order for reproducibility.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
    }

    /// 3D cross product
    ///
    /// Defined only for length-3 vectors; any other length is a
    /// [`LinAlgError::DimensionMismatch`].
    pub fn cross3(&self, other: &Self) -> Result<Self> {
        if self.len() != 3 {
            return Err(LinAlgError::DimensionMismatch {
                expected: 3,
                got: self.len(),
            });
        }
        if other.len() != 3 {
            return Err(LinAlgError::DimensionMismatch {
                expected: 3,
                got: other.len(),
            });
        }
        let (u, v) = (&self.data, &other.data);
        Ok(Self::from_vec(vec![
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]))
    }

    /// Euclidean norm `sqrt(Σ v_i²)`
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .map(|&x| x * x)
            .fold(T::zero(), |acc, v| acc + v)
            .sqrt()
    }

    /// Rescale to unit Euclidean norm in place
    ///
    /// The zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let n = self.norm();
        if n > T::zero() {
            self.data.mapv_inplace(|x| x / n);
        }
    }

    /// Linear interpolation `self + (other - self)·t`, returning a new vector
    pub fn lerp(&self, other: &Self, t: T) -> Result<Self> {
        self.check_len(other)?;
        Ok(Self {
            data: &self.data + &(&other.data - &self.data).mapv(|d| d * t),
        })
    }

    /// Copy the elements out as a flat `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().copied().collect()
    }

    fn check_len(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(())
    }
}
