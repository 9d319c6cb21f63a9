//! End-to-end tests for the dense engine
//!
//! These exercise the algebraic properties the engine guarantees across
//! module boundaries: kernels, the LU-backed solver path, and the Jacobi
//! eigen solver.

use approx::assert_relative_eq;
use math_dense::{lu_solve, symmetric_eigen, JacobiConfig, LinAlgError, Matrix, Vector};

fn assert_matrix_eq(a: &Matrix<f64>, b: &Matrix<f64>, epsilon: f64) {
    assert_eq!(a.shape(), b.shape());
    let (rows, cols) = a.shape();
    for i in 0..rows {
        for j in 0..cols {
            assert_relative_eq!(
                a.get(i, j).unwrap(),
                b.get(i, j).unwrap(),
                epsilon = epsilon
            );
        }
    }
}

#[test]
fn multiplication_is_associative() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
    let c = Matrix::from_vec(2, 2, vec![1.0, -1.0, 0.5, 2.0]).unwrap();

    let left = a.matmul(&b).unwrap().matmul(&c).unwrap();
    let right = a.matmul(&b.matmul(&c).unwrap()).unwrap();

    assert_matrix_eq(&left, &right, 1e-12);
}

#[test]
fn matrix_times_inverse_is_identity() {
    let a = Matrix::from_vec(
        3,
        3,
        vec![4.0, 7.0, 2.0, 3.0, 6.0, 1.0, 2.0, 5.0, 3.0],
    )
    .unwrap();

    let inv = a.inverse().expect("matrix is invertible");
    let product = a.matmul(&inv).unwrap();

    assert_matrix_eq(&product, &Matrix::identity(3), 1e-10);
}

#[test]
fn solve_reproduces_rhs() {
    let a = Matrix::from_vec(
        3,
        3,
        vec![4.0, 1.0, 2.0, 1.0, 5.0, 1.0, 2.0, 1.0, 6.0],
    )
    .unwrap();
    let b = Vector::from_slice(&[7.0, -3.0, 11.0]);

    let x = a.solve(&b).expect("system is solvable");
    let ax = a.matvec(&x).unwrap();

    for i in 0..3 {
        assert_relative_eq!(ax.get(i).unwrap(), b.get(i).unwrap(), epsilon = 1e-10);
    }
}

#[test]
fn double_transpose_is_exact() {
    let a = Matrix::from_vec(2, 3, vec![1.5, -2.25, 3.0, 0.125, 5.5, -6.75]).unwrap();
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn determinant_matches_eigenvalue_product() {
    let a = Matrix::from_vec(3, 3, vec![2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0]).unwrap();

    let det = a.determinant().unwrap();
    let eigenvalues = a.symmetric_eigenvalues().unwrap();
    let product: f64 = eigenvalues.to_vec().iter().product();

    assert_relative_eq!(det, product, epsilon = 1e-10);
    assert_relative_eq!(det, 4.0, epsilon = 1e-12);
}

#[test]
fn rank_deficient_solve_fails_as_singular() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
    let b = Vector::from_slice(&[1.0, 1.0]);

    assert_eq!(a.solve(&b), Err(LinAlgError::SingularMatrix));
    assert_eq!(a.inverse().err(), Some(LinAlgError::SingularMatrix));
}

#[test]
fn incompatible_product_fails_as_dimension_mismatch() {
    let a = Matrix::<f64>::zeros(2, 3);
    let b = Matrix::<f64>::zeros(2, 2);

    assert!(matches!(
        a.matmul(&b),
        Err(LinAlgError::DimensionMismatch { .. })
    ));
}

#[test]
fn solve_concrete_2x2() {
    let a = Matrix::from_vec(2, 2, vec![2.0, 3.0, 4.0, 5.0]).unwrap();
    let b = Vector::from_slice(&[8.0, 14.0]);

    let x = lu_solve(&a, &b).unwrap();
    assert_relative_eq!(x.get(0).unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(x.get(1).unwrap(), 2.0, epsilon = 1e-12);
}

#[test]
fn matmul_concrete_2x3_by_3x2() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();

    let c = a.matmul(&b).unwrap();
    assert_eq!(c.to_vec(), vec![58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn symmetric_eigenvalues_concrete() {
    let a = Matrix::from_vec(3, 3, vec![2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0]).unwrap();

    // Ascending order is the engine contract, no caller-side sort needed
    let ev = a.symmetric_eigenvalues().unwrap().to_vec();
    assert_relative_eq!(ev[0], 0.585_786_437_626_905, epsilon = 1e-9);
    assert_relative_eq!(ev[1], 2.0, epsilon = 1e-9);
    assert_relative_eq!(ev[2], 3.414_213_562_373_095, epsilon = 1e-9);
}

#[test]
fn cross3_concrete() {
    let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0, 5.0, 6.0]);

    assert_eq!(u.cross3(&v).unwrap().to_vec(), vec![-3.0, 6.0, -3.0]);
}

#[test]
fn eigen_decomposition_reconstructs_matrix() {
    // A = V·D·Vᵀ for symmetric A
    let a = Matrix::from_vec(
        4,
        4,
        vec![
            5.0, 1.0, 0.0, 2.0, //
            1.0, 4.0, 1.0, 0.0, //
            0.0, 1.0, 3.0, 1.0, //
            2.0, 0.0, 1.0, 6.0,
        ],
    )
    .unwrap();

    let solution = symmetric_eigen(&a, &JacobiConfig::default()).unwrap();
    assert!(solution.converged);

    let v = solution.eigenvectors.unwrap();
    let mut d = Matrix::zeros(4, 4);
    for k in 0..4 {
        d.set(k, k, solution.eigenvalues.get(k).unwrap()).unwrap();
    }

    let reconstructed = v.matmul(&d).unwrap().matmul(&v.transpose()).unwrap();
    assert_matrix_eq(&reconstructed, &a, 1e-9);
}

#[test]
fn solver_paths_agree_on_random_system() {
    // inverse(A)·b and solve(A, b) must agree up to rounding
    let a = Matrix::from_vec(
        3,
        3,
        vec![3.0, -1.0, 0.5, 2.0, 4.0, -2.0, 1.0, 0.0, 5.0],
    )
    .unwrap();
    let b = Vector::from_slice(&[1.0, 2.0, 3.0]);

    let x_solve = a.solve(&b).unwrap();
    let x_inv = a.inverse().unwrap().matvec(&b).unwrap();

    assert!(x_solve.subtract(&x_inv).unwrap().norm() < 1e-10);
}

#[test]
fn dot_and_norm_are_consistent() {
    let v = Vector::from_slice(&[1.0, -2.0, 2.0]);
    assert_relative_eq!(v.dot(&v).unwrap(), 9.0);
    assert_relative_eq!(v.norm(), 3.0);
}
