#![cfg(test)]
use crate::spectral::family::{PolyFamily, chebyshev_t, chebyshev_t_derivative, legendre};
use crate::spectral::operator::PGOperator;
use crate::spectral::solver::solve_sparse_lu;
use crate::spectral::space::{BasisKind, FunctionSpace};
use crate::symbolic::symbolic_engine::Expr;
use approx::assert_relative_eq;
use nalgebra::DVector;
use strum::IntoEnumIterator;

#[test]
fn test_family_from_char() {
    assert_eq!(PolyFamily::from_char('L').unwrap(), PolyFamily::Legendre);
    assert_eq!(PolyFamily::from_char('C').unwrap(), PolyFamily::Chebyshev);
    assert!(PolyFamily::from_char('J').is_err());
}

#[test]
fn test_legendre_values() {
    // P_2 = (3x^2 - 1)/2, P_3 = (5x^3 - 3x)/2
    let x = 0.37;
    assert_relative_eq!(legendre(2, x), (3.0 * x * x - 1.0) / 2.0, epsilon = 1e-14);
    assert_relative_eq!(
        legendre(3, x),
        (5.0 * x * x * x - 3.0 * x) / 2.0,
        epsilon = 1e-14
    );
}

#[test]
fn test_chebyshev_values_and_derivative() {
    // T_n(cos θ) = cos(n θ), T'_4 = 4 U_3 = 4 (8x^3 - 4x)
    let theta: f64 = 1.1;
    let x = theta.cos();
    assert_relative_eq!(chebyshev_t(5, x), (5.0 * theta).cos(), epsilon = 1e-13);
    assert_relative_eq!(
        chebyshev_t_derivative(4, x),
        4.0 * (8.0 * x * x * x - 4.0 * x),
        epsilon = 1e-12
    );
}

#[test]
fn test_weighted_orthogonality_by_quadrature() {
    for family in PolyFamily::iter() {
        let (nodes, weights) = family.quadrature(12).unwrap();
        for m in 0..6 {
            for n in 0..6 {
                let mut acc = 0.0;
                for (q, &x) in nodes.iter().enumerate() {
                    acc += weights[q] * family.eval(m, x) * family.eval(n, x);
                }
                let expected = if m == n { family.norm_sq(n) } else { 0.0 };
                assert_relative_eq!(acc, expected, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_boundary_adapted_bases_vanish() {
    for family in PolyFamily::iter() {
        let trial = FunctionSpace::new(10, family, BasisKind::BCLeftDirichlet).unwrap();
        let test = FunctionSpace::new(11, family, BasisKind::Phi1).unwrap();
        for k in 0..trial.dims() {
            assert_relative_eq!(trial.evaluate_basis(k, -1.0), 0.0, epsilon = 1e-12);
        }
        for k in 0..test.dims() {
            assert_relative_eq!(test.evaluate_basis(k, -1.0), 0.0, epsilon = 1e-12);
            assert_relative_eq!(test.evaluate_basis(k, 1.0), 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_mesh_is_ascending_interior() {
    for family in PolyFamily::iter() {
        let space = FunctionSpace::new(9, family, BasisKind::Orthogonal).unwrap();
        let mesh = space.mesh();
        assert_eq!(mesh.len(), 9);
        for q in 1..mesh.len() {
            assert!(mesh[q] > mesh[q - 1]);
        }
        assert!(mesh[0] > -1.0 && mesh[mesh.len() - 1] < 1.0);
    }
}

#[test]
fn test_space_too_small_is_error() {
    assert!(FunctionSpace::new(2, PolyFamily::Legendre, BasisKind::Phi1).is_err());
    assert!(FunctionSpace::new(1, PolyFamily::Legendre, BasisKind::BCLeftDirichlet).is_err());
}

#[test]
fn test_forward_backward_roundtrip() {
    // an exactly representable polynomial survives forward + backward
    let x = Expr::Var("x".to_string());
    let f = x.clone().pow(Expr::Const(3.0)) + Expr::Const(0.5) * x;
    for family in PolyFamily::iter() {
        let space = FunctionSpace::new(8, family, BasisKind::Orthogonal).unwrap();
        let samples = space.sample(&f);
        let coeffs = space.forward(&samples).unwrap();
        let back = space.backward(&coeffs).unwrap();
        for q in 0..samples.len() {
            assert_relative_eq!(back[q], samples[q], epsilon = 1e-12);
        }
        // degree-3 input has no energy above mode 3
        for n in 4..coeffs.len() {
            assert!(coeffs[n].abs() < 1e-12);
        }
    }
}

#[test]
fn test_forward_requires_orthogonal_basis() {
    let space = FunctionSpace::new(8, PolyFamily::Legendre, BasisKind::Phi1).unwrap();
    let samples = DVector::zeros(8);
    assert!(space.forward(&samples).is_err());
}

#[test]
fn test_refine_pads_and_truncates() {
    let c = DVector::from_vec(vec![1.0, 2.0, 3.0]);
    let padded = FunctionSpace::refine(&c, 5);
    assert_eq!(padded.len(), 5);
    assert_eq!(padded[2], 3.0);
    assert_eq!(padded[4], 0.0);
    let truncated = FunctionSpace::refine(&c, 2);
    assert_eq!(truncated.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_operator_diags_and_bandwidths() {
    let triplets = vec![(0usize, 0usize, 1.0), (1, 1, 2.0), (0, 2, 3.0), (2, 0, 4.0)];
    let op = PGOperator::from_triplets(3, 3, &triplets);
    assert_eq!(op.shape(), (3, 3));
    assert_eq!(op.nnz(), 4);
    let bands = op.diags();
    assert_eq!(bands[&0], vec![1.0, 2.0]);
    assert_eq!(bands[&2], vec![3.0]);
    assert_eq!(bands[&-2], vec![4.0]);
    assert_eq!(op.bandwidths(), (2, 2));
}

#[test]
fn test_operator_sum() {
    let a = PGOperator::from_triplets(2, 2, &[(0, 0, 1.0), (1, 1, 1.0)]);
    let b = PGOperator::from_triplets(2, 2, &[(0, 1, 2.0), (1, 1, 1.0)]);
    let sum = &a + &b;
    let dense = sum.to_dense();
    assert_relative_eq!(dense[(0, 0)], 1.0);
    assert_relative_eq!(dense[(0, 1)], 2.0);
    assert_relative_eq!(dense[(1, 1)], 2.0);
}

#[test]
fn test_sparse_lu_solves_small_system() {
    // [2 1; 1 3] x = [5; 10] -> x = [1; 3]
    let d = PGOperator::from_triplets(2, 2, &[(0, 0, 2.0), (0, 1, 1.0), (1, 0, 1.0), (1, 1, 3.0)]);
    let f = DVector::from_vec(vec![5.0, 10.0]);
    let x = solve_sparse_lu(&d, &f).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
}

#[test]
fn test_sparse_lu_rejects_mismatched_rhs() {
    let d = PGOperator::from_triplets(2, 2, &[(0, 0, 1.0), (1, 1, 1.0)]);
    let f = DVector::from_vec(vec![1.0, 2.0, 3.0]);
    assert!(solve_sparse_lu(&d, &f).is_err());
}
