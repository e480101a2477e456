#![cfg(test)]
use crate::galerkin::assembly::{assemble_operator, assemble_terms, test_space, trial_space};
use crate::galerkin::manufactured::Equation;
use crate::galerkin::rhs::{RhsMethod, project_rhs};
use crate::galerkin::driver::solve_and_measure_error;
use crate::spectral::family::PolyFamily;
use approx::assert_relative_eq;
use strum::IntoEnumIterator;

#[test]
fn test_equation_and_method_indices() {
    assert_eq!(Equation::from_index(1).unwrap(), Equation::ConvectionCubic);
    assert_eq!(
        Equation::from_index(2).unwrap(),
        Equation::VariableCoefficient
    );
    assert!(Equation::from_index(3).is_err());
    assert_eq!(RhsMethod::from_index(1).unwrap(), RhsMethod::Oversampled);
    assert!(RhsMethod::from_index(4).is_err());
}

#[test]
fn test_manufactured_pair_is_consistent() {
    // f_e must equal L u_e pointwise
    let (ue, fe) = Equation::VariableCoefficient.exact_pair();
    let due = ue.diff("x").lambdify1D();
    let ue = ue.lambdify1D();
    let fe = fe.lambdify1D();
    for &x in &[-0.9, -0.3, 0.2, 0.8] {
        assert_relative_eq!(
            fe(x),
            (x * x + 1.0) * due(x) + ue(x),
            epsilon = 1e-12
        );
    }
    let (ue, fe) = Equation::ConvectionCubic.exact_pair();
    let due = ue.diff("x").lambdify1D();
    let ue = ue.lambdify1D();
    let fe = fe.lambdify1D();
    for &x in &[-0.7, 0.1, 0.6] {
        assert_relative_eq!(
            fe(x),
            due(x) + x.powi(3) * ue(x),
            epsilon = 1e-10,
            max_relative = 1e-10
        );
    }
}

#[test]
fn test_exact_solutions_satisfy_left_bc() {
    for eq in Equation::iter() {
        let (ue, _) = eq.exact_pair();
        let ue = ue.lambdify1D();
        assert!(ue(-1.0).abs() < 1e-12);
    }
}

#[test]
fn test_operator_shape_is_trial_dimension() {
    let op = assemble_operator(12, PolyFamily::Legendre, Equation::ConvectionCubic).unwrap();
    assert_eq!(op.shape(), (11, 11));
}

#[test]
fn test_two_term_equation_assembles_two_matrices() {
    let terms = assemble_terms(16, PolyFamily::Legendre, Equation::VariableCoefficient).unwrap();
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].shape(), terms[1].shape());
    let sum = &terms[0] + &terms[1];
    assert_eq!(
        sum.shape(),
        assemble_operator(16, PolyFamily::Legendre, Equation::VariableCoefficient)
            .unwrap()
            .shape()
    );
}

#[test]
fn test_operator_band_structure() {
    // first-derivative plus cubic-weight coupling: the cubic coefficient
    // reaches three degrees out from the two-mode trial and test stencils,
    // giving exactly 4 sub- and 5 superdiagonals
    let op = assemble_operator(12, PolyFamily::Chebyshev, Equation::ConvectionCubic).unwrap();
    let (rows, cols) = op.shape();
    assert_eq!((rows, cols), (11, 11));
    let (lower, upper) = op.bandwidths();
    assert_eq!(lower, 4);
    assert_eq!(upper, 5);
    // banded, not dense
    assert!(op.nnz() < rows * cols);
    for (&offset, _) in op.diags().iter() {
        assert!(offset >= -4 && offset <= 5);
    }
}

#[test]
fn test_rhs_methods_match_direct_quadrature() {
    // round trip: projected load vector vs direct quadrature of (f_e, psi_k)
    let n = 30;
    let family = PolyFamily::Legendre;
    let eq = Equation::VariableCoefficient;
    let trial = trial_space(n, family).unwrap();
    let test = test_space(n, family).unwrap();
    let (_, fe) = eq.exact_pair();

    let (nodes, weights) = family.quadrature(200).unwrap();
    let fe_fn = fe.lambdify1D();
    let direct: Vec<f64> = (0..test.dims())
        .map(|k| {
            nodes
                .iter()
                .enumerate()
                .map(|(q, &x)| weights[q] * fe_fn(x) * test.evaluate_basis(k, x))
                .sum()
        })
        .collect();

    for method in [RhsMethod::ExactTest, RhsMethod::QuasiTrial] {
        let f_hat = project_rhs(method, &fe, &trial, &test).unwrap();
        for k in 0..test.dims() {
            assert_relative_eq!(f_hat[k], direct[k], epsilon = 1e-9);
        }
    }
}

#[test]
fn test_error_decreases_with_resolution() {
    // concrete scenario from the convergence claim
    let e8 = solve_and_measure_error(
        8,
        RhsMethod::ExactTest,
        PolyFamily::Legendre,
        Equation::VariableCoefficient,
    )
    .unwrap();
    let e20 = solve_and_measure_error(
        20,
        RhsMethod::ExactTest,
        PolyFamily::Legendre,
        Equation::VariableCoefficient,
    )
    .unwrap();
    assert!(e8.is_finite() && e8 >= 0.0);
    assert!(e20.is_finite() && e20 >= 0.0);
    assert!(e20 < e8);
}

#[test]
fn test_all_methods_converge() {
    for method in RhsMethod::iter() {
        let coarse = solve_and_measure_error(
            8,
            method,
            PolyFamily::Legendre,
            Equation::VariableCoefficient,
        )
        .unwrap();
        let fine = solve_and_measure_error(
            24,
            method,
            PolyFamily::Legendre,
            Equation::VariableCoefficient,
        )
        .unwrap();
        assert!(
            fine < coarse,
            "method {}: error did not decrease ({} -> {})",
            method,
            coarse,
            fine
        );
    }
}

#[test]
fn test_methods_agree_at_high_resolution() {
    let errors: Vec<f64> = RhsMethod::iter()
        .map(|method| {
            solve_and_measure_error(
                28,
                method,
                PolyFamily::Legendre,
                Equation::VariableCoefficient,
            )
            .unwrap()
        })
        .collect();
    for &e in &errors {
        assert!(e < 1e-9, "error {} has not reached agreement level", e);
    }
    for i in 0..errors.len() {
        for j in i + 1..errors.len() {
            assert!((errors[i] - errors[j]).abs() < 1e-9);
        }
    }
}

#[test]
fn test_chebyshev_family_converges_too() {
    let coarse = solve_and_measure_error(
        8,
        RhsMethod::ExactTest,
        PolyFamily::Chebyshev,
        Equation::VariableCoefficient,
    )
    .unwrap();
    let fine = solve_and_measure_error(
        20,
        RhsMethod::ExactTest,
        PolyFamily::Chebyshev,
        Equation::VariableCoefficient,
    )
    .unwrap();
    assert!(fine < coarse);
}

#[test]
fn test_oscillatory_equation_converges() {
    let coarse = solve_and_measure_error(
        12,
        RhsMethod::ExactTest,
        PolyFamily::Legendre,
        Equation::ConvectionCubic,
    )
    .unwrap();
    let fine = solve_and_measure_error(
        32,
        RhsMethod::ExactTest,
        PolyFamily::Legendre,
        Equation::ConvectionCubic,
    )
    .unwrap();
    assert!(fine < coarse);
}
