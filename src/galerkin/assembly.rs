//! Weak-form assembly.
//!
//! The trial space has size N with the left Dirichlet condition built into
//! the basis; the test space has size N+1 with the Phi1 basis, one degree
//! richer. Both span N-1 functions, so every term matrix is square of the
//! trial dimension.
//!
//! Each bilinear term is integrated with a Gauss rule of trial+test nodes,
//! exact for the polynomial coefficients involved, so the only off-band
//! entries are quadrature round-off; those are dropped against a relative
//! tolerance and the stored pattern is genuinely banded.

use crate::galerkin::manufactured::{BilinearTerm, Equation};
use crate::spectral::family::PolyFamily;
use crate::spectral::operator::PGOperator;
use crate::spectral::space::{BasisKind, FunctionSpace};
use nalgebra::DMatrix;

/// Entries below DROP_TOL * max|entry| are quadrature noise, not structure.
const DROP_TOL: f64 = 1e-12;

/// Trial space of size n: left Dirichlet condition absorbed into the basis.
pub fn trial_space(n: usize, family: PolyFamily) -> Result<FunctionSpace, String> {
    FunctionSpace::new(n, family, BasisKind::BCLeftDirichlet)
}

/// Test space of size n+1 with the Phi1 basis variant.
pub fn test_space(n: usize, family: PolyFamily) -> Result<FunctionSpace, String> {
    FunctionSpace::new(n + 1, family, BasisKind::Phi1)
}

/// Assemble one bilinear term (c(x) u^(d), v)_w between trial and test
/// spaces into a sparse matrix.
pub fn inner_bilinear(
    term: &BilinearTerm,
    trial: &FunctionSpace,
    test: &FunctionSpace,
) -> Result<PGOperator, String> {
    if term.trial_deriv > 1 {
        return Err(format!(
            "bilinear terms of derivative order {} are not supported",
            term.trial_deriv
        ));
    }
    let n_quad = trial.size() + test.size();
    let (nodes, weights) = trial.family().quadrature(n_quad)?;
    let coeff = term.coeff.lambdify1D();

    let rows = test.dims();
    let cols = trial.dims();
    let mut dense: DMatrix<f64> = DMatrix::zeros(rows, cols);
    for (q, &x) in nodes.iter().enumerate() {
        let wc = weights[q] * coeff(x);
        let test_vals: Vec<f64> = (0..rows).map(|i| test.evaluate_basis(i, x)).collect();
        let trial_vals: Vec<f64> = (0..cols)
            .map(|j| {
                if term.trial_deriv == 0 {
                    trial.evaluate_basis(j, x)
                } else {
                    trial.evaluate_basis_deriv(j, x)
                }
            })
            .collect();
        for i in 0..rows {
            for j in 0..cols {
                dense[(i, j)] += wc * test_vals[i] * trial_vals[j];
            }
        }
    }

    let max_abs = dense.amax();
    if max_abs == 0.0 {
        return Ok(PGOperator::from_triplets(rows, cols, &[]));
    }
    let tol = DROP_TOL * max_abs;
    let mut triplets: Vec<(usize, usize, f64)> = Vec::new();
    for i in 0..rows {
        for j in 0..cols {
            if dense[(i, j)].abs() >= tol {
                triplets.push((i, j, dense[(i, j)]));
            }
        }
    }
    Ok(PGOperator::from_triplets(rows, cols, &triplets))
}

/// One matrix per bilinear term of the equation's weak form.
pub fn assemble_terms(
    n: usize,
    family: PolyFamily,
    eq: Equation,
) -> Result<Vec<PGOperator>, String> {
    let trial = trial_space(n, family)?;
    let test = test_space(n, family)?;
    eq.terms()
        .iter()
        .map(|term| inner_bilinear(term, &trial, &test))
        .collect()
}

/// The full weak-form operator: the sum of the term matrices.
pub fn assemble_operator(
    n: usize,
    family: PolyFamily,
    eq: Equation,
) -> Result<PGOperator, String> {
    let mut terms = assemble_terms(n, family, eq)?.into_iter();
    let first = terms
        .next()
        .ok_or_else(|| "equation has no bilinear terms".to_string())?;
    Ok(terms.fold(first, |acc, t| &acc + &t))
}
