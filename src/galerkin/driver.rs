//! The solve-and-measure procedure and the convergence sweep.
//!
//! The original script multiplexed "return the error" and "return the
//! matrix" behind a boolean flag; here those are the two separate
//! operations `solve_and_measure_error` (this module) and
//! `assemble_operator` (assembly module).

use crate::galerkin::assembly::{assemble_operator, test_space, trial_space};
use crate::galerkin::manufactured::Equation;
use crate::galerkin::rhs::{RhsMethod, project_rhs};
use crate::spectral::family::PolyFamily;
use crate::spectral::solver::solve_sparse_lu;
use log::{debug, info};
use strum::IntoEnumIterator;

/// Error curves of one convergence sweep: per method, one discrete L2 error
/// per swept size.
pub struct SweepResult {
    pub sizes: Vec<usize>,
    pub curves: Vec<(RhsMethod, Vec<f64>)>,
}

/// Discretize, project the right-hand side with the chosen strategy, solve,
/// and return the weighted discrete L2 error against the exact solution on
/// the trial mesh.
pub fn solve_and_measure_error(
    n: usize,
    method: RhsMethod,
    family: PolyFamily,
    eq: Equation,
) -> Result<f64, String> {
    let trial = trial_space(n, family)?;
    let test = test_space(n, family)?;
    let d = assemble_operator(n, family, eq)?;

    let (ue, fe) = eq.exact_pair();
    let f_hat = project_rhs(method, &fe, &trial, &test)?;
    let u_hat = solve_sparse_lu(&d, &f_hat)?;

    let u_j = trial.backward(&u_hat)?;
    let u_q = trial.sample(&ue);
    let weights = trial.quad_weights();
    let mut err2 = 0.0;
    for q in 0..u_j.len() {
        let diff = u_j[q] - u_q[q];
        err2 += weights[q] * diff * diff;
    }
    debug!(
        "N = {}, method = {}, family = {}, eq = {}: error = {:.3e}",
        n,
        method,
        family,
        eq,
        err2.sqrt()
    );
    Ok(err2.sqrt())
}

/// Sweep the problem size over `sizes` for all three projection strategies.
pub fn convergence_sweep(
    sizes: &[usize],
    family: PolyFamily,
    eq: Equation,
) -> Result<SweepResult, String> {
    let mut curves = Vec::new();
    for method in RhsMethod::iter() {
        let mut errors = Vec::with_capacity(sizes.len());
        for &n in sizes {
            errors.push(solve_and_measure_error(n, method, family, eq)?);
        }
        info!("method {}: errors {:?}", method, errors);
        curves.push((method, errors));
    }
    Ok(SweepResult {
        sizes: sizes.to_vec(),
        curves,
    })
}
