//! Right-hand-side projection strategies.
//!
//! All three strategies produce a load vector compatible with the Phi1 test
//! space: f_hat[k] ≈ (f_e, ψ_k)_w, k = 0..N-2. They differ in the
//! intermediate space used to resolve f_e, which must always be at least as
//! rich as the test space: a fixed 400-mode oversampling, the test space's
//! own orthogonal companion (N+1 modes), or the trial space's orthogonal
//! companion (N modes, refined to N+1).

use crate::spectral::space::{BasisKind, FunctionSpace};
use crate::symbolic::symbolic_engine::Expr;
use nalgebra::DVector;
use strum_macros::{Display, EnumIter};

/// Size of the auxiliary space of the oversampled strategy; a
/// high-resolution quadrature proxy for the scalar product.
pub const OVERSAMPLED_SIZE: usize = 400;

/// Closed enumeration of the projection strategies (original method
/// indices 1-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum RhsMethod {
    /// method 1: scalar product in a fixed-size oversampled Phi1 space,
    /// truncated to the test dimension
    Oversampled,
    /// method 2: forward transform in the test space's orthogonal companion,
    /// then exact inner product against the Phi1 functions
    ExactTest,
    /// method 3 (quasi): forward transform in the trial space's orthogonal
    /// companion, refined one mode up, then exact inner product
    QuasiTrial,
}

impl RhsMethod {
    pub fn from_index(index: usize) -> Result<Self, String> {
        match index {
            1 => Ok(RhsMethod::Oversampled),
            2 => Ok(RhsMethod::ExactTest),
            3 => Ok(RhsMethod::QuasiTrial),
            other => Err(format!("unknown right-hand-side method index {}", other)),
        }
    }
}

/// Project the exact right-hand side onto the test space with the chosen
/// strategy, producing the load vector of the discrete system.
pub fn project_rhs(
    method: RhsMethod,
    fe: &Expr,
    trial: &FunctionSpace,
    test: &FunctionSpace,
) -> Result<DVector<f64>, String> {
    match method {
        RhsMethod::Oversampled => {
            let vm = FunctionSpace::new(OVERSAMPLED_SIZE, trial.family(), BasisKind::Phi1)?;
            let f_m = vm.scalar_product(&vm.sample(fe))?;
            Ok(FunctionSpace::refine(&f_m, test.dims()))
        }
        RhsMethod::ExactTest => {
            let t = test.get_orthogonal();
            let c = t.forward(&t.sample(fe))?;
            Ok(inner_test_orthogonal(test, &c))
        }
        RhsMethod::QuasiTrial => {
            let t = trial.get_orthogonal();
            let c = t.forward(&t.sample(fe))?;
            let c = FunctionSpace::refine(&c, trial.size() + 1);
            Ok(inner_test_orthogonal(test, &c))
        }
    }
}

/// Exact inner product of an orthogonal-basis expansion against the Phi1
/// test functions: (Σ c_m P_m, P_k - P_{k+2})_w = γ_k c_k - γ_{k+2} c_{k+2}.
fn inner_test_orthogonal(test: &FunctionSpace, ortho_coeffs: &DVector<f64>) -> DVector<f64> {
    let family = test.family();
    let mut f_hat = DVector::zeros(test.dims());
    for k in 0..test.dims() {
        let lead = family.norm_sq(k) * ortho_coeffs[k];
        let tail = if k + 2 < ortho_coeffs.len() {
            family.norm_sq(k + 2) * ortho_coeffs[k + 2]
        } else {
            0.0
        };
        f_hat[k] = lead - tail;
    }
    f_hat
}
