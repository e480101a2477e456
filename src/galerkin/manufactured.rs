//! Manufactured solutions for the first-order boundary value problems.
//!
//! Each equation is a first-order operator L u = f on (-1, 1) with the
//! one-sided condition u(-1) = 0. A chosen exact solution u_e generates a
//! consistent right-hand side f_e = L u_e symbolically, so the
//! discretization error can be measured directly.

use crate::symbolic::symbolic_engine::Expr;
use strum_macros::{Display, EnumIter};

/// Coefficient of the variable-coefficient advection term, (a x² + 1) u'.
pub const A: f64 = 1.0;

/// One additive term of the governing operator in weak form:
/// (c(x) u^(trial_deriv), v)_w.
pub struct BilinearTerm {
    pub coeff: Expr,
    pub trial_deriv: usize,
}

/// Closed enumeration of the manufactured problems (the original equation
/// indices 1 and 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Equation {
    /// L u = u' + x³ u, with an oscillatory, compactly-weighted exact
    /// solution defined through a variable-upper-limit integral
    ConvectionCubic,
    /// L u = (a x² + 1) u' + u, with u_e = e^{-x⁴/4} (x + 1)
    VariableCoefficient,
}

impl Equation {
    pub fn from_index(index: usize) -> Result<Self, String> {
        match index {
            1 => Ok(Equation::ConvectionCubic),
            2 => Ok(Equation::VariableCoefficient),
            other => Err(format!("unknown equation index {}", other)),
        }
    }

    /// The exact solution u_e and the derived right-hand side f_e = L u_e.
    pub fn exact_pair(&self) -> (Expr, Expr) {
        let x = Expr::Var("x".to_string());
        match self {
            Equation::ConvectionCubic => {
                // u_e = e^{-x⁴/4} ∫_{-1}^{x} 100 e^{-t⁴/4} sin(5 t²) dt
                let t = Expr::Var("t".to_string());
                let integrand = Expr::Const(100.0)
                    * (-(t.clone().pow(Expr::Const(4.0))) / Expr::Const(4.0)).exp()
                    * Expr::sin((Expr::Const(5.0) * t.clone().pow(Expr::Const(2.0))).boxed());
                let ue = (-(x.clone().pow(Expr::Const(4.0))) / Expr::Const(4.0)).exp()
                    * Expr::Integral {
                        integrand: integrand.boxed(),
                        var: "t".to_string(),
                        lower: -1.0,
                    };
                let fe = ue.diff("x") + x.clone().pow(Expr::Const(3.0)) * ue.clone();
                (ue, fe)
            }
            Equation::VariableCoefficient => {
                // u_e = e^{-x⁴/4} (x + 1)
                let ue = (-(x.clone().pow(Expr::Const(4.0))) / Expr::Const(4.0)).exp()
                    * (x.clone() + Expr::Const(1.0));
                let fe = (Expr::Const(A) * x.clone().pow(Expr::Const(2.0)) + Expr::Const(1.0))
                    * ue.diff("x")
                    + ue.clone();
                (ue, fe)
            }
        }
    }

    /// The bilinear terms of the weak form, measure split so that each term
    /// assembles into its own matrix.
    pub fn terms(&self) -> Vec<BilinearTerm> {
        let x = Expr::Var("x".to_string());
        match self {
            Equation::ConvectionCubic => vec![
                // (u, x³ v)
                BilinearTerm {
                    coeff: x.clone().pow(Expr::Const(3.0)),
                    trial_deriv: 0,
                },
                // (u', v)
                BilinearTerm {
                    coeff: Expr::Const(1.0),
                    trial_deriv: 1,
                },
            ],
            Equation::VariableCoefficient => vec![
                // (u, v)
                BilinearTerm {
                    coeff: Expr::Const(1.0),
                    trial_deriv: 0,
                },
                // ((a x² + 1) u', v)
                BilinearTerm {
                    coeff: Expr::Const(A) * x.clone().pow(Expr::Const(2.0)) + Expr::Const(1.0),
                    trial_deriv: 1,
                },
            ],
        }
    }
}
