//! Analytical differentiation for the symbolic engine.
//!
//! Implements the recursive differentiation rules (sum, product, quotient,
//! chain, general power) plus the fundamental-theorem rule for the
//! variable-upper-limit integral: d/dx ∫_a^x g(t) dt = g(x).

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Analytical derivative with respect to `var`.
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => lhs.diff(var) + rhs.diff(var),
            Expr::Sub(lhs, rhs) => lhs.diff(var) - rhs.diff(var),
            // product rule
            Expr::Mul(lhs, rhs) => {
                lhs.diff(var) * (**rhs).clone() + (**lhs).clone() * rhs.diff(var)
            }
            // quotient rule
            Expr::Div(lhs, rhs) => {
                (lhs.diff(var) * (**rhs).clone() - (**lhs).clone() * rhs.diff(var))
                    / ((**rhs).clone() * (**rhs).clone())
            }
            Expr::Pow(base, exp) => {
                if let Expr::Const(c) = **exp {
                    // d/dx f^c = c * f^(c-1) * f'
                    Expr::Const(c)
                        * (**base).clone().pow(Expr::Const(c - 1.0))
                        * base.diff(var)
                } else {
                    // d/dx f^g = f^g * (g' ln f + g f'/f)
                    self.clone()
                        * (exp.diff(var) * (**base).clone().ln()
                            + (**exp).clone() * base.diff(var) / (**base).clone())
                }
            }
            Expr::Exp(expr) => self.clone() * expr.diff(var),
            Expr::Ln(expr) => expr.diff(var) / (**expr).clone(),
            Expr::sin(expr) => Expr::cos(expr.clone()) * expr.diff(var),
            Expr::cos(expr) => -(Expr::sin(expr.clone()) * expr.diff(var)),
            // d/dx ∫_a^x g(t) dt = g(x); the integrand depends on the dummy
            // variable only, so substituting it with the outer variable is
            // the whole Leibniz rule here
            Expr::Integral { integrand, var: dummy, .. } => {
                integrand.rename_variable(dummy, var)
            }
        }
    }
}
