//! Lambdification: converting symbolic expressions to executable closures.
//!
//! The closure construction mirrors the expression tree recursively. All
//! expressions handled by this crate are functions of a single variable, so
//! every `Var` node maps to the closure argument. The `Integral` variant is
//! evaluated numerically with a fixed-order Gauss-Legendre rule, which is
//! spectrally accurate for the smooth integrands used here.

use crate::symbolic::symbolic_engine::Expr;
use gauss_quad::GaussLegendre;

/// Order of the Gauss-Legendre rule used for integral variants. The
/// integrands are entire functions on [-1, 1], 64 nodes put the quadrature
/// error at round-off level.
const INTEGRAL_QUAD_ORDER: usize = 64;

impl Expr {
    /// Converts a single-variable symbolic expression into an executable closure.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.pow(Expr::Const(2.0)); // x^2
    /// let func = f.lambdify1D();
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Var(_) => Box::new(|x| x),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D();
                let exp_fn = exp.lambdify1D();
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::Exp(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).exp())
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).ln())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).cos())
            }
            Expr::Integral {
                integrand, lower, ..
            } => {
                let integrand_fn = integrand.lambdify1D();
                let lower = *lower;
                let quad = GaussLegendre::new(INTEGRAL_QUAD_ORDER)
                    .expect("Gauss-Legendre rule of fixed order is always constructible");
                Box::new(move |x| quad.integrate(lower, x, &integrand_fn))
            }
        }
    }
}
