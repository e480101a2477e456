//! Core symbolic expression type for one-dimensional real analysis.
//!
//! `Expr` is a recursive expression tree with operator overloading so that
//! manufactured solutions can be written close to mathematical notation:
//! `(-(x^4)/4).exp() * (x + 1)`. Besides the usual arithmetic and elementary
//! functions the tree carries an `Integral` variant, F(x) = ∫_a^x g(t) dt,
//! because the first manufactured solution of this crate is defined through
//! such an integral. Differentiation lives in `symbolic_engine_derivatives`,
//! lambdification in `symbolic_lambdify`.

#![allow(non_camel_case_types)]

use std::fmt;

/// Symbolic expression tree in one real variable.
///
/// Recursive variants use Box<Expr>; `Integral` holds the integrand written
/// in its own dummy variable `var`, a constant lower limit, and takes the
/// expression's free variable as the upper limit.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g. "x")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
    /// Variable-upper-limit integral F(x) = ∫_lower^x integrand(var) d var.
    /// The integrand must depend on the dummy variable only.
    Integral {
        integrand: Box<Expr>,
        var: String,
        lower: f64,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::Integral {
                integrand,
                var,
                lower,
            } => write!(f, "int_{{{}}}^{{x}} {} d{}", lower, integrand, var),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates exponential function e^(self).
    pub fn exp(mut self) -> Expr {
        self = Expr::Exp(self.boxed());
        self
    }

    /// Creates natural logarithm ln(self).
    pub fn ln(mut self) -> Expr {
        self = Expr::Ln(self.boxed());
        self
    }

    /// Creates power expression self^rhs.
    pub fn pow(mut self, rhs: Expr) -> Expr {
        self = Expr::Pow(self.boxed(), rhs.boxed());
        self
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            Expr::Exp(expr) | Expr::Ln(expr) | Expr::sin(expr) | Expr::cos(expr) => {
                expr.contains_variable(var_name)
            }
            Expr::Integral { integrand, var, .. } => {
                var != var_name && integrand.contains_variable(var_name)
            }
        }
    }

    /// Renames a variable throughout the expression. The dummy variable of an
    /// integral shadows the outer name and is left untouched.
    pub fn rename_variable(&self, old_var: &str, new_var: &str) -> Expr {
        match self {
            Expr::Var(name) if name == old_var => Expr::Var(new_var.to_string()),
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.rename_variable(old_var, new_var)),
                Box::new(rhs.rename_variable(old_var, new_var)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.rename_variable(old_var, new_var)),
                Box::new(rhs.rename_variable(old_var, new_var)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.rename_variable(old_var, new_var)),
                Box::new(rhs.rename_variable(old_var, new_var)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.rename_variable(old_var, new_var)),
                Box::new(rhs.rename_variable(old_var, new_var)),
            ),
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.rename_variable(old_var, new_var)),
                Box::new(exp.rename_variable(old_var, new_var)),
            ),
            Expr::Exp(expr) => Expr::Exp(Box::new(expr.rename_variable(old_var, new_var))),
            Expr::Ln(expr) => Expr::Ln(Box::new(expr.rename_variable(old_var, new_var))),
            Expr::sin(expr) => Expr::sin(Box::new(expr.rename_variable(old_var, new_var))),
            Expr::cos(expr) => Expr::cos(Box::new(expr.rename_variable(old_var, new_var))),
            Expr::Integral {
                integrand,
                var,
                lower,
            } => {
                if var == old_var {
                    self.clone()
                } else {
                    Expr::Integral {
                        integrand: Box::new(integrand.rename_variable(old_var, new_var)),
                        var: var.clone(),
                        lower: *lower,
                    }
                }
            }
            _ => self.clone(),
        }
    }

    /// Algebraic simplification with identity rules: x+0=x, x*1=x, 0*x=0,
    /// x^1=x and constant folding. Applied recursively, one pass.
    pub fn simplify_(&self) -> Expr {
        match self {
            Expr::Add(lhs, rhs) => {
                let (l, r) = (lhs.simplify_(), rhs.simplify_());
                match (&l, &r) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (Expr::Const(a), _) if *a == 0.0 => r,
                    (_, Expr::Const(b)) if *b == 0.0 => l,
                    _ => l + r,
                }
            }
            Expr::Sub(lhs, rhs) => {
                let (l, r) = (lhs.simplify_(), rhs.simplify_());
                match (&l, &r) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (_, Expr::Const(b)) if *b == 0.0 => l,
                    _ => l - r,
                }
            }
            Expr::Mul(lhs, rhs) => {
                let (l, r) = (lhs.simplify_(), rhs.simplify_());
                match (&l, &r) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(0.0),
                    (Expr::Const(a), _) if *a == 1.0 => r,
                    (_, Expr::Const(b)) if *b == 1.0 => l,
                    _ => l * r,
                }
            }
            Expr::Div(lhs, rhs) => {
                let (l, r) = (lhs.simplify_(), rhs.simplify_());
                match (&l, &r) {
                    (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
                    (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(b)) if *b == 1.0 => l,
                    _ => l / r,
                }
            }
            Expr::Pow(base, exp) => {
                let (b, e) = (base.simplify_(), exp.simplify_());
                match (&b, &e) {
                    (Expr::Const(a), Expr::Const(c)) => Expr::Const(a.powf(*c)),
                    (_, Expr::Const(c)) if *c == 1.0 => b,
                    (_, Expr::Const(c)) if *c == 0.0 => Expr::Const(1.0),
                    _ => b.pow(e),
                }
            }
            Expr::Exp(expr) => Expr::Exp(Box::new(expr.simplify_())),
            Expr::Ln(expr) => Expr::Ln(Box::new(expr.simplify_())),
            Expr::sin(expr) => Expr::sin(Box::new(expr.simplify_())),
            Expr::cos(expr) => Expr::cos(Box::new(expr.simplify_())),
            Expr::Integral {
                integrand,
                var,
                lower,
            } => Expr::Integral {
                integrand: Box::new(integrand.simplify_()),
                var: var.clone(),
                lower: *lower,
            },
            _ => self.clone(),
        }
    }
}
