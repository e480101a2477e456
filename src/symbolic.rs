#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// # Symbolic engine
/// a module that
/// 1) builds symbolic expressions in one real variable with operator overloading
/// 2) computes analytical derivatives, including the variable-upper-limit integral rule
/// 3) turns a symbolic expression into a regular Rust function (lambdification)
///
/// # Example
/// ```
/// use RustedSpectral::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let f = x.clone().pow(Expr::Const(2.0)) + x.exp();
/// let df_dx = f.diff("x");
/// println!("df_dx = {}", df_dx);
/// let f_num = f.lambdify1D();
/// println!("f(1) = {}", f_num(1.0));
/// ```
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
/// lambdification: turn a symbolic expression into Box<dyn Fn(f64) -> f64>;
/// the integral variant is evaluated through Gauss-Legendre quadrature
pub mod symbolic_lambdify;
