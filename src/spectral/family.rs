//! Orthogonal polynomial families.
//!
//! Legendre polynomials P_n are orthogonal on [-1, 1] with weight 1:
//! ∫ P_m P_n dx = 2/(2n+1) δ_mn. Chebyshev polynomials T_n are orthogonal
//! with weight 1/sqrt(1-x²): (T_m, T_n)_w = γ_n δ_mn, γ_0 = π, γ_n = π/2.
//! Every inner product in this crate is taken in the family's weighted
//! sense, so each family also provides the matching Gauss quadrature rule
//! (nodes and weights with the weight function folded in).

use gauss_quad::GaussLegendre;
use std::f64::consts::PI;
use strum_macros::{Display, EnumIter};

/// Closed enumeration of the supported polynomial families. The original
/// single-character tags 'L' and 'C' are parsed by `from_char`; anything
/// else is an error rather than silent fall-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum PolyFamily {
    Legendre,
    Chebyshev,
}

impl PolyFamily {
    pub fn from_char(tag: char) -> Result<Self, String> {
        match tag {
            'L' => Ok(PolyFamily::Legendre),
            'C' => Ok(PolyFamily::Chebyshev),
            other => Err(format!("unknown polynomial family tag '{}'", other)),
        }
    }

    /// Evaluate the n-th polynomial of the family at x by three-term recurrence.
    pub fn eval(&self, n: usize, x: f64) -> f64 {
        match self {
            PolyFamily::Legendre => legendre(n, x),
            PolyFamily::Chebyshev => chebyshev_t(n, x),
        }
    }

    /// Evaluate the derivative of the n-th polynomial at x.
    pub fn eval_deriv(&self, n: usize, x: f64) -> f64 {
        match self {
            PolyFamily::Legendre => legendre_derivative(n, x),
            PolyFamily::Chebyshev => chebyshev_t_derivative(n, x),
        }
    }

    /// Squared norm γ_n = (P_n, P_n)_w of the family's weighted inner product.
    pub fn norm_sq(&self, n: usize) -> f64 {
        match self {
            PolyFamily::Legendre => 2.0 / (2.0 * n as f64 + 1.0),
            PolyFamily::Chebyshev => {
                if n == 0 {
                    PI
                } else {
                    PI / 2.0
                }
            }
        }
    }

    /// Gauss quadrature rule with n nodes for the family's weighted inner
    /// product: sum_q w_q f(x_q) ≈ ∫ f(x) w(x) dx, exact for polynomials f
    /// of degree <= 2n-1. Nodes are returned in ascending order.
    pub fn quadrature(&self, n: usize) -> Result<(Vec<f64>, Vec<f64>), String> {
        if n == 0 {
            return Err("quadrature rule needs at least one node".to_string());
        }
        match self {
            PolyFamily::Legendre => {
                let quad = GaussLegendre::new(n)
                    .map_err(|e| format!("failed to create Gauss-Legendre quadrature: {:?}", e))?;
                let mut pairs: Vec<(f64, f64)> = quad.into_node_weight_pairs();
                pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
                let (nodes, weights) = pairs.into_iter().unzip();
                Ok((nodes, weights))
            }
            PolyFamily::Chebyshev => {
                // Chebyshev-Gauss: x_j = cos((2j+1)π/(2n)), uniform weights π/n
                let nodes: Vec<f64> = (0..n)
                    .rev()
                    .map(|j| ((2 * j + 1) as f64 * PI / (2.0 * n as f64)).cos())
                    .collect();
                let weights = vec![PI / n as f64; n];
                Ok((nodes, weights))
            }
        }
    }
}

/// Evaluate Legendre polynomial P_n(x).
///
/// P_0 = 1, P_1 = x, (k+1) P_{k+1} = (2k+1) x P_k - k P_{k-1}
pub fn legendre(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    if n == 1 {
        return x;
    }
    let mut p_prev = 1.0;
    let mut p_curr = x;
    for k in 1..n {
        let p_next = ((2 * k + 1) as f64 * x * p_curr - k as f64 * p_prev) / (k + 1) as f64;
        p_prev = p_curr;
        p_curr = p_next;
    }
    p_curr
}

/// Evaluate P'_n(x) through P'_n = n (x P_n - P_{n-1}) / (x² - 1),
/// with the endpoint limits P'_n(±1) = (±1)^{n+1} n(n+1)/2.
pub fn legendre_derivative(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if (x - 1.0).abs() < 1e-14 {
        return (n * (n + 1)) as f64 / 2.0;
    }
    if (x + 1.0).abs() < 1e-14 {
        let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
        return sign * (n * (n + 1)) as f64 / 2.0;
    }
    let p_n = legendre(n, x);
    let p_n_minus_1 = legendre(n - 1, x);
    n as f64 * (x * p_n - p_n_minus_1) / (x * x - 1.0)
}

/// Evaluate Chebyshev polynomial T_n(x).
///
/// T_0 = 1, T_1 = x, T_{k+1} = 2x T_k - T_{k-1}
pub fn chebyshev_t(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    if n == 1 {
        return x;
    }
    let mut t_prev = 1.0;
    let mut t_curr = x;
    for _ in 1..n {
        let t_next = 2.0 * x * t_curr - t_prev;
        t_prev = t_curr;
        t_curr = t_next;
    }
    t_curr
}

/// Evaluate T'_n(x) = n U_{n-1}(x), with U the second-kind Chebyshev
/// polynomials: U_0 = 1, U_1 = 2x, U_{k+1} = 2x U_k - U_{k-1}.
pub fn chebyshev_t_derivative(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let m = n - 1;
    let u = if m == 0 {
        1.0
    } else {
        let mut u_prev = 1.0;
        let mut u_curr = 2.0 * x;
        for _ in 1..m {
            let u_next = 2.0 * x * u_curr - u_prev;
            u_prev = u_curr;
            u_curr = u_next;
        }
        u_curr
    };
    n as f64 * u
}
