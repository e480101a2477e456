//! Polynomial function spaces on [-1, 1].
//!
//! A `FunctionSpace` is a polynomial approximation space of a chosen family
//! and size together with its Gauss quadrature mesh. Three basis variants
//! are supported:
//! - `Orthogonal`: the raw family polynomials P_0..P_{size-1};
//! - `BCLeftDirichlet`: φ_k = P_k + P_{k+1}, every φ_k vanishes at x = -1
//!   (the trial basis, boundary condition absorbed into the basis);
//! - `Phi1`: ψ_k = P_k - P_{k+2}, vanishing at both endpoints (the test
//!   basis dual to first-derivative forms; keeps the weak-form operator
//!   banded).
//!
//! A coefficient vector is only meaningful against the space it was
//! produced by; transforms check dimensions and return errors on mismatch.

use crate::spectral::family::PolyFamily;
use crate::symbolic::symbolic_engine::Expr;
use nalgebra::DVector;
use strum_macros::Display;

/// Closed enumeration of basis variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BasisKind {
    Orthogonal,
    BCLeftDirichlet,
    Phi1,
}

/// A polynomial space of `size` modes with its quadrature mesh.
#[derive(Debug, Clone)]
pub struct FunctionSpace {
    family: PolyFamily,
    size: usize,
    basis: BasisKind,
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl FunctionSpace {
    pub fn new(size: usize, family: PolyFamily, basis: BasisKind) -> Result<Self, String> {
        let min_size = match basis {
            BasisKind::Orthogonal => 1,
            BasisKind::BCLeftDirichlet => 2,
            BasisKind::Phi1 => 3,
        };
        if size < min_size {
            return Err(format!(
                "space of size {} is too small for basis {} (minimum {})",
                size, basis, min_size
            ));
        }
        let (nodes, weights) = family.quadrature(size)?;
        Ok(FunctionSpace {
            family,
            size,
            basis,
            nodes,
            weights,
        })
    }

    pub fn family(&self) -> PolyFamily {
        self.family
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of basis functions actually spanned by this space: the
    /// boundary-adapted variants consume one or two modes.
    pub fn dims(&self) -> usize {
        match self.basis {
            BasisKind::Orthogonal => self.size,
            BasisKind::BCLeftDirichlet => self.size - 1,
            BasisKind::Phi1 => self.size - 2,
        }
    }

    /// Quadrature nodes of the space, ascending.
    pub fn mesh(&self) -> &[f64] {
        &self.nodes
    }

    /// Quadrature weights matching `mesh()`, weight function included.
    pub fn quad_weights(&self) -> &[f64] {
        &self.weights
    }

    /// Evaluate the k-th basis function at x.
    pub fn evaluate_basis(&self, k: usize, x: f64) -> f64 {
        match self.basis {
            BasisKind::Orthogonal => self.family.eval(k, x),
            BasisKind::BCLeftDirichlet => self.family.eval(k, x) + self.family.eval(k + 1, x),
            BasisKind::Phi1 => self.family.eval(k, x) - self.family.eval(k + 2, x),
        }
    }

    /// Evaluate the derivative of the k-th basis function at x.
    pub fn evaluate_basis_deriv(&self, k: usize, x: f64) -> f64 {
        match self.basis {
            BasisKind::Orthogonal => self.family.eval_deriv(k, x),
            BasisKind::BCLeftDirichlet => {
                self.family.eval_deriv(k, x) + self.family.eval_deriv(k + 1, x)
            }
            BasisKind::Phi1 => self.family.eval_deriv(k, x) - self.family.eval_deriv(k + 2, x),
        }
    }

    /// Sample a symbolic expression on the quadrature mesh.
    pub fn sample(&self, expr: &Expr) -> DVector<f64> {
        let f = expr.lambdify1D();
        DVector::from_iterator(self.nodes.len(), self.nodes.iter().map(|&x| f(x)))
    }

    /// Scalar product of point samples against every basis function:
    /// f_hat[k] = sum_q w_q f(x_q) φ_k(x_q) ≈ (f, φ_k)_w.
    pub fn scalar_product(&self, samples: &DVector<f64>) -> Result<DVector<f64>, String> {
        if samples.len() != self.nodes.len() {
            return Err(format!(
                "samples of length {} do not live on the mesh of a size-{} space",
                samples.len(),
                self.size
            ));
        }
        let mut f_hat = DVector::zeros(self.dims());
        for k in 0..self.dims() {
            let mut acc = 0.0;
            for (q, &x) in self.nodes.iter().enumerate() {
                acc += self.weights[q] * samples[q] * self.evaluate_basis(k, x);
            }
            f_hat[k] = acc;
        }
        Ok(f_hat)
    }

    /// Forward transform: point samples -> spectral coefficients. Only the
    /// orthogonal basis admits the diagonal inversion ĉ_n = (f, P_n)_w / γ_n.
    pub fn forward(&self, samples: &DVector<f64>) -> Result<DVector<f64>, String> {
        if self.basis != BasisKind::Orthogonal {
            return Err(format!(
                "forward transform is defined for the orthogonal basis, not {}",
                self.basis
            ));
        }
        let mut c = self.scalar_product(samples)?;
        for n in 0..c.len() {
            c[n] /= self.family.norm_sq(n);
        }
        Ok(c)
    }

    /// Backward transform: spectral coefficients -> point samples on the mesh.
    pub fn backward(&self, coeffs: &DVector<f64>) -> Result<DVector<f64>, String> {
        if coeffs.len() != self.dims() {
            return Err(format!(
                "coefficient vector of length {} is not from this space (dims {})",
                coeffs.len(),
                self.dims()
            ));
        }
        let mut samples = DVector::zeros(self.nodes.len());
        for (q, &x) in self.nodes.iter().enumerate() {
            let mut acc = 0.0;
            for k in 0..coeffs.len() {
                acc += coeffs[k] * self.evaluate_basis(k, x);
            }
            samples[q] = acc;
        }
        Ok(samples)
    }

    /// The plain orthogonal space of the same family and size.
    pub fn get_orthogonal(&self) -> FunctionSpace {
        FunctionSpace {
            family: self.family,
            size: self.size,
            basis: BasisKind::Orthogonal,
            nodes: self.nodes.clone(),
            weights: self.weights.clone(),
        }
    }

    /// Pad (with zeros) or truncate an orthogonal coefficient vector to a
    /// new length, reinterpreting it in a space of that size.
    pub fn refine(coeffs: &DVector<f64>, new_len: usize) -> DVector<f64> {
        let mut out = DVector::zeros(new_len);
        for n in 0..new_len.min(coeffs.len()) {
            out[n] = coeffs[n];
        }
        out
    }
}
