#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// orthogonal polynomial families (Legendre, Chebyshev): recurrence
/// evaluation, derivatives, weighted norms and Gauss quadrature rules
pub mod family;
/// polynomial function spaces with plain orthogonal, boundary-adapted and
/// Phi1 (dual) bases; transforms between spectral coefficients and point
/// samples on the space's quadrature mesh
pub mod space;
/// sparse weak-form operator with banded-structure introspection
pub mod operator;
/// sparse LU solve of the assembled operator
pub mod solver;
mod spectral_tests;
