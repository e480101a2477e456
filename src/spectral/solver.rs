//! Sparse LU solve of the assembled weak-form system.

use crate::spectral::operator::PGOperator;
use faer::mat::Mat;
use faer::prelude::*;
use faer::sparse::{SparseColMat, Triplet};
use nalgebra::DVector;

/// Solve D u_hat = f_hat with a sparse LU factorization (faer).
///
/// The operator must be square and the load vector must match the test
/// dimension; both are checked. A singular operator surfaces as an error
/// from the factorization.
pub fn solve_sparse_lu(d: &PGOperator, f_hat: &DVector<f64>) -> Result<DVector<f64>, String> {
    let (n, m) = d.shape();
    if n != m {
        return Err(format!("operator is not square: {} x {}", n, m));
    }
    if f_hat.len() != n {
        return Err(format!(
            "load vector of length {} does not match operator of size {}",
            f_hat.len(),
            n
        ));
    }

    let triplets: Vec<Triplet<usize, usize, f64>> = d
        .matrix()
        .iter()
        .map(|(&val, (i, j))| Triplet::new(i, j, val))
        .collect();
    let sparse = SparseColMat::<usize, f64>::try_new_from_triplets(n, m, &triplets)
        .map_err(|e| format!("sparse matrix construction failed: {:?}", e))?;

    let lu = sparse
        .sp_lu()
        .map_err(|e| format!("sparse LU factorization failed: {:?}", e))?;

    let mut b: Mat<f64> = Mat::<f64>::zeros(n, 1);
    for i in 0..n {
        b[(i, 0)] = f_hat[i];
    }
    let x = lu.solve(b);

    Ok(DVector::from_iterator(n, (0..n).map(|i| x[(i, 0)])))
}
