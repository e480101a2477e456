//! Sparse weak-form operator.
//!
//! The discrete bilinear form between trial and test spaces is banded by
//! construction (orthogonality plus polynomial coefficients couple only a
//! few neighbouring degrees), so the operator is stored as a sprs CSR
//! matrix and exposes its diagonals for inspection and plotting.

use nalgebra::DMatrix;
use sprs::{CsMat, TriMat};
use std::collections::BTreeMap;
use std::ops::Add;

/// A weak-form matrix; rows run over test functions, columns over trial
/// functions.
#[derive(Debug, Clone)]
pub struct PGOperator {
    mat: CsMat<f64>,
}

impl PGOperator {
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, f64)],
    ) -> PGOperator {
        let mut tri = TriMat::new((rows, cols));
        for &(i, j, v) in triplets {
            tri.add_triplet(i, j, v);
        }
        PGOperator { mat: tri.to_csr() }
    }

    pub fn matrix(&self) -> &CsMat<f64> {
        &self.mat
    }

    pub fn shape(&self) -> (usize, usize) {
        self.mat.shape()
    }

    pub fn nnz(&self) -> usize {
        self.mat.nnz()
    }

    /// Nonzero diagonals: offset d = j - i mapped to the values along that
    /// diagonal (row order). Banded operators have few entries here.
    pub fn diags(&self) -> BTreeMap<isize, Vec<f64>> {
        let mut bands: BTreeMap<isize, Vec<f64>> = BTreeMap::new();
        for (&val, (i, j)) in self.mat.iter() {
            bands
                .entry(j as isize - i as isize)
                .or_default()
                .push(val);
        }
        bands
    }

    /// (lower, upper) bandwidth over the nonzero pattern: max i - j and
    /// max j - i.
    pub fn bandwidths(&self) -> (usize, usize) {
        let mut lower = 0isize;
        let mut upper = 0isize;
        for (_, (i, j)) in self.mat.iter() {
            lower = lower.max(i as isize - j as isize);
            upper = upper.max(j as isize - i as isize);
        }
        (lower as usize, upper as usize)
    }

    /// Positions of the nonzero entries, for sparsity plots.
    pub fn nonzero_positions(&self) -> Vec<(usize, usize)> {
        self.mat.iter().map(|(_, (i, j))| (i, j)).collect()
    }

    pub fn to_dense(&self) -> DMatrix<f64> {
        let (rows, cols) = self.mat.shape();
        let mut dense = DMatrix::zeros(rows, cols);
        for (&val, (i, j)) in self.mat.iter() {
            dense[(i, j)] = val;
        }
        dense
    }
}

impl Add for &PGOperator {
    type Output = PGOperator;

    fn add(self, rhs: &PGOperator) -> PGOperator {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "cannot sum weak-form operators of different shapes"
        );
        PGOperator {
            mat: &self.mat + &rhs.mat,
        }
    }
}
