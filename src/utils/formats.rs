//! Utilities for converting between graph matrices and external libraries

use ndarray::Array2;
use sprs::CsMat;
use tracing::debug;

use crate::error::{GraphMatrixError, Result};
use crate::matrix::GraphMatrix;

/// Converts a graph matrix to an sprs CSR matrix with every set entry equal to 1
pub fn to_sprs(matrix: &GraphMatrix) -> CsMat<u8> {
    let (row_offset, column_ids) = matrix.raw_parts();
    let n = matrix.dimension() as usize;

    CsMat::new(
        (n, n),
        row_offset.iter().map(|&p| p as usize).collect(),
        column_ids.iter().map(|&c| c as usize).collect(),
        vec![1u8; column_ids.len()],
    )
}

/// Builds a graph matrix from the sparsity structure of a square sprs matrix
///
/// Stored values are ignored; every stored entry becomes an edge, including
/// explicitly stored zeros. CSC input is converted to CSR first.
pub fn from_sprs<N>(matrix: CsMat<N>) -> Result<GraphMatrix>
where
    N: Copy + Default,
{
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(GraphMatrixError::InvalidStructure(format!(
            "adjacency matrix must be square (got {} × {})",
            rows, cols
        )));
    }

    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (indptr, indices, _data) = matrix.into_raw_storage();
    let base = indptr.first().copied().unwrap_or(0);
    let row_offset = indptr.iter().map(|&p| (p - base) as u64).collect();
    let column_ids = indices
        .iter()
        .map(|&c| {
            u32::try_from(c).map_err(|_| {
                GraphMatrixError::InvalidStructure(format!("column {} does not fit in u32", c))
            })
        })
        .collect::<Result<Vec<u32>>>()?;

    debug!(dim = rows, nnz = column_ids.len(), "imported sprs matrix");
    GraphMatrix::from_raw_parts(row_offset, column_ids)
}

/// Expands a graph matrix into a dense boolean adjacency matrix
///
/// Allocates `dim²` cells; intended for small graphs and inspection.
pub fn to_dense(matrix: &GraphMatrix) -> Array2<bool> {
    let n = matrix.dimension() as usize;
    let mut dense = Array2::from_elem((n, n), false);

    for (r, c) in matrix {
        dense[[r as usize, c as usize]] = true;
    }

    dense
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphMatrix {
        GraphMatrix::from_sorted_ij(&[0, 0, 1, 2], &[1, 2, 2, 3]).unwrap()
    }

    #[test]
    fn test_sprs_roundtrip() {
        let original = sample();

        let sprs_mat = to_sprs(&original);
        assert_eq!(sprs_mat.shape(), (4, 4));
        assert_eq!(sprs_mat.nnz(), 4);
        assert_eq!(sprs_mat.get(0, 2), Some(&1));
        assert_eq!(sprs_mat.get(2, 1), None);

        let roundtrip = from_sprs(sprs_mat).unwrap();
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_from_sprs_csc() {
        let csc = to_sprs(&sample()).to_csc();
        assert!(csc.is_csc());

        let g = from_sprs(csc).unwrap();
        assert_eq!(g, sample());
    }

    #[test]
    fn test_from_sprs_rejects_non_square() {
        let rect = CsMat::new((2, 3), vec![0, 1, 1], vec![2], vec![1.0f64]);
        assert!(matches!(
            from_sprs(rect),
            Err(GraphMatrixError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_to_dense() {
        let dense = to_dense(&sample());

        assert_eq!(dense.dim(), (4, 4));
        assert!(dense[[0, 1]]);
        assert!(dense[[2, 3]]);
        assert!(!dense[[3, 2]]);
        assert_eq!(dense.iter().filter(|&&set| set).count(), 4);
    }
}
