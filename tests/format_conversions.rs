//! Tests for conversions between graph matrices and external formats

use graphmatrix::{from_sprs, to_dense, to_sprs, GraphMatrix};
use sprs::TriMat;

#[test]
fn test_sprs_roundtrip_preserves_structure() {
    let original = GraphMatrix::from_edges(&[3, 0, 2, 0, 1], &[0, 2, 2, 1, 3]).unwrap();

    let sprs_mat = to_sprs(&original);
    assert_eq!(sprs_mat.rows(), 4);
    assert_eq!(sprs_mat.cols(), 4);
    assert_eq!(sprs_mat.nnz() as u64, original.cardinality());

    for (r, c) in &original {
        assert_eq!(sprs_mat.get(r as usize, c as usize), Some(&1));
    }

    let roundtrip = from_sprs(sprs_mat).unwrap();
    assert_eq!(roundtrip, original);
}

#[test]
fn test_from_sprs_triplets() {
    // Values are ignored, only the sparsity pattern becomes edges
    let mut tri = TriMat::new((3, 3));
    tri.add_triplet(2, 0, 0.5f64);
    tri.add_triplet(0, 1, 2.0);
    tri.add_triplet(0, 0, -1.0);

    let g = from_sprs(tri.to_csr::<usize>()).unwrap();

    assert_eq!(g.dimension(), 3);
    assert_eq!(g.row(0).unwrap(), &[0, 1]);
    assert!(g.row(1).unwrap().is_empty());
    assert_eq!(g.row(2).unwrap(), &[0]);
}

#[test]
fn test_dense_view_matches_membership() {
    let g = GraphMatrix::from_sorted_ij(&[0, 1, 1, 4], &[4, 0, 2, 4]).unwrap();
    let dense = to_dense(&g);

    for r in 0..g.dimension() {
        for c in 0..g.dimension() {
            assert_eq!(dense[[r as usize, c as usize]], g.is_set(r, c));
        }
    }
}
