//! Property tests for graph matrix invariants

use std::collections::BTreeSet;

use graphmatrix::{canonicalize, locate, GraphMatrix, Located};
use proptest::prelude::*;

const DIM: u32 = 24;

fn edges() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0..DIM, 0..DIM), 0..120)
}

proptest! {
    #[test]
    fn insert_sets_entry_and_is_idempotent(edges in edges()) {
        let mut g = GraphMatrix::new(DIM).unwrap();
        for &(r, c) in &edges {
            g.insert(r, c).unwrap();
            prop_assert!(g.is_set(r, c));

            let before = g.cardinality();
            g.insert(r, c).unwrap();
            prop_assert_eq!(g.cardinality(), before);
        }

        let unique: BTreeSet<_> = edges.iter().copied().collect();
        prop_assert_eq!(g.cardinality(), unique.len() as u64);
    }

    #[test]
    fn row_matches_membership(edges in edges()) {
        let mut g = GraphMatrix::new(DIM).unwrap();
        for &(r, c) in &edges {
            g.insert(r, c).unwrap();
        }

        for r in 0..DIM {
            let row = g.row(r).unwrap();
            prop_assert!(row.windows(2).all(|w| w[0] < w[1]));

            let expected: Vec<u32> = (0..DIM).filter(|&c| g.is_set(r, c)).collect();
            prop_assert_eq!(row, expected.as_slice());
        }
    }

    #[test]
    fn canonical_build_iterates_unique_pairs_in_order(edges in edges()) {
        let (mut sources, mut destinations): (Vec<u32>, Vec<u32>) = edges.iter().copied().unzip();
        canonicalize(&mut sources, &mut destinations).unwrap();
        let g = GraphMatrix::from_sorted_ij(&sources, &destinations).unwrap();

        let expected: Vec<(u32, u32)> = edges.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let entries: Vec<(u32, u32)> = g.nonzeros().collect();

        prop_assert_eq!(entries.len() as u64, g.cardinality());
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn bulk_and_incremental_agree(edges in edges()) {
        let mut incremental = GraphMatrix::new(DIM).unwrap();
        for &(r, c) in &edges {
            incremental.insert(r, c).unwrap();
        }

        let (mut sources, mut destinations): (Vec<u32>, Vec<u32>) = edges.iter().copied().unzip();
        canonicalize(&mut sources, &mut destinations).unwrap();
        let sorted = GraphMatrix::from_sorted_ij_with_dim(&sources, &destinations, DIM).unwrap();
        let bucket = GraphMatrix::from_unsorted_ij_with_dim(&sources, &destinations, DIM).unwrap();

        prop_assert_eq!(&sorted, &incremental);
        prop_assert_eq!(&bucket, &incremental);
    }

    #[test]
    fn locate_finds_lower_bound(mut values in prop::collection::vec(0u32..100, 1..50), target in 0u32..100) {
        values.sort_unstable();
        values.dedup();
        let hi = values.len() as u64;

        let expected = values.partition_point(|&v| v < target);
        match locate(&values, target, 0, hi) {
            Located::Found(pos) => {
                prop_assert_eq!(pos, expected);
                prop_assert_eq!(values[pos], target);
            }
            Located::Vacant(pos) => {
                prop_assert_eq!(pos, expected);
                prop_assert!(!values.contains(&target));
            }
            Located::InvalidRange => prop_assert!(false, "valid range reported invalid"),
        }
    }
}

#[test]
fn locate_boundary_contracts() {
    let empty: [u32; 0] = [];
    assert_eq!(locate(&empty, 1, 0, 0), Located::Vacant(0));

    let seq = [2u32, 4, 6];
    assert_eq!(locate(&seq, 4, 2, 2), Located::Vacant(2));
    assert_eq!(locate(&seq, 4, 2, 1), Located::InvalidRange);
    assert_eq!(locate(&seq, 4, 0, 9), Located::InvalidRange);
    assert_eq!(locate(&seq, 4, 0, 9).position(), None);
}
