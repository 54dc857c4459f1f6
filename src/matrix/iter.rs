//! Row-major iteration over every set entry

use std::iter::FusedIterator;

use crate::matrix::GraphMatrix;

/// Iterator over the set entries of a [`GraphMatrix`], yielding `(row, col)`
///
/// Entries come out row by row, columns ascending within a row. Empty rows are
/// skipped. The iterator holds a shared borrow of the matrix, so the matrix
/// cannot be modified while iteration is in progress.
///
/// # Examples
///
/// ```
/// use graphmatrix::GraphMatrix;
///
/// let g = GraphMatrix::from_sorted_ij(&[0, 0, 2], &[1, 2, 0]).unwrap();
/// let entries: Vec<_> = g.nonzeros().collect();
/// assert_eq!(entries, vec![(0, 1), (0, 2), (2, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct NonzeroIter<'a> {
    matrix: &'a GraphMatrix,
    row: u32,
    col_index: u64,
    emitted: u64,
}

impl<'a> NonzeroIter<'a> {
    pub(crate) fn new(matrix: &'a GraphMatrix) -> Self {
        Self {
            matrix,
            row: 0,
            col_index: 0,
            emitted: 0,
        }
    }

    /// Number of entries yielded so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl Iterator for NonzeroIter<'_> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted == self.matrix.cardinality() {
            return None;
        }

        // Entries remain, so some row at or after the current one still has columns
        let (mut start, mut end) = self.matrix.row_bounds(self.row);
        while start + self.col_index >= end {
            self.row += 1;
            self.col_index = 0;
            (start, end) = self.matrix.row_bounds(self.row);
        }

        let (_, column_ids) = self.matrix.raw_parts();
        let col = column_ids[(start + self.col_index) as usize];

        self.col_index += 1;
        self.emitted += 1;
        Some((self.row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.matrix.cardinality() - self.emitted) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for NonzeroIter<'_> {}

impl FusedIterator for NonzeroIter<'_> {}

impl GraphMatrix {
    /// Iterates over every set entry in row-major order
    pub fn nonzeros(&self) -> NonzeroIter<'_> {
        NonzeroIter::new(self)
    }
}

impl<'a> IntoIterator for &'a GraphMatrix {
    type Item = (u32, u32);
    type IntoIter = NonzeroIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.nonzeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero_iteration() {
        let mut a = vec![0, 0, 1, 1, 1, 2, 3, 4, 4, 5, 10];
        let mut b = vec![1, 2, 0, 2, 3, 4, 4, 0, 5, 1, 8];
        crate::canonicalize(&mut a, &mut b).unwrap();
        let g = GraphMatrix::from_sorted_ij(&a, &b).unwrap();

        let mut count = 0;
        for (r, c) in &g {
            assert!(g.is_set(r, c), "({}, {}) not found in graph", r, c);
            count += 1;
        }
        assert_eq!(count, a.len());
        assert_eq!(count as u64, g.cardinality());
    }

    #[test]
    fn test_order_and_empty_rows() {
        let g = GraphMatrix::from_sorted_ij(&[1, 1, 4, 6], &[0, 3, 4, 2]).unwrap();
        let entries: Vec<_> = g.nonzeros().collect();

        assert_eq!(entries, vec![(1, 0), (1, 3), (4, 4), (6, 2)]);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let g = GraphMatrix::from_sorted_ij(&[0], &[0]).unwrap();
        let mut it = g.nonzeros();

        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some((0, 0)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.emitted(), 1);
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let g = GraphMatrix::from_sorted_ij(&[0, 1, 1, 3], &[2, 0, 3, 1]).unwrap();
        let mut it = g.nonzeros();

        assert_eq!(it.size_hint(), (4, Some(4)));
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.by_ref().count(), 2);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_empty_matrices() {
        assert_eq!(GraphMatrix::default().nonzeros().next(), None);
        assert_eq!(GraphMatrix::new(5).unwrap().nonzeros().count(), 0);
    }

    #[test]
    fn test_last_row_entries() {
        let mut g = GraphMatrix::new(3).unwrap();
        g.insert(2, 0).unwrap();
        g.insert(2, 2).unwrap();

        let entries: Vec<_> = g.nonzeros().collect();
        assert_eq!(entries, vec![(2, 0), (2, 2)]);
    }
}
