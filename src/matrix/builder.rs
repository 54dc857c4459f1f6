//! Bulk construction from coordinate (edge) lists
//!
//! Two strategies build the compressed-row arrays directly instead of going
//! through repeated [`GraphMatrix::insert`] calls:
//!
//! - presorted: a linear scan over canonical input (see
//!   [`canonicalize`](crate::matrix::coords::canonicalize)) records where each
//!   row starts, O(n)
//! - bucket counting: a per-row histogram is prefix-summed into the offsets,
//!   then every column id is scattered into its row's next free slot, O(n + dim),
//!   and each row slice is sorted afterwards, adding O(Σ len·log len) over rows
//!
//! Without a declared dimension, it is inferred as one past the largest
//! vertex id seen in either sequence.

use tracing::debug;

use crate::error::{GraphMatrixError, Result};
use crate::matrix::config::BuildConfig;
use crate::matrix::coords::{canonicalize_with, pack_pair};
use crate::matrix::GraphMatrix;
use crate::utils::cumsum;

fn check_lengths(sources: &[u32], destinations: &[u32]) -> Result<()> {
    if sources.len() != destinations.len() {
        return Err(GraphMatrixError::LengthMismatch {
            sources: sources.len(),
            destinations: destinations.len(),
        });
    }
    Ok(())
}

/// `1 + max(id)` over both sequences, 0 for an empty edge list
fn infer_dimension(sources: &[u32], destinations: &[u32]) -> Result<u32> {
    let max_id = sources.iter().chain(destinations).copied().max();
    match max_id {
        None => Ok(0),
        Some(id) => id
            .checked_add(1)
            .ok_or_else(|| GraphMatrixError::InvalidDimension {
                requested: (u64::from(id) + 1).to_string(),
            }),
    }
}

fn check_bounds(sources: &[u32], destinations: &[u32], dim: u32) -> Result<()> {
    match sources
        .iter()
        .zip(destinations)
        .find(|&(&s, &d)| s >= dim || d >= dim)
    {
        Some((&row, &col)) => Err(GraphMatrixError::IndexOutOfRange { row, col, dim }),
        None => Ok(()),
    }
}

impl GraphMatrix {
    /// Builds a matrix from edges already sorted by source, then destination,
    /// with no duplicates
    ///
    /// The dimension is inferred from the largest vertex id.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphmatrix::GraphMatrix;
    ///
    /// let g = GraphMatrix::from_sorted_ij(&[0, 0, 1, 2], &[1, 2, 2, 3]).unwrap();
    /// assert_eq!(g.dimension(), 4);
    /// assert!(g.is_set(0, 1));
    /// assert!(!g.is_set(2, 1));
    /// ```
    pub fn from_sorted_ij(sources: &[u32], destinations: &[u32]) -> Result<Self> {
        check_lengths(sources, destinations)?;
        let dim = infer_dimension(sources, destinations)?;
        Self::from_sorted_ij_with_dim(sources, destinations, dim)
    }

    /// [`from_sorted_ij`](Self::from_sorted_ij) with a declared dimension
    ///
    /// Out-of-order input is rejected with
    /// [`NotCanonical`](GraphMatrixError::NotCanonical) and repeated edges
    /// with [`DuplicateEdge`](GraphMatrixError::DuplicateEdge).
    pub fn from_sorted_ij_with_dim(sources: &[u32], destinations: &[u32], dim: u32) -> Result<Self> {
        check_lengths(sources, destinations)?;
        check_bounds(sources, destinations, dim)?;

        for (i, (pair, next)) in sources
            .iter()
            .zip(destinations)
            .zip(sources.iter().zip(destinations).skip(1))
            .enumerate()
        {
            let (prev_key, key) = (pack_pair(*pair.0, *pair.1), pack_pair(*next.0, *next.1));
            if prev_key == key {
                return Err(GraphMatrixError::DuplicateEdge {
                    row: *next.0,
                    col: *next.1,
                });
            }
            if prev_key > key {
                return Err(GraphMatrixError::NotCanonical { position: i + 1 });
            }
        }

        let n = sources.len() as u64;
        let mut row_offset = Vec::with_capacity(dim as usize + 1);
        row_offset.push(0);

        // Each time the source advances, record where the skipped-to rows start
        for (idx, &s) in sources.iter().enumerate() {
            while row_offset.len() <= s as usize {
                row_offset.push(idx as u64);
            }
        }
        row_offset.resize(dim as usize + 1, n);

        debug!(dim, cardinality = n, "built graph matrix from sorted edges");
        Ok(Self::from_parts_unchecked(row_offset, destinations.to_vec()))
    }

    /// Builds a matrix from edges in any order by bucket counting
    ///
    /// The dimension is inferred from the largest vertex id. Edges must be
    /// unique; a repeated pair fails with
    /// [`DuplicateEdge`](GraphMatrixError::DuplicateEdge).
    pub fn from_unsorted_ij(sources: &[u32], destinations: &[u32]) -> Result<Self> {
        check_lengths(sources, destinations)?;
        let dim = infer_dimension(sources, destinations)?;
        Self::from_unsorted_ij_with_dim(sources, destinations, dim)
    }

    /// [`from_unsorted_ij`](Self::from_unsorted_ij) with a declared dimension
    pub fn from_unsorted_ij_with_dim(
        sources: &[u32],
        destinations: &[u32],
        dim: u32,
    ) -> Result<Self> {
        check_lengths(sources, destinations)?;
        check_bounds(sources, destinations, dim)?;

        let n_rows = dim as usize;

        // Histogram of row lengths, turned into next-free write offsets by cumsum
        let mut next_free = vec![0u64; n_rows];
        for &s in sources {
            next_free[s as usize] += 1;
        }
        let mut row_offset = vec![0u64; n_rows + 1];
        let n = cumsum(&mut row_offset, &mut next_free);

        let mut column_ids = vec![0u32; n as usize];
        for (&s, &d) in sources.iter().zip(destinations) {
            let slot = &mut next_free[s as usize];
            column_ids[*slot as usize] = d;
            *slot += 1;
        }

        // Scatter preserves input order within a row
        for (r, bounds) in row_offset.windows(2).enumerate() {
            let cols = &mut column_ids[bounds[0] as usize..bounds[1] as usize];
            cols.sort_unstable();
            if let Some(w) = cols.windows(2).find(|w| w[0] == w[1]) {
                return Err(GraphMatrixError::DuplicateEdge {
                    row: r as u32,
                    col: w[0],
                });
            }
        }

        debug!(dim, cardinality = n, "built graph matrix by bucket counting");
        Ok(Self::from_parts_unchecked(row_offset, column_ids))
    }

    /// Canonicalizes an arbitrary edge list, then builds from it
    ///
    /// Duplicate edges are dropped and the dimension is inferred.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphmatrix::GraphMatrix;
    ///
    /// let g = GraphMatrix::from_edges(&[1, 2, 3, 0, 0, 2], &[2, 3, 2, 1, 2, 3]).unwrap();
    /// assert_eq!(g.cardinality(), 5);
    /// ```
    pub fn from_edges(sources: &[u32], destinations: &[u32]) -> Result<Self> {
        Self::from_edges_with(sources, destinations, &BuildConfig::default())
    }

    /// [`from_edges`](Self::from_edges) with an explicit build configuration
    pub fn from_edges_with(
        sources: &[u32],
        destinations: &[u32],
        config: &BuildConfig,
    ) -> Result<Self> {
        check_lengths(sources, destinations)?;

        let mut sources = sources.to_vec();
        let mut destinations = destinations.to_vec();
        canonicalize_with(&mut sources, &mut destinations, config)?;

        Self::from_sorted_ij(&sources, &destinations)
    }

    /// Builds from `(source, destination)` tuples in any order, dropping duplicates
    pub fn from_edge_pairs<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let (mut sources, mut destinations): (Vec<u32>, Vec<u32>) = edges.into_iter().unzip();
        canonicalize_with(&mut sources, &mut destinations, &BuildConfig::default())?;

        Self::from_sorted_ij(&sources, &destinations)
    }
}
