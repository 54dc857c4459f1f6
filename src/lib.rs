//! # graphmatrix: sparse adjacency matrices for unweighted graphs
//!
//! A directed, unweighted graph stored as a square boolean matrix in
//! compressed-row (CSR) form. Only the structure is kept: a row-offset array
//! and a column-id array, with no values array.
//!
//! ## Overview
//!
//! - **Matrix core**: [`GraphMatrix`] with membership tests, row retrieval and
//!   single-edge insertion
//! - **Bulk construction**: [`canonicalize`] sorts and deduplicates an edge
//!   list, then [`GraphMatrix::from_sorted_ij`] builds the arrays in one pass
//! - **Iteration**: [`NonzeroIter`] walks every set entry in row-major order
//! - **Interop**: conversion to and from [`sprs`] matrices and dense
//!   [`ndarray`] views in [`utils`]
//!
//! ## Choosing a construction path
//!
//! [`GraphMatrix::insert`] shifts the column array and every later row offset,
//! so it costs O(row length + dim) per edge. It is meant for occasional
//! edits. Anything larger should go through the bulk builders, which are
//! linear in the number of edges.
//!
//! ## Usage
//!
//! ```
//! use graphmatrix::{canonicalize, GraphMatrix};
//!
//! // Edge list in arbitrary order, with (0, 2) repeated
//! let mut sources = vec![1, 2, 3, 0, 0, 2];
//! let mut destinations = vec![2, 3, 2, 1, 2, 3];
//! canonicalize(&mut sources, &mut destinations).unwrap();
//!
//! let g = GraphMatrix::from_sorted_ij(&sources, &destinations).unwrap();
//! assert_eq!(g.cardinality(), 5);
//! assert_eq!(g.row(0).unwrap(), &[1, 2]);
//!
//! for (r, c) in &g {
//!     assert!(g.is_set(r, c));
//! }
//! ```
//!
//! ## Sharing
//!
//! A [`GraphMatrix`] is a plain value with no interior synchronization. Any
//! number of readers and iterators may share it, or a single writer may hold
//! it exclusively; across threads that discipline is up to the caller (an
//! `RwLock`, for instance). Bulk-built matrices that are never mutated are the
//! natural fit for sharing.

pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{GraphMatrixError, Result};
pub use matrix::{canonicalize, canonicalize_with, BuildConfig, GraphMatrix, NonzeroIter};
pub use utils::{from_sprs, locate, to_dense, to_sprs, Located};

/// Version information for the graphmatrix library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
