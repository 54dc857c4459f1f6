//! Error types for graph matrix construction and access

use thiserror::Error;

/// Errors returned by [`GraphMatrix`](crate::GraphMatrix) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphMatrixError {
    /// Requested dimension is negative or too large for `u32` column ids
    #[error("dimensions must be non-negative and at most {max} (got {requested})", max = u32::MAX)]
    InvalidDimension { requested: String },

    /// Source and destination sequences are paired positionally and must agree in length
    #[error("graph inputs must be of the same length (got {sources}, {destinations})")]
    LengthMismatch { sources: usize, destinations: usize },

    /// An edge endpoint lies outside the matrix
    #[error("index ({row}, {col}) out of range for dimension {dim}")]
    IndexOutOfRange { row: u32, col: u32, dim: u32 },

    /// Row retrieval past the last row
    #[error("row {row} out of bounds (dimension {dim})")]
    RowOutOfRange { row: u32, dim: u32 },

    /// Presorted builder input is out of order at this index
    #[error("edge list is not sorted at position {position}")]
    NotCanonical { position: usize },

    /// Builder input repeats an edge; canonicalize the edge list first
    #[error("duplicate edge ({row}, {col})")]
    DuplicateEdge { row: u32, col: u32 },

    /// Raw arrays violate the compressed-row invariants
    #[error("invalid compressed-row structure: {0}")]
    InvalidStructure(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraphMatrixError>;
