//! Compressed Sparse Row (CSR) adjacency matrix for unweighted graphs

use std::fmt;

use num_traits::PrimInt;
use tracing::trace;

use crate::error::{GraphMatrixError, Result};
use crate::utils::search::{locate, Located};

/// A square boolean sparse matrix in Compressed Sparse Row (CSR) format
///
/// An entry at row `i`, column `j` is an edge from vertex `i` to vertex `j`,
/// so the matrix describes a directed graph. Undirected graphs must set the
/// reverse edge explicitly.
///
/// Storage is two arrays and no values array:
/// - row_offset: size dim + 1, row `i` occupies `column_ids[row_offset[i]..row_offset[i + 1]]`
/// - column_ids: size cardinality, ascending and unique within each row, every id `< dim`
///
/// Both arrays are private. Rows are exposed as borrowed slices through [`row`](Self::row).
#[derive(Clone, PartialEq, Eq)]
pub struct GraphMatrix {
    row_offset: Vec<u64>,
    column_ids: Vec<u32>,
}

impl GraphMatrix {
    /// Creates an empty `dim × dim` matrix
    ///
    /// Accepts any primitive integer. Fails with
    /// [`InvalidDimension`](GraphMatrixError::InvalidDimension) if `dim` is
    /// negative or larger than `u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphmatrix::GraphMatrix;
    ///
    /// let g = GraphMatrix::new(6).unwrap();
    /// assert_eq!(g.dimension(), 6);
    /// assert_eq!(g.cardinality(), 0);
    /// assert!(GraphMatrix::new(-1).is_err());
    /// ```
    pub fn new<D>(dim: D) -> Result<Self>
    where
        D: PrimInt + fmt::Display,
    {
        let n = dim
            .to_u32()
            .ok_or_else(|| GraphMatrixError::InvalidDimension {
                requested: dim.to_string(),
            })?;

        Ok(Self {
            row_offset: vec![0; n as usize + 1],
            column_ids: Vec::new(),
        })
    }

    /// Assembles a matrix from precomputed compressed-row arrays
    ///
    /// Every invariant is checked; a violation is reported as
    /// [`InvalidStructure`](GraphMatrixError::InvalidStructure).
    pub fn from_raw_parts(row_offset: Vec<u64>, column_ids: Vec<u32>) -> Result<Self> {
        let invalid = |msg: String| Err(GraphMatrixError::InvalidStructure(msg));

        let Some(&last) = row_offset.last() else {
            return invalid("row_offset must hold at least one entry".to_string());
        };
        let dim = row_offset.len() - 1;
        if dim > u32::MAX as usize {
            return invalid(format!("dimension {} exceeds u32::MAX", dim));
        }
        if row_offset[0] != 0 {
            return invalid(format!("row_offset[0] must be 0 (got {})", row_offset[0]));
        }
        if last != column_ids.len() as u64 {
            return invalid(format!(
                "row_offset[{}] must equal column_ids.len() (got {}, {})",
                dim,
                last,
                column_ids.len()
            ));
        }

        for (r, bounds) in row_offset.windows(2).enumerate() {
            let (start, end) = (bounds[0], bounds[1]);
            if start > end {
                return invalid(format!("row_offset decreases at row {}", r));
            }
            if end > last {
                return invalid(format!("row {} ends past column_ids.len()", r));
            }
            let cols = &column_ids[start as usize..end as usize];
            if cols.windows(2).any(|w| w[0] >= w[1]) {
                return invalid(format!("row {} is not strictly ascending", r));
            }
            if let Some(&c) = cols.last() {
                if c as usize >= dim {
                    return invalid(format!("column {} out of bounds in row {} (dim {})", c, r, dim));
                }
            }
        }

        Ok(Self::from_parts_unchecked(row_offset, column_ids))
    }

    /// Wraps arrays the builders have already validated
    pub(crate) fn from_parts_unchecked(row_offset: Vec<u64>, column_ids: Vec<u32>) -> Self {
        debug_assert!(!row_offset.is_empty());
        debug_assert_eq!(row_offset.last().copied(), Some(column_ids.len() as u64));
        Self {
            row_offset,
            column_ids,
        }
    }

    /// Borrowed views of both backing arrays, for in-crate conversions
    pub(crate) fn raw_parts(&self) -> (&[u64], &[u32]) {
        (&self.row_offset, &self.column_ids)
    }

    /// Returns the (single-axis) dimension of the matrix
    pub fn dimension(&self) -> u32 {
        (self.row_offset.len() - 1) as u32
    }

    /// Returns the number of set entries (edges)
    pub fn cardinality(&self) -> u64 {
        self.column_ids.len() as u64
    }

    /// Offsets of row `r` in `column_ids`; `r` must be in range
    #[inline]
    pub(crate) fn row_bounds(&self, r: u32) -> (u64, u64) {
        let r = r as usize;
        (self.row_offset[r], self.row_offset[r + 1])
    }

    /// Returns true if the entry at `(r, c)` is set
    ///
    /// Total over all inputs: any coordinate outside the matrix is reported
    /// as not set.
    pub fn is_set(&self, r: u32, c: u32) -> bool {
        let dim = self.dimension();
        if r >= dim || c >= dim {
            return false;
        }

        let (start, end) = self.row_bounds(r);
        if start >= end {
            return false;
        }
        locate(&self.column_ids, c, start, end).is_found()
    }

    /// Returns the set columns of row `r` in ascending order
    ///
    /// Fails with [`RowOutOfRange`](GraphMatrixError::RowOutOfRange) if
    /// `r >= dimension()`.
    pub fn row(&self, r: u32) -> Result<&[u32]> {
        let dim = self.dimension();
        if r >= dim {
            return Err(GraphMatrixError::RowOutOfRange { row: r, dim });
        }

        let (start, end) = self.row_bounds(r);
        Ok(&self.column_ids[start as usize..end as usize])
    }

    /// Number of set entries in row `r`
    pub fn out_degree(&self, r: u32) -> Result<u64> {
        self.row(r).map(|cols| cols.len() as u64)
    }

    /// Sets the entry at `(r, c)`; setting an already-set entry is a no-op
    ///
    /// This is the expensive path: the tail of the column array shifts by
    /// one and every row offset after `r` is incremented, so a single insert
    /// costs O(row length + dim - r). Use the bulk builders for anything
    /// beyond occasional edits.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphmatrix::GraphMatrix;
    ///
    /// let mut g = GraphMatrix::new(6).unwrap();
    /// g.insert(3, 3).unwrap();
    /// g.insert(1, 2).unwrap();
    /// assert!(g.is_set(1, 2));
    /// assert!(!g.is_set(2, 2));
    /// assert!(g.insert(1, 6).is_err());
    /// ```
    pub fn insert(&mut self, r: u32, c: u32) -> Result<()> {
        let dim = self.dimension();
        if r >= dim || c >= dim {
            return Err(GraphMatrixError::IndexOutOfRange { row: r, col: c, dim });
        }

        let (start, end) = self.row_bounds(r);
        let pos = match locate(&self.column_ids, c, start, end) {
            Located::Found(_) => return Ok(()),
            Located::Vacant(pos) => pos,
            Located::InvalidRange => {
                return Err(GraphMatrixError::InvalidStructure(format!(
                    "row {} spans {}..{} past {} column ids",
                    r,
                    start,
                    end,
                    self.column_ids.len()
                )));
            }
        };

        self.column_ids.insert(pos, c);
        for offset in &mut self.row_offset[r as usize + 1..] {
            *offset += 1;
        }

        trace!(row = r, col = c, pos, "inserted entry");
        Ok(())
    }
}

impl Default for GraphMatrix {
    /// The `0 × 0` matrix
    fn default() -> Self {
        Self {
            row_offset: vec![0],
            column_ids: Vec::new(),
        }
    }
}

/// Writes a slice as `[a b c]`
struct Spaced<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Spaced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for GraphMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GraphMatrix {}, {}, size {}",
            Spaced(&self.row_offset),
            Spaced(&self.column_ids),
            self.dimension()
        )
    }
}

impl fmt::Debug for GraphMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GraphMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.dimension(), self.dimension())?;
        writeln!(f, "  cardinality: {}", self.cardinality())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.dimension());

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for r in 0..max_rows_to_print {
                let (start, end) = self.row_bounds(r);
                let cols = &self.column_ids[start as usize..end as usize];

                if cols.is_empty() {
                    writeln!(f, "    row {}: (empty)", r)?;
                } else if cols.len() > 8 {
                    writeln!(f, "    row {}: {:?} ... ({} more)", r, &cols[..8], cols.len() - 8)?;
                } else {
                    writeln!(f, "    row {}: {:?}", r, cols)?;
                }
            }

            if self.dimension() > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.dimension() - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
