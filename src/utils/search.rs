//! Binary search over a sorted sub-range of a slice
//!
//! Every lookup and insertion in [`GraphMatrix`](crate::GraphMatrix) goes
//! through [`locate`], bounded by a row's `[start, end)` offsets.

/// Outcome of a [`locate`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Located {
    /// Target present at this position
    Found(usize),
    /// Target absent; this is where it would be inserted
    Vacant(usize),
    /// `lo > hi`, or a bound lies past the end of the slice
    InvalidRange,
}

impl Located {
    /// Insertion (or match) position, `None` for an invalid range
    pub fn position(&self) -> Option<usize> {
        match *self {
            Located::Found(pos) | Located::Vacant(pos) => Some(pos),
            Located::InvalidRange => None,
        }
    }

    /// Whether the target was found
    pub fn is_found(&self) -> bool {
        matches!(self, Located::Found(_))
    }
}

/// Searches the ascending sub-range `[lo, hi)` of `sequence` for `target`
///
/// Boundary contracts, checked in this order:
///
/// 1. an empty `sequence` gives `Vacant(0)`
/// 2. an empty range (`lo == hi`) gives `Vacant(lo)`
/// 3. `lo > hi`, or either bound past `sequence.len()`, gives `InvalidRange`
///
/// Rule 2 is what yields the insertion point for an empty row.
///
/// # Examples
///
/// ```
/// use graphmatrix::utils::{locate, Located};
///
/// let cols = [1u32, 4, 9, 2, 3];
/// assert_eq!(locate(&cols, 4, 0, 3), Located::Found(1));
/// assert_eq!(locate(&cols, 5, 0, 3), Located::Vacant(2));
/// assert_eq!(locate(&cols, 5, 3, 1), Located::InvalidRange);
/// ```
pub fn locate<T: Ord + Copy>(sequence: &[T], target: T, lo: u64, hi: u64) -> Located {
    if sequence.is_empty() {
        return Located::Vacant(0);
    }
    if lo == hi {
        return Located::Vacant(lo as usize);
    }

    let len = sequence.len() as u64;
    if lo > hi || lo > len || hi > len {
        return Located::InvalidRange;
    }

    let (lo, hi) = (lo as usize, hi as usize);
    let pos = lo + sequence[lo..hi].partition_point(|&v| v < target);

    // A match just past `hi` belongs to the next row
    if pos < hi && sequence[pos] == target {
        Located::Found(pos)
    } else {
        Located::Vacant(pos)
    }
}
