//! Utility functions and helpers

pub mod formats;
pub mod search;

pub use formats::{from_sprs, to_dense, to_sprs};
pub use search::{locate, Located};

/// Prefix-sums per-row `counts` into `offsets`
///
/// `offsets` must hold `counts.len() + 1` slots. On return `offsets[i]` is the
/// start of row `i`, the last slot is the total, and each `counts[i]` is
/// overwritten with that same start so it can serve as the row's next free
/// write position.
///
/// Returns the total.
pub fn cumsum(offsets: &mut [u64], counts: &mut [u64]) -> u64 {
    debug_assert_eq!(offsets.len(), counts.len() + 1);

    let mut total = 0;
    for (offset, count) in offsets.iter_mut().zip(counts.iter_mut()) {
        *offset = total;
        total += *count;
        *count = *offset;
    }
    offsets[counts.len()] = total;

    total
}
