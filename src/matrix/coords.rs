//! Coordinate-list canonicalization
//!
//! Edge lists arrive as two positionally paired vectors. Packing each
//! `(source, destination)` pair into one `u64` key (`source << 32 | destination`)
//! makes a plain integer sort produce row-major, column-ascending order,
//! which is exactly what the presorted builder expects.

use rayon::prelude::*;
use tracing::{trace, warn};

use crate::error::{GraphMatrixError, Result};
use crate::matrix::config::BuildConfig;

/// Packs an edge into a single sortable key
#[inline]
pub fn pack_pair(source: u32, destination: u32) -> u64 {
    (u64::from(source) << 32) | u64::from(destination)
}

/// Inverse of [`pack_pair`]
#[inline]
pub fn unpack_pair(key: u64) -> (u32, u32) {
    ((key >> 32) as u32, key as u32)
}

/// Removes adjacent duplicates from a sorted vector, keeping the first of each run
pub fn uniq_sorted(keys: &mut Vec<u64>) {
    keys.dedup();
}

/// Sorts packed keys, in a pool of `n_threads` rayon workers when `parallel`
fn sort_keys(keys: &mut [u64], parallel: bool, n_threads: usize) {
    if !parallel {
        keys.sort_unstable();
        return;
    }

    match rayon::ThreadPoolBuilder::new().num_threads(n_threads).build() {
        Ok(pool) => pool.install(|| keys.par_sort_unstable()),
        Err(err) => {
            warn!(%err, n_threads, "could not build sort pool, using the global pool");
            keys.par_sort_unstable();
        }
    }
}

/// Sorts edges by source then destination and drops duplicate pairs
///
/// Both vectors are rewritten in place and truncated to the number of unique
/// pairs, which is also returned. Fails with
/// [`LengthMismatch`](GraphMatrixError::LengthMismatch) if the vectors differ
/// in length.
///
/// # Examples
///
/// ```
/// use graphmatrix::canonicalize;
///
/// let mut sources = vec![1, 2, 3, 0, 0, 2];
/// let mut destinations = vec![2, 3, 2, 1, 2, 3];
///
/// let unique = canonicalize(&mut sources, &mut destinations).unwrap();
/// assert_eq!(unique, 5);
/// assert_eq!(sources, vec![0, 0, 1, 2, 3]);
/// assert_eq!(destinations, vec![1, 2, 2, 3, 2]);
/// ```
pub fn canonicalize(sources: &mut Vec<u32>, destinations: &mut Vec<u32>) -> Result<usize> {
    canonicalize_with(sources, destinations, &BuildConfig::default())
}

/// [`canonicalize`] with explicit control over parallel sorting
pub fn canonicalize_with(
    sources: &mut Vec<u32>,
    destinations: &mut Vec<u32>,
    config: &BuildConfig,
) -> Result<usize> {
    if sources.len() != destinations.len() {
        return Err(GraphMatrixError::LengthMismatch {
            sources: sources.len(),
            destinations: destinations.len(),
        });
    }

    let mut keys: Vec<u64> = sources
        .iter()
        .zip(destinations.iter())
        .map(|(&s, &d)| pack_pair(s, d))
        .collect();

    let parallel = config.use_parallel_sort(keys.len());
    sort_keys(&mut keys, parallel, config.n_threads);
    uniq_sorted(&mut keys);

    trace!(
        input = sources.len(),
        unique = keys.len(),
        parallel,
        "canonicalized edge list"
    );

    sources.truncate(keys.len());
    destinations.truncate(keys.len());
    for ((s, d), &key) in sources.iter_mut().zip(destinations.iter_mut()).zip(&keys) {
        (*s, *d) = unpack_pair(key);
    }

    Ok(keys.len())
}
