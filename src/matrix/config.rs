//! Configuration for bulk construction

/// Default number of edges above which coordinate sorting runs in parallel
pub const DEFAULT_PARALLEL_SORT_THRESHOLD: usize = 1 << 16;

/// Tuning knobs for canonicalization and bulk building
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Edge count at or above which the coordinate sort uses rayon
    pub parallel_sort_threshold: usize,

    /// Size of the rayon pool used for parallel sorting
    pub n_threads: usize,

    /// Whether parallel sorting may be used at all
    pub enable_parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        let n_threads = num_cpus::get(); // Use all available cores
        Self {
            parallel_sort_threshold: DEFAULT_PARALLEL_SORT_THRESHOLD,
            n_threads,
            enable_parallel: n_threads > 1,
        }
    }
}

impl BuildConfig {
    /// A config that never leaves the calling thread
    pub fn sequential() -> Self {
        Self {
            parallel_sort_threshold: usize::MAX,
            n_threads: 1,
            enable_parallel: false,
        }
    }

    /// Whether an input of `n_edges` should be sorted in parallel
    pub fn use_parallel_sort(&self, n_edges: usize) -> bool {
        self.enable_parallel && self.n_threads > 1 && n_edges >= self.parallel_sort_threshold
    }
}
