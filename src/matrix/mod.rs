// Graph matrix data structures and construction

pub mod builder;
pub mod config;
pub mod coords;
pub mod csr;
pub mod iter;

pub use config::BuildConfig;
pub use coords::{canonicalize, canonicalize_with, pack_pair, uniq_sorted, unpack_pair};
pub use csr::GraphMatrix;
pub use iter::NonzeroIter;
