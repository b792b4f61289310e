//! Error types for order statistics and median reductions.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported at the crate boundary.
///
/// The unchecked core (`select`, `median1d`, the networks) never returns these;
/// they come from the validating entry points and the reduction drivers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot select from an empty sample")]
    EmptySample,

    #[error("Selection index {k} out of range for sample of length {len}")]
    IndexOutOfRange { k: usize, len: usize },

    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to reserve scratch buffer of {len} samples: {source}")]
    ScratchAllocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to load configuration '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: common::FileFormatError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
