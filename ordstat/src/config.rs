//! Reduction configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How the reduction drivers treat NaN samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NanPolicy {
    /// Skip NaN values as if they were masked.
    #[default]
    Exclude,
    /// Any NaN among a unit's usable values makes that unit's output NaN.
    Propagate,
}

/// Parameters shared by all median reductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceConfig {
    /// Dedicated worker count. `None` runs on rayon's global pool.
    pub threads: Option<usize>,
    pub nan_policy: NanPolicy,
    /// Chunks scheduled per worker thread (load-balancing granularity).
    pub chunks_per_thread: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            threads: None,
            nan_policy: NanPolicy::default(),
            chunks_per_thread: common::DEFAULT_CHUNKS_PER_THREAD,
        }
    }
}

impl ReduceConfig {
    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Self = common::load_file(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded reduction config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
