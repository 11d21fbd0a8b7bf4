//! Error types for the smoothing brush

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// An orientation outside the six recognized directions. Caller bug.
    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),

    #[error("Invalid kernel: {0}")]
    InvalidKernel(String),

    #[error("Height map error: {0}")]
    HeightMap(String),

    /// Raised by a writer once its change budget is spent.
    #[error("Resource limit exceeded: more than {limit} voxel changes")]
    ResourceLimitExceeded { limit: usize },

    /// A brush region whose footprint is too large to extract.
    #[error("Region too large: {columns} columns, limit is {limit}")]
    RegionTooLarge { columns: usize, limit: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
