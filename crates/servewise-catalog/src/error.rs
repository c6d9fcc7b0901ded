use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share a model id
    #[error("duplicate model id in catalog: {id}")]
    DuplicateModel { id: String },

    /// Hourly price is negative or not a number
    #[error("invalid hourly price for GPU '{gpu_type}': {value}")]
    InvalidPrice { gpu_type: String, value: f64 },
}
