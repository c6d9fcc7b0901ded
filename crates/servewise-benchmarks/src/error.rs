use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by benchmark stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing data could not be read
    #[error("failed to read benchmark data from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing data is malformed
    #[error("failed to parse benchmark data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Store is unreachable or returned an error
    #[error("benchmark store unavailable: {0}")]
    Unavailable(String),
}
