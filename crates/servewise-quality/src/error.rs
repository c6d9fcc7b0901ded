use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading quality tables
#[derive(Debug, Error)]
pub enum QualityError {
    #[error("failed to read quality tables from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse quality tables: {0}")]
    Parse(#[from] toml::de::Error),
}
