//! Planner error types

use servewise_benchmarks::StoreError;
use servewise_catalog::CatalogError;
use servewise_core::ValidationError;
use servewise_quality::QualityError;
use thiserror::Error;

/// Errors surfaced by planning and recommendation
///
/// An empty result is not an error: "no viable configuration" is reported
/// as empty ranked lists.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Request rejected before planning
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// Benchmark store query failed
    #[error("benchmark store failure: {0}")]
    Store(#[from] StoreError),

    /// Catalog could not be loaded
    #[error("catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    /// Quality tables could not be loaded
    #[error("quality tables unavailable: {0}")]
    Quality(#[from] QualityError),
}
