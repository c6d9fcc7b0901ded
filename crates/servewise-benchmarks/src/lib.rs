//! Benchmark store for servewise
//!
//! Query interface over pre-measured performance rows, plus a file-backed
//! in-memory implementation. Stores return at most one row per physical
//! configuration: the highest sustainable throughput that meets the
//! latency limits.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod dedup;
mod error;
mod memory;

use async_trait::async_trait;
use servewise_core::{BenchmarkRow, LatencyMetrics, Percentile};

pub use dedup::select_max_throughput;
pub use error::StoreError;
pub use memory::InMemoryBenchmarkStore;

/// Latency-bounded lookup of benchmark rows for one traffic shape
#[derive(Debug, Clone, PartialEq)]
pub struct SloQuery {
    pub prompt_tokens: u32,
    pub output_tokens: u32,
    /// Upper bounds compared against the `percentile` column
    pub limits: LatencyMetrics,
    /// Rows below this requests-per-second level are ignored
    pub min_qps: f64,
    pub percentile: Percentile,
}

impl SloQuery {
    /// Whether a row has this traffic shape, enough throughput and latencies
    /// within the limits
    pub fn matches(&self, row: &BenchmarkRow) -> bool {
        row.prompt_tokens == self.prompt_tokens
            && row.output_tokens == self.output_tokens
            && row.requests_per_second >= self.min_qps
            && row.within(&self.limits, self.percentile)
    }
}

/// Source of benchmark rows
#[async_trait]
pub trait BenchmarkStore: Send + Sync {
    /// Rows matching the traffic shape whose latencies are within the limits,
    /// de-duplicated to the highest-QPS row per (model, hardware, hardware count)
    async fn find_configurations_meeting_slo(&self, query: &SloQuery) -> Result<Vec<BenchmarkRow>, StoreError>;

    /// Store name for logs
    fn name(&self) -> &str;
}
