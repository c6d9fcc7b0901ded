//! Pre-measured benchmark operating points

use serde::{Deserialize, Serialize};

use crate::profile::{LatencyMetrics, Percentile};

/// Latency distribution for one metric, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyPercentiles {
    pub mean: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl LatencyPercentiles {
    /// Value of the requested percentile column
    pub const fn at(&self, percentile: Percentile) -> f64 {
        match percentile {
            Percentile::Mean => self.mean,
            Percentile::P90 => self.p90,
            Percentile::P95 => self.p95,
            Percentile::P99 => self.p99,
        }
    }
}

/// Physical serving configuration a benchmark row was measured on
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey {
    pub model_id: String,
    pub hardware: String,
    pub hardware_count: u32,
}

/// One measured operating point of a (model, hardware, traffic shape) combination
///
/// Several rows may exist for the same physical configuration at different
/// load levels; `requests_per_second` distinguishes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    /// Model repository identifier as benchmarked
    pub model_id: String,
    /// GPU type, e.g. `H100`
    pub hardware: String,
    /// GPUs per replica (tensor parallel degree)
    pub hardware_count: u32,
    pub prompt_tokens: u32,
    pub output_tokens: u32,
    /// Time to first token
    pub ttft: LatencyPercentiles,
    /// Inter-token latency
    pub itl: LatencyPercentiles,
    /// End-to-end request latency
    pub e2e: LatencyPercentiles,
    /// Output tokens generated per second at this load
    pub tokens_per_second: f64,
    /// Requests per second sustained at this load
    pub requests_per_second: f64,
}

impl BenchmarkRow {
    pub fn config_key(&self) -> ConfigKey {
        ConfigKey {
            model_id: self.model_id.clone(),
            hardware: self.hardware.clone(),
            hardware_count: self.hardware_count,
        }
    }

    /// TTFT / ITL / E2E at the given percentile
    pub const fn latency_at(&self, percentile: Percentile) -> LatencyMetrics {
        LatencyMetrics {
            ttft_ms: self.ttft.at(percentile),
            itl_ms: self.itl.at(percentile),
            e2e_ms: self.e2e.at(percentile),
        }
    }

    /// Whether every latency column at `percentile` is within `limits`
    pub fn within(&self, limits: &LatencyMetrics, percentile: Percentile) -> bool {
        let observed = self.latency_at(percentile);
        observed.ttft_ms <= limits.ttft_ms && observed.itl_ms <= limits.itl_ms && observed.e2e_ms <= limits.e2e_ms
    }
}
