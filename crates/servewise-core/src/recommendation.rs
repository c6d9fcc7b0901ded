//! Scored candidate configurations and ranked views

use serde::{Deserialize, Serialize};

use crate::benchmark::ConfigKey;
use crate::profile::Percentile;

/// GPU topology of a candidate deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuConfig {
    pub gpu_type: String,
    /// Total GPUs across all replicas
    pub gpu_count: u32,
    /// GPUs cooperating on one replica
    pub tensor_parallel: u32,
    /// Independent copies of the model
    pub replicas: u32,
}

/// How the predicted latency compares with the SLO targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SloStatus {
    /// Every metric within target
    Compliant,
    /// Worst metric at most 20% over target
    NearMiss,
    /// Worst metric more than 20% over target
    Exceeds,
}

/// Per-axis scores of a candidate, all within 0-100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationScores {
    pub accuracy_score: u8,
    pub price_score: u8,
    pub latency_score: u8,
    pub complexity_score: u8,
    pub balanced_score: f64,
    pub slo_status: SloStatus,
}

/// A benchmark row joined with catalog data, sizing, cost and scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub model_id: String,
    pub model_name: String,
    pub gpu_config: GpuConfig,
    /// Latency percentile the predictions were read from
    pub percentile: Percentile,
    pub predicted_ttft_ms: f64,
    pub predicted_itl_ms: f64,
    pub predicted_e2e_ms: f64,
    /// Requests per second across all replicas
    pub predicted_throughput_qps: f64,
    /// Output tokens per second of a single replica
    pub tokens_per_second: f64,
    pub cost_per_hour_usd: f64,
    pub cost_per_month_usd: f64,
    pub meets_slo: bool,
    pub scores: ConfigurationScores,
    pub reasoning: String,
}

impl Candidate {
    pub fn config_key(&self) -> ConfigKey {
        ConfigKey {
            model_id: self.model_id.clone(),
            hardware: self.gpu_config.gpu_type.clone(),
            hardware_count: self.gpu_config.tensor_parallel,
        }
    }
}

/// Five trade-off views over the same scored candidates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedLists {
    pub best_accuracy: Vec<Candidate>,
    pub lowest_cost: Vec<Candidate>,
    pub lowest_latency: Vec<Candidate>,
    pub simplest: Vec<Candidate>,
    pub balanced: Vec<Candidate>,
    /// Candidates produced by the planner before ranking filters
    pub total_configs_evaluated: usize,
    /// Candidates left after accuracy and cost filters
    pub configs_after_filters: usize,
}

impl RankedLists {
    pub fn is_empty(&self) -> bool {
        self.best_accuracy.is_empty()
            && self.lowest_cost.is_empty()
            && self.lowest_latency.is_empty()
            && self.simplest.is_empty()
            && self.balanced.is_empty()
    }
}
