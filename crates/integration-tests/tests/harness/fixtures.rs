//! Fixture benchmark rows, catalog and quality tables

use std::sync::Arc;

use servewise_benchmarks::InMemoryBenchmarkStore;
use servewise_catalog::{GpuPricing, ModelCatalog, ModelInfo};
use servewise_config::{PlannerConfig, RankingConfig};
use servewise_core::{
    BenchmarkRow, DeploymentIntent, LatencyPercentiles, Percentile, RecommendationRequest, SloTargets, TrafficProfile,
    UseCase,
};
use servewise_planner::{CapacityPlanner, Recommender};
use servewise_quality::{QualityScorer, QualityTable};

pub const CHAT_8B: &str = "acme/chat-8b";
pub const CHAT_70B: &str = "acme/chat-70b";
pub const CODER_16B: &str = "deepseek-ai/deepseek-coder-16b";

/// Percentiles spread around a p95 value
pub fn spread(p95: f64) -> LatencyPercentiles {
    LatencyPercentiles {
        mean: p95 * 0.8,
        p90: p95 * 0.9,
        p95,
        p99: p95 * 1.25,
    }
}

/// A 512→256 row with `(ttft, itl, e2e)` at p95
pub fn row(model: &str, hardware: &str, count: u32, latency: (f64, f64, f64), rps: f64) -> BenchmarkRow {
    BenchmarkRow {
        model_id: model.to_owned(),
        hardware: hardware.to_owned(),
        hardware_count: count,
        prompt_tokens: 512,
        output_tokens: 256,
        ttft: spread(latency.0),
        itl: spread(latency.1),
        e2e: spread(latency.2),
        tokens_per_second: rps * 256.0,
        requests_per_second: rps,
    }
}

/// Rows covering compliant, near-miss and out-of-range configurations
///
/// Against [`slo`] targets of 200/30/4000 ms:
/// - chat-8b on one L4 has two load levels, both compliant
/// - chat-70b runs compliant on H100×2 and H100×4
/// - chat-70b on L4×4 is a near miss (worst ratio 1.15)
/// - chat-8b on H100 is far outside the targets
/// - deepseek-coder on one L4 mirrors chat-8b's faster row
pub fn rows() -> Vec<BenchmarkRow> {
    vec![
        row(CHAT_8B, "L4", 1, (150.0, 20.0, 3000.0), 5.0),
        row(CHAT_8B, "L4", 1, (180.0, 25.0, 3500.0), 8.0),
        row(CHAT_70B, "H100", 2, (120.0, 18.0, 2800.0), 6.0),
        row(CHAT_70B, "H100-80GB", 4, (90.0, 12.0, 2000.0), 12.0),
        row(CHAT_70B, "L4", 4, (230.0, 33.0, 4500.0), 3.0),
        row(CHAT_8B, "H100", 1, (400.0, 50.0, 9000.0), 20.0),
        row(CODER_16B, "L4", 1, (180.0, 25.0, 3500.0), 8.0),
    ]
}

pub fn catalog() -> ModelCatalog {
    let model = |id: &str, name: &str, size: &str| ModelInfo {
        id: id.to_owned(),
        display_name: name.to_owned(),
        size_label: Some(size.to_owned()),
        family: None,
        context_length: None,
    };
    let gpu = |gpu_type: &str, aliases: &[&str], price: f64| GpuPricing {
        gpu_type: gpu_type.to_owned(),
        aliases: aliases.iter().map(|a| (*a).to_owned()).collect(),
        cost_per_hour_usd: price,
        memory_gb: None,
    };

    ModelCatalog::new(
        vec![
            model(CHAT_8B, "Chat 8B", "8B"),
            model(CHAT_70B, "Chat 70B", "70B"),
            model(CODER_16B, "DeepSeek Coder 16B", "16B"),
        ],
        vec![gpu("L4", &[], 1.0), gpu("H100", &["H100-80GB"], 4.0)],
    )
    .expect("fixture catalog is valid")
}

pub fn quality_table() -> QualityTable {
    QualityTable::from_entries([
        (UseCase::ChatbotConversational, "Chat 70B", 82.0),
        (UseCase::ChatbotConversational, "Chat 8B", 65.0),
        (UseCase::ChatbotConversational, "DeepSeek Coder 16B", 60.0),
        (UseCase::CodeCompletion, "Chat 70B", 72.0),
        (UseCase::CodeCompletion, "Chat 8B", 60.0),
        (UseCase::CodeCompletion, "DeepSeek Coder 16B", 66.0),
    ])
}

pub fn planner_with(rows: Vec<BenchmarkRow>) -> CapacityPlanner {
    CapacityPlanner::new(
        Arc::new(InMemoryBenchmarkStore::new(rows)),
        Arc::new(catalog()),
        Arc::new(QualityScorer::new(Arc::new(quality_table()))),
        PlannerConfig::default(),
    )
}

pub fn planner() -> CapacityPlanner {
    planner_with(rows())
}

pub fn recommender() -> Recommender {
    Recommender::new(planner(), RankingConfig::default())
}

pub fn traffic(qps: f64) -> TrafficProfile {
    TrafficProfile {
        prompt_tokens: 512,
        output_tokens: 256,
        expected_qps: Some(qps),
    }
}

pub fn slo() -> SloTargets {
    SloTargets {
        ttft_target_ms: 200,
        itl_target_ms: 30,
        e2e_target_ms: 4000,
        percentile: Percentile::P95,
    }
}

pub fn intent(use_case: UseCase) -> DeploymentIntent {
    DeploymentIntent {
        use_case,
        ..DeploymentIntent::default()
    }
}

pub fn request(use_case: UseCase) -> RecommendationRequest {
    RecommendationRequest {
        traffic_profile: traffic(6.0),
        slo_targets: slo(),
        intent: intent(use_case),
        include_near_miss: false,
        min_accuracy: None,
        max_cost: None,
        top_n: None,
    }
}
