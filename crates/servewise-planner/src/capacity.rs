//! Capacity planning
//!
//! Turns benchmark rows for one traffic shape into fully scored candidate
//! deployments: replica sizing, monthly cost, and the four sub-scores plus
//! the balanced composite.

use std::sync::Arc;
use std::time::Instant;

use servewise_benchmarks::{BenchmarkStore, SloQuery, select_max_throughput};
use servewise_catalog::ModelCatalog;
use servewise_config::PlannerConfig;
use servewise_core::{
    BenchmarkRow, Candidate, ConfigurationScores, DeploymentIntent, GpuConfig, LatencyMetrics, Percentile, SloStatus,
    SloTargets, TrafficProfile, UseCase,
};
use servewise_quality::QualityScorer;
use servewise_scoring::{
    score_accuracy_by_size, score_balanced, score_complexity, score_latency_within, score_price,
};
use servewise_telemetry::KeyValue;
use servewise_telemetry::metrics::{PlannerMetrics, record_duration};

use crate::error::PlannerError;

/// Produces every viable deployment for a workload
///
/// Holds only shared, read-only data, so one planner serves concurrent
/// calls; each call builds its own candidate list.
pub struct CapacityPlanner {
    store: Arc<dyn BenchmarkStore>,
    catalog: Arc<ModelCatalog>,
    quality: Arc<QualityScorer>,
    config: PlannerConfig,
    metrics: PlannerMetrics,
}

/// Per-call inputs shared by every row
struct PlanContext<'a> {
    targets: LatencyMetrics,
    percentile: Percentile,
    required_qps: f64,
    use_case: UseCase,
    include_near_miss: bool,
    intent: &'a DeploymentIntent,
}

impl CapacityPlanner {
    pub fn new(
        store: Arc<dyn BenchmarkStore>,
        catalog: Arc<ModelCatalog>,
        quality: Arc<QualityScorer>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            quality,
            config,
            metrics: PlannerMetrics::default(),
        }
    }

    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub const fn metrics(&self) -> &PlannerMetrics {
        &self.metrics
    }

    /// Every deployment meeting the SLO targets for this traffic profile
    ///
    /// With `include_near_miss`, targets are relaxed by the configured
    /// tolerance and candidates up to that far over target are kept. The
    /// result is unsorted; an empty list means no viable configuration.
    #[tracing::instrument(
        skip_all,
        fields(
            prompt_tokens = traffic.prompt_tokens,
            output_tokens = traffic.output_tokens,
            use_case = %intent.use_case,
            include_near_miss = include_near_miss,
        )
    )]
    pub async fn plan_all_capacities(
        &self,
        traffic: &TrafficProfile,
        slo: &SloTargets,
        intent: &DeploymentIntent,
        include_near_miss: bool,
    ) -> Result<Vec<Candidate>, PlannerError> {
        traffic.validate()?;
        slo.validate()?;

        let start = Instant::now();
        let attributes = [KeyValue::new("use_case", intent.use_case.to_string())];

        let limits = if include_near_miss {
            slo.relaxed(self.config.near_miss_tolerance)
        } else {
            slo.as_metrics()
        };

        let query = SloQuery {
            prompt_tokens: traffic.prompt_tokens,
            output_tokens: traffic.output_tokens,
            limits,
            min_qps: 0.0,
            percentile: slo.percentile,
        };

        let rows = self
            .store
            .find_configurations_meeting_slo(&query)
            .await
            .inspect_err(|e| tracing::error!(store = self.store.name(), error = %e, "benchmark query failed"))?;

        let returned = rows.len();
        let rows = select_max_throughput(
            rows.into_iter()
                .filter(|row| query.matches(row) && intent.allows_gpu(&row.hardware)),
            slo.percentile,
        );

        tracing::debug!(
            store = self.store.name(),
            returned,
            configurations = rows.len(),
            "benchmark rows selected"
        );
        self.metrics.rows.add(rows.len() as u64, &attributes);

        if rows.is_empty() {
            tracing::info!("no benchmark configuration meets the SLO targets");
            record_duration(&self.metrics.duration, start, &attributes);
            return Ok(Vec::new());
        }

        let context = PlanContext {
            targets: slo.as_metrics(),
            percentile: slo.percentile,
            required_qps: traffic.required_qps(),
            use_case: intent.use_case,
            include_near_miss,
            intent,
        };

        let mut candidates: Vec<Candidate> = rows
            .iter()
            .filter_map(|row| self.build_candidate(row, &context))
            .collect();

        self.apply_relative_scores(&mut candidates, context.intent);

        tracing::info!(candidates = candidates.len(), "capacity planning complete");
        self.metrics.candidates.add(candidates.len() as u64, &attributes);
        record_duration(&self.metrics.duration, start, &attributes);

        Ok(candidates)
    }

    /// Size, price and score one row; `None` when the row is unusable
    fn build_candidate(&self, row: &BenchmarkRow, context: &PlanContext<'_>) -> Option<Candidate> {
        let (model_id, model_name, size_label) = match self.catalog.find_model(&row.model_id) {
            Some(model) => (model.id.clone(), model.display_name.clone(), model.size_label.clone()),
            None => {
                tracing::debug!(model = %row.model_id, "model not in catalog, using benchmark id");
                (row.model_id.clone(), row.model_id.clone(), None)
            }
        };

        let Some(replicas) = replicas_for(context.required_qps, row.requests_per_second, self.config.replica_headroom)
        else {
            tracing::warn!(
                model = %row.model_id,
                hardware = %row.hardware,
                requests_per_second = row.requests_per_second,
                "benchmark row has no measured throughput, skipping"
            );
            return None;
        };

        let tensor_parallel = row.hardware_count.max(1);
        let gpu_count = tensor_parallel.saturating_mul(replicas);

        let Some(cost_per_hour) = self.catalog.calculate_gpu_cost(&row.hardware, gpu_count, 1.0) else {
            tracing::warn!(
                model = %row.model_id,
                hardware = %row.hardware,
                "no catalog price for hardware, skipping"
            );
            self.metrics
                .skipped_unpriced
                .add(1, &[KeyValue::new("hardware", row.hardware.clone())]);
            return None;
        };
        let cost_per_month = cost_per_hour * self.config.hours_per_month;

        let predicted = row.latency_at(context.percentile);
        let (latency_score, slo_status) = score_latency_within(
            &predicted,
            &context.targets,
            Some(row.tokens_per_second),
            context.use_case,
            self.config.near_miss_tolerance,
        );

        if slo_status == SloStatus::Exceeds && !context.include_near_miss {
            tracing::debug!(model = %row.model_id, hardware = %row.hardware, "candidate exceeds SLO, dropped");
            return None;
        }

        let accuracy_score = self.accuracy(&model_name, &row.model_id, size_label.as_deref(), context.use_case);
        let complexity_score = score_complexity(gpu_count);
        let throughput_qps = row.requests_per_second * f64::from(replicas);

        let gpu_config = GpuConfig {
            gpu_type: row.hardware.clone(),
            gpu_count,
            tensor_parallel,
            replicas,
        };

        let reasoning = explain(
            &model_name,
            &gpu_config,
            &predicted,
            &context.targets,
            context.percentile,
            slo_status,
            throughput_qps,
            cost_per_month,
        );

        Some(Candidate {
            model_id,
            model_name,
            gpu_config,
            percentile: context.percentile,
            predicted_ttft_ms: predicted.ttft_ms,
            predicted_itl_ms: predicted.itl_ms,
            predicted_e2e_ms: predicted.e2e_ms,
            predicted_throughput_qps: throughput_qps,
            tokens_per_second: row.tokens_per_second,
            cost_per_hour_usd: cost_per_hour,
            cost_per_month_usd: cost_per_month,
            meets_slo: slo_status == SloStatus::Compliant,
            scores: ConfigurationScores {
                accuracy_score,
                price_score: 0,
                latency_score,
                complexity_score,
                balanced_score: 0.0,
                slo_status,
            },
            reasoning,
        })
    }

    /// Quality table by display name, then by raw id, then the size heuristic
    fn accuracy(&self, model_name: &str, raw_id: &str, size_label: Option<&str>, use_case: UseCase) -> u8 {
        let mut score = self.quality.score(model_name, use_case);
        if score <= 0.0 && !raw_id.eq_ignore_ascii_case(model_name) {
            score = self.quality.score(raw_id, use_case);
        }
        if score > 0.0 {
            return score.round().clamp(0.0, 100.0) as u8;
        }

        match size_label {
            Some(label) => {
                let estimate = score_accuracy_by_size(label);
                tracing::debug!(model = model_name, size_label = label, estimate, "accuracy from model size");
                estimate
            }
            None => 0,
        }
    }

    /// Price needs the global cost range; balanced needs price
    fn apply_relative_scores(&self, candidates: &mut [Candidate], intent: &DeploymentIntent) {
        let (min_cost, max_cost) = candidates.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c.cost_per_month_usd), hi.max(c.cost_per_month_usd))
        });
        let weights = intent.weights.unwrap_or_default();

        for candidate in candidates {
            let scores = &mut candidate.scores;
            scores.price_score = score_price(candidate.cost_per_month_usd, min_cost, max_cost);

            let balanced = score_balanced(
                scores.accuracy_score,
                scores.price_score,
                scores.latency_score,
                scores.complexity_score,
                &weights,
            );
            let penalty = self.config.scalability_penalty.factor(candidate.gpu_config.replicas);
            scores.balanced_score = round_one_decimal(balanced * penalty);
        }
    }
}

impl std::fmt::Debug for CapacityPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapacityPlanner")
            .field("store", &self.store.name())
            .field("catalog", &self.catalog)
            .field("quality", &self.quality)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Replicas needed to serve `required_qps` with headroom, at least one
///
/// `None` when traffic is expected but the row measured no throughput.
fn replicas_for(required_qps: f64, requests_per_second: f64, headroom: f64) -> Option<u32> {
    if required_qps <= 0.0 {
        return Some(1);
    }
    if requests_per_second.is_nan() || requests_per_second <= 0.0 {
        return None;
    }
    let replicas = (required_qps * headroom / requests_per_second).ceil().max(1.0);
    Some(replicas as u32)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[allow(clippy::too_many_arguments)]
fn explain(
    model_name: &str,
    gpu: &GpuConfig,
    predicted: &LatencyMetrics,
    targets: &LatencyMetrics,
    percentile: Percentile,
    status: SloStatus,
    throughput_qps: f64,
    cost_per_month: f64,
) -> String {
    let verdict = match status {
        SloStatus::Compliant => "meets all SLO targets",
        SloStatus::NearMiss => "within tolerance of SLO targets",
        SloStatus::Exceeds => "exceeds SLO targets",
    };
    let replicas = if gpu.replicas == 1 {
        "1 replica".to_owned()
    } else {
        format!("{} replicas", gpu.replicas)
    };
    format!(
        "{model_name} on {replicas} of {tp}x {hw} {verdict} at {percentile}: \
         TTFT {ttft:.0}/{ttft_t:.0} ms, ITL {itl:.0}/{itl_t:.0} ms, E2E {e2e:.0}/{e2e_t:.0} ms; \
         serves {throughput_qps:.1} req/s for ${cost_per_month:.0}/month",
        tp = gpu.tensor_parallel,
        hw = gpu.gpu_type,
        ttft = predicted.ttft_ms,
        ttft_t = targets.ttft_ms,
        itl = predicted.itl_ms,
        itl_t = targets.itl_ms,
        e2e = predicted.e2e_ms,
        e2e_t = targets.e2e_ms,
    )
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use servewise_benchmarks::{InMemoryBenchmarkStore, StoreError};
    use servewise_catalog::{GpuPricing, ModelInfo};
    use servewise_core::{LatencyPercentiles, ScoringWeights};
    use servewise_quality::QualityTable;

    use super::*;

    fn flat(p95: f64) -> LatencyPercentiles {
        LatencyPercentiles {
            mean: p95 * 0.8,
            p90: p95 * 0.9,
            p95,
            p99: p95 * 1.2,
        }
    }

    fn row(model: &str, hardware: &str, count: u32, latency: (f64, f64, f64), rps: f64) -> BenchmarkRow {
        BenchmarkRow {
            model_id: model.to_owned(),
            hardware: hardware.to_owned(),
            hardware_count: count,
            prompt_tokens: 512,
            output_tokens: 256,
            ttft: flat(latency.0),
            itl: flat(latency.1),
            e2e: flat(latency.2),
            tokens_per_second: rps * 256.0,
            requests_per_second: rps,
        }
    }

    fn catalog() -> ModelCatalog {
        ModelCatalog::new(
            vec![
                ModelInfo {
                    id: "org/model-x-8b".to_owned(),
                    display_name: "Model X 8B".to_owned(),
                    size_label: Some("8B".to_owned()),
                    family: None,
                    context_length: None,
                },
                ModelInfo {
                    id: "org/model-y-70b".to_owned(),
                    display_name: "Model Y 70B".to_owned(),
                    size_label: Some("70B".to_owned()),
                    family: None,
                    context_length: None,
                },
            ],
            vec![
                GpuPricing {
                    gpu_type: "L4".to_owned(),
                    aliases: vec![],
                    cost_per_hour_usd: 1.0,
                    memory_gb: Some(24),
                },
                GpuPricing {
                    gpu_type: "H100".to_owned(),
                    aliases: vec!["H100-80GB".to_owned()],
                    cost_per_hour_usd: 4.0,
                    memory_gb: Some(80),
                },
            ],
        )
        .unwrap()
    }

    fn quality() -> QualityScorer {
        QualityScorer::new(Arc::new(QualityTable::from_entries([(
            UseCase::ChatbotConversational,
            "Model Y 70B",
            82.0,
        )])))
    }

    fn planner(rows: Vec<BenchmarkRow>) -> CapacityPlanner {
        CapacityPlanner::new(
            Arc::new(InMemoryBenchmarkStore::new(rows)),
            Arc::new(catalog()),
            Arc::new(quality()),
            PlannerConfig::default(),
        )
    }

    fn traffic(qps: Option<f64>) -> TrafficProfile {
        TrafficProfile {
            prompt_tokens: 512,
            output_tokens: 256,
            expected_qps: qps,
        }
    }

    fn slo() -> SloTargets {
        SloTargets {
            ttft_target_ms: 200,
            itl_target_ms: 30,
            e2e_target_ms: 4000,
            percentile: Percentile::P95,
        }
    }

    #[tokio::test]
    async fn keeps_highest_throughput_row() {
        let planner = planner(vec![
            row("org/model-x-8b", "L4", 1, (150.0, 20.0, 3000.0), 5.0),
            row("org/model-x-8b", "L4", 1, (180.0, 25.0, 3500.0), 8.0),
        ]);

        let candidates = planner
            .plan_all_capacities(&traffic(Some(6.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert_eq!(candidate.gpu_config.replicas, 1);
        assert_eq!(candidate.gpu_config.gpu_count, 1);
        assert_eq!(candidate.scores.slo_status, SloStatus::Compliant);
        assert!(candidate.meets_slo);
        assert!((candidate.predicted_ttft_ms - 180.0).abs() < f64::EPSILON);
        assert!((candidate.cost_per_month_usd - 730.0).abs() < 1e-9);
        assert_eq!(candidate.model_name, "Model X 8B");
    }

    #[tokio::test]
    async fn sizes_replicas_with_headroom() {
        let planner = planner(vec![row("org/model-x-8b", "L4", 2, (150.0, 20.0, 3000.0), 4.0)]);

        let candidates = planner
            .plan_all_capacities(&traffic(Some(10.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();

        // ceil(10 × 1.2 / 4) = 3 replicas of TP2
        let gpu = &candidates[0].gpu_config;
        assert_eq!(gpu.replicas, 3);
        assert_eq!(gpu.tensor_parallel, 2);
        assert_eq!(gpu.gpu_count, 6);
        assert!((candidates[0].predicted_throughput_qps - 12.0).abs() < 1e-9);
        assert!((candidates[0].cost_per_hour_usd - 6.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn absent_qps_means_one_replica() {
        let planner = planner(vec![row("org/model-x-8b", "L4", 1, (150.0, 20.0, 3000.0), 0.5)]);

        let candidates = planner
            .plan_all_capacities(&traffic(None), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();

        assert_eq!(candidates[0].gpu_config.replicas, 1);
    }

    #[tokio::test]
    async fn unpriced_hardware_is_skipped() {
        let planner = planner(vec![
            row("org/model-x-8b", "TPUv5", 1, (150.0, 20.0, 3000.0), 5.0),
            row("org/model-x-8b", "L4", 1, (150.0, 20.0, 3000.0), 5.0),
        ]);

        let candidates = planner
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].gpu_config.gpu_type, "L4");
    }

    #[tokio::test]
    async fn unknown_model_falls_back_to_raw_id() {
        let planner = planner(vec![row("someone/mystery-model", "L4", 1, (150.0, 20.0, 3000.0), 5.0)]);

        let candidates = planner
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();

        assert_eq!(candidates[0].model_id, "someone/mystery-model");
        assert_eq!(candidates[0].model_name, "someone/mystery-model");
        assert_eq!(candidates[0].scores.accuracy_score, 0);
    }

    #[tokio::test]
    async fn accuracy_prefers_quality_table_over_size() {
        let planner = planner(vec![
            row("org/model-x-8b", "L4", 1, (150.0, 20.0, 3000.0), 5.0),
            row("org/model-y-70b", "H100", 1, (120.0, 18.0, 2500.0), 6.0),
        ]);

        let candidates = planner
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();

        let accuracy = |id: &str| {
            candidates
                .iter()
                .find(|c| c.model_id == id)
                .map(|c| c.scores.accuracy_score)
        };
        assert_eq!(accuracy("org/model-y-70b"), Some(82));
        // no table entry, 8B size heuristic
        assert_eq!(accuracy("org/model-x-8b"), Some(60));
    }

    #[tokio::test]
    async fn near_miss_relaxes_targets() {
        let rows = vec![row("org/model-x-8b", "L4", 1, (230.0, 25.0, 3500.0), 5.0)];

        let strict = planner(rows.clone())
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();
        assert!(strict.is_empty());

        let relaxed = planner(rows)
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), true)
            .await
            .unwrap();
        assert_eq!(relaxed.len(), 1);
        assert_eq!(relaxed[0].scores.slo_status, SloStatus::NearMiss);
        assert!(!relaxed[0].meets_slo);
        assert!(relaxed[0].scores.latency_score <= 49);
    }

    #[tokio::test]
    async fn configured_tolerance_sets_the_near_miss_band() {
        let rows = vec![row("org/model-x-8b", "L4", 1, (280.0, 25.0, 3500.0), 5.0)];

        let default_band = planner(rows.clone())
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), true)
            .await
            .unwrap();
        assert!(default_band.is_empty());

        let wide = CapacityPlanner::new(
            Arc::new(InMemoryBenchmarkStore::new(rows)),
            Arc::new(catalog()),
            Arc::new(quality()),
            PlannerConfig {
                near_miss_tolerance: 0.5,
                ..PlannerConfig::default()
            },
        );
        let candidates = wide
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), true)
            .await
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].scores.slo_status, SloStatus::NearMiss);
        assert!((20..=49).contains(&candidates[0].scores.latency_score));
    }

    #[tokio::test]
    async fn preferred_gpu_types_filter_rows() {
        let planner = planner(vec![
            row("org/model-x-8b", "L4", 1, (150.0, 20.0, 3000.0), 5.0),
            row("org/model-x-8b", "H100-80GB", 1, (90.0, 12.0, 2000.0), 12.0),
        ]);
        let intent = DeploymentIntent {
            preferred_gpu_types: vec!["h100-80gb".to_owned()],
            ..DeploymentIntent::default()
        };

        let candidates = planner
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &intent, false)
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].gpu_config.gpu_type, "H100-80GB");
        assert!((candidates[0].cost_per_hour_usd - 4.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn price_spread_and_balanced_penalty() {
        let planner = planner(vec![
            row("org/model-x-8b", "L4", 1, (150.0, 20.0, 3000.0), 1.0),
            row("org/model-y-70b", "H100", 1, (150.0, 20.0, 3000.0), 1.0),
        ]);

        // 2 QPS → ceil(2.4) = 3 replicas each
        let candidates = planner
            .plan_all_capacities(&traffic(Some(2.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();

        let cheap = candidates.iter().find(|c| c.gpu_config.gpu_type == "L4").unwrap();
        let pricey = candidates.iter().find(|c| c.gpu_config.gpu_type == "H100").unwrap();
        assert_eq!(pricey.scores.price_score, 5);
        assert!(cheap.scores.price_score > pricey.scores.price_score);

        let s = &cheap.scores;
        let expected = score_balanced(
            s.accuracy_score,
            s.price_score,
            s.latency_score,
            s.complexity_score,
            &ScoringWeights::default(),
        ) * 0.98;
        assert!((s.balanced_score - round_one_decimal(expected)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn no_rows_is_empty_not_error() {
        let candidates = planner(Vec::new())
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn invalid_traffic_is_rejected() {
        let err = planner(Vec::new())
            .plan_all_capacities(
                &TrafficProfile {
                    prompt_tokens: 0,
                    output_tokens: 256,
                    expected_qps: None,
                },
                &slo(),
                &DeploymentIntent::default(),
                false,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::Validation(_)));
    }

    struct UnreachableStore;

    #[async_trait]
    impl BenchmarkStore for UnreachableStore {
        async fn find_configurations_meeting_slo(&self, _query: &SloQuery) -> Result<Vec<BenchmarkRow>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_owned()))
        }

        fn name(&self) -> &'static str {
            "unreachable"
        }
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let planner = CapacityPlanner::new(
            Arc::new(UnreachableStore),
            Arc::new(catalog()),
            Arc::new(quality()),
            PlannerConfig::default(),
        );

        let err = planner
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::Store(StoreError::Unavailable(_))));
    }

    /// Returns every row regardless of the query, duplicates included
    struct CarelessStore(Vec<BenchmarkRow>);

    #[async_trait]
    impl BenchmarkStore for CarelessStore {
        async fn find_configurations_meeting_slo(&self, _query: &SloQuery) -> Result<Vec<BenchmarkRow>, StoreError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "careless"
        }
    }

    #[tokio::test]
    async fn store_output_is_regated_and_deduplicated() {
        let planner = CapacityPlanner::new(
            Arc::new(CarelessStore(vec![
                row("org/model-x-8b", "L4", 1, (150.0, 20.0, 3000.0), 5.0),
                row("org/model-x-8b", "L4", 1, (160.0, 22.0, 3100.0), 7.0),
                row("org/model-x-8b", "L4", 1, (400.0, 60.0, 9000.0), 20.0),
            ])),
            Arc::new(catalog()),
            Arc::new(quality()),
            PlannerConfig::default(),
        );

        let candidates = planner
            .plan_all_capacities(&traffic(Some(1.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        assert!((candidates[0].predicted_ttft_ms - 160.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn reasoning_line() {
        let planner = planner(vec![row("org/model-x-8b", "L4", 1, (180.0, 25.0, 3500.0), 8.0)]);

        let candidates = planner
            .plan_all_capacities(&traffic(Some(6.0)), &slo(), &DeploymentIntent::default(), false)
            .await
            .unwrap();

        insta::assert_snapshot!(
            candidates[0].reasoning,
            @"Model X 8B on 1 replica of 1x L4 meets all SLO targets at p95: TTFT 180/200 ms, ITL 25/30 ms, E2E 3500/4000 ms; serves 8.0 req/s for $730/month"
        );
    }

    #[test]
    fn replica_math() {
        assert_eq!(replicas_for(6.0, 8.0, 1.2), Some(1));
        assert_eq!(replicas_for(10.0, 4.0, 1.2), Some(3));
        assert_eq!(replicas_for(0.0, 0.0, 1.2), Some(1));
        assert_eq!(replicas_for(5.0, 0.0, 1.2), None);
    }
}
