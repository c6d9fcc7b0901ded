//! End-to-end recommendation: validate, plan, rank

use std::sync::Arc;
use std::time::Instant;

use servewise_benchmarks::{BenchmarkStore, InMemoryBenchmarkStore};
use servewise_catalog::ModelCatalog;
use servewise_config::{Config, RankingConfig};
use servewise_core::{RankedLists, RecommendationRequest};
use servewise_quality::{QualityScorer, QualityTable};
use servewise_telemetry::KeyValue;
use servewise_telemetry::metrics::record_duration;

use crate::capacity::CapacityPlanner;
use crate::error::PlannerError;
use crate::ranking::{RankingOptions, generate_ranked_lists};

/// Capacity planner plus ranking defaults
#[derive(Debug)]
pub struct Recommender {
    planner: CapacityPlanner,
    ranking: RankingConfig,
}

impl Recommender {
    pub const fn new(planner: CapacityPlanner, ranking: RankingConfig) -> Self {
        Self { planner, ranking }
    }

    /// Load the file-backed store, catalog and quality tables named in `config`
    pub fn from_config(config: &Config) -> Result<Self, PlannerError> {
        let store: Arc<dyn BenchmarkStore> = Arc::new(InMemoryBenchmarkStore::from_path(&config.data.benchmarks)?);
        let catalog = Arc::new(ModelCatalog::from_path(&config.data.catalog)?);
        let table = match &config.data.quality {
            Some(path) => QualityTable::from_path(path)?,
            None => {
                tracing::warn!("no quality tables configured, accuracy falls back to model size");
                QualityTable::default()
            }
        };
        let quality = Arc::new(QualityScorer::new(Arc::new(table)));

        let planner = CapacityPlanner::new(store, catalog, quality, config.planner.clone());
        Ok(Self::new(planner, config.ranking.clone()))
    }

    pub const fn planner(&self) -> &CapacityPlanner {
        &self.planner
    }

    /// Ranked deployment options for a request
    ///
    /// Request-level `min_accuracy`, `max_cost` and `top_n` take precedence
    /// over the intent's. No viable configuration yields empty lists.
    pub async fn recommend(&self, request: &RecommendationRequest) -> Result<RankedLists, PlannerError> {
        request.validate()?;
        let start = Instant::now();

        let candidates = self
            .planner
            .plan_all_capacities(
                &request.traffic_profile,
                &request.slo_targets,
                &request.intent,
                request.include_near_miss,
            )
            .await?;

        let options = RankingOptions {
            min_accuracy: request.effective_min_accuracy(),
            max_cost: request.effective_max_cost(),
            top_n: request.top_n.unwrap_or(self.ranking.top_n),
            weights: request.intent.weights,
            use_case: Some(request.intent.use_case),
        };

        let lists = generate_ranked_lists(candidates, &options);

        if lists.is_empty() {
            tracing::info!(
                evaluated = lists.total_configs_evaluated,
                "no viable configuration for request"
            );
        } else {
            tracing::info!(
                evaluated = lists.total_configs_evaluated,
                after_filters = lists.configs_after_filters,
                top_model = lists.best_accuracy.first().map(|c| c.model_name.as_str()),
                user_count = request.intent.user_count,
                domains = ?request.intent.domain_specialization,
                "recommendation ready"
            );
        }

        record_duration(
            &self.planner.metrics().recommend_duration,
            start,
            &[KeyValue::new("use_case", request.intent.use_case.to_string())],
        );

        Ok(lists)
    }
}
