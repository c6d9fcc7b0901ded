//! Ranked views over scored candidates
//!
//! Accuracy-first: the `best_accuracy` list picks the top models, and the
//! other four lists only ever show candidates of those models.

use std::cmp::Ordering;
use std::collections::HashSet;

use servewise_core::{Candidate, RankedLists, ScoringWeights, UseCase};
use servewise_scoring::score_balanced;

use crate::bonus::task_bonus;

/// Share of adjusted accuracy in the default balanced formula
const ACCURACY_SHARE: f64 = 0.7;
/// Share of the latency/price average in the default balanced formula
const OPERATIONAL_SHARE: f64 = 0.3;

/// Filters and list sizing for [`generate_ranked_lists`]
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOptions {
    /// Drop candidates with a lower accuracy score
    pub min_accuracy: Option<f64>,
    /// Drop candidates with a higher monthly cost
    pub max_cost: Option<f64>,
    /// Entries per list (distinct models for `best_accuracy`)
    pub top_n: usize,
    /// Custom balanced-score weights; `None` uses the accuracy-weighted formula
    pub weights: Option<ScoringWeights>,
    /// Selects the task bonus table
    pub use_case: Option<UseCase>,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            min_accuracy: None,
            max_cost: None,
            top_n: 5,
            weights: None,
            use_case: None,
        }
    }
}

/// Build the five ranked lists
///
/// Filtering that leaves nothing yields empty lists, not an error.
pub fn generate_ranked_lists(configs: Vec<Candidate>, options: &RankingOptions) -> RankedLists {
    let total_configs_evaluated = configs.len();

    let mut filtered: Vec<Candidate> = configs
        .into_iter()
        .filter(|c| passes_filters(c, options))
        .collect();
    let configs_after_filters = filtered.len();

    tracing::debug!(
        total = total_configs_evaluated,
        after_filters = configs_after_filters,
        min_accuracy = ?options.min_accuracy,
        max_cost = ?options.max_cost,
        "ranking candidates"
    );

    if filtered.is_empty() {
        return RankedLists {
            total_configs_evaluated,
            ..RankedLists::default()
        };
    }

    for candidate in &mut filtered {
        candidate.scores.balanced_score = recompute_balanced(candidate, options);
    }

    filtered.sort_by(|a, b| {
        b.scores
            .accuracy_score
            .cmp(&a.scores.accuracy_score)
            .then_with(|| a.predicted_ttft_ms.total_cmp(&b.predicted_ttft_ms))
            .then_with(|| identity_order(a, b))
    });

    let mut top_models: Vec<&str> = Vec::with_capacity(options.top_n);
    let mut best_accuracy = Vec::with_capacity(options.top_n);
    for candidate in &filtered {
        if top_models.len() >= options.top_n {
            break;
        }
        if !top_models.contains(&candidate.model_name.as_str()) {
            top_models.push(&candidate.model_name);
            best_accuracy.push(candidate.clone());
        }
    }
    let top_models: HashSet<&str> = top_models.into_iter().collect();

    let pool: Vec<&Candidate> = filtered
        .iter()
        .filter(|c| top_models.contains(c.model_name.as_str()))
        .collect();

    let lowest_cost = ranked(&pool, options.top_n, |a, b| {
        a.cost_per_month_usd
            .total_cmp(&b.cost_per_month_usd)
            .then_with(|| b.scores.balanced_score.total_cmp(&a.scores.balanced_score))
    });
    let lowest_latency = ranked(&pool, options.top_n, |a, b| {
        b.scores
            .latency_score
            .cmp(&a.scores.latency_score)
            .then_with(|| a.predicted_ttft_ms.total_cmp(&b.predicted_ttft_ms))
    });
    let simplest = ranked(&pool, options.top_n, |a, b| {
        b.scores
            .complexity_score
            .cmp(&a.scores.complexity_score)
            .then_with(|| a.cost_per_month_usd.total_cmp(&b.cost_per_month_usd))
    });
    let balanced = ranked(&pool, options.top_n, |a, b| {
        b.scores
            .balanced_score
            .total_cmp(&a.scores.balanced_score)
            .then_with(|| b.scores.accuracy_score.cmp(&a.scores.accuracy_score))
    });

    RankedLists {
        best_accuracy,
        lowest_cost,
        lowest_latency,
        simplest,
        balanced,
        total_configs_evaluated,
        configs_after_filters,
    }
}

fn passes_filters(candidate: &Candidate, options: &RankingOptions) -> bool {
    if let Some(min) = options.min_accuracy
        && f64::from(candidate.scores.accuracy_score) < min
    {
        return false;
    }
    if let Some(max) = options.max_cost
        && candidate.cost_per_month_usd > max
    {
        return false;
    }
    true
}

/// Balanced score with the use-case task bonus folded into accuracy
fn recompute_balanced(candidate: &Candidate, options: &RankingOptions) -> f64 {
    let scores = &candidate.scores;
    let bonus = task_bonus(options.use_case, &candidate.model_name);
    let adjusted = scores.accuracy_score.saturating_add(bonus).min(100);

    // default weights keep the accuracy-weighted formula
    let custom = options.weights.filter(|w| !w.is_default());
    let raw = match &custom {
        Some(weights) => score_balanced(
            adjusted,
            scores.price_score,
            scores.latency_score,
            scores.complexity_score,
            weights,
        ),
        None => {
            let operational = (f64::from(scores.latency_score) + f64::from(scores.price_score)) / 2.0;
            f64::from(adjusted).mul_add(ACCURACY_SHARE, operational * OPERATIONAL_SHARE)
        }
    };

    ((raw * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

/// Stable final tie-break so orderings never depend on input order
fn identity_order(a: &Candidate, b: &Candidate) -> Ordering {
    a.model_id
        .cmp(&b.model_id)
        .then_with(|| a.gpu_config.gpu_type.cmp(&b.gpu_config.gpu_type))
        .then_with(|| a.gpu_config.tensor_parallel.cmp(&b.gpu_config.tensor_parallel))
        .then_with(|| a.gpu_config.replicas.cmp(&b.gpu_config.replicas))
}

fn ranked<F>(pool: &[&Candidate], top_n: usize, compare: F) -> Vec<Candidate>
where
    F: Fn(&Candidate, &Candidate) -> Ordering,
{
    let mut sorted = pool.to_vec();
    sorted.sort_by(|a, b| compare(a, b).then_with(|| identity_order(a, b)));
    sorted.into_iter().take(top_n).cloned().collect()
}
