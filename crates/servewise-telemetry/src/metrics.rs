//! Metric names and recording helpers for the planning pipeline

use std::time::Instant;

use opentelemetry::KeyValue;
use opentelemetry::metrics::{Counter, Histogram, Meter};

/// Wall time of one `plan_all_capacities` call, seconds
pub const PLAN_DURATION: &str = "servewise.plan.duration";
/// Benchmark rows returned by the store after de-duplication
pub const PLAN_ROWS: &str = "servewise.plan.rows";
/// Candidates produced by the planner
pub const PLAN_CANDIDATES: &str = "servewise.plan.candidates";
/// Rows skipped because their hardware has no price
pub const PLAN_SKIPPED_UNPRICED: &str = "servewise.plan.skipped_unpriced";
/// Wall time of one recommendation, seconds
pub const RECOMMEND_DURATION: &str = "servewise.recommend.duration";

/// Meter shared by servewise instruments
pub fn meter() -> Meter {
    opentelemetry::global::meter("servewise")
}

/// Instruments recorded by the planner and recommender
#[derive(Clone)]
pub struct PlannerMetrics {
    pub duration: Histogram<f64>,
    pub recommend_duration: Histogram<f64>,
    pub rows: Counter<u64>,
    pub candidates: Counter<u64>,
    pub skipped_unpriced: Counter<u64>,
}

impl PlannerMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            duration: meter
                .f64_histogram(PLAN_DURATION)
                .with_unit("s")
                .with_description("Capacity planning duration")
                .build(),
            recommend_duration: meter
                .f64_histogram(RECOMMEND_DURATION)
                .with_unit("s")
                .with_description("End-to-end recommendation duration")
                .build(),
            rows: meter.u64_counter(PLAN_ROWS).build(),
            candidates: meter.u64_counter(PLAN_CANDIDATES).build(),
            skipped_unpriced: meter.u64_counter(PLAN_SKIPPED_UNPRICED).build(),
        }
    }
}

impl Default for PlannerMetrics {
    fn default() -> Self {
        Self::new(&meter())
    }
}

impl std::fmt::Debug for PlannerMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerMetrics").finish_non_exhaustive()
    }
}

/// Record a duration measurement on a histogram
pub fn record_duration(histogram: &Histogram<f64>, start: Instant, attributes: &[KeyValue]) {
    histogram.record(start.elapsed().as_secs_f64(), attributes);
}
