//! Latency scoring against SLO targets and use-case references

use servewise_core::{LatencyMetrics, SloStatus, UseCase};

use crate::reference::{LatencyReference, Thresholds, for_use_case};
use crate::round_score;

/// Fraction over target still counted as a near miss unless configured otherwise
pub const DEFAULT_NEAR_MISS_TOLERANCE: f64 = 0.2;

const ABSOLUTE_WEIGHT: f64 = 0.60;
const HEADROOM_WEIGHT: f64 = 0.40;

/// Near-miss candidates stay below the compliant band
const NEAR_MISS_CAP: f64 = 49.0;
const NEAR_MISS_FACTOR: f64 = 0.7;

const LATENCY_FLOOR: f64 = 20.0;

/// Classify the worst predicted/target ratio
///
/// Ratios up to `1 + tolerance` are near misses.
pub fn slo_status(worst_ratio: f64, tolerance: f64) -> SloStatus {
    if worst_ratio <= 1.0 {
        SloStatus::Compliant
    } else if worst_ratio <= 1.0 + tolerance.max(0.0) {
        SloStatus::NearMiss
    } else {
        SloStatus::Exceeds
    }
}

/// Score predicted latency against targets with the default near-miss tolerance
///
/// Metrics with a non-positive target are ignored. `throughput` is output
/// tokens per second of one replica; when present it contributes to the
/// absolute-performance component.
pub fn score_latency(
    predicted: &LatencyMetrics,
    target: &LatencyMetrics,
    throughput: Option<f64>,
    use_case: UseCase,
) -> (u8, SloStatus) {
    score_latency_within(predicted, target, throughput, use_case, DEFAULT_NEAR_MISS_TOLERANCE)
}

/// [`score_latency`] with an explicit near-miss tolerance
pub fn score_latency_within(
    predicted: &LatencyMetrics,
    target: &LatencyMetrics,
    throughput: Option<f64>,
    use_case: UseCase,
    tolerance: f64,
) -> (u8, SloStatus) {
    let ratios: Vec<f64> = [
        (predicted.ttft_ms, target.ttft_ms),
        (predicted.itl_ms, target.itl_ms),
        (predicted.e2e_ms, target.e2e_ms),
    ]
    .into_iter()
    .filter(|(_, target)| *target > 0.0)
    .map(|(predicted, target)| predicted / target)
    .collect();

    let worst_ratio = ratios.iter().copied().fold(0.0, f64::max);
    let status = slo_status(worst_ratio, tolerance);

    if status == SloStatus::Exceeds {
        let score = (worst_ratio - 1.0).mul_add(-20.0, 30.0).max(0.0);
        return (round_score(score), status);
    }

    let throughput = throughput.filter(|t| t.is_finite() && *t > 0.0);
    let absolute = absolute_score(predicted, throughput, for_use_case(use_case));
    let headroom = headroom_score(&ratios);

    let mut score = absolute.mul_add(ABSOLUTE_WEIGHT, headroom * HEADROOM_WEIGHT);
    if status == SloStatus::NearMiss {
        score = (score * NEAR_MISS_FACTOR).min(NEAR_MISS_CAP);
    }

    (round_score(score.clamp(LATENCY_FLOOR, 100.0)), status)
}

/// Absolute performance against the use-case reference, 0-100
fn absolute_score(predicted: &LatencyMetrics, throughput: Option<f64>, reference: &LatencyReference) -> f64 {
    let ttft = lower_is_better(predicted.ttft_ms, &reference.ttft);
    let itl = lower_is_better(predicted.itl_ms, &reference.itl);
    let e2e = lower_is_better(predicted.e2e_ms, &reference.e2e);

    match throughput {
        Some(tps) => {
            let tput = higher_is_better(tps, &reference.throughput);
            (ttft + itl + e2e + tput) * 0.25
        }
        None => 0.35f64.mul_add(ttft, 0.30f64.mul_add(itl, 0.35 * e2e)),
    }
}

/// Margin under the targets: a smaller average ratio leaves more room
fn headroom_score(ratios: &[f64]) -> f64 {
    if ratios.is_empty() {
        return 100.0;
    }
    let average = ratios.iter().sum::<f64>() / ratios.len() as f64;
    average.mul_add(-50.0, 100.0).clamp(50.0, 100.0)
}

/// 100→85 up to excellent, 85→70 up to good, 70→50 up to acceptable,
/// then decaying towards 20 (35 at the limit)
fn lower_is_better(value: f64, t: &Thresholds) -> f64 {
    let value = value.max(0.0);
    if value <= t.excellent {
        if t.excellent <= 0.0 {
            return 85.0;
        }
        100.0 - 15.0 * value / t.excellent
    } else if value <= t.good {
        85.0 - 15.0 * (value - t.excellent) / (t.good - t.excellent)
    } else if value <= t.acceptable {
        70.0 - 20.0 * (value - t.good) / (t.acceptable - t.good)
    } else {
        let span = (t.limit - t.acceptable).max(f64::EPSILON);
        20.0 + 30.0 * span / (value - t.acceptable + span)
    }
}

/// Mirror image of [`lower_is_better`] for metrics where more is better
fn higher_is_better(value: f64, t: &Thresholds) -> f64 {
    let value = value.max(0.0);
    if value >= t.excellent {
        85.0 + 15.0 * (1.0 - t.excellent / value)
    } else if value >= t.good {
        70.0 + 15.0 * (value - t.good) / (t.excellent - t.good)
    } else if value >= t.acceptable {
        50.0 + 20.0 * (value - t.acceptable) / (t.good - t.acceptable)
    } else {
        let span = (t.acceptable - t.limit).max(f64::EPSILON);
        20.0 + 30.0 * span / (t.acceptable - value + span)
    }
}
