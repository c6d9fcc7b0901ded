//! Weighted composite score

use servewise_core::ScoringWeights;

/// Weighted average of the four sub-scores, 0-100 with one decimal
///
/// Weights are renormalized first, so any non-negative scale works.
pub fn score_balanced(accuracy: u8, price: u8, latency: u8, complexity: u8, weights: &ScoringWeights) -> f64 {
    let w = weights.normalized();
    let raw = w.accuracy.mul_add(
        f64::from(accuracy),
        w.price.mul_add(
            f64::from(price),
            w.latency.mul_add(f64::from(latency), w.complexity * f64::from(complexity)),
        ),
    );
    (raw.clamp(0.0, 100.0) * 10.0).round() / 10.0
}
