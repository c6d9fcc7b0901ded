//! Cost scoring

use crate::round_score;

/// Sub-linear exponent: spreads cheap options apart, bunches expensive ones
const PRICE_EXPONENT: f64 = 0.7;

const PRICE_FLOOR: f64 = 5.0;

/// Score when every candidate costs the same
const UNIFORM_COST_SCORE: u8 = 95;

/// Score a monthly cost against the cheapest and most expensive candidates
///
/// `100 × (1 − (cost / max_cost)^0.7)`, clamped to 5-100.
pub fn score_price(cost_per_month: f64, min_cost: f64, max_cost: f64) -> u8 {
    if max_cost <= 0.0 {
        return 100;
    }
    if (max_cost - min_cost).abs() < f64::EPSILON {
        return UNIFORM_COST_SCORE;
    }

    let ratio = (cost_per_month / max_cost).max(0.0);
    let raw = 100.0 * (1.0 - ratio.powf(PRICE_EXPONENT));
    round_score(raw.clamp(PRICE_FLOOR, 100.0))
}
