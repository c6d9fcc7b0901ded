//! Solution scoring for servewise
//!
//! Pure functions turning benchmark and catalog numbers into four 0-100
//! sub-scores and a weighted composite:
//! - **Accuracy**: parameter-count fallback when no quality data exists
//! - **Price**: concave normalized monthly cost
//! - **Latency**: SLO headroom blended with use-case reference thresholds
//! - **Complexity**: penalty for total GPU count

#![allow(
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod accuracy;
pub mod balanced;
pub mod complexity;
pub mod latency;
pub mod price;
pub mod reference;

pub use accuracy::{parse_size_label, score_accuracy_by_size};
pub use balanced::score_balanced;
pub use complexity::score_complexity;
pub use latency::{DEFAULT_NEAR_MISS_TOLERANCE, score_latency, score_latency_within};
pub use price::score_price;

/// Round a raw score onto the integer 0-100 scale
pub(crate) fn round_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}
