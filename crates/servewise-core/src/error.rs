//! Boundary validation errors

use thiserror::Error;

/// A malformed request rejected before it reaches the planner
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Token counts must be strictly positive
    #[error("{field} must be greater than zero")]
    ZeroTokens { field: &'static str },

    /// Latency targets must be strictly positive
    #[error("{field} must be greater than zero")]
    ZeroTarget { field: &'static str },

    /// Expected QPS must be a finite, non-negative number
    #[error("expected_qps must be a finite non-negative number, got {value}")]
    InvalidQps { value: f64 },

    /// Minimum accuracy outside 0-100
    #[error("min_accuracy must be within 0-100, got {value}")]
    InvalidMinAccuracy { value: f64 },

    /// Negative or non-finite cost ceiling
    #[error("max_cost must be a finite non-negative number, got {value}")]
    InvalidMaxCost { value: f64 },

    /// A weight is negative or not finite
    #[error("weight '{name}' must be a finite non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    /// All weights are zero
    #[error("scoring weights must sum to a positive value")]
    ZeroWeightSum,

    /// Requested an empty result set
    #[error("top_n must be greater than zero")]
    ZeroTopN,
}
