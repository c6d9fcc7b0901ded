//! Weights for the balanced composite score

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Relative importance of the four scoring axes
///
/// Weights may be given on any scale (probabilities or the 0-10 priority
/// scale of the request layer). They must be finite, non-negative and sum
/// to a positive value; every consumer renormalizes them with
/// [`ScoringWeights::normalized`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub accuracy: f64,
    pub price: f64,
    pub latency: f64,
    pub complexity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            accuracy: 0.40,
            price: 0.40,
            latency: 0.10,
            complexity: 0.10,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("accuracy", self.accuracy),
            ("price", self.price),
            ("latency", self.latency),
            ("complexity", self.complexity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidWeight { name, value });
            }
        }
        if self.sum() <= 0.0 {
            return Err(ValidationError::ZeroWeightSum);
        }
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.accuracy + self.price + self.latency + self.complexity
    }

    /// Whether these weights, once normalized, are the default split
    pub fn is_default(&self) -> bool {
        let normalized = self.normalized();
        let default = Self::default();
        [
            (normalized.accuracy, default.accuracy),
            (normalized.price, default.price),
            (normalized.latency, default.latency),
            (normalized.complexity, default.complexity),
        ]
        .iter()
        .all(|(a, b)| (a - b).abs() < 1e-9)
    }

    /// Weights scaled to sum to 1, or the defaults when the set is unusable
    pub fn normalized(&self) -> Self {
        if self.validate().is_err() {
            tracing::warn!(weights = ?self, "invalid scoring weights, using defaults");
            return Self::default();
        }
        let total = self.sum();
        Self {
            accuracy: self.accuracy / total,
            price: self.price / total,
            latency: self.latency / total,
            complexity: self.complexity / total,
        }
    }
}
