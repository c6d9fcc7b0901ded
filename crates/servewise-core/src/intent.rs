//! Structured deployment intent
//!
//! Produced upstream from free text by an intent extractor, or supplied
//! directly by a caller.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::profile::UseCase;
use crate::weights::ScoringWeights;

/// What the user wants to deploy and how they trade off the scoring axes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentIntent {
    /// Workload category driving quality tables and latency references
    #[serde(default)]
    pub use_case: UseCase,
    /// Approximate number of users
    ///
    /// Carried through from the intent extractor and logged with the
    /// recommendation; capacity comes from `expected_qps`, not from here.
    #[serde(default)]
    pub user_count: Option<u32>,
    /// Domains the deployment specializes in (e.g. `legal`, `code`)
    ///
    /// Pass-through like `user_count`: quality tables are keyed by use case only.
    #[serde(default)]
    pub domain_specialization: Vec<String>,
    /// Custom weights for the balanced score
    #[serde(default)]
    pub weights: Option<ScoringWeights>,
    /// Minimum accuracy score a recommendation must reach
    #[serde(default)]
    pub min_accuracy: Option<f64>,
    /// Monthly budget ceiling in USD
    #[serde(default)]
    pub max_monthly_cost: Option<f64>,
    /// Restrict candidates to these GPU types (case-insensitive); empty means any
    #[serde(default)]
    pub preferred_gpu_types: Vec<String>,
}

impl DeploymentIntent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(weights) = &self.weights {
            weights.validate()?;
        }
        if let Some(value) = self.min_accuracy {
            validate_min_accuracy(value)?;
        }
        if let Some(value) = self.max_monthly_cost {
            validate_max_cost(value)?;
        }
        Ok(())
    }

    /// Whether a hardware type satisfies the GPU preference list
    pub fn allows_gpu(&self, hardware: &str) -> bool {
        self.preferred_gpu_types.is_empty()
            || self
                .preferred_gpu_types
                .iter()
                .any(|gpu| gpu.eq_ignore_ascii_case(hardware))
    }
}

pub(crate) fn validate_min_accuracy(value: f64) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::InvalidMinAccuracy { value });
    }
    Ok(())
}

pub(crate) fn validate_max_cost(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidMaxCost { value });
    }
    Ok(())
}
