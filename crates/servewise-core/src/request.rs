//! Full recommendation request as accepted at the boundary

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::intent::{DeploymentIntent, validate_max_cost, validate_min_accuracy};
use crate::profile::{SloTargets, TrafficProfile};

/// Everything needed to plan and rank deployments for one workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub traffic_profile: TrafficProfile,
    pub slo_targets: SloTargets,
    #[serde(default)]
    pub intent: DeploymentIntent,
    /// Also return candidates up to the near-miss tolerance over target
    #[serde(default)]
    pub include_near_miss: bool,
    /// Overrides `intent.min_accuracy`
    #[serde(default)]
    pub min_accuracy: Option<f64>,
    /// Overrides `intent.max_monthly_cost`
    #[serde(default)]
    pub max_cost: Option<f64>,
    /// Entries per ranked list
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl RecommendationRequest {
    /// Reject malformed input before it reaches the planner
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.traffic_profile.validate()?;
        self.slo_targets.validate()?;
        self.intent.validate()?;
        if let Some(value) = self.min_accuracy {
            validate_min_accuracy(value)?;
        }
        if let Some(value) = self.max_cost {
            validate_max_cost(value)?;
        }
        if self.top_n == Some(0) {
            return Err(ValidationError::ZeroTopN);
        }
        Ok(())
    }

    pub fn effective_min_accuracy(&self) -> Option<f64> {
        self.min_accuracy.or(self.intent.min_accuracy)
    }

    pub fn effective_max_cost(&self) -> Option<f64> {
        self.max_cost.or(self.intent.max_monthly_cost)
    }
}
