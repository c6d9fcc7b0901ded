use serde::Deserialize;

/// Capacity planner tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Fraction by which SLO targets are relaxed when near-miss candidates
    /// are requested
    #[serde(default = "default_near_miss_tolerance")]
    pub near_miss_tolerance: f64,
    /// Multiplier on required QPS before sizing replicas
    #[serde(default = "default_replica_headroom")]
    pub replica_headroom: f64,
    /// Hours used to turn an hourly GPU price into a monthly cost
    #[serde(default = "default_hours_per_month")]
    pub hours_per_month: f64,
    /// Balanced-score penalty by replica count
    #[serde(default)]
    pub scalability_penalty: ScalabilityPenalty,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            near_miss_tolerance: default_near_miss_tolerance(),
            replica_headroom: default_replica_headroom(),
            hours_per_month: default_hours_per_month(),
            scalability_penalty: ScalabilityPenalty::default(),
        }
    }
}

impl PlannerConfig {
    /// Validate planner tuning values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first out-of-range value
    pub fn validate(&self) -> Result<(), String> {
        if !self.near_miss_tolerance.is_finite() || self.near_miss_tolerance < 0.0 {
            return Err(format!(
                "planner.near_miss_tolerance must be a non-negative number, got {}",
                self.near_miss_tolerance
            ));
        }
        if !self.replica_headroom.is_finite() || self.replica_headroom < 1.0 {
            return Err(format!(
                "planner.replica_headroom must be at least 1.0, got {}",
                self.replica_headroom
            ));
        }
        if !self.hours_per_month.is_finite() || self.hours_per_month <= 0.0 {
            return Err(format!(
                "planner.hours_per_month must be positive, got {}",
                self.hours_per_month
            ));
        }
        self.scalability_penalty.validate()
    }
}

/// Step function from replica count to a balanced-score multiplier
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalabilityPenalty {
    /// Steps in ascending `max_replicas` order
    pub steps: Vec<PenaltyStep>,
    /// Multiplier beyond the last step
    pub beyond: f64,
}

/// Multiplier applied up to and including `max_replicas`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PenaltyStep {
    pub max_replicas: u32,
    pub factor: f64,
}

impl Default for ScalabilityPenalty {
    fn default() -> Self {
        let step = |max_replicas, factor| PenaltyStep { max_replicas, factor };
        Self {
            steps: vec![step(1, 1.0), step(3, 0.98), step(6, 0.95), step(10, 0.90), step(20, 0.80)],
            beyond: 0.65,
        }
    }
}

impl ScalabilityPenalty {
    /// Multiplier for a deployment with `replicas` replicas
    pub fn factor(&self, replicas: u32) -> f64 {
        self.steps
            .iter()
            .find(|step| replicas <= step.max_replicas)
            .map_or(self.beyond, |step| step.factor)
    }

    fn validate(&self) -> Result<(), String> {
        let in_range = |factor: f64| factor.is_finite() && factor > 0.0 && factor <= 1.0;

        if !self
            .steps
            .windows(2)
            .all(|pair| pair[0].max_replicas < pair[1].max_replicas)
        {
            return Err("planner.scalability_penalty.steps must have ascending max_replicas".to_owned());
        }
        if let Some(step) = self.steps.iter().find(|step| !in_range(step.factor)) {
            return Err(format!(
                "planner.scalability_penalty factor for {} replicas must be in (0, 1], got {}",
                step.max_replicas, step.factor
            ));
        }
        if !in_range(self.beyond) {
            return Err(format!(
                "planner.scalability_penalty.beyond must be in (0, 1], got {}",
                self.beyond
            ));
        }
        Ok(())
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_near_miss_tolerance() -> f64 {
    0.2
}

#[allow(clippy::missing_const_for_fn)]
fn default_replica_headroom() -> f64 {
    1.2
}

#[allow(clippy::missing_const_for_fn)]
fn default_hours_per_month() -> f64 {
    730.0
}
