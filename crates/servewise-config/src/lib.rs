#![allow(clippy::must_use_candidate)]

pub mod data;
mod env;
mod loader;
pub mod planner;
pub mod ranking;
pub mod telemetry;

use serde::Deserialize;

pub use data::DataConfig;
pub use planner::{PenaltyStep, PlannerConfig, ScalabilityPenalty};
pub use ranking::RankingConfig;
pub use telemetry::TelemetryConfig;

/// Top-level servewise configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reference data locations
    #[serde(default)]
    pub data: DataConfig,
    /// Capacity planner tuning
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Ranked-list defaults
    #[serde(default)]
    pub ranking: RankingConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
