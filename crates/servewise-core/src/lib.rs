//! Shared domain records for servewise
//!
//! Traffic profiles, SLO targets, benchmark rows and the candidate
//! recommendations produced by the planner. Every record here is plain
//! data and serializable; validation happens at the boundary through the
//! `validate` methods before anything reaches the planner.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod benchmark;
pub mod error;
pub mod intent;
pub mod profile;
pub mod recommendation;
pub mod request;
pub mod weights;

pub use benchmark::{BenchmarkRow, ConfigKey, LatencyPercentiles};
pub use error::ValidationError;
pub use intent::DeploymentIntent;
pub use profile::{LatencyMetrics, Percentile, SloTargets, TrafficProfile, UseCase};
pub use recommendation::{Candidate, ConfigurationScores, GpuConfig, RankedLists, SloStatus};
pub use request::RecommendationRequest;
pub use weights::ScoringWeights;
