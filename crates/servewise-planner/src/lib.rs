//! Capacity planning and ranking for servewise
//!
//! - [`CapacityPlanner`] turns benchmark rows into sized, priced and scored
//!   candidate deployments
//! - [`generate_ranked_lists`] produces the five accuracy-first views
//! - [`Recommender`] validates a request and runs both

#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

mod bonus;
pub mod capacity;
pub mod error;
pub mod ranking;
pub mod recommender;

pub use bonus::task_bonus;
pub use capacity::CapacityPlanner;
pub use error::PlannerError;
pub use ranking::{RankingOptions, generate_ranked_lists};
pub use recommender::Recommender;
