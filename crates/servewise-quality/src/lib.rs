//! Task-specific model quality scores
//!
//! Maps a (model, use case) pair to a 0-100 quality score from per-use-case
//! benchmark tables. Names are resolved through an ordered chain of match
//! strategies: exact, known aliases, then tokenized fuzzy matching.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod aliases;
mod error;
pub mod matcher;
mod table;

use std::sync::Arc;

use servewise_core::UseCase;

pub use error::QualityError;
pub use matcher::{AliasMatch, ExactMatch, FuzzyMatch, MatchStrategy};
pub use table::{QualityTable, ScoreTable, normalize_score};

/// Resolves quality scores against a shared, read-only [`QualityTable`]
pub struct QualityScorer {
    table: Arc<QualityTable>,
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl QualityScorer {
    /// Scorer with the default exact → alias → fuzzy chain
    pub fn new(table: Arc<QualityTable>) -> Self {
        Self::with_strategies(
            table,
            vec![Box::new(ExactMatch), Box::new(AliasMatch), Box::new(FuzzyMatch)],
        )
    }

    /// Scorer with a custom strategy chain, tried in order
    pub fn with_strategies(table: Arc<QualityTable>, strategies: Vec<Box<dyn MatchStrategy>>) -> Self {
        Self { table, strategies }
    }

    pub fn table(&self) -> &QualityTable {
        &self.table
    }

    /// Quality score in 0-100 for a model on a use case
    ///
    /// Returns 0.0 when no strategy finds the model, meaning "no quality
    /// data" rather than a measured score of zero.
    pub fn score(&self, model_name: &str, use_case: UseCase) -> f64 {
        let Some(scores) = self.table.scores_for(use_case) else {
            tracing::debug!(use_case = %use_case, "no quality table loaded");
            return 0.0;
        };

        for strategy in &self.strategies {
            if let Some(score) = strategy.find(model_name, scores) {
                tracing::trace!(
                    model = model_name,
                    use_case = %use_case,
                    strategy = strategy.name(),
                    score,
                    "quality score resolved"
                );
                return score;
            }
        }

        tracing::debug!(model = model_name, use_case = %use_case, "no quality score found");
        0.0
    }
}

impl std::fmt::Debug for QualityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualityScorer")
            .field("table", &self.table)
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
