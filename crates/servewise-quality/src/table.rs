use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use servewise_core::UseCase;

use crate::error::QualityError;

/// Normalized model name → score (0-100) for one use case
pub type ScoreTable = IndexMap<String, f64>;

/// A score as written in a quality table file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

/// Bring a score onto the 0-100 scale
///
/// Accepts percentages (`"62.5%"`), fractions in `[0, 1]` and raw 0-100
/// values. Returns `None` for text that is not a number.
pub fn normalize_score(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if let Some(percent) = trimmed.strip_suffix('%') {
        let value: f64 = percent.trim().parse().ok()?;
        return finite_clamped(value);
    }
    let value: f64 = trimmed.parse().ok()?;
    normalize_number(value)
}

fn normalize_number(value: f64) -> Option<f64> {
    if (0.0..=1.0).contains(&value) {
        finite_clamped(value * 100.0)
    } else {
        finite_clamped(value)
    }
}

fn finite_clamped(value: f64) -> Option<f64> {
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}

pub(crate) fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Per-use-case quality tables, loaded once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct QualityTable {
    tables: IndexMap<UseCase, ScoreTable>,
}

impl QualityTable {
    /// Build from `(use case, model name, score)` entries already on the 0-100 scale
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (UseCase, &'a str, f64)>,
    {
        let mut tables: IndexMap<UseCase, ScoreTable> = IndexMap::new();
        for (use_case, name, score) in entries {
            if let Some(score) = finite_clamped(score) {
                tables
                    .entry(use_case)
                    .or_default()
                    .insert(normalize_key(name), score);
            }
        }
        Self { tables }
    }

    /// Load tables from a TOML file
    ///
    /// Each top-level table is a use case; its keys are model display names
    /// and its values are scores as numbers or strings.
    pub fn from_path(path: &Path) -> Result<Self, QualityError> {
        let raw = std::fs::read_to_string(path).map_err(|source| QualityError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml(&raw)?;

        tracing::info!(
            path = %path.display(),
            use_cases = table.tables.len(),
            entries = table.len(),
            "loaded quality tables"
        );

        Ok(table)
    }

    pub fn from_toml(raw: &str) -> Result<Self, QualityError> {
        let parsed: IndexMap<String, IndexMap<String, RawScore>> = toml::from_str(raw)?;
        let mut tables = IndexMap::new();

        for (use_case_name, entries) in parsed {
            let Ok(use_case) = use_case_name.parse::<UseCase>() else {
                tracing::warn!(use_case = %use_case_name, "skipping quality table for unknown use case");
                continue;
            };

            let mut scores = ScoreTable::with_capacity(entries.len());
            for (name, raw_score) in entries {
                let normalized = match &raw_score {
                    RawScore::Number(value) => normalize_number(*value),
                    RawScore::Text(text) => normalize_score(text),
                };
                match normalized {
                    Some(score) => {
                        scores.insert(normalize_key(&name), score);
                    }
                    None => {
                        tracing::warn!(model = %name, use_case = %use_case, "skipping unparseable quality score");
                    }
                }
            }

            tables.insert(use_case, scores);
        }

        Ok(Self { tables })
    }

    /// Scores for a use case, falling back to the default use case's table
    pub fn scores_for(&self, use_case: UseCase) -> Option<&ScoreTable> {
        self.tables
            .get(&use_case)
            .or_else(|| self.tables.get(&UseCase::default()))
    }

    /// Total number of entries across all use cases
    pub fn len(&self) -> usize {
        self.tables.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
