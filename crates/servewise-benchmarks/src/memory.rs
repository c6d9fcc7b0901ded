use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use servewise_core::BenchmarkRow;

use crate::dedup::select_max_throughput;
use crate::error::StoreError;
use crate::{BenchmarkStore, SloQuery};

/// Accepted layouts of a benchmark data file
#[derive(Deserialize)]
#[serde(untagged)]
enum BenchmarkFile {
    Wrapped { benchmarks: Vec<BenchmarkRow> },
    Bare(Vec<BenchmarkRow>),
}

/// Benchmark store holding every row in memory
///
/// Rows are immutable after construction, so one store can serve any
/// number of concurrent planning calls.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBenchmarkStore {
    rows: Vec<BenchmarkRow>,
}

impl InMemoryBenchmarkStore {
    pub const fn new(rows: Vec<BenchmarkRow>) -> Self {
        Self { rows }
    }

    /// Load rows from a JSON file, either a bare array or `{"benchmarks": [...]}`
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&raw)?;

        tracing::info!(path = %path.display(), rows = store.rows.len(), "loaded benchmark data");

        Ok(store)
    }

    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let rows = match serde_json::from_str(raw)? {
            BenchmarkFile::Wrapped { benchmarks } => benchmarks,
            BenchmarkFile::Bare(rows) => rows,
        };
        Ok(Self::new(rows))
    }

    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }
}

#[async_trait]
#[allow(clippy::unnecessary_literal_bound)]
impl BenchmarkStore for InMemoryBenchmarkStore {
    async fn find_configurations_meeting_slo(&self, query: &SloQuery) -> Result<Vec<BenchmarkRow>, StoreError> {
        let matching = self
            .rows
            .iter()
            .filter(|row| query.matches(row))
            .cloned();

        let selected = select_max_throughput(matching, query.percentile);

        tracing::debug!(
            prompt_tokens = query.prompt_tokens,
            output_tokens = query.output_tokens,
            percentile = %query.percentile,
            configurations = selected.len(),
            "benchmark query complete"
        );

        Ok(selected)
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
