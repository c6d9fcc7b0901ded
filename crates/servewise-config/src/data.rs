use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Locations of the reference data the planner reads at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Benchmark rows (JSON)
    #[serde(default = "default_benchmarks")]
    pub benchmarks: PathBuf,
    /// Model metadata and GPU pricing (JSON)
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Per-use-case quality tables (TOML); without one every model falls
    /// back to the size heuristic
    #[serde(default)]
    pub quality: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            benchmarks: default_benchmarks(),
            catalog: default_catalog(),
            quality: None,
        }
    }
}

impl DataConfig {
    /// Resolve relative paths against `base`, usually the config file's directory
    pub fn resolve_relative_to(&mut self, base: &Path) {
        let rebase = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        rebase(&mut self.benchmarks);
        rebase(&mut self.catalog);
        if let Some(quality) = self.quality.as_mut() {
            rebase(quality);
        }
    }
}

fn default_benchmarks() -> PathBuf {
    PathBuf::from("data/benchmarks.json")
}

fn default_catalog() -> PathBuf {
    PathBuf::from("data/catalog.json")
}
