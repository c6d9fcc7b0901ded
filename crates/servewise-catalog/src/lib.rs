//! Model and hardware catalog
//!
//! Static reference data: model metadata keyed by repository id, and
//! hourly GPU pricing keyed by GPU type.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::CatalogError;

/// Descriptive metadata for a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Repository identifier, matching benchmark rows
    pub id: String,
    /// Human-readable name used in quality tables
    pub display_name: String,
    /// Parameter count label such as `8B` or `8x7B`
    #[serde(default)]
    pub size_label: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub context_length: Option<u32>,
}

/// Pricing and memory for one GPU type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuPricing {
    pub gpu_type: String,
    /// Alternative names benchmark rows may use (e.g. `H100-80GB`)
    #[serde(default)]
    pub aliases: Vec<String>,
    pub cost_per_hour_usd: f64,
    #[serde(default)]
    pub memory_gb: Option<u32>,
}

impl GpuPricing {
    fn matches(&self, hardware: &str) -> bool {
        self.gpu_type.eq_ignore_ascii_case(hardware) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(hardware))
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    models: Vec<ModelInfo>,
    #[serde(default)]
    gpu_types: Vec<GpuPricing>,
}

/// Read-only catalog of models and GPU prices
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    models: Vec<ModelInfo>,
    gpus: Vec<GpuPricing>,
}

impl ModelCatalog {
    /// Build a catalog, rejecting duplicate model ids and invalid prices
    pub fn new(models: Vec<ModelInfo>, gpus: Vec<GpuPricing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for model in &models {
            if !seen.insert(model.id.to_lowercase()) {
                return Err(CatalogError::DuplicateModel { id: model.id.clone() });
            }
        }
        for gpu in &gpus {
            if !gpu.cost_per_hour_usd.is_finite() || gpu.cost_per_hour_usd < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    gpu_type: gpu.gpu_type.clone(),
                    value: gpu.cost_per_hour_usd,
                });
            }
        }
        Ok(Self { models, gpus })
    }

    /// Load a catalog from a JSON file with `models` and `gpu_types` arrays
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;

        tracing::info!(
            path = %path.display(),
            models = catalog.models.len(),
            gpu_types = catalog.gpus.len(),
            "loaded model catalog"
        );

        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.models, file.gpu_types)
    }

    pub fn get_all_models(&self) -> &[ModelInfo] {
        &self.models
    }

    pub fn gpu_types(&self) -> &[GpuPricing] {
        &self.gpus
    }

    /// Find a model by repository id, case-insensitively
    pub fn find_model(&self, id: &str) -> Option<&ModelInfo> {
        self.models.iter().find(|m| m.id.eq_ignore_ascii_case(id))
    }

    /// Find pricing for a GPU type or one of its aliases
    pub fn find_gpu(&self, hardware: &str) -> Option<&GpuPricing> {
        self.gpus.iter().find(|g| g.matches(hardware))
    }

    /// Cost of running `gpu_count` GPUs of a type for `hours`, if the type is priced
    pub fn calculate_gpu_cost(&self, hardware: &str, gpu_count: u32, hours: f64) -> Option<f64> {
        self.find_gpu(hardware)
            .map(|gpu| gpu.cost_per_hour_usd * f64::from(gpu_count) * hours)
    }
}
