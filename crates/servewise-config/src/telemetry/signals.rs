//! Per-signal telemetry sections

use serde::Deserialize;

use super::exporters::ExporterConfig;

/// `[telemetry.tracing]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TracingConfig {
    /// Share of planning traces kept, 0.0 to 1.0
    #[serde(default = "full_sampling")]
    pub sampling_rate: f64,
    /// Defer to an upstream sampling decision when one exists
    #[serde(default = "enabled")]
    pub parent_based: bool,
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
}

impl TracingConfig {
    pub fn samples_everything(&self) -> bool {
        self.sampling_rate >= 1.0
    }

    pub fn samples_nothing(&self) -> bool {
        self.sampling_rate <= 0.0
    }
}

/// `[telemetry.metrics]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
}

const fn full_sampling() -> f64 {
    1.0
}

const fn enabled() -> bool {
    true
}
