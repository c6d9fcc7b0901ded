pub mod exporters;
pub mod signals;

use std::collections::BTreeMap;

use serde::Deserialize;

use self::exporters::ExporterConfig;
pub use self::signals::{MetricsConfig, TracingConfig};

/// Telemetry configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Service name reported with traces and metrics
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Extra resource attributes
    #[serde(default)]
    pub resource_attributes: BTreeMap<String, String>,
    /// Exporter shared by tracing and metrics unless overridden
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
    #[serde(default)]
    pub tracing: Option<TracingConfig>,
    #[serde(default)]
    pub metrics: Option<MetricsConfig>,
}

impl TelemetryConfig {
    /// Whether any OTLP export is configured
    pub fn has_exporter(&self) -> bool {
        self.exporter.is_some()
            || self.tracing.as_ref().is_some_and(|t| t.exporter.is_some())
            || self.metrics.as_ref().is_some_and(|m| m.exporter.is_some())
    }

    /// Exporter for traces, falling back to the shared one
    pub fn tracing_exporter(&self) -> Option<&ExporterConfig> {
        self.tracing
            .as_ref()
            .and_then(|t| t.exporter.as_ref())
            .or(self.exporter.as_ref())
    }

    /// Exporter for metrics, falling back to the shared one
    pub fn metrics_exporter(&self) -> Option<&ExporterConfig> {
        self.metrics
            .as_ref()
            .and_then(|m| m.exporter.as_ref())
            .or(self.exporter.as_ref())
    }

    /// # Errors
    ///
    /// Returns an error if the sampling rate is outside 0.0-1.0
    pub fn validate(&self) -> Result<(), String> {
        if let Some(tracing) = &self.tracing
            && !(0.0..=1.0).contains(&tracing.sampling_rate)
        {
            return Err(format!(
                "telemetry.tracing.sampling_rate must be between 0.0 and 1.0, got {}",
                tracing.sampling_rate
            ));
        }
        Ok(())
    }
}

fn default_service_name() -> String {
    "servewise".to_owned()
}
