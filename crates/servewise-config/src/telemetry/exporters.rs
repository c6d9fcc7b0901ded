use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Where and how OTLP data is shipped
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub endpoint: Url,
    #[serde(default)]
    pub protocol: ExportProtocol,
    /// Metric push period in seconds
    #[serde(default = "default_export_interval")]
    pub export_interval: u64,
}

impl ExporterConfig {
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.export_interval)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportProtocol {
    #[default]
    Grpc,
    HttpProto,
}

const fn default_export_interval() -> u64 {
    30
}
